// cartridge header record
use std::io::{self, Read, Seek, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use super::error::GwcResult;
use super::reader::{BinaryReader, Primitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Primitive(Primitive),
    /// Zero-terminated, one byte per character.
    String,
}

/// A value that can appear in a header record.
pub trait Field: Sized {
    const KIND: FieldKind;

    fn read<R: Read + Seek>(r: &mut BinaryReader<R>) -> GwcResult<Self>;

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()>;
}

macro_rules! primitive_field {
    ($ty:ty, $tag:ident, $read:ident, $write:ident) => {
        impl Field for $ty {
            const KIND: FieldKind = FieldKind::Primitive(Primitive::$tag);

            fn read<R: Read + Seek>(r: &mut BinaryReader<R>) -> GwcResult<Self> {
                r.$read()
            }

            fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
                w.$write::<LittleEndian>(*self)
            }
        }
    };
}

primitive_field!(i16, Short, read_i16, write_i16);
primitive_field!(i32, Int, read_i32, write_i32);
primitive_field!(i64, Long, read_i64, write_i64);
primitive_field!(f64, Double, read_f64, write_f64);

impl Field for String {
    const KIND: FieldKind = FieldKind::String;

    fn read<R: Read + Seek>(r: &mut BinaryReader<R>) -> GwcResult<Self> {
        r.read_string()
    }

    fn write<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for c in self.chars() {
            let b = u8::try_from(c).map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{c:?} does not fit in a single byte"),
                )
            })?;
            w.write_u8(b)?;
        }
        w.write_u8(0)
    }
}

// Declares a record whose fields are read and written in declaration order.
macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty, )*
        }
    ) => {
        $(#[$meta])*
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        impl $name {
            /// Field names and kinds in wire order.
            pub const SCHEMA: &'static [(&'static str, FieldKind)] = &[
                $( (stringify!($field), <$ty as Field>::KIND), )*
            ];

            pub fn read_from<R: Read + Seek>(r: &mut BinaryReader<R>) -> GwcResult<Self> {
                Ok(Self {
                    $( $field: <$ty as Field>::read(r)?, )*
                })
            }

            pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
                $( Field::write(&self.$field, w)?; )*
                Ok(())
            }

            /// Every field as a (name, printable value) pair.
            pub fn describe(&self) -> Vec<(&'static str, String)> {
                vec![ $( (stringify!($field), self.$field.to_string()), )* ]
            }
        }
    };
}

record! {
    /// Metadata block that follows the object table.
    #[derive(Debug, Clone, PartialEq, Default)]
    pub struct CartridgeHeader {
        /// Declared size of the header block; not used to bound the parse.
        pub length: i32,
        pub latitude: f64,
        pub longitude: f64,
        pub altitude: f64,
        /// Creation time as stored by the authoring tool.
        pub date: i64,
        pub splash_id: i16,
        pub icon_id: i16,
        pub cartridge_type: String,
        pub player: String,
        pub player_id: i64,
        pub name: String,
        pub guid: String,
        pub description: String,
        pub start_description: String,
        pub version: String,
        pub author: String,
        pub company: String,
        pub device: String,
        /// Ignored when reading `completion_code`, which is zero-terminated.
        pub completion_length: i32,
        pub completion_code: String,
    }
}
