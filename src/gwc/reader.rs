// typed little-endian reads over a seekable byte source
use std::io::{self, Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};

use super::error::{GwcError, GwcResult};

/// Fixed-width primitive types found in a cartridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    Byte,
    Short,
    UShort,
    Int,
    UInt,
    Long,
    Double,
}

impl Primitive {
    pub fn width(self) -> usize {
        match self {
            Primitive::Byte => 1,
            Primitive::Short | Primitive::UShort => 2,
            Primitive::Int | Primitive::UInt => 4,
            Primitive::Long | Primitive::Double => 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Byte(i8),
    Short(i16),
    UShort(u16),
    Int(i32),
    UInt(u32),
    Long(i64),
    Double(f64),
}

/// Cursor over a random-access source. Running out of data is always
/// reported as `TruncatedInput`; no read ever yields a partial value.
pub struct BinaryReader<R> {
    inner: R,
    pos: u64,
}

impl<R: Read + Seek> BinaryReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub fn position(&self) -> u64 {
        self.pos
    }

    /// Moves the cursor to an absolute offset. Going past the end is fine,
    /// the next read will fail instead.
    pub fn seek(&mut self, offset: u64) -> GwcResult<()> {
        self.inner.seek(SeekFrom::Start(offset))?;
        self.pos = offset;
        Ok(())
    }

    pub fn read_primitive(&mut self, tag: Primitive) -> GwcResult<Value> {
        Ok(match tag {
            Primitive::Byte => Value::Byte(self.read_i8()?),
            Primitive::Short => Value::Short(self.read_i16()?),
            Primitive::UShort => Value::UShort(self.read_u16()?),
            Primitive::Int => Value::Int(self.read_i32()?),
            Primitive::UInt => Value::UInt(self.read_u32()?),
            Primitive::Long => Value::Long(self.read_i64()?),
            Primitive::Double => Value::Double(self.read_f64()?),
        })
    }

    pub fn read_u8(&mut self) -> GwcResult<u8> {
        self.read_with(Primitive::Byte, |r| r.read_u8())
    }

    pub fn read_i8(&mut self) -> GwcResult<i8> {
        self.read_with(Primitive::Byte, |r| r.read_i8())
    }

    pub fn read_i16(&mut self) -> GwcResult<i16> {
        self.read_with(Primitive::Short, |r| r.read_i16::<LittleEndian>())
    }

    pub fn read_u16(&mut self) -> GwcResult<u16> {
        self.read_with(Primitive::UShort, |r| r.read_u16::<LittleEndian>())
    }

    pub fn read_i32(&mut self) -> GwcResult<i32> {
        self.read_with(Primitive::Int, |r| r.read_i32::<LittleEndian>())
    }

    pub fn read_u32(&mut self) -> GwcResult<u32> {
        self.read_with(Primitive::UInt, |r| r.read_u32::<LittleEndian>())
    }

    pub fn read_i64(&mut self) -> GwcResult<i64> {
        self.read_with(Primitive::Long, |r| r.read_i64::<LittleEndian>())
    }

    pub fn read_f64(&mut self) -> GwcResult<f64> {
        self.read_with(Primitive::Double, |r| r.read_f64::<LittleEndian>())
    }

    /// Reads single-byte characters up to (and consuming) a zero byte.
    pub fn read_string(&mut self) -> GwcResult<String> {
        let mut s = String::new();
        loop {
            match self.read_u8()? {
                0 => return Ok(s),
                b => s.push(char::from(b)),
            }
        }
    }

    pub fn read_raw(&mut self, n: usize) -> GwcResult<Vec<u8>> {
        let start = self.pos;
        let mut buf = Vec::new();
        // bounded by the source, so a bogus length can't force a huge allocation
        let got = self.inner.by_ref().take(n as u64).read_to_end(&mut buf)?;
        if got < n {
            self.rewind()?;
            return Err(GwcError::truncated(start, n));
        }
        self.pos += got as u64;
        Ok(buf)
    }

    fn read_with<T>(
        &mut self,
        tag: Primitive,
        f: impl FnOnce(&mut R) -> io::Result<T>,
    ) -> GwcResult<T> {
        match f(&mut self.inner) {
            Ok(v) => {
                self.pos += tag.width() as u64;
                Ok(v)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                self.rewind()?;
                Err(GwcError::truncated(self.pos, tag.width()))
            }
            Err(e) => Err(e.into()),
        }
    }

    // A failed read consumes nothing: put the source back where `pos` says.
    fn rewind(&mut self) -> GwcResult<()> {
        self.inner.seek(SeekFrom::Start(self.pos))?;
        Ok(())
    }
}
