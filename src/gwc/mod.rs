// cartridge decoding root
mod cart;
mod error;
#[cfg(test)]
mod fixture;
mod header;
mod media;
mod reader;

use std::io::{Read, Seek};

pub use cart::{Cartridge, CartridgeData, ObjectEntry, SIGNATURE, TAG};
pub use error::{GwcError, GwcResult};
pub use header::{CartridgeHeader, Field, FieldKind};
pub use media::{MediaAsset, MediaKind};
pub use reader::{BinaryReader, Primitive, Value};

/// Decodes a cartridge from any seekable source.
pub fn decode<R: Read + Seek>(source: R) -> GwcResult<Cartridge<R>> {
    Cartridge::decode(source)
}
