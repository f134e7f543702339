// cartridge decoder
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use log::{debug, trace, warn};

use super::error::{GwcError, GwcResult};
use super::header::CartridgeHeader;
use super::media::{MediaAsset, MediaKind};
use super::reader::BinaryReader;

pub const SIGNATURE: i16 = 0x0a02;
pub const TAG: &[u8; 4] = b"CART";

/// Object table entry: `offset` is an absolute position in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectEntry {
    pub id: u16,
    pub offset: i32,
}

/// Object table and header of a decoded cartridge.
#[derive(Debug, Clone, PartialEq)]
pub struct CartridgeData {
    objects: Vec<ObjectEntry>,
    header: CartridgeHeader,
}

impl CartridgeData {
    /// Entries in file order. The first one is always the bytecode.
    pub fn objects(&self) -> &[ObjectEntry] {
        &self.objects
    }

    pub fn header(&self) -> &CartridgeHeader {
        &self.header
    }
}

/// A decoded cartridge still attached to its source, so objects can be
/// extracted on demand.
pub struct Cartridge<R> {
    reader: BinaryReader<R>,
    data: CartridgeData,
}

impl Cartridge<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> GwcResult<Self> {
        let file = File::open(path.as_ref())?;
        debug!("decoding {}", path.as_ref().display());
        Self::decode(BufReader::new(file))
    }
}

impl<R: Read + Seek> Cartridge<R> {
    /// Reads signature, object table and header, in that order. Nothing is
    /// returned unless all three succeed.
    pub fn decode(source: R) -> GwcResult<Self> {
        let mut reader = BinaryReader::new(source);

        read_signature(&mut reader)?;
        let objects = read_objects(&mut reader)?;
        let header = CartridgeHeader::read_from(&mut reader)?;
        debug!(
            "header parsed at {}: {:?} by {:?}",
            reader.position(),
            header.name,
            header.author
        );

        Ok(Self {
            reader,
            data: CartridgeData { objects, header },
        })
    }

    pub fn data(&self) -> &CartridgeData {
        &self.data
    }

    /// Drops the source and keeps the decoded data.
    pub fn into_data(self) -> CartridgeData {
        self.data
    }

    pub fn extract_bytecode(&mut self) -> GwcResult<Vec<u8>> {
        let entry = *self
            .data
            .objects
            .first()
            .ok_or_else(|| GwcError::corrupted("object table is empty"))?;

        seek_to(&mut self.reader, entry)?;
        let len = self.reader.read_i32()?;
        let code = self.reader.read_raw(declared_len(entry, len)?)?;
        debug!("bytecode: {} bytes from object {}", code.len(), entry.id);
        Ok(code)
    }

    /// Every valid object of a known type after the bytecode, in table order.
    pub fn extract_media(&mut self) -> GwcResult<Vec<MediaAsset>> {
        let mut assets = Vec::new();

        for &entry in self.data.objects.iter().skip(1) {
            seek_to(&mut self.reader, entry)?;

            if self.reader.read_u8()? == 0 {
                trace!("object {} flagged invalid, skipped", entry.id);
                continue;
            }

            let code = self.reader.read_i32()?;
            let len = self.reader.read_i32()?;

            let Some(kind) = MediaKind::from_code(code) else {
                warn!("object {}: unknown media type {}, skipped", entry.id, code);
                continue;
            };

            let data = self.reader.read_raw(declared_len(entry, len)?)?;
            trace!("object {}: {} bytes of {:?}", entry.id, data.len(), kind);
            assets.push(MediaAsset {
                id: entry.id,
                kind,
                data,
            });
        }

        debug!("media: {} asset(s) extracted", assets.len());
        Ok(assets)
    }
}

fn read_signature<R: Read + Seek>(r: &mut BinaryReader<R>) -> GwcResult<()> {
    let signature = r.read_i16()?;
    if signature != SIGNATURE {
        return Err(GwcError::corrupted(format!(
            "bad signature {signature:#06x}"
        )));
    }

    // the tag is stored zero-terminated; an input that ends inside it is
    // reported as truncated even if the bytes present already differ
    let tag = r.read_raw(TAG.len())?;
    if tag != TAG || r.read_u8()? != 0 {
        return Err(GwcError::corrupted("missing CART tag"));
    }
    Ok(())
}

fn read_objects<R: Read + Seek>(r: &mut BinaryReader<R>) -> GwcResult<Vec<ObjectEntry>> {
    let count = r.read_u16()?;
    let mut objects = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let id = r.read_u16()?;
        let offset = r.read_i32()?;
        objects.push(ObjectEntry { id, offset });
    }
    debug!("object table: {} entries", objects.len());
    Ok(objects)
}

fn seek_to<R: Read + Seek>(r: &mut BinaryReader<R>, entry: ObjectEntry) -> GwcResult<()> {
    let offset = u64::try_from(entry.offset).map_err(|_| {
        GwcError::corrupted(format!(
            "object {} has negative offset {}",
            entry.id, entry.offset
        ))
    })?;
    r.seek(offset)
}

fn declared_len(entry: ObjectEntry, len: i32) -> GwcResult<usize> {
    usize::try_from(len).map_err(|_| {
        GwcError::corrupted(format!("object {} has negative length {}", entry.id, len))
    })
}
