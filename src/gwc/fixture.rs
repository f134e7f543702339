// synthetic cartridges for unit tests
use byteorder::{LittleEndian, WriteBytesExt};

use super::cart::{SIGNATURE, TAG};
use super::header::CartridgeHeader;

enum Body {
    Bytes(Vec<u8>),
    At(i32),
}

#[derive(Default)]
pub struct CartridgeBuilder {
    header: CartridgeHeader,
    objects: Vec<(u16, Body)>,
}

impl CartridgeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: CartridgeHeader) -> Self {
        self.header = header;
        self
    }

    pub fn bytecode(self, id: u16, code: &[u8]) -> Self {
        let mut body = Vec::new();
        body.write_i32::<LittleEndian>(code.len() as i32).unwrap();
        body.extend_from_slice(code);
        self.raw(id, body)
    }

    pub fn media(self, id: u16, type_code: i32, data: &[u8]) -> Self {
        let mut body = vec![1];
        body.write_i32::<LittleEndian>(type_code).unwrap();
        body.write_i32::<LittleEndian>(data.len() as i32).unwrap();
        body.extend_from_slice(data);
        self.raw(id, body)
    }

    pub fn invalid_media(self, id: u16) -> Self {
        self.raw(id, vec![0])
    }

    /// Object whose body is written verbatim.
    pub fn raw(mut self, id: u16, body: Vec<u8>) -> Self {
        self.objects.push((id, Body::Bytes(body)));
        self
    }

    /// Table entry pointing at an arbitrary offset, with no body.
    pub fn entry_at(mut self, id: u16, offset: i32) -> Self {
        self.objects.push((id, Body::At(offset)));
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut header = Vec::new();
        self.header.write_to(&mut header).unwrap();

        let table_len = 2 + TAG.len() + 1 + 2 + 6 * self.objects.len();
        let mut next = (table_len + header.len()) as i32;

        let mut out = Vec::new();
        out.write_i16::<LittleEndian>(SIGNATURE).unwrap();
        out.extend_from_slice(TAG);
        out.push(0);
        out.write_u16::<LittleEndian>(self.objects.len() as u16).unwrap();

        let mut bodies = Vec::new();
        for (id, body) in &self.objects {
            let offset = match body {
                Body::Bytes(bytes) => {
                    let at = next;
                    next += bytes.len() as i32;
                    bodies.extend_from_slice(bytes);
                    at
                }
                Body::At(offset) => *offset,
            };
            out.write_u16::<LittleEndian>(*id).unwrap();
            out.write_i32::<LittleEndian>(offset).unwrap();
        }

        out.extend_from_slice(&header);
        out.extend_from_slice(&bodies);
        out
    }
}
