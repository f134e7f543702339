// media object types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Bmp,
    Png,
    Jpeg,
    Gif,
    Wav,
    Mp3,
    Fdl,
    Snd,
    Ogg,
    Swf,
    Text,
}

impl MediaKind {
    /// Maps a stored type code to its kind. Unknown codes are not extracted.
    pub fn from_code(code: i32) -> Option<Self> {
        Some(match code {
            1 => MediaKind::Bmp,
            2 => MediaKind::Png,
            3 => MediaKind::Jpeg,
            4 => MediaKind::Gif,
            17 => MediaKind::Wav,
            18 => MediaKind::Mp3,
            19 => MediaKind::Fdl,
            20 => MediaKind::Snd,
            21 => MediaKind::Ogg,
            33 => MediaKind::Swf,
            49 => MediaKind::Text,
            _ => return None,
        })
    }

    pub fn code(self) -> i32 {
        match self {
            MediaKind::Bmp => 1,
            MediaKind::Png => 2,
            MediaKind::Jpeg => 3,
            MediaKind::Gif => 4,
            MediaKind::Wav => 17,
            MediaKind::Mp3 => 18,
            MediaKind::Fdl => 19,
            MediaKind::Snd => 20,
            MediaKind::Ogg => 21,
            MediaKind::Swf => 33,
            MediaKind::Text => 49,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            MediaKind::Bmp => "bmp",
            MediaKind::Png => "png",
            MediaKind::Jpeg => "jpg",
            MediaKind::Gif => "gif",
            MediaKind::Wav => "wav",
            MediaKind::Mp3 => "mp3",
            MediaKind::Fdl => "fdl",
            MediaKind::Snd => "snd",
            MediaKind::Ogg => "ogg",
            MediaKind::Swf => "swf",
            MediaKind::Text => "txt",
        }
    }
}

/// A media object pulled out of a cartridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAsset {
    pub id: u16,
    pub kind: MediaKind,
    pub data: Vec<u8>,
}

impl MediaAsset {
    pub fn extension(&self) -> &'static str {
        self.kind.extension()
    }
}
