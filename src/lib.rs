// Wherigo cartridge (.gwc) decoder
pub mod gwc;
