use anyhow;
use super::file_reader::*;
use thiserror::Error;

pub const PSF2_MAGIC: u32 = 0x864A_B572;

#[derive(Debug)]
pub struct Psf2Font {
    pub version: u32,
    pub flags: u32,
    pub num_glyphs: u32,
    pub bytes_per_glyph: u32,
    pub height: u32,
    pub width: u32,
    pub glyphs: Vec<u8>,
}

impl Psf2Font {
    pub fn glyph(&self, index: usize) -> &[u8] {
        let size = self.bytes_per_glyph as usize;
        &self.glyphs[index * size..(index + 1) * size]
    }
}

#[derive(Error, Debug)]
pub enum PsfError {
    #[error("Not a PSF2 font")]
    NotPsf2,
    #[error("Truncated glyph table")]
    TruncatedGlyphTable,
}

pub fn psfreader(data: &[u8]) -> anyhow::Result<Psf2Font> {
    let mut input = data;
    let magic = input.read_u32()?;
    if magic != PSF2_MAGIC {
        anyhow::bail!(PsfError::NotPsf2)
    }
    let version = input.read_u32()?;
    let header_size = input.read_u32()?;
    let flags = input.read_u32()?;
    let num_glyphs = input.read_u32()?;
    let bytes_per_glyph = input.read_u32()?;
    let height = input.read_u32()?;
    let width = input.read_u32()?;

    // The glyph table sits at the absolute header_size offset, which need
    // not be 32.
    let start = header_size as usize;
    let size = num_glyphs as usize * bytes_per_glyph as usize;
    let glyphs = data
        .get(start..start + size)
        .ok_or(PsfError::TruncatedGlyphTable)?
        .to_vec();

    Ok(Psf2Font {
        version,
        flags,
        num_glyphs,
        bytes_per_glyph,
        height,
        width,
        glyphs,
    })
}
