use std::io::{self, Write};

use super::psf_reader::Psf2Font;

// The value column of the defines is aligned by hand, so the padding inside
// the format literals matters.
pub fn write_header<W: Write>(font: &Psf2Font, out: &mut W) -> io::Result<()> {
    writeln!(out, "#define FONT_WIDTH      {}", font.width)?;
    writeln!(out, "#define FONT_HEIGHT     {}", font.height)?;
    writeln!(out, "#define FONT_BPG        {}", font.bytes_per_glyph)?;
    writeln!(out, "#define FONT_NUM_GLYPHS {}", font.num_glyphs)?;
    writeln!(out, "static const unsigned char font_data[{}][{}] = {{",
             font.num_glyphs, font.bytes_per_glyph)?;
    for index in 0..font.num_glyphs as usize {
        write!(out, "  {{")?;
        for (i, byte) in font.glyph(index).iter().enumerate() {
            if i > 0 {
                write!(out, ",")?;
            }
            write!(out, "0x{:02x}", byte)?;
        }
        writeln!(out, "}},")?;
    }
    writeln!(out, "}};")?;
    Ok(())
}
