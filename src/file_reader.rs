use std::io::Read;
use std::io;

pub trait LeRead {
    fn read_u32(&mut self) -> io::Result<u32>;
}

impl<T> LeRead for T where T: Read {
    fn read_u32(&mut self) -> io::Result<u32> {
        let mut buf = [0u8; 4];
        self.read_exact(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use super::*;
    use std::io;

    #[test]
    fn can_read_little_endian_word() -> io::Result<()> {
        let input_data = [0x72u8, 0xb5, 0x4a, 0x86];
        let mut input_buffer = Cursor::new(input_data);
        assert_eq!(0x864a_b572, input_buffer.read_u32()?);
        Ok(())
    }

    #[test]
    fn can_read_consecutive_words() -> io::Result<()> {
        let input_data = [1u8, 0, 0, 0, 0x10, 0x27, 0, 0];
        let mut input_buffer = Cursor::new(input_data);
        assert_eq!(1, input_buffer.read_u32()?);
        assert_eq!(10_000, input_buffer.read_u32()?);
        Ok(())
    }

    #[test]
    fn short_input_is_an_error() {
        let mut input_buffer = Cursor::new([0x72u8, 0xb5]);
        assert!(input_buffer.read_u32().is_err());
    }
}
