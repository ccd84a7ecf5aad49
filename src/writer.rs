use crate::{BinaryStream, MAX_STRING_LEN};
use zerocopy::byteorder::{BE, U16, U32};
use zerocopy::IntoBytes;

impl BinaryStream {
    /// Writes `bytes` at the write cursor, with no length prefix.
    pub fn put_bytes(&mut self, bytes: &[u8]) -> &mut Self {
        self.write_raw(bytes);
        self
    }

    /// Writes a single `u8` value
    pub fn put_u8(&mut self, value: u8) -> &mut Self {
        self.put_bytes(&[value])
    }

    /// Writes a `u16` in big-endian byte order.
    pub fn put_u16(&mut self, value: u16) -> &mut Self {
        self.put_bytes(U16::<BE>::new(value).as_bytes())
    }

    /// Writes a `u32` in big-endian byte order.
    pub fn put_u32(&mut self, value: u32) -> &mut Self {
        self.put_bytes(U32::<BE>::new(value).as_bytes())
    }

    /// Writes a `u64` as two big-endian `u32` words. The low 32 bits are written first, then the
    /// high 32 bits.
    ///
    /// ```
    /// # use binary_stream::BinaryStream;
    /// let mut s = BinaryStream::new();
    /// s.put_u64(0x0102030405060708);
    /// assert_eq!(s.as_bytes(), [0x05, 0x06, 0x07, 0x08, 0x01, 0x02, 0x03, 0x04]);
    /// ```
    pub fn put_u64(&mut self, value: u64) -> &mut Self {
        self.put_u32(value as u32).put_u32((value >> 32) as u32)
    }

    /// Writes a byte string in length-prefixed form: a big-endian `u16` byte count, then the bytes.
    ///
    /// Strings longer than [`MAX_STRING_LEN`] bytes are silently truncated to that length.
    pub fn put_string(&mut self, s: impl AsRef<[u8]>) -> &mut Self {
        let s = s.as_ref();
        let len = s.len().min(MAX_STRING_LEN);
        if len < s.len() {
            log::debug!("truncating {} byte string to {} bytes", s.len(), len);
        }
        self.put_u16(len as u16).put_bytes(&s[..len])
    }
}
