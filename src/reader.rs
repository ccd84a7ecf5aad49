use crate::BinaryStream;
use alloc::string::String;
use alloc::vec::Vec;
use core::mem::size_of;
use zerocopy::byteorder::{BE, U16, U32};
use zerocopy::FromBytes;

/// Result type for the `read_*` methods of `BinaryStream`
pub type Result<T> = core::result::Result<T, StreamError>;

impl BinaryStream {
    /// Decodes a fixed-size value at the read cursor. Nothing is consumed unless the whole value
    /// is available.
    #[inline(always)]
    fn take<T: FromBytes>(&mut self) -> Option<T> {
        let value = T::read_from_prefix(self.unread()?)
            .ok()
            .map(|(value, _)| value);
        match value {
            Some(value) => {
                self.advance(size_of::<T>());
                Some(value)
            }
            None => {
                self.set_eof(size_of::<T>());
                None
            }
        }
    }

    /// Reads a single `u8` value. If no byte is available, `value` is not modified.
    pub fn get_u8(&mut self, value: &mut u8) -> &mut Self {
        if let Some(b) = self.take::<u8>() {
            *value = b;
        }
        self
    }

    /// Reads a `u16` in big-endian byte order. If fewer than 2 bytes remain, `value` is not
    /// modified.
    pub fn get_u16(&mut self, value: &mut u16) -> &mut Self {
        if let Some(n) = self.take::<U16<BE>>() {
            *value = n.get();
        }
        self
    }

    /// Reads a `u32` in big-endian byte order. If fewer than 4 bytes remain, `value` is not
    /// modified.
    pub fn get_u32(&mut self, value: &mut u32) -> &mut Self {
        if let Some(n) = self.take::<U32<BE>>() {
            *value = n.get();
        }
        self
    }

    /// Reads a `u64` that was encoded as two big-endian `u32` words, low word first.
    ///
    /// The two words are read one after the other. If either read fails, `value` is not
    /// modified. Note that if only the high word is missing, the low word has been consumed.
    pub fn get_u64(&mut self, value: &mut u64) -> &mut Self {
        let mut lo = 0u32;
        let mut hi = 0u32;
        self.get_u32(&mut lo).get_u32(&mut hi);
        if !self.is_eof() {
            *value = u64::from(lo) | (u64::from(hi) << 32);
        }
        self
    }

    /// Reads a length-prefixed byte string: a big-endian `u16` byte count, then the bytes.
    ///
    /// `value` is always cleared first. If the length prefix cannot be read, or fewer bytes remain
    /// than the prefix says, the stream is set to end-of-file and `value` is left empty. A
    /// zero-length string consumes only its prefix.
    pub fn get_string(&mut self, value: &mut Vec<u8>) -> &mut Self {
        value.clear();
        let mut len = 0u16;
        self.get_u16(&mut len);
        if self.is_eof() || len == 0 {
            return self;
        }
        if let Some(bytes) = self.read_raw(usize::from(len)) {
            value.extend_from_slice(bytes);
        }
        self
    }

    /// Returns `Err(StreamError::ShortRead)` if the end-of-file flag is set.
    ///
    /// This is meant to be called once after a sequence of `get_*` calls.
    pub fn check(&self) -> Result<()> {
        if self.is_eof() {
            Err(StreamError::ShortRead)
        } else {
            Ok(())
        }
    }

    /// Reads a single `u8` value.
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut value = 0;
        self.get_u8(&mut value).check()?;
        Ok(value)
    }

    /// Reads a `u16` in big-endian byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut value = 0;
        self.get_u16(&mut value).check()?;
        Ok(value)
    }

    /// Reads a `u32` in big-endian byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut value = 0;
        self.get_u32(&mut value).check()?;
        Ok(value)
    }

    /// Reads a `u64` that was encoded as two big-endian `u32` words, low word first.
    pub fn read_u64(&mut self) -> Result<u64> {
        let mut value = 0;
        self.get_u64(&mut value).check()?;
        Ok(value)
    }

    /// Reads a length-prefixed byte string.
    pub fn read_string(&mut self) -> Result<Vec<u8>> {
        let mut value = Vec::new();
        self.get_string(&mut value).check()?;
        Ok(value)
    }

    /// Reads a length-prefixed string and validates that it is well-formed UTF-8.
    ///
    /// The encoding itself carries no character set; the bytes are consumed even if they are not
    /// UTF-8.
    pub fn read_utf8(&mut self) -> Result<String> {
        String::from_utf8(self.read_string()?).map_err(|_| StreamError::InvalidUtf8)
    }
}

/// Error type for the `read_*` methods of `BinaryStream`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum StreamError {
    /// A read needed more bytes than remain in the stream, or the stream was already at
    /// end-of-file.
    ShortRead,

    /// A string was read successfully, but its contents are not well-formed UTF-8.
    InvalidUtf8,
}

impl core::error::Error for StreamError {}

impl core::fmt::Display for StreamError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ShortRead => f.write_str("Not enough data remains in the stream"),
            Self::InvalidUtf8 => f.write_str("The string is not valid UTF-8"),
        }
    }
}
