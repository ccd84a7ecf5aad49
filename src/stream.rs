use alloc::vec::Vec;

/// An in-memory buffer with independent read and write cursors, encoded using big-endian
/// fixed-width integers and `u16` length-prefixed strings.
///
/// Writes land at the write cursor and extend the buffer as needed. Reads consume bytes from the
/// read cursor. A stream built with [`BinaryStream::new`] starts with both cursors at 0, so you
/// write a record, call [`rewind`](Self::rewind), then read it back. A stream built with
/// [`BinaryStream::from_bytes`] is ready to read immediately, and further writes append to the
/// existing data.
///
/// Read failures are not reported through return values. If a read needs more bytes than remain,
/// the stream sets its end-of-file flag, and every read after that is a no-op until the flag is
/// cleared by [`clear_eof`](Self::clear_eof) or [`rewind`](Self::rewind). Integer reads leave
/// their output untouched when they fail; string reads clear their output. Check
/// [`is_eof`](Self::is_eof) once after a batch of reads and discard the whole record if it is
/// set, since individual fields may not have been filled in.
///
/// ```
/// use binary_stream::BinaryStream;
///
/// let mut s = BinaryStream::from_bytes(vec![0x12, 0x34]);
/// let mut a = 0u16;
/// let mut b = 0xffu8;
/// s.get_u16(&mut a).get_u8(&mut b);
/// assert!(s.is_eof());
/// assert_eq!(a, 0x1234);
/// assert_eq!(b, 0xff);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BinaryStream {
    buf: Vec<u8>,
    read_pos: usize,
    write_pos: usize,
    eof: bool,
}

impl BinaryStream {
    /// Creates an empty stream. Both cursors are at position 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stream whose buffer can hold `len` bytes without reallocating.
    pub fn with_capacity(len: usize) -> Self {
        Self {
            buf: Vec::with_capacity(len),
            ..Self::default()
        }
    }

    /// Creates a stream that holds `bytes`. The read cursor is at the start of the data and the
    /// write cursor is at the end, so reads see the existing data and writes append to it.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        let buf = bytes.into();
        Self {
            write_pos: buf.len(),
            buf,
            read_pos: 0,
            eof: false,
        }
    }

    /// Returns `true` if a read has failed since the end-of-file flag was last cleared.
    pub fn is_eof(&self) -> bool {
        self.eof
    }

    /// Clears the end-of-file flag. Neither cursor moves.
    pub fn clear_eof(&mut self) {
        self.eof = false;
    }

    /// Moves both cursors back to position 0 and clears the end-of-file flag.
    ///
    /// The buffer is not truncated. Writes made after a rewind overwrite the existing bytes.
    pub fn rewind(&mut self) {
        self.read_pos = 0;
        self.write_pos = 0;
        self.eof = false;
    }

    /// The entire contents of the buffer, regardless of cursor positions.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// The entire contents of the buffer as a `BStr`.
    #[cfg(feature = "bstr")]
    pub fn as_bstr(&self) -> &bstr::BStr {
        bstr::BStr::new(&self.buf)
    }

    /// Replaces the entire contents of the buffer.
    ///
    /// The cursors are not reset; call [`rewind`](Self::rewind) to read the new data from the
    /// start. A cursor past the end of the new data is moved back to the end. The end-of-file
    /// flag is unchanged.
    pub fn set_bytes(&mut self, bytes: impl Into<Vec<u8>>) {
        self.buf = bytes.into();
        self.read_pos = self.read_pos.min(self.buf.len());
        self.write_pos = self.write_pos.min(self.buf.len());
    }

    /// Extracts the inner buffer
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// The length of the buffer, in bytes.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The offset of the next byte to be read.
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    /// The offset at which the next byte will be written.
    pub fn write_position(&self) -> usize {
        self.write_pos
    }

    /// The number of bytes between the read cursor and the end of the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.read_pos
    }

    /// Writes `bytes` at the write cursor, overwriting bytes that are already there and
    /// extending the buffer past its end.
    pub(crate) fn write_raw(&mut self, bytes: &[u8]) {
        let end = self.write_pos + bytes.len();
        let overlap = self.buf.len().min(end) - self.write_pos;
        let (inside, outside) = bytes.split_at(overlap);
        self.buf[self.write_pos..self.write_pos + overlap].copy_from_slice(inside);
        self.buf.extend_from_slice(outside);
        self.write_pos = end;
    }

    /// Consumes `len` bytes at the read cursor. If the stream is already at end-of-file, or
    /// fewer than `len` bytes remain, this sets the end-of-file flag, consumes nothing and
    /// returns `None`.
    pub(crate) fn read_raw(&mut self, len: usize) -> Option<&[u8]> {
        if self.eof {
            return None;
        }
        if self.remaining() < len {
            self.set_eof(len);
            return None;
        }
        let start = self.read_pos;
        self.read_pos += len;
        Some(&self.buf[start..self.read_pos])
    }

    /// The bytes at the read cursor, or `None` if the stream is at end-of-file.
    pub(crate) fn unread(&self) -> Option<&[u8]> {
        if self.eof {
            None
        } else {
            Some(&self.buf[self.read_pos..])
        }
    }

    pub(crate) fn advance(&mut self, len: usize) {
        debug_assert!(len <= self.remaining());
        self.read_pos += len;
    }

    pub(crate) fn set_eof(&mut self, needed: usize) {
        log::trace!(
            "short read at offset {}: need {} bytes, {} remaining",
            self.read_pos,
            needed,
            self.remaining()
        );
        self.eof = true;
    }
}

impl From<Vec<u8>> for BinaryStream {
    fn from(bytes: Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&[u8]> for BinaryStream {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Reads raw bytes at the read cursor. This follows the `Read` contract rather than the codec's:
/// it returns `Ok(0)` at the end of the data, never sets the end-of-file flag, and still reads
/// while the flag is set.
#[cfg(feature = "std")]
impl std::io::Read for BinaryStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = buf.len().min(self.remaining());
        buf[..n].copy_from_slice(&self.buf[self.read_pos..self.read_pos + n]);
        self.read_pos += n;
        Ok(n)
    }
}

/// Writes raw bytes at the write cursor, with no length prefix.
#[cfg(feature = "std")]
impl std::io::Write for BinaryStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_raw(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
