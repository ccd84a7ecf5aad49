//! Generic `put` / `get` over every type the stream can encode.
//!
//! Implementing [`Encode`] and [`Decode`] for a record type lets it be written and read with the
//! same call shape as the primitives:
//!
//! ```
//! use binary_stream::{BinaryStream, Decode, Encode};
//!
//! #[derive(Default, Debug, PartialEq)]
//! struct Frame {
//!     id: u32,
//!     name: Vec<u8>,
//! }
//!
//! impl Encode for Frame {
//!     fn encode(&self, s: &mut BinaryStream) {
//!         s.put(&self.id).put(&self.name);
//!     }
//! }
//!
//! impl Decode for Frame {
//!     fn decode(&mut self, s: &mut BinaryStream) {
//!         s.get(&mut self.id).get(&mut self.name);
//!     }
//! }
//!
//! let f = Frame { id: 7, name: b"main".to_vec() };
//! let mut s = BinaryStream::new();
//! s.put(&f);
//! s.rewind();
//!
//! let mut g = Frame::default();
//! s.get(&mut g);
//! assert!(!s.is_eof());
//! assert_eq!(f, g);
//! ```

use crate::BinaryStream;
use alloc::string::String;
use alloc::vec::Vec;

/// A value that can be written to a [`BinaryStream`].
pub trait Encode {
    /// Writes `self` at the stream's write cursor.
    fn encode(&self, stream: &mut BinaryStream);
}

/// A value that can be read from a [`BinaryStream`] in place.
///
/// Decoding writes into an existing value rather than returning a new one, so that a failed read
/// can leave the destination as it was (integers) or cleared (strings).
pub trait Decode {
    /// Reads `self` from the stream's read cursor. On failure the stream's end-of-file flag is
    /// set.
    fn decode(&mut self, stream: &mut BinaryStream);
}

impl BinaryStream {
    /// Writes any [`Encode`] value.
    pub fn put<T: Encode + ?Sized>(&mut self, value: &T) -> &mut Self {
        value.encode(self);
        self
    }

    /// Reads any [`Decode`] value into `value`.
    pub fn get<T: Decode + ?Sized>(&mut self, value: &mut T) -> &mut Self {
        value.decode(self);
        self
    }
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, stream: &mut BinaryStream) {
        (**self).encode(stream)
    }
}

macro_rules! int_wire {
    ($($t:ty => $put:ident, $get:ident;)*) => {
        $(
            impl Encode for $t {
                fn encode(&self, stream: &mut BinaryStream) {
                    stream.$put(*self);
                }
            }

            impl Decode for $t {
                fn decode(&mut self, stream: &mut BinaryStream) {
                    stream.$get(self);
                }
            }
        )*
    };
}

int_wire! {
    u8 => put_u8, get_u8;
    u16 => put_u16, get_u16;
    u32 => put_u32, get_u32;
    u64 => put_u64, get_u64;
}

impl Encode for [u8] {
    fn encode(&self, stream: &mut BinaryStream) {
        stream.put_string(self);
    }
}

impl Encode for Vec<u8> {
    fn encode(&self, stream: &mut BinaryStream) {
        stream.put_string(self);
    }
}

impl Decode for Vec<u8> {
    fn decode(&mut self, stream: &mut BinaryStream) {
        stream.get_string(self);
    }
}

impl Encode for str {
    fn encode(&self, stream: &mut BinaryStream) {
        stream.put_string(self);
    }
}

impl Encode for String {
    fn encode(&self, stream: &mut BinaryStream) {
        stream.put_string(self);
    }
}

/// Strings are raw bytes on the wire. Byte sequences that are not valid UTF-8 are replaced with
/// the Unicode replacement character.
impl Decode for String {
    fn decode(&mut self, stream: &mut BinaryStream) {
        let mut bytes = Vec::new();
        stream.get_string(&mut bytes);
        match String::from_utf8(bytes) {
            Ok(s) => *self = s,
            Err(e) => {
                self.clear();
                push_lossy(e.as_bytes(), self);
            }
        }
    }
}

#[cfg(feature = "bstr")]
fn push_lossy(bytes: &[u8], dest: &mut String) {
    use bstr::ByteSlice;
    bytes.to_str_lossy_into(dest);
}

#[cfg(not(feature = "bstr"))]
fn push_lossy(bytes: &[u8], dest: &mut String) {
    for chunk in bytes.utf8_chunks() {
        dest.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            dest.push(char::REPLACEMENT_CHARACTER);
        }
    }
}

#[cfg(feature = "bstr")]
impl Encode for bstr::BStr {
    fn encode(&self, stream: &mut BinaryStream) {
        stream.put_string(self);
    }
}

#[cfg(feature = "bstr")]
impl Encode for bstr::BString {
    fn encode(&self, stream: &mut BinaryStream) {
        stream.put_string(self);
    }
}

#[cfg(feature = "bstr")]
impl Decode for bstr::BString {
    fn decode(&mut self, stream: &mut BinaryStream) {
        stream.get_string(self);
    }
}
