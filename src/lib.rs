//! Reads and writes in-memory buffers using a big-endian, length-prefixed binary stream encoding.
//!
//! The encoding is the one used by Breakpad's `binarystream`:
//!
//! * `u8` is a single byte.
//! * `u16` and `u32` are big-endian.
//! * `u64` is two big-endian `u32` words, the **low** word first. It is _not_ a single big-endian
//!   8-byte value.
//! * Strings are a big-endian `u16` byte count followed by that many raw bytes. There is no
//!   terminator and no character set conversion.
//!
//! All of this is implemented by [`BinaryStream`]. Reads do not return errors; instead, a failed
//! read sets a sticky end-of-file flag that the caller checks once, after a batch of reads.
//!
//! ```
//! use binary_stream::BinaryStream;
//!
//! let mut s = BinaryStream::new();
//! s.put_u16(0x0102).put_string("test");
//! assert_eq!(s.as_bytes(), b"\x01\x02\x00\x04test");
//!
//! s.rewind();
//! let mut n = 0u16;
//! let mut name = Vec::new();
//! s.get_u16(&mut n).get_string(&mut name);
//! assert!(!s.is_eof());
//! assert_eq!((n, name.as_slice()), (0x0102, b"test".as_slice()));
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

extern crate alloc;

mod reader;
mod stream;
mod wire;
mod writer;


pub use reader::{Result, StreamError};
pub use stream::BinaryStream;
pub use wire::{Decode, Encode};

/// The longest string, in bytes, that can be encoded. Longer strings are truncated on write.
pub const MAX_STRING_LEN: usize = u16::MAX as usize;
