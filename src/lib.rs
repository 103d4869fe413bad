//! qdatastream: QDataStream-compatible binary serialization
//!
//! This crate writes and reads the byte layout produced by Qt's
//! `QDataStream` for streams from Qt 1.0 through Qt 5.6. A [`Writer`] appends
//! typed values to a buffer; a [`Reader`] configured the same way and driven
//! through the same sequence of reads gets the values back.
//!
//! # Wire Format
//!
//! The stream has no header and no field tags. Layout is decided entirely by
//! the order of calls and by the [`Config`] on each side:
//!
//! ```text
//! int8/uint8/bool   1 byte (bool is 1 or 0)
//! int16/uint16      2 bytes, configured byte order
//! int32/uint32      4 bytes, configured byte order
//! int64/uint64      8 bytes, configured byte order
//! float/double      4 or 8 bytes IEEE 754, see below
//! bytes             u32 length + payload, or FF FF FF FF when empty
//! str               u32 byte length + UTF-16 units, or FF FF FF FF when empty
//! list              u32 count + elements
//! map               u32 count + (key, value) pairs
//! ```
//!
//! From [`Version::Qt4_6`] on, the [`FloatingPointPrecision`] alone decides
//! whether `float` and `double` fields take 4 or 8 bytes. Earlier versions
//! always use 4 bytes for `float` and 8 for `double`.
//!
//! # Example
//!
//! ```rust
//! use qdatastream::{Element, Reader, TypeTag, Writer};
//!
//! let mut writer = Writer::new();
//! writer.write_int32(0x100020)?;
//! writer.write_str("AB")?;
//! writer.write_list(&[1u16, 2, 3], &Element::tag(TypeTag::UInt16))?;
//! let bytes = writer.into_inner();
//!
//! let mut reader = Reader::new(&bytes);
//! assert_eq!(reader.read_int32()?, 0x100020);
//! assert_eq!(reader.read_string()?, "AB");
//! assert_eq!(reader.read_list(&Element::<u16>::tag(TypeTag::UInt16))?, vec![1, 2, 3]);
//! assert!(reader.is_at_end());
//! # Ok::<(), qdatastream::Error>(())
//! ```

#![no_std]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod config;
pub mod element;
pub mod error;
pub mod reader;
pub mod tag;
pub mod writer;

// Re-export main types
pub use config::{ByteOrder, Config, FloatingPointPrecision, Version};
pub use element::{DecodeFn, Element, EncodeFn};
pub use error::{Error, Result};
pub use reader::Reader;
pub use tag::{Dispatch, TypeTag, Value};
pub use writer::Writer;

/// Length field marking a null or empty blob or string
pub const NULL_LENGTH: u32 = 0xFFFF_FFFF;
