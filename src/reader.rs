//! Zero-copy stream reader
//!
//! The reader walks a borrowed, fully materialized buffer with a
//! forward-only cursor. Blobs are returned as slices into that buffer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{ByteOrder, Config};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::tag::{TypeTag, Value};
use crate::NULL_LENGTH;

/// Read a `$ty` in the reader's byte order
macro_rules! get_ordered {
    ($self:ident, $ty:ty) => {{
        let bytes = $self.take_array::<{ core::mem::size_of::<$ty>() }>()?;
        match $self.config.byte_order {
            ByteOrder::BigEndian => <$ty>::from_be_bytes(bytes),
            ByteOrder::LittleEndian => <$ty>::from_le_bytes(bytes),
        }
    }};
}

/// Deserializer over a QDataStream-compatible byte sequence
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    config: Config,
}

impl<'a> Reader<'a> {
    /// Create a reader with the default configuration
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_config(buf, Config::default())
    }

    /// Create a reader with the given configuration
    #[inline]
    pub fn with_config(buf: &'a [u8], config: Config) -> Self {
        Self {
            buf,
            pos: 0,
            config,
        }
    }

    /// Current configuration
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration for subsequent reads
    #[inline]
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Current read position
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get remaining bytes in cursor
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check if cursor is at end
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Skip bytes in the cursor
    #[inline]
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.take(n).map(|_| ())
    }

    /// Peek at bytes without advancing cursor
    #[inline]
    pub fn peek_bytes(&self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            return Err(Error::UnexpectedEof);
        }
        Ok(&self.buf[self.pos..self.pos + len])
    }

    #[inline]
    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        if len > self.remaining() {
            log::debug!(
                "read of {} bytes at offset {} runs past end of {}-byte stream",
                len,
                self.pos,
                self.buf.len()
            );
            return Err(Error::UnexpectedEof);
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    #[inline]
    fn take_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    /// Read a single raw byte
    #[inline]
    pub fn read_char(&mut self) -> Result<u8> {
        self.read_uint8()
    }

    /// Read an i8 value
    #[inline]
    pub fn read_int8(&mut self) -> Result<i8> {
        Ok(get_ordered!(self, i8))
    }

    /// Read a u8 value
    #[inline]
    pub fn read_uint8(&mut self) -> Result<u8> {
        Ok(get_ordered!(self, u8))
    }

    /// Read a bool; any non-zero byte is true
    #[inline]
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_int8()? != 0)
    }

    /// Read an i16 value
    #[inline]
    pub fn read_int16(&mut self) -> Result<i16> {
        Ok(get_ordered!(self, i16))
    }

    /// Read a u16 value
    #[inline]
    pub fn read_uint16(&mut self) -> Result<u16> {
        Ok(get_ordered!(self, u16))
    }

    /// Read an i32 value
    #[inline]
    pub fn read_int32(&mut self) -> Result<i32> {
        Ok(get_ordered!(self, i32))
    }

    /// Read a u32 value
    #[inline]
    pub fn read_uint32(&mut self) -> Result<u32> {
        Ok(get_ordered!(self, u32))
    }

    /// Read an i64 value
    #[inline]
    pub fn read_int64(&mut self) -> Result<i64> {
        Ok(get_ordered!(self, i64))
    }

    /// Read a u64 value
    #[inline]
    pub fn read_uint64(&mut self) -> Result<u64> {
        Ok(get_ordered!(self, u64))
    }

    /// Read a `float` field
    ///
    /// From Qt 4.6 with double precision this consumes 8 bytes and narrows
    /// the result.
    #[inline]
    pub fn read_float(&mut self) -> Result<f32> {
        if self.config.float_width() == 8 {
            Ok(get_ordered!(self, f64) as f32)
        } else {
            Ok(get_ordered!(self, f32))
        }
    }

    /// Read a `double` field
    ///
    /// From Qt 4.6 with single precision this consumes 4 bytes.
    #[inline]
    pub fn read_double(&mut self) -> Result<f64> {
        if self.config.double_width() == 4 {
            Ok(f64::from(get_ordered!(self, f32)))
        } else {
            Ok(get_ordered!(self, f64))
        }
    }

    /// Read a length-prefixed blob
    ///
    /// The null length decodes to an empty slice; null and empty are not
    /// distinguished on the wire.
    #[inline]
    pub fn read_bytes(&mut self) -> Result<&'a [u8]> {
        let len = self.read_uint32()?;
        if len == NULL_LENGTH {
            return Ok(&[]);
        }
        self.take(len as usize)
    }

    /// Read raw bytes without length prefix
    #[inline]
    pub fn read_raw_bytes(&mut self, len: usize) -> Result<&'a [u8]> {
        self.take(len)
    }

    /// Read length-prefixed UTF-16 text in the configured byte order
    ///
    /// The null length decodes to an empty string. Odd payload lengths and
    /// unpaired surrogates fail with [`Error::DecodeError`].
    pub fn read_string(&mut self) -> Result<String> {
        let bytes = self.read_bytes()?;
        if bytes.len() % 2 != 0 {
            log::debug!("text payload has odd length {}", bytes.len());
            return Err(Error::DecodeError);
        }
        let order = self.config.byte_order;
        let units = bytes.chunks_exact(2).map(|pair| {
            let pair = [pair[0], pair[1]];
            match order {
                ByteOrder::BigEndian => u16::from_be_bytes(pair),
                ByteOrder::LittleEndian => u16::from_le_bytes(pair),
            }
        });
        char::decode_utf16(units)
            .collect::<core::result::Result<String, _>>()
            .map_err(|e| {
                log::debug!("invalid UTF-16 in text payload: {}", e);
                Error::DecodeError
            })
    }

    /// Read a count-prefixed list
    pub fn read_list<T>(&mut self, element: &Element<T>) -> Result<Vec<T>> {
        let count = self.read_uint32()? as usize;
        log::trace!("reading list of {} elements as {:?}", count, element);
        // Reservation is capped by the remaining input, not the declared count
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(element.decode(self)?);
        }
        Ok(items)
    }

    /// Read a count-prefixed map, key then value for each entry
    ///
    /// Collects into any `FromIterator` map; later duplicate keys replace
    /// earlier ones for `BTreeMap` and `HashMap`.
    pub fn read_map<M, K, V>(&mut self, key: &Element<K>, value: &Element<V>) -> Result<M>
    where
        M: FromIterator<(K, V)>,
    {
        let count = self.read_uint32()?;
        log::trace!(
            "reading map of {} entries as {:?} => {:?}",
            count,
            key,
            value
        );
        (0..count)
            .map(|_| -> Result<(K, V)> {
                let k = key.decode(self)?;
                let v = value.decode(self)?;
                Ok((k, v))
            })
            .collect()
    }

    /// Read a value using the encoding selected by `tag`
    pub fn read(&mut self, tag: TypeTag) -> Result<Value> {
        Ok(match tag {
            TypeTag::Int8 => Value::Int8(self.read_int8()?),
            TypeTag::UInt8 => Value::UInt8(self.read_uint8()?),
            TypeTag::Int16 => Value::Int16(self.read_int16()?),
            TypeTag::UInt16 => Value::UInt16(self.read_uint16()?),
            TypeTag::Int32 => Value::Int32(self.read_int32()?),
            TypeTag::UInt32 => Value::UInt32(self.read_uint32()?),
            TypeTag::Int64 => Value::Int64(self.read_int64()?),
            TypeTag::UInt64 => Value::UInt64(self.read_uint64()?),
            TypeTag::Float => Value::Float(self.read_float()?),
            TypeTag::Double => Value::Double(self.read_double()?),
            TypeTag::Str => Value::Str(self.read_string()?),
            TypeTag::Bytes => Value::Bytes(self.read_bytes()?.to_vec()),
            TypeTag::Bool => Value::Bool(self.read_bool()?),
        })
    }

    /// Read a value using the tag named `name` (`"int32"`, `"str"`, ...)
    ///
    /// Unknown names fail with [`Error::UnknownType`] without consuming input.
    pub fn read_named(&mut self, name: &str) -> Result<Value> {
        let tag = name.parse::<TypeTag>().map_err(|e| {
            log::debug!("unknown type tag {:?}", name);
            e
        })?;
        self.read(tag)
    }
}
