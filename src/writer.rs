//! Stream writer
//!
//! The writer appends encoded values to a growable buffer. Every multi-byte
//! field follows the configured [`ByteOrder`]; float widths follow the
//! version and precision in the [`Config`].

use alloc::vec::Vec;

use crate::config::{ByteOrder, Config};
use crate::element::Element;
use crate::error::{Error, Result};
use crate::tag::{TypeTag, Value};
use crate::NULL_LENGTH;

/// Append `$value` in the writer's byte order
macro_rules! put_ordered {
    ($self:ident, $value:expr) => {{
        let value = $value;
        match $self.config.byte_order {
            ByteOrder::BigEndian => $self.buf.extend_from_slice(&value.to_be_bytes()),
            ByteOrder::LittleEndian => $self.buf.extend_from_slice(&value.to_le_bytes()),
        }
    }};
}

/// Serializer producing a QDataStream-compatible byte sequence
#[derive(Debug, Clone, Default)]
pub struct Writer {
    buf: Vec<u8>,
    config: Config,
}

impl Writer {
    /// Create a writer with the default configuration
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with the given configuration
    #[inline]
    pub fn with_config(config: Config) -> Self {
        Self {
            buf: Vec::new(),
            config,
        }
    }

    /// Create a writer with a pre-allocated buffer
    #[inline]
    pub fn with_capacity(capacity: usize, config: Config) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
            config,
        }
    }

    /// Current configuration
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the configuration for subsequent writes
    #[inline]
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    /// Write a single raw byte
    ///
    /// Fails with [`Error::MalformedInput`] unless `c` is exactly one byte.
    #[inline]
    pub fn write_char(&mut self, c: &[u8]) -> Result<()> {
        match c {
            [byte] => {
                self.buf.push(*byte);
                Ok(())
            }
            _ => Err(Error::MalformedInput),
        }
    }

    /// Write an i8 value
    #[inline]
    pub fn write_int8(&mut self, value: i8) -> Result<()> {
        self.buf.push(value as u8);
        Ok(())
    }

    /// Write a u8 value
    #[inline]
    pub fn write_uint8(&mut self, value: u8) -> Result<()> {
        self.buf.push(value);
        Ok(())
    }

    /// Write a bool as a signed byte (1 or 0)
    #[inline]
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_int8(i8::from(value))
    }

    /// Write an i16 value
    #[inline]
    pub fn write_int16(&mut self, value: i16) -> Result<()> {
        put_ordered!(self, value);
        Ok(())
    }

    /// Write a u16 value
    #[inline]
    pub fn write_uint16(&mut self, value: u16) -> Result<()> {
        put_ordered!(self, value);
        Ok(())
    }

    /// Write an i32 value
    #[inline]
    pub fn write_int32(&mut self, value: i32) -> Result<()> {
        put_ordered!(self, value);
        Ok(())
    }

    /// Write a u32 value
    #[inline]
    pub fn write_uint32(&mut self, value: u32) -> Result<()> {
        put_ordered!(self, value);
        Ok(())
    }

    /// Write an i64 value
    #[inline]
    pub fn write_int64(&mut self, value: i64) -> Result<()> {
        put_ordered!(self, value);
        Ok(())
    }

    /// Write a u64 value
    #[inline]
    pub fn write_uint64(&mut self, value: u64) -> Result<()> {
        put_ordered!(self, value);
        Ok(())
    }

    /// Write a `float` field
    ///
    /// From Qt 4.6 with double precision this emits 8 bytes, identical to
    /// [`write_double`](Self::write_double).
    #[inline]
    pub fn write_float(&mut self, value: f32) -> Result<()> {
        self.put_real(self.config.float_width(), f64::from(value));
        Ok(())
    }

    /// Write a `double` field
    ///
    /// From Qt 4.6 with single precision this emits 4 bytes, identical to
    /// [`write_float`](Self::write_float).
    #[inline]
    pub fn write_double(&mut self, value: f64) -> Result<()> {
        self.put_real(self.config.double_width(), value);
        Ok(())
    }

    #[inline]
    fn put_real(&mut self, width: usize, value: f64) {
        if width == 8 {
            put_ordered!(self, value);
        } else {
            put_ordered!(self, value as f32);
        }
    }

    /// Write an optional length-prefixed blob
    ///
    /// `None` and an empty blob both encode as the null length `FF FF FF FF`.
    #[inline]
    pub fn write_bytes(&mut self, bytes: Option<&[u8]>) -> Result<()> {
        self.write_blob(bytes.unwrap_or(&[]))
    }

    /// Write a length-prefixed blob
    pub fn write_blob(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return self.write_uint32(NULL_LENGTH);
        }
        let len = length_field(bytes.len())?;
        self.write_uint32(len)?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Write raw bytes without length prefix
    #[inline]
    pub fn write_raw_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Write optional text; `None` and `""` both encode as the null length
    #[inline]
    pub fn write_string(&mut self, text: Option<&str>) -> Result<()> {
        self.write_str(text.unwrap_or(""))
    }

    /// Write text as length-prefixed UTF-16 in the configured byte order
    ///
    /// The prefix counts encoded bytes, not characters. No byte-order mark is
    /// written.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return self.write_blob(&[]);
        }
        let byte_len = text
            .encode_utf16()
            .count()
            .checked_mul(2)
            .ok_or(Error::Overflow)?;
        let len = length_field(byte_len)?;
        self.write_uint32(len)?;

        self.buf.reserve(byte_len);
        for unit in text.encode_utf16() {
            put_ordered!(self, unit);
        }
        Ok(())
    }

    /// Write a count-prefixed list
    pub fn write_list<T>(&mut self, items: &[T], element: &Element<T>) -> Result<()> {
        let count = length_field(items.len())?;
        log::trace!("writing list of {} elements as {:?}", count, element);
        self.write_uint32(count)?;
        for item in items {
            element.encode(self, item)?;
        }
        Ok(())
    }

    /// Write a count-prefixed map, key then value for each entry
    ///
    /// Entries are written in the order the iterator yields them.
    pub fn write_map<'m, K, V, I>(
        &mut self,
        entries: I,
        key: &Element<K>,
        value: &Element<V>,
    ) -> Result<()>
    where
        K: 'm,
        V: 'm,
        I: IntoIterator<Item = (&'m K, &'m V)>,
        I::IntoIter: ExactSizeIterator,
    {
        let entries = entries.into_iter();
        let count = length_field(entries.len())?;
        log::trace!(
            "writing map of {} entries as {:?} => {:?}",
            count,
            key,
            value
        );
        self.write_uint32(count)?;
        for (k, v) in entries {
            key.encode(self, k)?;
            value.encode(self, v)?;
        }
        Ok(())
    }

    /// Write `value` using the encoding selected by `tag`
    ///
    /// Fails with [`Error::TypeMismatch`] before writing anything if the value
    /// does not belong to the tag. Float and double values are accepted by
    /// either float tag.
    pub fn write(&mut self, tag: TypeTag, value: &Value) -> Result<()> {
        if !value.fits(tag) {
            log::debug!("cannot write {:?} as {}", value, tag);
            return Err(Error::TypeMismatch);
        }
        match (tag, value) {
            (TypeTag::Float, Value::Float(v)) => self.write_float(*v),
            (TypeTag::Float, Value::Double(v)) => {
                self.put_real(self.config.float_width(), *v);
                Ok(())
            }
            (TypeTag::Double, Value::Float(v)) => self.write_double(f64::from(*v)),
            (TypeTag::Double, Value::Double(v)) => self.write_double(*v),
            (_, Value::Int8(v)) => self.write_int8(*v),
            (_, Value::UInt8(v)) => self.write_uint8(*v),
            (_, Value::Int16(v)) => self.write_int16(*v),
            (_, Value::UInt16(v)) => self.write_uint16(*v),
            (_, Value::Int32(v)) => self.write_int32(*v),
            (_, Value::UInt32(v)) => self.write_uint32(*v),
            (_, Value::Int64(v)) => self.write_int64(*v),
            (_, Value::UInt64(v)) => self.write_uint64(*v),
            (_, Value::Str(v)) => self.write_str(v),
            (_, Value::Bytes(v)) => self.write_blob(v),
            (_, Value::Bool(v)) => self.write_bool(*v),
            (_, Value::Float(_) | Value::Double(_)) => Err(Error::TypeMismatch),
        }
    }

    /// Write `value` using the tag named `name` (`"int32"`, `"str"`, ...)
    ///
    /// Unknown names fail with [`Error::UnknownType`] and write nothing.
    pub fn write_named(&mut self, name: &str, value: &Value) -> Result<()> {
        let tag = name.parse::<TypeTag>().map_err(|e| {
            log::debug!("unknown type tag {:?}", name);
            e
        })?;
        self.write(tag, value)
    }

    /// Number of bytes written so far
    #[inline]
    pub fn position(&self) -> usize {
        self.buf.len()
    }

    /// Number of bytes written so far
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether nothing has been written
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Get a slice of the encoded data
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Finish writing and take the encoded bytes
    #[inline]
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Discard everything written, keeping the configuration
    #[inline]
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

/// Convert a length to its 32-bit field, rejecting the null-length sentinel
#[inline]
fn length_field(len: usize) -> Result<u32> {
    match u32::try_from(len) {
        Ok(len) if len != NULL_LENGTH => Ok(len),
        _ => Err(Error::Overflow),
    }
}
