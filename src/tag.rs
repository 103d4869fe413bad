//! Closed set of primitive type tags and the dynamic value they select

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::config::Config;
use crate::error::{Error, Result};

/// Symbolic name of a primitive encode/decode operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `int8`: 1-byte signed integer
    Int8,
    /// `uint8`: 1-byte unsigned integer
    UInt8,
    /// `int16`: 2-byte signed integer
    Int16,
    /// `uint16`: 2-byte unsigned integer
    UInt16,
    /// `int32`: 4-byte signed integer
    Int32,
    /// `uint32`: 4-byte unsigned integer
    UInt32,
    /// `int64`: 8-byte signed integer
    Int64,
    /// `uint64`: 8-byte unsigned integer
    UInt64,
    /// `float`: nominally 4-byte IEEE 754
    Float,
    /// `double`: nominally 8-byte IEEE 754
    Double,
    /// `str`: length-prefixed UTF-16 text
    Str,
    /// `bytes`: length-prefixed blob
    Bytes,
    /// `bool`: 1-byte signed integer, 1 or 0
    Bool,
}

impl TypeTag {
    /// The full closed set
    pub const ALL: [TypeTag; 13] = [
        TypeTag::Int8,
        TypeTag::UInt8,
        TypeTag::Int16,
        TypeTag::UInt16,
        TypeTag::Int32,
        TypeTag::UInt32,
        TypeTag::Int64,
        TypeTag::UInt64,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::Str,
        TypeTag::Bytes,
        TypeTag::Bool,
    ];

    /// Symbolic name used by [`FromStr`]
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::Int8 => "int8",
            TypeTag::UInt8 => "uint8",
            TypeTag::Int16 => "int16",
            TypeTag::UInt16 => "uint16",
            TypeTag::Int32 => "int32",
            TypeTag::UInt32 => "uint32",
            TypeTag::Int64 => "int64",
            TypeTag::UInt64 => "uint64",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::Str => "str",
            TypeTag::Bytes => "bytes",
            TypeTag::Bool => "bool",
        }
    }

    /// Encoded width, or `None` for length-prefixed tags
    ///
    /// Float widths depend on the version and precision in `config`.
    pub fn fixed_width(self, config: &Config) -> Option<usize> {
        match self {
            TypeTag::Int8 | TypeTag::UInt8 | TypeTag::Bool => Some(1),
            TypeTag::Int16 | TypeTag::UInt16 => Some(2),
            TypeTag::Int32 | TypeTag::UInt32 => Some(4),
            TypeTag::Int64 | TypeTag::UInt64 => Some(8),
            TypeTag::Float => Some(config.float_width()),
            TypeTag::Double => Some(config.double_width()),
            TypeTag::Str | TypeTag::Bytes => None,
        }
    }
}

impl FromStr for TypeTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TypeTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.name() == s)
            .ok_or(Error::UnknownType)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One primitive value, as produced by generic tag dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// `int8`
    Int8(i8),
    /// `uint8`
    UInt8(u8),
    /// `int16`
    Int16(i16),
    /// `uint16`
    UInt16(u16),
    /// `int32`
    Int32(i32),
    /// `uint32`
    UInt32(u32),
    /// `int64`
    Int64(i64),
    /// `uint64`
    UInt64(u64),
    /// `float`
    Float(f32),
    /// `double`
    Double(f64),
    /// `str`, UTF-16 text
    Str(String),
    /// `bytes`, length-prefixed blob
    Bytes(Vec<u8>),
    /// `bool`
    Bool(bool),
}

impl Value {
    /// Tag whose encoding matches this value
    pub const fn tag(&self) -> TypeTag {
        match self {
            Value::Int8(_) => TypeTag::Int8,
            Value::UInt8(_) => TypeTag::UInt8,
            Value::Int16(_) => TypeTag::Int16,
            Value::UInt16(_) => TypeTag::UInt16,
            Value::Int32(_) => TypeTag::Int32,
            Value::UInt32(_) => TypeTag::UInt32,
            Value::Int64(_) => TypeTag::Int64,
            Value::UInt64(_) => TypeTag::UInt64,
            Value::Float(_) => TypeTag::Float,
            Value::Double(_) => TypeTag::Double,
            Value::Str(_) => TypeTag::Str,
            Value::Bytes(_) => TypeTag::Bytes,
            Value::Bool(_) => TypeTag::Bool,
        }
    }

    /// Whether this value may be written under `tag`
    ///
    /// Float and double values are interchangeable; everything else must
    /// match exactly.
    pub fn fits(&self, tag: TypeTag) -> bool {
        match (self, tag) {
            (Value::Float(_) | Value::Double(_), TypeTag::Float | TypeTag::Double) => true,
            _ => self.tag() == tag,
        }
    }
}

/// Conversion between a Rust type and [`Value`] for tag-driven containers
pub trait Dispatch: Sized {
    /// Wrap `self` as a dynamic value
    fn to_value(&self) -> Value;

    /// Unwrap a dynamic value, failing with [`Error::TypeMismatch`]
    fn from_value(value: Value) -> Result<Self>;
}

impl Dispatch for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

macro_rules! impl_dispatch {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Dispatch for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                #[inline]
                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        _ => Err(Error::TypeMismatch),
                    }
                }
            }
        )*
    };
}

impl_dispatch! {
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    bool => Bool,
    String => Str,
    Vec<u8> => Bytes,
}

// Floats cross over: from Qt 4.6 a float field may come back as either variant.
impl Dispatch for f32 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Float(v) => Ok(v),
            Value::Double(v) => Ok(v as f32),
            _ => Err(Error::TypeMismatch),
        }
    }
}

impl Dispatch for f64 {
    #[inline]
    fn to_value(&self) -> Value {
        Value::Double(*self)
    }

    #[inline]
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Double(v) => Ok(v),
            Value::Float(v) => Ok(v as f64),
            _ => Err(Error::TypeMismatch),
        }
    }
}
