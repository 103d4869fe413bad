//! Element encoding for lists and maps
//!
//! Container elements are either one of the primitive [`TypeTag`]s or a pair
//! of caller-supplied functions for anything outside that set.

use core::fmt;

use crate::error::Result;
use crate::reader::Reader;
use crate::tag::{Dispatch, TypeTag, Value};
use crate::writer::Writer;

/// Caller-supplied element encoder
pub type EncodeFn<T> = fn(&mut Writer, &T) -> Result<()>;

/// Caller-supplied element decoder
pub type DecodeFn<T> = for<'a> fn(&mut Reader<'a>) -> Result<T>;

/// How each element of a list or map side is written and read
pub enum Element<T> {
    /// Dispatch through a primitive tag
    Tag {
        /// Primitive selecting the wire encoding
        tag: TypeTag,
        /// Lift an element into a dynamic value
        to_value: fn(&T) -> Value,
        /// Lower a decoded value back into an element
        from_value: fn(Value) -> Result<T>,
    },
    /// Caller-supplied encoder and decoder
    Custom(EncodeFn<T>, DecodeFn<T>),
}

impl<T: Dispatch> Element<T> {
    /// Element encoded with the primitive `tag`
    pub fn tag(tag: TypeTag) -> Self {
        Element::Tag {
            tag,
            to_value: T::to_value,
            from_value: T::from_value,
        }
    }
}

impl<T> Element<T> {
    /// Element encoded by caller-supplied functions
    pub fn custom(encode: EncodeFn<T>, decode: DecodeFn<T>) -> Self {
        Element::Custom(encode, decode)
    }

    /// Append one element
    #[inline]
    pub fn encode(&self, writer: &mut Writer, value: &T) -> Result<()> {
        match self {
            Element::Tag { tag, to_value, .. } => writer.write(*tag, &to_value(value)),
            Element::Custom(encode, _) => encode(writer, value),
        }
    }

    /// Consume one element
    #[inline]
    pub fn decode(&self, reader: &mut Reader<'_>) -> Result<T> {
        match self {
            Element::Tag {
                tag, from_value, ..
            } => from_value(reader.read(*tag)?),
            Element::Custom(_, decode) => decode(reader),
        }
    }
}

impl<T> Clone for Element<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Element<T> {}

impl<T> fmt::Debug for Element<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Tag { tag, .. } => f.debug_tuple("Tag").field(tag).finish(),
            Element::Custom(..) => f.write_str("Custom"),
        }
    }
}

impl<T: Dispatch> From<TypeTag> for Element<T> {
    fn from(tag: TypeTag) -> Self {
        Element::tag(tag)
    }
}
