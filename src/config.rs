//! Stream configuration: byte order, protocol version and float precision
//!
//! The wire format carries no header, so a [`Writer`](crate::Writer) and the
//! [`Reader`](crate::Reader) consuming its output must be given the same
//! [`Config`]. Nothing detects a mismatch.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Byte order used for every multi-byte field and for UTF-16 text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ByteOrder {
    /// Network order (most significant byte first)
    #[default]
    BigEndian,
    /// Least significant byte first
    LittleEndian,
}

/// Width used for `float` and `double` fields from [`Version::Qt4_6`] on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloatingPointPrecision {
    /// 4-byte IEEE 754 single precision
    Single,
    /// 8-byte IEEE 754 double precision
    #[default]
    Double,
}

/// Stream format revision
///
/// One variant per distinct wire integer. Releases that did not change the
/// encoding rules share the integer of the release that did; those names are
/// available as associated constants (`Version::QT_4_7` is `Version::Qt4_6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Version {
    /// Qt 1.0
    Qt1_0 = 1,
    /// Qt 2.0
    Qt2_0 = 2,
    /// Qt 2.1
    Qt2_1 = 3,
    /// Qt 3.0
    Qt3_0 = 4,
    /// Qt 3.1
    Qt3_1 = 5,
    /// Qt 3.3
    Qt3_3 = 6,
    /// Qt 4.0 and 4.1
    Qt4_0 = 7,
    /// Qt 4.2
    Qt4_2 = 8,
    /// Qt 4.3
    Qt4_3 = 9,
    /// Qt 4.4
    Qt4_4 = 10,
    /// Qt 4.5
    Qt4_5 = 11,
    /// Qt 4.6 through 4.9
    Qt4_6 = 12,
    /// Qt 5.0
    Qt5_0 = 13,
    /// Qt 5.1
    Qt5_1 = 14,
    /// Qt 5.2 and 5.3
    Qt5_2 = 15,
    /// Qt 5.4 and 5.5
    Qt5_4 = 16,
    /// Qt 5.6
    Qt5_6 = 17,
}

/// Release names and the revision each one encodes with
const RELEASES: &[(&str, Version)] = &[
    ("1.0", Version::Qt1_0),
    ("2.0", Version::Qt2_0),
    ("2.1", Version::Qt2_1),
    ("3.0", Version::Qt3_0),
    ("3.1", Version::Qt3_1),
    ("3.3", Version::Qt3_3),
    ("4.0", Version::Qt4_0),
    ("4.1", Version::QT_4_1),
    ("4.2", Version::Qt4_2),
    ("4.3", Version::Qt4_3),
    ("4.4", Version::Qt4_4),
    ("4.5", Version::Qt4_5),
    ("4.6", Version::Qt4_6),
    ("4.7", Version::QT_4_7),
    ("4.8", Version::QT_4_8),
    ("4.9", Version::QT_4_9),
    ("5.0", Version::Qt5_0),
    ("5.1", Version::Qt5_1),
    ("5.2", Version::Qt5_2),
    ("5.3", Version::QT_5_3),
    ("5.4", Version::Qt5_4),
    ("5.5", Version::QT_5_5),
    ("5.6", Version::Qt5_6),
];

impl Version {
    /// Qt 4.1 streams are identical to Qt 4.0
    pub const QT_4_1: Version = Version::Qt4_0;
    /// Qt 4.7 streams are identical to Qt 4.6
    pub const QT_4_7: Version = Version::Qt4_6;
    /// Qt 4.8 streams are identical to Qt 4.6
    pub const QT_4_8: Version = Version::Qt4_6;
    /// Qt 4.9 streams are identical to Qt 4.6
    pub const QT_4_9: Version = Version::Qt4_6;
    /// Qt 5.3 streams are identical to Qt 5.2
    pub const QT_5_3: Version = Version::Qt5_2;
    /// Qt 5.5 streams are identical to Qt 5.4
    pub const QT_5_5: Version = Version::Qt5_4;

    /// First revision where [`FloatingPointPrecision`] decides float widths
    pub const FLOATING_POINT_PRECISION: Version = Version::Qt4_6;

    /// Every distinct revision, oldest first
    pub const ALL: [Version; 17] = [
        Version::Qt1_0,
        Version::Qt2_0,
        Version::Qt2_1,
        Version::Qt3_0,
        Version::Qt3_1,
        Version::Qt3_3,
        Version::Qt4_0,
        Version::Qt4_2,
        Version::Qt4_3,
        Version::Qt4_4,
        Version::Qt4_5,
        Version::Qt4_6,
        Version::Qt5_0,
        Version::Qt5_1,
        Version::Qt5_2,
        Version::Qt5_4,
        Version::Qt5_6,
    ];

    /// Wire integer of this revision
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Whether the precision flag redirects float/double widths
    #[inline]
    pub fn honors_precision(self) -> bool {
        self >= Self::FLOATING_POINT_PRECISION
    }

    /// Release name of the revision, e.g. `"4.6"`
    ///
    /// Aliased revisions report the oldest release that introduced them.
    pub const fn name(self) -> &'static str {
        match self {
            Version::Qt1_0 => "1.0",
            Version::Qt2_0 => "2.0",
            Version::Qt2_1 => "2.1",
            Version::Qt3_0 => "3.0",
            Version::Qt3_1 => "3.1",
            Version::Qt3_3 => "3.3",
            Version::Qt4_0 => "4.0",
            Version::Qt4_2 => "4.2",
            Version::Qt4_3 => "4.3",
            Version::Qt4_4 => "4.4",
            Version::Qt4_5 => "4.5",
            Version::Qt4_6 => "4.6",
            Version::Qt5_0 => "5.0",
            Version::Qt5_1 => "5.1",
            Version::Qt5_2 => "5.2",
            Version::Qt5_4 => "5.4",
            Version::Qt5_6 => "5.6",
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::Qt4_6
    }
}

impl TryFrom<u8> for Version {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Version::ALL
            .iter()
            .copied()
            .find(|v| v.as_u8() == value)
            .ok_or(Error::UnsupportedVersion)
    }
}

impl From<Version> for u8 {
    fn from(version: Version) -> u8 {
        version.as_u8()
    }
}

impl FromStr for Version {
    type Err = Error;

    /// Accepts `"4.7"`, `"Qt4_7"` and `"Qt_4_7"` spellings
    fn from_str(s: &str) -> Result<Self> {
        let digits = s
            .strip_prefix("Qt_")
            .or_else(|| s.strip_prefix("Qt"))
            .unwrap_or(s);
        let mut parts = digits.split(|c| c == '_' || c == '.');
        let (major, minor) = match (parts.next(), parts.next(), parts.next()) {
            (Some(major), Some(minor), None) => (major, minor),
            _ => return Err(Error::UnsupportedVersion),
        };

        RELEASES
            .iter()
            .find(|(name, _)| {
                name.split_once('.')
                    .map_or(false, |(ma, mi)| ma == major && mi == minor)
            })
            .map(|(_, v)| *v)
            .ok_or(Error::UnsupportedVersion)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Qt {}", self.name())
    }
}

/// Settings shared by a writer and the reader consuming its output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Byte order for multi-byte fields and text
    pub byte_order: ByteOrder,
    /// Format revision
    pub version: Version,
    /// Float width selector, honored from [`Version::Qt4_6`]
    pub precision: FloatingPointPrecision,
}

impl Config {
    /// Big-endian, Qt 4.6, double precision
    pub const fn new() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            version: Version::Qt4_6,
            precision: FloatingPointPrecision::Double,
        }
    }

    /// Replace the byte order
    #[inline]
    pub const fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Replace the protocol version
    #[inline]
    pub const fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Replace the floating-point precision
    #[inline]
    pub const fn with_precision(mut self, precision: FloatingPointPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Physical width of a `float`-tagged field
    #[inline]
    pub fn float_width(&self) -> usize {
        if self.version.honors_precision() && self.precision == FloatingPointPrecision::Double {
            8
        } else {
            4
        }
    }

    /// Physical width of a `double`-tagged field
    #[inline]
    pub fn double_width(&self) -> usize {
        if self.version.honors_precision() && self.precision == FloatingPointPrecision::Single {
            4
        } else {
            8
        }
    }
}
