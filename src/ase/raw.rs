use serde::Serialize;

use crate::ase::scalar::{Fixed, Point, Rect, Size, Uuid};

/// On-file type tag for a user data property value.
///
/// Discriminants match the values stored in the document, so a chunk decoder
/// can map its `WORD` tags through [`PropertyType::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyType {
	/// Absent value. Should not appear in exported files, but is tolerated.
	Null = 0,
	/// Boolean.
	Bool = 1,
	/// Signed 8-bit integer.
	I8 = 2,
	/// Unsigned 8-bit integer.
	U8 = 3,
	/// Signed 16-bit integer.
	I16 = 4,
	/// Unsigned 16-bit integer.
	U16 = 5,
	/// Signed 32-bit integer.
	I32 = 6,
	/// Unsigned 32-bit integer.
	U32 = 7,
	/// Signed 64-bit integer.
	I64 = 8,
	/// Unsigned 64-bit integer.
	U64 = 9,
	/// Signed 16.16 fixed-point number.
	Fixed = 10,
	/// 32-bit floating-point number.
	F32 = 11,
	/// 64-bit floating-point number.
	F64 = 12,
	/// UTF-8 string.
	String = 13,
	/// 2D point.
	Point = 14,
	/// 2D size.
	Size = 15,
	/// Rectangle.
	Rect = 16,
	/// Array of values.
	Vector = 17,
	/// Nested property map.
	Map = 18,
	/// 128-bit unique identifier.
	Uuid = 19,
}

impl PropertyType {
	/// Map an on-file tag to its type, or `None` for unknown tags.
	pub const fn from_raw(tag: u16) -> Option<Self> {
		Some(match tag {
			0 => Self::Null,
			1 => Self::Bool,
			2 => Self::I8,
			3 => Self::U8,
			4 => Self::I16,
			5 => Self::U16,
			6 => Self::I32,
			7 => Self::U32,
			8 => Self::I64,
			9 => Self::U64,
			10 => Self::Fixed,
			11 => Self::F32,
			12 => Self::F64,
			13 => Self::String,
			14 => Self::Point,
			15 => Self::Size,
			16 => Self::Rect,
			17 => Self::Vector,
			18 => Self::Map,
			19 => Self::Uuid,
			_ => return None,
		})
	}
}

/// Decoded property value as produced by the document decoder.
///
/// The closed set of value shapes the format permits. Arrays hold further raw
/// values; nested maps hold a whole [`RawPropertyMap`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RawValue {
	/// Absent value; dropped entirely during processing.
	Null,
	/// Boolean.
	Bool(bool),
	/// Signed 8-bit integer.
	I8(i8),
	/// Unsigned 8-bit integer.
	U8(u8),
	/// Signed 16-bit integer.
	I16(i16),
	/// Unsigned 16-bit integer.
	U16(u16),
	/// Signed 32-bit integer.
	I32(i32),
	/// Unsigned 32-bit integer.
	U32(u32),
	/// Signed 64-bit integer.
	I64(i64),
	/// Unsigned 64-bit integer.
	U64(u64),
	/// Signed 16.16 fixed-point number.
	Fixed(Fixed),
	/// 32-bit floating-point number.
	F32(f32),
	/// 64-bit floating-point number.
	F64(f64),
	/// UTF-8 string.
	String(String),
	/// 2D point.
	Point(Point),
	/// 2D size.
	Size(Size),
	/// Rectangle.
	Rect(Rect),
	/// Array of values.
	Vector(Vec<RawValue>),
	/// Nested property map.
	Map(RawPropertyMap),
	/// 128-bit unique identifier.
	Uuid(Uuid),
}

impl RawValue {
	/// On-file type tag matching this value shape.
	pub const fn kind(&self) -> PropertyType {
		match self {
			Self::Null => PropertyType::Null,
			Self::Bool(_) => PropertyType::Bool,
			Self::I8(_) => PropertyType::I8,
			Self::U8(_) => PropertyType::U8,
			Self::I16(_) => PropertyType::I16,
			Self::U16(_) => PropertyType::U16,
			Self::I32(_) => PropertyType::I32,
			Self::U32(_) => PropertyType::U32,
			Self::I64(_) => PropertyType::I64,
			Self::U64(_) => PropertyType::U64,
			Self::Fixed(_) => PropertyType::Fixed,
			Self::F32(_) => PropertyType::F32,
			Self::F64(_) => PropertyType::F64,
			Self::String(_) => PropertyType::String,
			Self::Point(_) => PropertyType::Point,
			Self::Size(_) => PropertyType::Size,
			Self::Rect(_) => PropertyType::Rect,
			Self::Vector(_) => PropertyType::Vector,
			Self::Map(_) => PropertyType::Map,
			Self::Uuid(_) => PropertyType::Uuid,
		}
	}
}

/// One decoded key/value entry of a raw property map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawProperty {
	/// Property name.
	pub key: String,
	/// Decoded value.
	pub value: RawValue,
}

impl RawProperty {
	/// Build an entry from a key and value.
	pub fn new(key: impl Into<String>, value: RawValue) -> Self {
		Self { key: key.into(), value }
	}
}

/// Raw property map attached to a document element's user data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawPropertyMap {
	/// Namespace id: zero for generic user data, nonzero for extensions.
	pub id: u32,
	/// Key/value entries in file order.
	pub entries: Vec<RawProperty>,
}
