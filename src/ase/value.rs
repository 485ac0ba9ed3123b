use serde::Serialize;

use crate::ase::raw::{PropertyType, RawPropertyMap, RawValue};
use crate::ase::scalar::{Fixed, Point, Rect, Size, Uuid};
use crate::ase::{AseError, Result};

/// Normalized property value.
///
/// Narrow integers have been widened to the canonical set (see
/// [`normalize`](crate::ase::normalize)); everything else keeps its native
/// representation. Array and nested-map nodes keep the raw value they were
/// built from, while their processed contents live in the node's children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PropValue {
	/// Boolean.
	Bool(bool),
	/// Canonical signed 32-bit integer (covers all source widths up to 16 bits).
	I32(i32),
	/// Canonical signed 64-bit integer (also covers unsigned 32-bit sources).
	I64(i64),
	/// Unsigned 64-bit integer, kept unsigned so the full range survives.
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
	/// 128-bit unique identifier.
	Uuid(Uuid),
	/// Raw array this node was built from.
	Vector(Vec<RawValue>),
	/// Raw nested map this node was built from.
	Map(RawPropertyMap),
}

/// One processed entry in a property tree.
///
/// Array elements carry the empty string as their key by convention; a nested
/// map entry with a legitimately empty key is indistinguishable only by its
/// parent's kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyNode {
	/// Property name, or `""` for unkeyed array elements.
	pub key: String,
	/// On-file type tag of the source value, before normalization.
	pub kind: PropertyType,
	/// Normalized value.
	pub value: PropValue,
	/// Processed contents, non-empty only for array and nested-map values.
	pub children: Vec<PropertyNode>,
}

impl PropertyNode {
	/// First child whose key matches exactly, or `None`.
	pub fn get(&self, key: &str) -> Option<&PropertyNode> {
		self.children.iter().find(|node| node.key == key)
	}

	/// Child at `index`.
	pub fn at(&self, index: usize) -> Result<&PropertyNode> {
		self.children.get(index).ok_or(AseError::IndexOutOfRange {
			index,
			len: self.children.len(),
		})
	}

	/// True when this node holds processed array or map contents.
	pub fn has_children(&self) -> bool {
		!self.children.is_empty()
	}

	/// Processed contents in source order.
	pub fn children(&self) -> &[PropertyNode] {
		&self.children
	}
}

/// Processed property map: the immutable, queryable output tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyMap {
	/// Namespace id: zero for generic user data, nonzero for extensions.
	pub id: u32,
	/// Processed entries in source order, not deduplicated.
	pub entries: Vec<PropertyNode>,
}

impl PropertyMap {
	/// First entry whose key matches exactly, or `None`.
	pub fn get(&self, key: &str) -> Option<&PropertyNode> {
		self.entries.iter().find(|node| node.key == key)
	}

	/// Entry at `index`.
	pub fn at(&self, index: usize) -> Result<&PropertyNode> {
		self.entries.get(index).ok_or(AseError::IndexOutOfRange {
			index,
			len: self.entries.len(),
		})
	}

	/// Number of root entries.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// True when no entries survived processing.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterate root entries in source order.
	pub fn iter(&self) -> std::slice::Iter<'_, PropertyNode> {
		self.entries.iter()
	}
}
