use crate::ase::elements::{Cel, Layer, Slice, Sprite, Tag, UserData};
use crate::ase::raw::{RawProperty, RawPropertyMap, RawValue};
use crate::ase::value::{PropValue, PropertyMap, PropertyNode};
use crate::ase::{AseError, Result};

/// Runtime limits for property map processing.
#[derive(Debug, Clone, Copy)]
pub struct ProcessOptions {
	/// Maximum array/nested-map recursion depth. Nesting depth is
	/// author-controlled input, so it is always bounded here.
	pub max_depth: u32,
}

impl Default for ProcessOptions {
	fn default() -> Self {
		Self { max_depth: 32 }
	}
}

/// Normalize a scalar to its canonical representation.
///
/// Integers up to 16 bits widen to `I32`, unsigned 32-bit widens to `I64`,
/// and everything else keeps its native representation. Unsigned 64-bit in
/// particular stays unsigned: there is no wider canonical integer, and
/// truncating it would lose range. Returns `None` only for `Null`.
pub fn normalize(value: &RawValue) -> Option<PropValue> {
	Some(match value {
		RawValue::Null => return None,
		RawValue::Bool(v) => PropValue::Bool(*v),
		RawValue::I8(v) => PropValue::I32(i32::from(*v)),
		RawValue::U8(v) => PropValue::I32(i32::from(*v)),
		RawValue::I16(v) => PropValue::I32(i32::from(*v)),
		RawValue::U16(v) => PropValue::I32(i32::from(*v)),
		RawValue::I32(v) => PropValue::I32(*v),
		RawValue::U32(v) => PropValue::I64(i64::from(*v)),
		RawValue::I64(v) => PropValue::I64(*v),
		RawValue::U64(v) => PropValue::U64(*v),
		RawValue::Fixed(v) => PropValue::Fixed(*v),
		RawValue::F32(v) => PropValue::F32(*v),
		RawValue::F64(v) => PropValue::F64(*v),
		RawValue::String(v) => PropValue::String(v.clone()),
		RawValue::Point(v) => PropValue::Point(*v),
		RawValue::Size(v) => PropValue::Size(*v),
		RawValue::Rect(v) => PropValue::Rect(*v),
		RawValue::Uuid(v) => PropValue::Uuid(*v),
		RawValue::Vector(v) => PropValue::Vector(v.clone()),
		RawValue::Map(v) => PropValue::Map(v.clone()),
	})
}

/// Process one raw value into a property node.
///
/// `Null` produces nothing. Arrays and nested maps become nodes whose
/// children hold their processed contents; array elements get the empty
/// string as key, keeping only their relative order.
pub fn process_value(key: &str, value: &RawValue, options: &ProcessOptions) -> Result<Option<PropertyNode>> {
	process_value_impl(key, value, options, 0)
}

/// Process raw entries in order, dropping those that produce nothing.
pub fn process_entries(entries: &[RawProperty], options: &ProcessOptions) -> Result<Vec<PropertyNode>> {
	process_entries_impl(entries, options, 0)
}

/// Process a whole raw property map.
pub fn process_map(map: &RawPropertyMap, options: &ProcessOptions) -> Result<PropertyMap> {
	Ok(PropertyMap {
		id: map.id,
		entries: process_entries_impl(&map.entries, options, 0)?,
	})
}

/// Process the property map for one extension namespace out of a holder.
///
/// The first map whose id equals `extension_id` wins. When none matches, the
/// result is an empty map carrying the requested id rather than an error.
pub fn process_user_data(user_data: &UserData, extension_id: u32, options: &ProcessOptions) -> Result<PropertyMap> {
	for map in &user_data.property_maps {
		if map.id == extension_id {
			return process_map(map, options);
		}
	}

	Ok(PropertyMap {
		id: extension_id,
		entries: Vec::new(),
	})
}

/// Process sprite-level user data for one extension namespace.
pub fn process_sprite(sprite: &Sprite, extension_id: u32, options: &ProcessOptions) -> Result<PropertyMap> {
	let user_data = require_user_data(sprite.user_data.as_ref(), "sprite")?;
	process_user_data(user_data, extension_id, options)
}

/// Process layer user data for one extension namespace.
pub fn process_layer(layer: &Layer, extension_id: u32, options: &ProcessOptions) -> Result<PropertyMap> {
	let user_data = require_user_data(layer.user_data.as_ref(), "layer")?;
	process_user_data(user_data, extension_id, options)
}

/// Process cel user data for one extension namespace.
pub fn process_cel(cel: &Cel, extension_id: u32, options: &ProcessOptions) -> Result<PropertyMap> {
	let user_data = require_user_data(cel.user_data.as_ref(), "cel")?;
	process_user_data(user_data, extension_id, options)
}

/// Process tag user data for one extension namespace.
pub fn process_tag(tag: &Tag, extension_id: u32, options: &ProcessOptions) -> Result<PropertyMap> {
	let user_data = require_user_data(tag.user_data.as_ref(), "tag")?;
	process_user_data(user_data, extension_id, options)
}

/// Process slice user data for one extension namespace.
pub fn process_slice(slice: &Slice, extension_id: u32, options: &ProcessOptions) -> Result<PropertyMap> {
	let user_data = require_user_data(slice.user_data.as_ref(), "slice")?;
	process_user_data(user_data, extension_id, options)
}

fn require_user_data<'a>(user_data: Option<&'a UserData>, element: &'static str) -> Result<&'a UserData> {
	user_data.ok_or(AseError::MissingUserData { element })
}

fn process_value_impl(key: &str, value: &RawValue, options: &ProcessOptions, depth: u32) -> Result<Option<PropertyNode>> {
	if depth >= options.max_depth {
		return Err(AseError::DepthExceeded {
			max_depth: options.max_depth,
		});
	}

	let node = match value {
		RawValue::Vector(elements) => {
			let mut children = Vec::with_capacity(elements.len());
			for element in elements {
				if let Some(child) = process_value_impl("", element, options, depth + 1)? {
					children.push(child);
				}
			}
			PropertyNode {
				key: key.to_owned(),
				kind: value.kind(),
				value: PropValue::Vector(elements.clone()),
				children,
			}
		}
		RawValue::Map(map) => PropertyNode {
			key: key.to_owned(),
			kind: value.kind(),
			value: PropValue::Map(map.clone()),
			children: process_entries_impl(&map.entries, options, depth + 1)?,
		},
		// Null normalizes to nothing and is dropped here.
		scalar => match normalize(scalar) {
			Some(value) => PropertyNode {
				key: key.to_owned(),
				kind: scalar.kind(),
				value,
				children: Vec::new(),
			},
			None => return Ok(None),
		},
	};

	Ok(Some(node))
}

fn process_entries_impl(entries: &[RawProperty], options: &ProcessOptions, depth: u32) -> Result<Vec<PropertyNode>> {
	let mut nodes = Vec::with_capacity(entries.len());
	for entry in entries {
		if let Some(node) = process_value_impl(&entry.key, &entry.value, options, depth)? {
			nodes.push(node);
		}
	}
	Ok(nodes)
}
