use serde::Serialize;

use crate::ase::raw::RawPropertyMap;

/// User data attached to a document element.
///
/// Carries the classic free-form text and color annotations alongside zero or
/// more property maps, one per extension namespace.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserData {
	/// Free-form annotation text, when set.
	pub text: Option<String>,
	/// Annotation color as raw RGBA bytes, when set.
	pub color: Option<[u8; 4]>,
	/// Property maps in file order.
	pub property_maps: Vec<RawPropertyMap>,
}

/// Whole-document element carrying sprite-level user data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sprite {
	/// Source document name.
	pub name: String,
	/// Sprite-level user data, when the document defines any.
	pub user_data: Option<UserData>,
}

/// Layer element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
	/// Layer name.
	pub name: String,
	/// Layer user data, when the document defines any.
	pub user_data: Option<UserData>,
}

/// Cel element: the image placed on one layer in one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cel {
	/// Index of the frame holding this cel.
	pub frame: u32,
	/// Index of the layer holding this cel.
	pub layer: u32,
	/// Cel user data, when the document defines any.
	pub user_data: Option<UserData>,
}

/// Animation tag element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
	/// Tag name.
	pub name: String,
	/// Tag user data, when the document defines any.
	pub user_data: Option<UserData>,
}

/// Slice element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
	/// Slice name.
	pub name: String,
	/// Slice user data, when the document defines any.
	pub user_data: Option<UserData>,
}
