mod elements;
mod error;
mod process;
mod raw;
mod scalar;
mod value;

/// Document elements and the user data holder attached to them.
pub use elements::{Cel, Layer, Slice, Sprite, Tag, UserData};
/// Error and result aliases.
pub use error::{AseError, Result};
/// Normalization and recursive processing entry points.
pub use process::{
	ProcessOptions, normalize, process_cel, process_entries, process_layer, process_map, process_slice, process_sprite, process_tag,
	process_user_data, process_value,
};
/// Raw decoded property model and type tags.
pub use raw::{PropertyType, RawProperty, RawPropertyMap, RawValue};
/// Scalar value carriers shared by raw and processed values.
pub use scalar::{Fixed, Point, Rect, Size, Uuid};
/// Processed property tree types.
pub use value::{PropValue, PropertyMap, PropertyNode};
