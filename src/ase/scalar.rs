use std::fmt;

use serde::Serialize;

/// Signed 16.16 fixed-point number, stored as its raw file bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fixed(i32);

impl Fixed {
	/// Wrap raw 16.16 bits as read from the file.
	pub const fn from_bits(bits: i32) -> Self {
		Self(bits)
	}

	/// Raw 16.16 bit pattern.
	pub const fn to_bits(self) -> i32 {
		self.0
	}

	/// Exact floating-point value (every 16.16 value fits in an f64).
	pub fn to_f64(self) -> f64 {
		f64::from(self.0) / 65536.0
	}
}

impl fmt::Display for Fixed {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.to_f64())
	}
}

/// 2D point with signed 32-bit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: i32,
	/// Vertical coordinate.
	pub y: i32,
}

/// 2D extent with signed 32-bit dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Size {
	/// Width.
	pub w: i32,
	/// Height.
	pub h: i32,
}

/// Axis-aligned rectangle with signed 32-bit origin and extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rect {
	/// Origin horizontal coordinate.
	pub x: i32,
	/// Origin vertical coordinate.
	pub y: i32,
	/// Width.
	pub w: i32,
	/// Height.
	pub h: i32,
}

/// 128-bit unique identifier, as 16 raw bytes in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Uuid(pub [u8; 16]);

impl fmt::Display for Uuid {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let b = &self.0;
		write!(
			f,
			"{:02x}{:02x}{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
			b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7], b[8], b[9], b[10], b[11], b[12], b[13], b[14], b[15]
		)
	}
}
