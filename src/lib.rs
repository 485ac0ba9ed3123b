//! Public library API for processing Aseprite user data property maps.

/// Raw property model, normalization, recursive processing, and lookup.
pub mod ase;
