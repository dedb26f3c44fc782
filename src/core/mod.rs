//! Shared constants for the draw engine and its collaborators.

pub mod constants;
