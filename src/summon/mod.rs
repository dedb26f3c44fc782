//! Summon draw engine: rarity tables, mercy rules and the draw protocol.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
