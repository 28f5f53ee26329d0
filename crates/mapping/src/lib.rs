//! Codepoint ↔ alias mapping for the codicon font.
//!
//! A [`Mapping`] is the on-disk `mapping.json` (codepoint → aliases). An
//! [`AliasIndex`] is the inverse view (alias → codepoint), derived on demand.

mod error;
mod index;
mod mapping;

pub use error::{Error, Result};
pub use index::{AliasIndex, AliasMode};
pub use mapping::Mapping;
