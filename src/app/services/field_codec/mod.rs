//! Field codecs for single CSV cells
//!
//! A cell is cut out of its line by the shared delimiter scan in [`scanner`]
//! and then parsed by one of the [`FieldCodec`] variants in [`codec`]:
//! plain string, quoted string, integer with missing marker, or categorical
//! lookup. Formatting is the inverse: text is written back unchanged and
//! integers, ids and the missing sentinel as decimal text.

pub mod codec;
pub mod scanner;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use codec::{FieldCodec, FieldError, StringCodec};
pub use scanner::{FieldCursor, extract_field};
