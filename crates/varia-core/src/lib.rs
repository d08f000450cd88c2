//! Closed tagged-variant domain models: plain case sets, raw-scalar backing,
//! per-case computed behavior, per-case payloads, and boxed recursion.

#[macro_use]
pub mod macros;

pub mod align;
pub mod error;
pub mod family;
pub mod language;
pub mod lightbulb;
pub mod raw;
pub mod shape;
pub mod utils;

pub use align::TextAlignment;
pub use family::{BFamilyTree, FamilyTree, ParentLink, ParentPair};
pub use language::ProgrammingLanguage;
pub use lightbulb::Lightbulb;
pub use raw::RawBacked;
pub use shape::{RectDims, ShapeDimensions, SquareDims, TriangleDims};
pub use utils::to_json::ToJson;

// Alias for error types
pub type Error = crate::error::Error;
pub type Result<T> = crate::error::Result<T>;
