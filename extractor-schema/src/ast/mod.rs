//! Types of the normalized schema model.
//!
//! These are what the parser produces, what the emitter walks, and what the
//! metadata document serializes.

mod attribute;
mod field;
mod model;
mod schema;
mod types;

pub use attribute::*;
pub use field::*;
pub use model::*;
pub use schema::*;
pub use types::*;
