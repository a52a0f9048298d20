//! Departmental filter module.
//!
//! Contains the four-dimensional filter selector, its cascading-reset
//! rule, and the server-computed taxonomy of reachable option values.

mod key;
mod set;
mod taxonomy;

pub use key::FilterKey;
pub use set::FilterSet;
pub use taxonomy::Taxonomy;
