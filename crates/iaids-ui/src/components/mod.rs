//! Yew components built on the shared selection model.

pub mod multi_select;
pub mod tokens;

pub use multi_select::{MultiSelect, MultiSelectProps};
pub use tokens::{Size, Tone};
