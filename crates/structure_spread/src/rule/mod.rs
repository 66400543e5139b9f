//! Weighted rule tables matched by namespaced wildcard patterns.
//!
//! A [`WeightTable`] maps patterns such as `base:village_*` or
//! `#base:is_plains` to integer weights; [`WeightTable::resolve`] picks the
//! most specific pattern matching a [`Subject`]. Candidate pools use these
//! tables to express biome compatibility.
pub mod pattern;
pub mod subject;
pub mod table;

pub use pattern::Pattern;
pub use subject::Subject;
pub use table::WeightTable;
