//! PostgreSQL tuning parameter derivation.
//!
//! Maps CPU cores, memory, and storage medium to an ordered list of
//! `{name, value, category}` settings using fixed formulas with clamps.
//!
//! Zero I/O: pure arithmetic with no opinions about presentation.

pub mod category;
pub mod constants;
pub mod derive;
pub mod error;
pub mod input;
pub mod plan;
pub mod size;

pub use category::{Category, classify};
pub use constants::FORMULA_VERSION;
pub use derive::{DerivedParameter, derive, render, value_of};
pub use error::{DeriveError, Result};
pub use input::{ConfigInput, DEFAULT_DB_VERSION, StorageType};
pub use plan::ResourcePlan;
pub use size::{format_bytes, format_kb, format_mb};
