//! Filter/Query Layer
//!
//! - **filter**: `FilterSpec`, a stable AND-combining filter over status
//!   bucket and program
//!
//! Filtering never reorders: results come back in the order the records were
//! given, which for store snapshots means newest-first.

pub mod filter;

pub use filter::FilterSpec;
