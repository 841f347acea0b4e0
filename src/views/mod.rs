//! Derived-View Engine
//!
//! Pure, side-effect-free functions over the current record list:
//!
//! - **metrics**: Dashboard totals, status breakdowns, metric cards
//! - **rollup**: Per-program enrollment summaries
//!
//! All outputs are recomputed from the records passed in; no state is kept
//! here, so views can never lag behind the store.

pub mod metrics;
pub mod rollup;

// Re-export commonly used types
pub use metrics::{compute_metrics, metric_cards, DashboardMetrics, MetricCardData, StatusBreakdown};
pub use rollup::{compute_program_rollup, ProgramSummary};
