//! Performance metrics for disk scheduling traces.
//!
//! - [`evaluate`] — head movement and per-request wait times for one trace
//! - [`compare`] — side-by-side ranking of several evaluated runs
//!
//! Wait time counts the requests serviced ahead of a request. The simulator
//! has no clock, so queueing delay is measured in service slots.

mod compare;
mod evaluate;

pub use compare::{Comparison, ComparisonRow, compare};
pub use evaluate::{Metrics, TraceMismatchError, evaluate};
