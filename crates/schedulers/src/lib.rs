//! Trace builders for the disk scheduling policies.
//!
//! Each module exposes a `build` function that validates its input, then
//! returns the [`SeekTrace`] the head follows under that policy:
//!
//! - [`fcfs`] — first come, first served, in arrival order
//! - [`sstf`] — shortest seek time first, nearest pending request next
//! - [`scan`] — elevator sweeps that reverse at the geometry extremes
//! - [`cscan`] — circular sweeps that always travel the same way
//!
//! Builders own their head state for the duration of one call and never
//! mutate the request slice.
//!
//! [`SeekTrace`]: diskseek_core::SeekTrace

pub mod cscan;
pub mod fcfs;
pub mod scan;
pub mod sstf;

mod sweep;
