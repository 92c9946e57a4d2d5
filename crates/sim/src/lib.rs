//! Disk I/O scheduling simulator.
//!
//! Given a request queue and a starting head position, `diskseek` computes
//! the order in which a disk head services the requests under FCFS, SSTF,
//! SCAN, or C-SCAN, and measures the resulting head movement and waits.
//!
//! ```
//! use diskseek::{Algorithm, Config, Request, run};
//!
//! let requests = Request::queue([82, 170, 43, 140, 24, 16, 190]);
//! let result = run(Algorithm::Sstf, &Config::default(), &requests)?;
//!
//! assert_eq!(result.trace.positions(), vec![50, 43, 24, 16, 82, 140, 170, 190]);
//! assert_eq!(result.metrics.total_head_movement, 208);
//! # Ok::<(), diskseek::Error>(())
//! ```
//!
//! The facade holds no state between calls: every run builds its own head
//! state from the [`Config`] it is given.

mod algorithm;
mod config;
pub mod logger;
mod run;

pub use algorithm::{Algorithm, UnknownAlgorithmError};
pub use config::Config;
pub use run::{Error, ScheduleResult, compare_results, run, run_all, run_named};

pub use diskseek_core::{
    Cylinder, Direction, DiskGeometry, GeometryError, InvalidRequestError, Request, SeekTrace,
    Stop,
};
pub use diskseek_metrics::{Comparison, ComparisonRow, Metrics, TraceMismatchError};
