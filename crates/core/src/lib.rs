//! Core types for the diskseek disk scheduling simulator.
//!
//! This crate defines the values that trace builders, metrics, and the
//! scheduler facade share:
//!
//! - [`DiskGeometry`] — the inclusive cylinder range of the simulated disk
//! - [`Direction`] — the travel direction of the head for sweeping policies
//! - [`Request`] — a cylinder access tagged with its arrival order
//! - [`SeekTrace`] — the head's waypoints, in order, for one scheduling run
//! - [`validate`] — the precondition check every trace builder runs first

mod geometry;
mod request;
mod trace;
mod validate;

pub use geometry::{Cylinder, Direction, DiskGeometry, GeometryError};
pub use request::Request;
pub use trace::{SeekTrace, Stop, TraceShapeError};
pub use validate::{InvalidRequestError, validate};
