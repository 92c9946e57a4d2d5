//! SCAN, the elevator policy.
//!
//! The head sweeps in its initial direction, servicing requests in cylinder
//! order, and runs on to the geometry extreme. If requests remain behind it,
//! it reverses and sweeps to the opposite extreme. Every sweep ends at an
//! extreme, never at the last request, so the distance to the extreme counts
//! toward head movement.

use diskseek_core::{
    Cylinder, Direction, DiskGeometry, InvalidRequestError, Request, SeekTrace, validate,
};
use log::debug;

use crate::sweep;

/// Builds the SCAN trace for `requests` starting from `initial` in `direction`.
///
/// # Errors
///
/// Returns an error if the initial position or any request lies outside the
/// geometry, or if two requests share an arrival order.
pub fn build(
    geometry: &DiskGeometry,
    initial: Cylinder,
    direction: Direction,
    requests: &[Request],
) -> Result<SeekTrace, InvalidRequestError> {
    validate(geometry, initial, requests)?;

    let mut trace = SeekTrace::new(initial);
    if requests.is_empty() {
        return Ok(trace);
    }

    let sweep::Split { ahead, mut behind } = sweep::split(requests, initial, direction);

    sweep::service(&mut trace, &ahead);
    trace.push_turn(geometry.extreme(direction));

    if !behind.is_empty() {
        let reverse = direction.reversed();
        debug!(
            "SCAN reversing {reverse} at cylinder {}",
            geometry.extreme(direction)
        );
        sweep::order(&mut behind, reverse);
        sweep::service(&mut trace, &behind);
        trace.push_turn(geometry.extreme(reverse));
    }

    debug!(
        "SCAN serviced {} requests from {initial} heading {direction}",
        requests.len()
    );
    Ok(trace)
}
