//! First come, first served.
//!
//! Requests are serviced strictly in arrival order with no regard for seek
//! distance.

use diskseek_core::{Cylinder, DiskGeometry, InvalidRequestError, Request, SeekTrace, validate};
use log::debug;

/// Builds the FCFS trace for `requests` starting from `initial`.
///
/// # Errors
///
/// Returns an error if the initial position or any request lies outside the
/// geometry, or if two requests share an arrival order.
pub fn build(
    geometry: &DiskGeometry,
    initial: Cylinder,
    requests: &[Request],
) -> Result<SeekTrace, InvalidRequestError> {
    validate(geometry, initial, requests)?;

    let mut queue: Vec<&Request> = requests.iter().collect();
    queue.sort_by_key(|request| request.arrival_order);

    let mut trace = SeekTrace::new(initial);
    for request in queue {
        trace.push_service(request.cylinder);
    }

    debug!("FCFS serviced {} requests from {initial}", requests.len());
    Ok(trace)
}
