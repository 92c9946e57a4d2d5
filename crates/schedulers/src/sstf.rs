//! Shortest seek time first.
//!
//! The head always moves to the pending request nearest to it. Among equally
//! near requests, whether above or below the head, the earliest arrival wins.
//! Distant requests can starve while nearby ones keep arriving.

use diskseek_core::{Cylinder, DiskGeometry, InvalidRequestError, Request, SeekTrace, validate};
use log::debug;

/// Builds the SSTF trace for `requests` starting from `initial`.
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

    let mut pending: Vec<&Request> = requests.iter().collect();
    let mut trace = SeekTrace::new(initial);
    let mut head = initial;

    while let Some(index) = nearest(&pending, head) {
        let request = pending.swap_remove(index);
        trace.push_service(request.cylinder);
        head = request.cylinder;
    }

    debug!("SSTF serviced {} requests from {initial}", requests.len());
    Ok(trace)
}

/// Returns the index of the pending request closest to `head`.
fn nearest(pending: &[&Request], head: Cylinder) -> Option<usize> {
    pending
        .iter()
        .enumerate()
        .min_by_key(|(_, request)| (request.cylinder.abs_diff(head), request.arrival_order))
        .map(|(index, _)| index)
}
