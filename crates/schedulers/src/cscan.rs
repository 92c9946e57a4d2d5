//! C-SCAN, the circular elevator policy.
//!
//! The head only ever services while travelling in its initial direction.
//! When requests remain behind it, the head runs to the travel extreme, jumps
//! to the opposite extreme without servicing, and sweeps the same way again.
//! The jump distance counts toward head movement. The final sweep ends at the
//! last serviced request.

use diskseek_core::{
    Cylinder, Direction, DiskGeometry, InvalidRequestError, Request, SeekTrace, validate,
};
use log::debug;

use crate::sweep;

/// Builds the C-SCAN trace for `requests` starting from `initial` in `direction`.
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
    let sweep::Split { ahead, mut behind } = sweep::split(requests, initial, direction);

    sweep::service(&mut trace, &ahead);

    if !behind.is_empty() {
        let end = geometry.extreme(direction);
        let restart = geometry.extreme(direction.reversed());
        debug!("C-SCAN jumping from cylinder {end} to {restart}");

        trace.push_turn(end);
        trace.push_jump(restart);
        sweep::order(&mut behind, direction);
        sweep::service(&mut trace, &behind);
    }

    debug!(
        "C-SCAN serviced {} requests from {initial} heading {direction}",
        requests.len()
    );
    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;

    use diskseek_core::Stop;

    use crate::test_support::{geometry, init_test_logger, textbook_queue};

    fn movement(trace: &SeekTrace) -> u64 {
        trace.seek_distances().sum()
    }

    #[test]
    fn wraps_around_and_keeps_sweeping_up() {
        init_test_logger();

        let trace = build(&geometry(), 50, Direction::Up, &textbook_queue()).unwrap();

        assert_eq!(trace.positions(), vec![50, 82, 140, 170, 190, 16, 24, 43]);
        assert_eq!(
            trace.path().collect::<Vec<_>>(),
            vec![50, 82, 140, 170, 190, 199, 0, 16, 24, 43]
        );
        assert_eq!(movement(&trace), 149 + 199 + 43);
    }

    #[test]
    fn wraps_around_and_keeps_sweeping_down() {
        let trace = build(&geometry(), 50, Direction::Down, &textbook_queue()).unwrap();

        assert_eq!(trace.positions(), vec![50, 43, 24, 16, 190, 170, 140, 82]);
        assert_eq!(movement(&trace), 50 + 199 + 117);
    }

    #[test]
    fn stops_at_last_request_when_nothing_is_behind() {
        let requests = Request::queue([70, 60]);

        let trace = build(&geometry(), 50, Direction::Up, &requests).unwrap();

        assert_eq!(
            trace.stops(),
            &[Stop::Start(50), Stop::Service(60), Stop::Service(70)]
        );
    }

    #[test]
    fn jumps_even_with_nothing_ahead() {
        let requests = Request::queue([20, 10]);

        let trace = build(&geometry(), 50, Direction::Up, &requests).unwrap();

        assert_eq!(
            trace.stops(),
            &[
                Stop::Start(50),
                Stop::Turn(199),
                Stop::Jump(0),
                Stop::Service(10),
                Stop::Service(20)
            ]
        );
        assert_eq!(movement(&trace), 149 + 199 + 20);
    }

    #[test]
    fn empty_queue_does_not_move() {
        let trace = build(&geometry(), 0, Direction::Down, &[]).unwrap();

        assert_eq!(trace.positions(), vec![0]);
    }
}
