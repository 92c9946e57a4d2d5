use thiserror::Error;

use super::{Cylinder, DiskGeometry, Request};

/// A request queue or head position that violates the disk geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidRequestError {
    #[error("initial head position {position} is outside cylinders [{min}, {max}]")]
    InitialPosition {
        position: Cylinder,
        min: Cylinder,
        max: Cylinder,
    },

    #[error("request {arrival_order} targets cylinder {cylinder}, outside cylinders [{min}, {max}]")]
    Cylinder {
        arrival_order: usize,
        cylinder: Cylinder,
        min: Cylinder,
        max: Cylinder,
    },

    #[error("arrival order {arrival_order} is shared by cylinders {first} and {second}")]
    DuplicateArrival {
        arrival_order: usize,
        first: Cylinder,
        second: Cylinder,
    },
}

/// Checks the preconditions shared by every trace builder.
///
/// The initial position is checked first, then requests in arrival order.
///
/// # Errors
///
/// Returns the first violation found: an out-of-bounds initial position, an
/// out-of-bounds request cylinder, or two requests sharing an arrival order.
pub fn validate(
    geometry: &DiskGeometry,
    initial: Cylinder,
    requests: &[Request],
) -> Result<(), InvalidRequestError> {
    let min = geometry.min_cylinder();
    let max = geometry.max_cylinder();

    if !geometry.contains(initial) {
        return Err(InvalidRequestError::InitialPosition {
            position: initial,
            min,
            max,
        });
    }

    let mut arrivals: Vec<&Request> = requests.iter().collect();
    arrivals.sort_by_key(|request| request.arrival_order);

    for request in &arrivals {
        if !geometry.contains(request.cylinder) {
            return Err(InvalidRequestError::Cylinder {
                arrival_order: request.arrival_order,
                cylinder: request.cylinder,
                min,
                max,
            });
        }
    }

    if let Some(pair) = arrivals
        .windows(2)
        .find(|pair| pair[0].arrival_order == pair[1].arrival_order)
    {
        return Err(InvalidRequestError::DuplicateArrival {
            arrival_order: pair[0].arrival_order,
            first: pair[0].cylinder,
            second: pair[1].cylinder,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> DiskGeometry {
        DiskGeometry::new(0, 199).unwrap()
    }

    #[test]
    fn accepts_requests_on_the_extremes() {
        let requests = Request::queue([0, 199, 50]);

        assert_eq!(validate(&geometry(), 199, &requests), Ok(()));
    }

    #[test]
    fn initial_position_is_checked_first() {
        let requests = Request::queue([500]);

        assert_eq!(
            validate(&geometry(), -1, &requests),
            Err(InvalidRequestError::InitialPosition {
                position: -1,
                min: 0,
                max: 199
            })
        );
    }

    #[test]
    fn reports_the_earliest_arrival_out_of_bounds() {
        let requests = vec![
            Request::new(10, 2),
            Request::new(300, 1),
            Request::new(-5, 0),
        ];

        assert_eq!(
            validate(&geometry(), 50, &requests),
            Err(InvalidRequestError::Cylinder {
                arrival_order: 0,
                cylinder: -5,
                min: 0,
                max: 199
            })
        );
    }

    #[test]
    fn rejects_shared_arrival_order() {
        let requests = vec![Request::new(10, 0), Request::new(20, 1), Request::new(30, 1)];

        let err = validate(&geometry(), 50, &requests).unwrap_err();

        assert!(matches!(
            err,
            InvalidRequestError::DuplicateArrival {
                arrival_order: 1,
                ..
            }
        ));
    }
}
