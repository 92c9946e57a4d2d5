use std::cmp::Reverse;

use diskseek_core::{Cylinder, Direction, Request, SeekTrace};

/// Requests split around the head for a sweep in one direction.
pub(crate) struct Split<'a> {
    /// Requests at or beyond the head, in service order for the sweep.
    pub(crate) ahead: Vec<&'a Request>,

    /// Requests behind the head, unordered.
    pub(crate) behind: Vec<&'a Request>,
}

/// Splits `requests` into those the first sweep from `head` reaches and the rest.
pub(crate) fn split(requests: &[Request], head: Cylinder, direction: Direction) -> Split<'_> {
    let (mut ahead, behind): (Vec<_>, Vec<_>) = requests
        .iter()
        .partition(|request| direction.is_ahead(head, request.cylinder));
    order(&mut ahead, direction);
    Split { ahead, behind }
}

/// Sorts requests in the order a sweep in `direction` reaches them.
///
/// Requests on the same cylinder keep arrival order.
pub(crate) fn order(requests: &mut [&Request], direction: Direction) {
    match direction {
        Direction::Up => requests.sort_by_key(|r| (r.cylinder, r.arrival_order)),
        Direction::Down => requests.sort_by_key(|r| (Reverse(r.cylinder), r.arrival_order)),
    }
}

/// Services `requests` in the given order.
pub(crate) fn service(trace: &mut SeekTrace, requests: &[&Request]) {
    for request in requests {
        trace.push_service(request.cylinder);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_puts_the_head_cylinder_ahead() {
        let requests = Request::queue([50, 10, 90, 70]);

        let up = split(&requests, 50, Direction::Up);
        let down = split(&requests, 50, Direction::Down);

        let cylinders = |list: &[&Request]| list.iter().map(|r| r.cylinder).collect::<Vec<_>>();
        assert_eq!(cylinders(&up.ahead), vec![50, 70, 90]);
        assert_eq!(cylinders(&up.behind), vec![10]);
        assert_eq!(cylinders(&down.ahead), vec![50, 10]);
        assert_eq!(down.behind.len(), 2);
    }

    #[test]
    fn same_cylinder_keeps_arrival_order_both_ways() {
        let requests = vec![Request::new(30, 2), Request::new(30, 0), Request::new(20, 1)];
        let mut refs: Vec<&Request> = requests.iter().collect();

        order(&mut refs, Direction::Down);
        let arrivals: Vec<_> = refs.iter().map(|r| r.arrival_order).collect();
        assert_eq!(arrivals, vec![0, 2, 1]);

        order(&mut refs, Direction::Up);
        let arrivals: Vec<_> = refs.iter().map(|r| r.arrival_order).collect();
        assert_eq!(arrivals, vec![1, 0, 2]);
    }
}
