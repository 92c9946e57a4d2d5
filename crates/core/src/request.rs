use super::Cylinder;

/// A pending access to one cylinder.
///
/// `arrival_order` is the zero-based position of the request in the incoming
/// queue. It fixes the FCFS service order, breaks ties in the other policies,
/// and aligns per-request wait times. The order of a request slice carries no
/// meaning on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Request {
    pub cylinder: Cylinder,
    pub arrival_order: usize,
}

impl Request {
    /// Creates a new request.
    #[must_use]
    pub fn new(cylinder: Cylinder, arrival_order: usize) -> Self {
        Self {
            cylinder,
            arrival_order,
        }
    }

    /// Builds a request queue from cylinders, numbering arrivals in iteration order.
    pub fn queue(cylinders: impl IntoIterator<Item = Cylinder>) -> Vec<Self> {
        cylinders
            .into_iter()
            .enumerate()
            .map(|(arrival_order, cylinder)| Self::new(cylinder, arrival_order))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_numbers_arrivals() {
        let queue = Request::queue([82, 170, 43]);

        assert_eq!(
            queue,
            vec![
                Request::new(82, 0),
                Request::new(170, 1),
                Request::new(43, 2)
            ]
        );
    }
}
