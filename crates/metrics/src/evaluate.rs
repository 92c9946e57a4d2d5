use std::collections::{BTreeMap, VecDeque};

use diskseek_core::{Cylinder, Request, SeekTrace};
use log::debug;
use thiserror::Error;

/// Metrics derived from one seek trace.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Total cylinders travelled along the head path, turns and jumps included.
    pub total_head_movement: u64,

    /// Wait time of each request, ordered by arrival.
    pub wait_times: Vec<usize>,

    /// Mean of `wait_times`, zero for an empty queue.
    pub average_wait_time: f64,

    /// Largest of `wait_times`, zero for an empty queue.
    pub max_wait_time: usize,

    /// Head movement per serviced request, zero for an empty queue.
    pub average_seek_distance: f64,

    /// Where the head rests after the run.
    pub final_position: Cylinder,
}

/// A trace whose serviced cylinders differ from its requests.
///
/// This always indicates a faulty trace builder.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("trace does not match its requests (missing {missing:?}, unexpected {unexpected:?})")]
pub struct TraceMismatchError {
    /// Requested cylinders the trace never serviced, one entry per missing request.
    pub missing: Vec<Cylinder>,

    /// Serviced cylinders with no request left to account for them.
    pub unexpected: Vec<Cylinder>,
}

/// Evaluates a trace against the requests it was built from.
///
/// Each serviced position is attributed to a request on the same cylinder.
/// When several requests share a cylinder, earlier arrivals take earlier
/// positions.
///
/// # Errors
///
/// Returns an error if the multiset of serviced cylinders differs from the
/// multiset of requested cylinders.
pub fn evaluate(trace: &SeekTrace, requests: &[Request]) -> Result<Metrics, TraceMismatchError> {
    let mut arrivals: Vec<&Request> = requests.iter().collect();
    arrivals.sort_by_key(|request| request.arrival_order);

    // Pending ranks per cylinder, earliest arrival at the front.
    let mut pending: BTreeMap<Cylinder, VecDeque<usize>> = BTreeMap::new();
    for (rank, request) in arrivals.iter().enumerate() {
        pending.entry(request.cylinder).or_default().push_back(rank);
    }

    let mut wait_times = vec![0; requests.len()];
    let mut unexpected = Vec::new();

    for (position, cylinder) in trace.serviced().enumerate() {
        match pending.get_mut(&cylinder).and_then(VecDeque::pop_front) {
            Some(rank) => wait_times[rank] = position,
            None => unexpected.push(cylinder),
        }
    }

    let missing: Vec<Cylinder> = pending
        .into_iter()
        .flat_map(|(cylinder, ranks)| std::iter::repeat_n(cylinder, ranks.len()))
        .collect();

    if !missing.is_empty() || !unexpected.is_empty() {
        return Err(TraceMismatchError {
            missing,
            unexpected,
        });
    }

    let total_head_movement: u64 = trace.seek_distances().sum();
    let count = requests.len();

    let total_wait: usize = wait_times.iter().sum();
    let average_wait_time = mean(total_wait as u64, count);
    let average_seek_distance = mean(total_head_movement, count);
    let max_wait_time = wait_times.iter().copied().max().unwrap_or(0);

    debug!("evaluated {count} requests: movement {total_head_movement}, max wait {max_wait_time}");

    Ok(Metrics {
        total_head_movement,
        wait_times,
        average_wait_time,
        max_wait_time,
        average_seek_distance,
        final_position: trace.head(),
    })
}

#[allow(clippy::cast_precision_loss)]
fn mean(total: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}
