use diskseek_core::{InvalidRequestError, Request, SeekTrace};
use diskseek_metrics::{Comparison, Metrics, TraceMismatchError, compare, evaluate};
use log::{error, info};
use thiserror::Error;

use crate::{Algorithm, Config, UnknownAlgorithmError};

/// The trace and metrics of one scheduling run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleResult {
    pub algorithm: Algorithm,
    pub trace: SeekTrace,
    pub metrics: Metrics,
}

/// Errors that can occur when running a scheduling policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{algorithm}: invalid request queue: {source}")]
    InvalidRequest {
        algorithm: Algorithm,
        #[source]
        source: InvalidRequestError,
    },

    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithmError),

    /// A trace builder produced a trace that does not cover its requests.
    ///
    /// This is a defect in the builder; retrying cannot succeed.
    #[error("{algorithm}: {source}")]
    TraceMismatch {
        algorithm: Algorithm,
        #[source]
        source: TraceMismatchError,
    },
}

/// Runs `algorithm` over `requests` and evaluates the resulting trace.
///
/// # Errors
///
/// Returns an error if the request queue violates the configured geometry,
/// or if the built trace does not match the requests.
pub fn run(
    algorithm: Algorithm,
    config: &Config,
    requests: &[Request],
) -> Result<ScheduleResult, Error> {
    let trace = algorithm
        .build(config, requests)
        .map_err(|source| Error::InvalidRequest { algorithm, source })?;

    let metrics = evaluate(&trace, requests).map_err(|source| {
        error!("{algorithm} built an inconsistent trace: {source}");
        Error::TraceMismatch { algorithm, source }
    })?;

    info!(
        "{algorithm}: {} requests, head movement {}, max wait {}",
        requests.len(),
        metrics.total_head_movement,
        metrics.max_wait_time
    );

    Ok(ScheduleResult {
        algorithm,
        trace,
        metrics,
    })
}

/// Runs the policy named `name`, as accepted by [`Algorithm::from_str`].
///
/// # Errors
///
/// Returns [`Error::UnknownAlgorithm`] before doing any work if the name is
/// not recognized, otherwise the errors of [`run`].
///
/// [`Algorithm::from_str`]: std::str::FromStr::from_str
pub fn run_named(name: &str, config: &Config, requests: &[Request]) -> Result<ScheduleResult, Error> {
    let algorithm: Algorithm = name.parse()?;
    run(algorithm, config, requests)
}

/// Runs every policy over the same input, in [`Algorithm::ALL`] order.
///
/// # Errors
///
/// Returns the first error encountered.
pub fn run_all(config: &Config, requests: &[Request]) -> Result<Vec<ScheduleResult>, Error> {
    Algorithm::ALL
        .into_iter()
        .map(|algorithm| run(algorithm, config, requests))
        .collect()
}

/// Compares results side by side, labelled by algorithm.
#[must_use]
pub fn compare_results(results: &[ScheduleResult]) -> Comparison<Algorithm> {
    compare(
        results
            .iter()
            .map(|result| (result.algorithm, &result.metrics)),
    )
}
