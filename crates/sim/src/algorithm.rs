use std::{fmt, str::FromStr};

use diskseek_core::{InvalidRequestError, Request, SeekTrace};
use diskseek_schedulers::{cscan, fcfs, scan, sstf};
use thiserror::Error;

use crate::Config;

/// The supported scheduling policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[cfg_attr(feature = "serde-derive", serde(rename = "FCFS"))]
    Fcfs,

    #[cfg_attr(feature = "serde-derive", serde(rename = "SSTF"))]
    Sstf,

    #[cfg_attr(feature = "serde-derive", serde(rename = "SCAN"))]
    Scan,

    #[cfg_attr(feature = "serde-derive", serde(rename = "CSCAN"))]
    CScan,
}

/// An algorithm name that matches no supported policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown scheduling algorithm `{name}` (expected one of FCFS, SSTF, SCAN, CSCAN)")]
pub struct UnknownAlgorithmError {
    pub name: String,
}

impl Algorithm {
    /// All policies, in the order they are usually reported.
    pub const ALL: [Self; 4] = [Self::Fcfs, Self::Sstf, Self::Scan, Self::CScan];

    /// Returns the canonical name of the policy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sstf => "SSTF",
            Self::Scan => "SCAN",
            Self::CScan => "CSCAN",
        }
    }

    /// Builds the trace this policy produces for `requests`.
    ///
    /// The configured direction is only consulted by SCAN and C-SCAN.
    ///
    /// # Errors
    ///
    /// Returns an error if the request queue violates the configured geometry.
    pub fn build(
        self,
        config: &Config,
        requests: &[Request],
    ) -> Result<SeekTrace, InvalidRequestError> {
        let geometry = config.geometry();
        let initial = config.initial_position();
        let direction = config.direction();

        match self {
            Self::Fcfs => fcfs::build(geometry, initial, requests),
            Self::Sstf => sstf::build(geometry, initial, requests),
            Self::Scan => scan::build(geometry, initial, direction, requests),
            Self::CScan => cscan::build(geometry, initial, direction, requests),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithmError;

    /// Parses a policy name, ignoring case. `C-SCAN` is accepted for C-SCAN.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FCFS" => Ok(Self::Fcfs),
            "SSTF" => Ok(Self::Sstf),
            "SCAN" => Ok(Self::Scan),
            "CSCAN" | "C-SCAN" => Ok(Self::CScan),
            _ => Err(UnknownAlgorithmError { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("fcfs".parse::<Algorithm>(), Ok(Algorithm::Fcfs));
        assert_eq!("SSTF".parse::<Algorithm>(), Ok(Algorithm::Sstf));
        assert_eq!(" Scan ".parse::<Algorithm>(), Ok(Algorithm::Scan));
        assert_eq!("C-SCAN".parse::<Algorithm>(), Ok(Algorithm::CScan));
        assert_eq!("cscan".parse::<Algorithm>(), Ok(Algorithm::CScan));
    }

    #[test]
    fn unknown_name_is_reported_verbatim() {
        let err = "LOOK".parse::<Algorithm>().unwrap_err();

        assert_eq!(err.name, "LOOK");
        assert!(err.to_string().contains("`LOOK`"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
    }
}
