use thiserror::Error;

use super::Cylinder;

/// One waypoint of the disk head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "cylinder", rename_all = "snake_case")
)]
pub enum Stop {
    /// Initial head position. Not a serviced request.
    Start(Cylinder),

    /// A request serviced at this cylinder.
    Service(Cylinder),

    /// A geometry extreme reached without servicing, where the sweep ends.
    Turn(Cylinder),

    /// Landing point of a circular return, reached without servicing.
    Jump(Cylinder),
}

impl Stop {
    /// Returns the cylinder of this waypoint.
    #[must_use]
    pub fn cylinder(self) -> Cylinder {
        match self {
            Self::Start(c) | Self::Service(c) | Self::Turn(c) | Self::Jump(c) => c,
        }
    }

    /// Returns `true` if this waypoint services a request.
    #[must_use]
    pub fn is_service(self) -> bool {
        matches!(self, Self::Service(_))
    }
}

/// Errors that can occur when rebuilding a [`SeekTrace`] from raw waypoints.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TraceShapeError {
    #[error("trace must begin with a start waypoint")]
    MissingStart,

    #[error("start waypoint found at index {index}, only index 0 may hold one")]
    ExtraStart { index: usize },
}

/// The ordered waypoints of the disk head during one scheduling run.
///
/// A trace always begins with the initial head position. Two views are
/// derived from it:
///
/// - [`positions`](Self::positions) — the service sequence, the initial
///   position followed by one entry per serviced request
/// - [`path`](Self::path) — every position the head visits, including sweep
///   turns and circular jumps; head movement is measured along this path
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Stop>", into = "Vec<Stop>")
)]
pub struct SeekTrace {
    stops: Vec<Stop>,
}

impl SeekTrace {
    /// Starts a trace with the head at `initial`.
    #[must_use]
    pub fn new(initial: Cylinder) -> Self {
        Self {
            stops: vec![Stop::Start(initial)],
        }
    }

    /// Records a serviced request at `cylinder`.
    pub fn push_service(&mut self, cylinder: Cylinder) {
        self.stops.push(Stop::Service(cylinder));
    }

    /// Records the head running to `cylinder` without servicing.
    ///
    /// Nothing is recorded if the head is already there.
    pub fn push_turn(&mut self, cylinder: Cylinder) {
        if self.head() != cylinder {
            self.stops.push(Stop::Turn(cylinder));
        }
    }

    /// Records the head jumping to `cylinder` without servicing.
    ///
    /// Nothing is recorded if the head is already there.
    pub fn push_jump(&mut self, cylinder: Cylinder) {
        if self.head() != cylinder {
            self.stops.push(Stop::Jump(cylinder));
        }
    }

    /// Returns the initial head position.
    #[must_use]
    pub fn initial_position(&self) -> Cylinder {
        self.stops[0].cylinder()
    }

    /// Returns the position of the head after the last waypoint.
    #[must_use]
    pub fn head(&self) -> Cylinder {
        self.stops
            .last()
            .map_or_else(|| self.initial_position(), |stop| stop.cylinder())
    }

    /// Returns all waypoints in order.
    #[must_use]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Returns the serviced cylinders in service order.
    pub fn serviced(&self) -> impl Iterator<Item = Cylinder> + '_ {
        self.stops
            .iter()
            .filter(|stop| stop.is_service())
            .map(|stop| stop.cylinder())
    }

    /// Returns the number of serviced requests.
    #[must_use]
    pub fn serviced_count(&self) -> usize {
        self.serviced().count()
    }

    /// Returns the service sequence: the initial position, then each serviced cylinder.
    #[must_use]
    pub fn positions(&self) -> Vec<Cylinder> {
        std::iter::once(self.initial_position())
            .chain(self.serviced())
            .collect()
    }

    /// Returns every position the head visits, in order.
    pub fn path(&self) -> impl Iterator<Item = Cylinder> + '_ {
        self.stops.iter().map(|stop| stop.cylinder())
    }

    /// Returns the distance of each move along the path.
    pub fn seek_distances(&self) -> impl Iterator<Item = u64> + '_ {
        self.stops
            .windows(2)
            .map(|pair| u64::from(pair[1].cylinder().abs_diff(pair[0].cylinder())))
    }
}

impl TryFrom<Vec<Stop>> for SeekTrace {
    type Error = TraceShapeError;

    fn try_from(stops: Vec<Stop>) -> Result<Self, Self::Error> {
        if !matches!(stops.first(), Some(Stop::Start(_))) {
            return Err(TraceShapeError::MissingStart);
        }
        if let Some(index) = stops
            .iter()
            .skip(1)
            .position(|stop| matches!(stop, Stop::Start(_)))
        {
            return Err(TraceShapeError::ExtraStart { index: index + 1 });
        }

        Ok(Self { stops })
    }
}

impl From<SeekTrace> for Vec<Stop> {
    fn from(trace: SeekTrace) -> Self {
        trace.stops
    }
}
