use diskseek_core::{Cylinder, Direction, DiskGeometry, GeometryError};

/// Disk geometry and starting head state for a scheduling run.
///
/// A config is passed explicitly to every run; nothing is held between runs.
/// The initial position is not checked here: every trace builder validates
/// it against the geometry and reports
/// [`InvalidRequestError::InitialPosition`] before building.
///
/// [`InvalidRequestError::InitialPosition`]: diskseek_core::InvalidRequestError::InitialPosition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    geometry: DiskGeometry,
    initial_position: Cylinder,
    #[cfg_attr(feature = "serde-derive", serde(default))]
    direction: Direction,
}

impl Default for Config {
    /// A `[0, 199]` disk with the head at cylinder 50, heading up.
    fn default() -> Self {
        Self::new(DiskGeometry::default(), 50, Direction::Up)
    }
}

impl Config {
    /// Creates a new config.
    #[must_use]
    pub fn new(geometry: DiskGeometry, initial_position: Cylinder, direction: Direction) -> Self {
        Self {
            geometry,
            initial_position,
            direction,
        }
    }

    /// Creates a config for a disk of `cylinders` cylinders numbered from zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `cylinders` is not positive.
    pub fn with_cylinders(
        cylinders: Cylinder,
        initial_position: Cylinder,
        direction: Direction,
    ) -> Result<Self, GeometryError> {
        let geometry = DiskGeometry::with_cylinders(cylinders)?;
        Ok(Self::new(geometry, initial_position, direction))
    }

    /// Returns the same config heading in `direction`.
    #[must_use]
    pub fn heading(self, direction: Direction) -> Self {
        Self { direction, ..self }
    }

    /// Returns the disk geometry.
    #[must_use]
    pub fn geometry(&self) -> &DiskGeometry {
        &self.geometry
    }

    /// Returns the initial head position.
    #[must_use]
    pub fn initial_position(&self) -> Cylinder {
        self.initial_position
    }

    /// Returns the initial travel direction used by SCAN and C-SCAN.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }
}
