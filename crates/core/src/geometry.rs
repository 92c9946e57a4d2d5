use std::fmt;

use thiserror::Error;

/// A cylinder (track) position on the simulated disk.
///
/// Distances between cylinders fit in `u32`, so head movement summed as
/// `u64` cannot overflow for any realistic request count.
pub type Cylinder = i32;

/// The inclusive cylinder range `[min_cylinder, max_cylinder]` of a disk.
///
/// Construction guarantees `min_cylinder <= max_cylinder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Bounds", into = "Bounds")
)]
pub struct DiskGeometry {
    min_cylinder: Cylinder,
    max_cylinder: Cylinder,
}

/// Errors that can occur when constructing a [`DiskGeometry`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    #[error("min cylinder {min} is greater than max cylinder {max}")]
    Inverted { min: Cylinder, max: Cylinder },
}

impl DiskGeometry {
    /// Creates a geometry spanning `min_cylinder..=max_cylinder`.
    ///
    /// # Errors
    ///
    /// Returns an error if `min_cylinder > max_cylinder`.
    pub fn new(min_cylinder: Cylinder, max_cylinder: Cylinder) -> Result<Self, GeometryError> {
        if min_cylinder > max_cylinder {
            return Err(GeometryError::Inverted {
                min: min_cylinder,
                max: max_cylinder,
            });
        }

        Ok(Self {
            min_cylinder,
            max_cylinder,
        })
    }

    /// Creates a geometry of `count` cylinders numbered from zero.
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is not positive.
    pub fn with_cylinders(count: Cylinder) -> Result<Self, GeometryError> {
        Self::new(0, count.saturating_sub(1))
    }

    /// Returns the lowest cylinder.
    #[must_use]
    pub fn min_cylinder(&self) -> Cylinder {
        self.min_cylinder
    }

    /// Returns the highest cylinder.
    #[must_use]
    pub fn max_cylinder(&self) -> Cylinder {
        self.max_cylinder
    }

    /// Returns `true` if `cylinder` lies within the geometry bounds.
    #[must_use]
    pub fn contains(&self, cylinder: Cylinder) -> bool {
        (self.min_cylinder..=self.max_cylinder).contains(&cylinder)
    }

    /// Returns the extreme cylinder reached by travelling in `direction`.
    #[must_use]
    pub fn extreme(&self, direction: Direction) -> Cylinder {
        match direction {
            Direction::Up => self.max_cylinder,
            Direction::Down => self.min_cylinder,
        }
    }

    /// Returns the distance between the two extremes.
    #[must_use]
    pub fn span(&self) -> u64 {
        u64::from(self.max_cylinder.abs_diff(self.min_cylinder))
    }
}

impl Default for DiskGeometry {
    /// The classic 200-cylinder teaching disk, `[0, 199]`.
    fn default() -> Self {
        Self {
            min_cylinder: 0,
            max_cylinder: 199,
        }
    }
}

impl fmt::Display for DiskGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min_cylinder, self.max_cylinder)
    }
}

/// Serialized form of [`DiskGeometry`], validated on the way back in.
#[cfg(feature = "serde-derive")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Bounds {
    min_cylinder: Cylinder,
    max_cylinder: Cylinder,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<Bounds> for DiskGeometry {
    type Error = GeometryError;

    fn try_from(bounds: Bounds) -> Result<Self, Self::Error> {
        Self::new(bounds.min_cylinder, bounds.max_cylinder)
    }
}

#[cfg(feature = "serde-derive")]
impl From<DiskGeometry> for Bounds {
    fn from(geometry: DiskGeometry) -> Self {
        Self {
            min_cylinder: geometry.min_cylinder,
            max_cylinder: geometry.max_cylinder,
        }
    }
}

/// Travel direction of the disk head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum Direction {
    /// Toward higher cylinder numbers.
    #[default]
    Up,

    /// Toward lower cylinder numbers.
    Down,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Returns `true` if `cylinder` is at or beyond `head` when travelling this way.
    #[must_use]
    pub fn is_ahead(self, head: Cylinder, cylinder: Cylinder) -> bool {
        match self {
            Self::Up => cylinder >= head,
            Self::Down => cylinder <= head,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("UP"),
            Self::Down => f.write_str("DOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_inverted_bounds() {
        assert_eq!(
            DiskGeometry::new(10, 5),
            Err(GeometryError::Inverted { min: 10, max: 5 })
        );
    }

    #[test]
    fn single_cylinder_disk_is_valid() {
        let geometry = DiskGeometry::new(7, 7).unwrap();

        assert!(geometry.contains(7));
        assert!(!geometry.contains(8));
        assert_eq!(geometry.span(), 0);
    }

    #[test]
    fn with_cylinders_counts_from_zero() {
        let geometry = DiskGeometry::with_cylinders(200).unwrap();

        assert_eq!(geometry, DiskGeometry::default());
        assert!(DiskGeometry::with_cylinders(0).is_err());
    }

    #[test]
    fn extremes_follow_direction() {
        let geometry = DiskGeometry::new(-20, 30).unwrap();

        assert_eq!(geometry.extreme(Direction::Up), 30);
        assert_eq!(geometry.extreme(Direction::Down), -20);
        assert_eq!(geometry.span(), 50);
    }

    #[test]
    fn full_range_span_fits() {
        let geometry = DiskGeometry::new(Cylinder::MIN, Cylinder::MAX).unwrap();

        assert_eq!(geometry.span(), u64::from(u32::MAX));
    }

    #[test]
    fn ahead_includes_the_head_cylinder() {
        assert!(Direction::Up.is_ahead(50, 50));
        assert!(Direction::Down.is_ahead(50, 50));
        assert!(Direction::Up.is_ahead(50, 51));
        assert!(!Direction::Down.is_ahead(50, 51));
        assert_eq!(Direction::Up.reversed(), Direction::Down);
    }

    #[cfg(feature = "serde-derive")]
    #[test]
    fn deserializing_checks_bounds() {
        let geometry: DiskGeometry =
            serde_json::from_str(r#"{"min_cylinder":0,"max_cylinder":99}"#).unwrap();
        assert_eq!(geometry.max_cylinder(), 99);

        let inverted = serde_json::from_str::<DiskGeometry>(r#"{"min_cylinder":9,"max_cylinder":1}"#);
        assert!(inverted.is_err());

        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), r#""DOWN""#);
    }
}
