//! This module contains a struct, [`Coord`], that models a point in 3D space and supports the small
//! amount of vector math that colors need: addition, subtraction, scaling, interpolation and
//! distance. The perceptual color spaces convert to and from it so that the same math serves all of
//! them.

use std::ops::{Add, Mul, Sub};

use num::{Num, NumCast};

/// Represents a scalar value that can be easily converted, described using the common numeric traits
/// in [`num`]. Anything that falls under this category can be multiplied by a [`Coord`] to scale
/// it. This has no added functionality: it's just for convenience.
pub trait Scalar: NumCast + Num {}

impl<T: NumCast + Num> Scalar for T {}

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`, which no method of
/// `Coord` treats differently. A color that converts to and from a `Coord` matches its components
/// with these axes in the order of the letters in its name: [`CIELABColor`] puts `l` on the x-axis,
/// `a` on the y-axis and `b` on the z-axis.
///
/// [`CIELABColor`]: crate::colors::CIELABColor
///
/// # Example
/// ```
/// # use swatch::coord::Coord;
/// let point_1 = Coord{x: 1., y: 8., z: 7.};
/// let point_2 = Coord{x: 7., y: 2., z: 3.};
/// let sum = point_1 + point_2;
/// assert_eq!(sum, Coord{x: 8., y: 10., z: 10.});
/// let diff = point_1 - point_2;
/// assert_eq!(diff, Coord{x: -6., y: 6., z: 4.});
/// // scaling only works with the scalar on the right
/// let prod = point_1 * 2u8;
/// assert_eq!(prod, Coord{x: 2., y: 16., z: 14.});
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Add for Coord {
    type Output = Coord;
    fn add(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Coord {
    type Output = Coord;
    fn sub(self, rhs: Coord) -> Coord {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

// scalar multiplication: (a, b, c) * s = (sa, sb, sc). Not commutative, but it'll do.
impl<U: Scalar> Mul<U> for Coord {
    type Output = Coord;
    fn mul(self, rhs: U) -> Coord {
        let r: f64 = num::cast(rhs).unwrap_or(std::f64::NAN);
        Coord {
            x: self.x * r,
            y: self.y * r,
            z: self.z * r,
        }
    }
}

impl From<[f64; 3]> for Coord {
    fn from(xyz: [f64; 3]) -> Coord {
        Coord {
            x: xyz[0],
            y: xyz[1],
            z: xyz[2],
        }
    }
}

impl Coord {
    /// Linear interpolation: `t = 0` gives `self`, `t = 1` gives `other`, and values in between
    /// move along the line from one to the other. `t` is not clamped.
    /// # Example
    /// ```
    /// # use swatch::coord::Coord;
    /// let start = Coord{x: 0., y: 10., z: -4.};
    /// let end = Coord{x: 1., y: 20., z: 4.};
    /// let quarter = start.lerp(&end, 0.25);
    /// assert!((quarter.x - 0.25).abs() <= 1e-10);
    /// assert!((quarter.y - 12.5).abs() <= 1e-10);
    /// assert!((quarter.z + 2.).abs() <= 1e-10);
    /// ```
    pub fn lerp(&self, other: &Coord, t: f64) -> Coord {
        *self + (*other - *self) * t
    }

    /// The midpoint between two 3D points.
    pub fn midpoint(&self, other: &Coord) -> Coord {
        self.lerp(other, 0.5)
    }

    /// The Euclidean distance between two 3D points, defined as the square root of the sum of
    /// squares of differences in each axis. In CIELAB this is exactly the CIE76 color difference;
    /// in most other spaces it is a poor stand-in for how different two colors look.
    /// # Example
    /// ```
    /// # use swatch::coord::Coord;
    /// let point1 = Coord{x: 0., y: 0., z: -1.};
    /// let point2 = Coord{x: 2., y: 3., z: 5.};
    /// let dist = point1.euclidean_distance(&point2);
    /// assert!((dist - 7.).abs() <= 1e-10);
    /// ```
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        let a = Coord{x: 53.2, y: 80.1, z: 67.2};
        let b = Coord{x: 32.3, y: 79.2, z: -107.9};
        assert_eq!(a.lerp(&b, 0.), a);
        let end = a.lerp(&b, 1.);
        assert!(end.euclidean_distance(&b) <= 1e-10);
        let mid = a.midpoint(&b);
        assert!((mid.x - 42.75).abs() <= 1e-10);
        assert!((mid.z + 20.35).abs() <= 1e-10);
    }

    #[test]
    fn test_scaling_by_integers() {
        let point = Coord{x: 1.5, y: -2., z: 0.};
        assert_eq!(point * 2i32, Coord{x: 3., y: -4., z: 0.});
        assert_eq!(point * 0u8, Coord{x: 0., y: 0., z: 0.});
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Coord::from([1., 2., 3.]), Coord{x: 1., y: 2., z: 3.});
    }
}
