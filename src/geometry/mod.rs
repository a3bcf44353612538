mod barycentric;

use nalgebra::{Point3, Unit, Vector3};

use crate::scene::MaterialIdx;

pub use barycentric::BarycentricCoordinates;

pub type FloatType = f64;
pub type WorldPoint = Point3<FloatType>;
pub type WorldVector = Vector3<FloatType>;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Normalized direction of the ray
    pub direction: Unit<WorldVector>,
}

impl Ray {
    /// Creates a ray, normalizing the direction.
    /// Zero length direction produces NaN components.
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Ray {
            origin,
            direction: Unit::new_normalize(direction),
        }
    }

    pub fn point_at(&self, t: FloatType) -> WorldPoint {
        self.origin + self.direction.as_ref() * t
    }
}

/// Result of a successful ray-shape query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit, always within the queried range
    pub t: FloatType,
    /// Equals `ray.point_at(t)`
    pub position: WorldPoint,
    /// Normal as defined by the primitive, not flipped toward the ray
    pub normal: Unit<WorldVector>,
    pub material: MaterialIdx,
}

/// Policy for deciding that a denominator (or determinant) is zero
/// and the ray is therefore parallel to the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ZeroTest {
    /// Only exact `0.0` counts as zero.
    #[default]
    Exact,
    /// Anything with absolute value up to the given tolerance counts as zero.
    Epsilon(FloatType),
}

impl ZeroTest {
    pub fn is_zero(self, value: FloatType) -> bool {
        match self {
            ZeroTest::Exact => value == 0.0,
            ZeroTest::Epsilon(eps) => value.abs() <= eps,
        }
    }
}

/// Checks that t lies in the inclusive range [t_min, t_max].
pub(crate) fn in_range(t: FloatType, t_min: FloatType, t_max: FloatType) -> bool {
    t >= t_min && t <= t_max
}
