use nalgebra::Unit;

use crate::geometry::{FloatType, Intersection, Ray, WorldPoint, WorldVector, ZeroTest, in_range};

use super::{MaterialIdx, Shape};

/// Infinite plane through a point.
#[derive(Clone, Debug)]
pub struct Plane {
    pub point: WorldPoint,
    pub normal: Unit<WorldVector>,
    pub material: MaterialIdx,
}

impl Plane {
    /// Normal doesn't need to be normalized.
    pub fn new(point: WorldPoint, normal: WorldVector, material: MaterialIdx) -> Plane {
        Plane {
            point,
            normal: Unit::new_normalize(normal),
            material,
        }
    }
}

impl Shape for Plane {
    fn intersect_with(
        &self,
        ray: &Ray,
        t_min: FloatType,
        t_max: FloatType,
        zero_test: ZeroTest,
    ) -> Option<Intersection> {
        let denominator = ray.direction.dot(&self.normal);
        if zero_test.is_zero(denominator) {
            return None;
        }

        let t = (self.point - ray.origin).dot(&self.normal) / denominator;
        if !in_range(t, t_min, t_max) {
            return None;
        }

        Some(Intersection {
            t,
            position: ray.point_at(t),
            normal: self.normal,
            material: self.material,
        })
    }
}

#[derive(Clone, Debug)]
pub struct Sphere {
    pub center: WorldPoint,
    radius: FloatType,
    radius_squared: FloatType,
    pub material: MaterialIdx,
}

impl Sphere {
    pub fn new(center: WorldPoint, radius: FloatType, material: MaterialIdx) -> Sphere {
        Sphere {
            center,
            radius,
            radius_squared: radius * radius,
            material,
        }
    }

    pub fn radius(&self) -> FloatType {
        self.radius
    }
}

impl Shape for Sphere {
    /// Sphere has no parallel case, `zero_test` is unused.
    fn intersect_with(
        &self,
        ray: &Ray,
        t_min: FloatType,
        t_max: FloatType,
        _zero_test: ZeroTest,
    ) -> Option<Intersection> {
        // Ray direction is unit length, so the quadratic coefficient is 1.
        let oc = ray.origin - self.center;
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.norm_squared() - self.radius_squared;
        let discriminant = b * b - 4.0 * c;

        if discriminant < 0.0 {
            return None;
        }

        let sqrt_disc = discriminant.sqrt();
        let t1 = (-b + sqrt_disc) / 2.0;
        let t2 = (-b - sqrt_disc) / 2.0;
        let t = match (in_range(t1, t_min, t_max), in_range(t2, t_min, t_max)) {
            (true, true) => t1.min(t2),
            (true, false) => t1,
            (false, true) => t2,
            (false, false) => return None,
        };

        let position = ray.point_at(t);
        let normal = Unit::new_normalize(position - self.center);

        Some(Intersection {
            t,
            position,
            normal,
            material: self.material,
        })
    }
}
