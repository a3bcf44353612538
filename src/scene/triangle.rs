use bon::bon;
use nalgebra::{Matrix3, Unit};

use crate::geometry::{
    BarycentricCoordinates, FloatType, Intersection, Ray, WorldPoint, WorldVector, ZeroTest,
    in_range,
};

use super::{MaterialIdx, Shape};

/// Single triangle, optionally with per-vertex normals for smooth shading.
#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: [WorldPoint; 3],
    vertex_normals: Option<[WorldVector; 3]>,
    flat_normal: Unit<WorldVector>,
    material: MaterialIdx,
}

#[bon]
impl Triangle {
    /// Vertex normals are either all three or none.
    /// Degenerate triangles are accepted, they have a NaN flat normal and never get hit.
    #[builder]
    pub fn new(
        vertices: [WorldPoint; 3],
        vertex_normals: Option<[WorldVector; 3]>,
        material: MaterialIdx,
    ) -> Self {
        let [p0, p1, p2] = &vertices;
        let flat_normal = Unit::new_normalize((p2 - p0).cross(&(p2 - p1)));

        Triangle {
            vertices,
            vertex_normals,
            flat_normal,
            material,
        }
    }
}

impl Triangle {
    pub fn vertices(&self) -> &[WorldPoint; 3] {
        &self.vertices
    }

    pub fn vertex_normals(&self) -> Option<&[WorldVector; 3]> {
        self.vertex_normals.as_ref()
    }

    /// Geometric normal, `(P2 - P0) x (P2 - P1)` normalized.
    pub fn flat_normal(&self) -> Unit<WorldVector> {
        self.flat_normal
    }

    pub fn material(&self) -> MaterialIdx {
        self.material
    }

    /// Solves `t * d + alpha * (P2 - P0) + beta * (P2 - P1) = P2 - O` using Cramer's rule.
    /// The point `O + t * d` is then `alpha * P0 + beta * P1 + gamma * P2`.
    ///
    /// Returns None if the system is singular according to `zero_test` (ray parallel
    /// to the triangle plane or degenerate triangle).
    /// With `ZeroTest::Epsilon` the tolerance applies to the cosine between the ray
    /// direction and the triangle normal, independent of the triangle size.
    /// Doesn't check the range of t nor whether the point is inside.
    pub fn barycentric(
        &self,
        ray: &Ray,
        zero_test: ZeroTest,
    ) -> Option<(FloatType, BarycentricCoordinates)> {
        let [p0, p1, p2] = &self.vertices;
        let d = ray.direction.into_inner();
        let e0 = p2 - p0;
        let e1 = p2 - p1;
        let rhs = p2 - ray.origin;

        let det = Matrix3::from_columns(&[d, e0, e1]).determinant();
        let singular = match zero_test {
            ZeroTest::Exact => det == 0.0,
            ZeroTest::Epsilon(_) => {
                // det == d . (e0 x e1)
                let double_area = e0.cross(&e1).norm();
                double_area == 0.0 || zero_test.is_zero(det / double_area)
            }
        };
        if singular {
            return None;
        }

        let t = Matrix3::from_columns(&[rhs, e0, e1]).determinant() / det;
        let alpha = Matrix3::from_columns(&[d, rhs, e1]).determinant() / det;
        let beta = Matrix3::from_columns(&[d, e0, rhs]).determinant() / det;

        Some((t, BarycentricCoordinates { alpha, beta }))
    }

    fn normal_at(&self, uv: &BarycentricCoordinates) -> Unit<WorldVector> {
        match &self.vertex_normals {
            Some([n0, n1, n2]) => Unit::new_normalize(uv.interpolate(n0, n1, n2)),
            None => self.flat_normal,
        }
    }
}

impl Shape for Triangle {
    fn intersect_with(
        &self,
        ray: &Ray,
        t_min: FloatType,
        t_max: FloatType,
        zero_test: ZeroTest,
    ) -> Option<Intersection> {
        let (t, uv) = self.barycentric(ray, zero_test)?;

        if !in_range(t, t_min, t_max) {
            return None;
        }
        if t < 0.0 || !uv.is_inside() {
            return None;
        }

        Some(Intersection {
            t,
            position: ray.point_at(t),
            normal: self.normal_at(&uv),
            material: self.material,
        })
    }
}
