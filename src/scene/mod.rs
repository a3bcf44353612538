mod material;
pub mod primitives;
mod triangle;

use bon::Builder;

use crate::geometry::{FloatType, Intersection, Ray, ZeroTest};

pub use material::{MaterialIdx, Materials};
pub use primitives::{Plane, Sphere};
pub use triangle::Triangle;

/// Anything a ray can hit.
pub trait Shape: Send + Sync {
    /// Intersects the ray with the shape, reporting only hits with `t` in `[t_min, t_max]`.
    /// `zero_test` decides when the ray counts as parallel to a flat surface.
    fn intersect_with(
        &self,
        ray: &Ray,
        t_min: FloatType,
        t_max: FloatType,
        zero_test: ZeroTest,
    ) -> Option<Intersection>;

    fn intersect(&self, ray: &Ray, t_min: FloatType, t_max: FloatType) -> Option<Intersection> {
        self.intersect_with(ray, t_min, t_max, ZeroTest::Exact)
    }
}

#[derive(Copy, Clone, Debug, Default, Builder)]
pub struct SceneSettings {
    #[builder(default)]
    pub zero_test: ZeroTest,
}

/// Owned collection of shapes and the materials they reference.
pub struct Scene<M> {
    pub settings: SceneSettings,
    materials: Materials<M>,
    shapes: Vec<Box<dyn Shape>>,
}

impl<M> Scene<M> {
    pub fn new(settings: SceneSettings) -> Self {
        Scene {
            settings,
            materials: Materials::new(),
            shapes: Vec::new(),
        }
    }

    pub fn add_material(&mut self, material: M) -> MaterialIdx {
        self.materials.push(material)
    }

    pub fn material(&self, index: MaterialIdx) -> &M {
        &self.materials[index]
    }

    pub fn materials(&self) -> &Materials<M> {
        &self.materials
    }

    pub fn add_shape(&mut self, shape: impl Shape + 'static) {
        self.shapes.push(Box::new(shape));
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Returns the closest hit over all shapes with `t` in `[t_min, t_max]`.
    pub fn intersect(&self, ray: &Ray, t_min: FloatType, t_max: FloatType) -> Option<Intersection> {
        let mut best: Option<Intersection> = None;
        let mut t_max = t_max;

        for shape in &self.shapes {
            if let Some(hit) = shape.intersect_with(ray, t_min, t_max, self.settings.zero_test) {
                t_max = hit.t;
                best = Some(hit);
            }
        }

        best
    }
}

impl<M> Default for Scene<M> {
    fn default() -> Self {
        Self::new(SceneSettings::default())
    }
}

impl<M, S: Shape + 'static> Extend<S> for Scene<M> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.shapes
            .extend(iter.into_iter().map(|s| Box::new(s) as Box<dyn Shape>));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geometry::{WorldPoint, WorldVector};
    use assert2::{assert, let_assert};

    fn two_spheres() -> Scene<&'static str> {
        let mut scene = Scene::default();
        let near = scene.add_material("near");
        let far = scene.add_material("far");

        // Far one is added first so that the closest hit has to replace it
        scene.add_shape(Sphere::new(WorldPoint::new(0.0, 0.0, -10.0), 1.0, far));
        scene.add_shape(Sphere::new(WorldPoint::new(0.0, 0.0, -5.0), 1.0, near));
        scene
    }

    fn down_z() -> Ray {
        Ray::new(WorldPoint::origin(), WorldVector::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn closest_hit_wins() {
        let scene = two_spheres();
        let_assert!(Some(hit) = scene.intersect(&down_z(), 0.0, FloatType::INFINITY));
        assert!((hit.t - 4.0).abs() < 1e-12);
        assert!(*scene.material(hit.material) == "near");
    }

    #[test]
    fn range_limits_scene_hits() {
        let scene = two_spheres();
        let_assert!(Some(hit) = scene.intersect(&down_z(), 6.5, FloatType::INFINITY));
        assert!((hit.t - 9.0).abs() < 1e-12);
        assert!(*scene.material(hit.material) == "far");

        assert!(scene.intersect(&down_z(), 0.0, 3.0).is_none());
    }

    #[test]
    fn empty_scene_misses() {
        let scene = Scene::<()>::default();
        assert!(scene.intersect(&down_z(), 0.0, FloatType::INFINITY).is_none());
    }

    #[test]
    fn settings_builder() {
        let settings = SceneSettings::builder()
            .zero_test(ZeroTest::Epsilon(1e-9))
            .build();
        assert!(settings.zero_test == ZeroTest::Epsilon(1e-9));
        assert!(SceneSettings::builder().build().zero_test == ZeroTest::Exact);
    }

    #[test]
    fn extend_with_triangles() {
        let mut scene = Scene::default();
        let material = scene.add_material(());
        scene.extend((0..3).map(|i| {
            let z = -(i as FloatType) - 1.0;
            Triangle::builder()
                .vertices([
                    WorldPoint::new(-1.0, -1.0, z),
                    WorldPoint::new(1.0, -1.0, z),
                    WorldPoint::new(0.0, 1.0, z),
                ])
                .material(material)
                .build()
        }));

        assert!(scene.shape_count() == 3);
        let_assert!(Some(hit) = scene.intersect(&down_z(), 0.0, FloatType::INFINITY));
        assert!(hit.t == 1.0);
    }
}
