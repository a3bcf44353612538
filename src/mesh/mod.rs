mod loading;

use std::borrow::Cow;

use crate::{
    geometry::{WorldPoint, WorldVector},
    scene::{MaterialIdx, Triangle},
};

pub use loading::MeshError;

/// How triangles emitted from a mesh get their normals.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Shading {
    /// Single geometric normal per triangle.
    #[default]
    Flat,
    /// Normals interpolated from per-vertex normals.
    /// Uses normals of the mesh, computing them if the mesh has none.
    Smooth,
}

/// Indexed triangle mesh.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    vertices: Vec<WorldPoint>,
    faces: Vec<[usize; 3]>,
    /// Either one normal per vertex, or none at all.
    normals: Option<Vec<WorldVector>>,
}

impl Mesh {
    /// Creates a mesh, checking that all face indices point to existing vertices
    /// and that there is exactly one normal per vertex if normals are given.
    pub fn new(
        vertices: Vec<WorldPoint>,
        faces: Vec<[usize; 3]>,
        normals: Option<Vec<WorldVector>>,
    ) -> Result<Mesh, MeshError> {
        for (face_index, face) in faces.iter().enumerate() {
            if let Some(&index) = face.iter().find(|&&i| i >= vertices.len()) {
                return Err(MeshError::InvalidFaceIndex {
                    face: face_index,
                    index,
                    vertex_count: vertices.len(),
                });
            }
        }
        if let Some(normals) = &normals {
            if normals.len() != vertices.len() {
                return Err(MeshError::NormalCountMismatch {
                    normal_count: normals.len(),
                    vertex_count: vertices.len(),
                });
            }
        }

        Ok(Mesh {
            vertices,
            faces,
            normals,
        })
    }

    pub fn vertices(&self) -> &[WorldPoint] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    pub fn normals(&self) -> Option<&[WorldVector]> {
        self.normals.as_deref()
    }

    /// Replaces vertex normals with normalized sums of unnormalized normals of
    /// incident faces, so that larger faces have proportionally more weight.
    pub fn compute_vertex_normals(&mut self) {
        self.normals = Some(self.area_weighted_normals());
    }

    fn area_weighted_normals(&self) -> Vec<WorldVector> {
        let mut normals = vec![WorldVector::zeros(); self.vertices.len()];

        for &[a, b, c] in &self.faces {
            let (pa, pb, pc) = (&self.vertices[a], &self.vertices[b], &self.vertices[c]);
            let face_normal = (pb - pa).cross(&(pc - pa));
            normals[a] += face_normal;
            normals[b] += face_normal;
            normals[c] += face_normal;
        }

        for n in &mut normals {
            // Vertices without any incident area stay zero
            *n = n.try_normalize(0.0).unwrap_or_else(WorldVector::zeros);
        }

        normals
    }

    /// Emits one triangle per face, in face order.
    pub fn triangles(
        &self,
        material: MaterialIdx,
        shading: Shading,
    ) -> impl Iterator<Item = Triangle> + '_ {
        let normals: Option<Cow<'_, [WorldVector]>> = match shading {
            Shading::Flat => None,
            Shading::Smooth => Some(match &self.normals {
                Some(n) => Cow::Borrowed(n.as_slice()),
                None => Cow::Owned(self.area_weighted_normals()),
            }),
        };

        self.faces.iter().map(move |&[a, b, c]| {
            Triangle::builder()
                .vertices([self.vertices[a], self.vertices[b], self.vertices[c]])
                .maybe_vertex_normals(normals.as_ref().map(|n| [n[a], n[b], n[c]]))
                .material(material)
                .build()
        })
    }
}
