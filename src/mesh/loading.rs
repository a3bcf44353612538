use std::{fs, path::Path};

use indexmap::IndexMap;
use thiserror::Error;
use wavefront_obj::obj::{ObjSet, Primitive};

use crate::geometry::{WorldPoint, WorldVector};

use super::Mesh;

#[derive(Debug, Error)]
pub enum MeshError {
    #[error("Failed to read file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse file: {0}")]
    Parse(#[from] wavefront_obj::ParseError),

    #[error("Face {face} references vertex {index}, but there are only {vertex_count} vertices")]
    InvalidFaceIndex {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("Face {face} references normal {index}, but there are only {normal_count} normals")]
    InvalidNormalIndex {
        face: usize,
        index: usize,
        normal_count: usize,
    },

    #[error("Mesh has {normal_count} normals for {vertex_count} vertices")]
    NormalCountMismatch {
        normal_count: usize,
        vertex_count: usize,
    },
}

/// Key of a deduplicated mesh vertex: object index, position index, normal index.
type VertexKey = (usize, usize, Option<usize>);

impl Mesh {
    pub fn load_obj(p: impl AsRef<Path>) -> Result<Mesh, MeshError> {
        let content = fs::read_to_string(p.as_ref())?;
        let mesh = Self::from_obj_str(&content)?;
        log::debug!(
            "Loaded {}: {} vertices, {} triangles",
            p.as_ref().display(),
            mesh.vertices.len(),
            mesh.faces.len()
        );
        Ok(mesh)
    }

    pub fn from_obj_str(content: &str) -> Result<Mesh, MeshError> {
        let parsed = wavefront_obj::obj::parse(content.to_owned())?;
        Self::from_obj(parsed)
    }

    /// Merges all objects of the set into a single mesh.
    /// Only triangles are used, points and lines are skipped.
    pub fn from_obj(obj: ObjSet) -> Result<Mesh, MeshError> {
        let mut faces = Vec::new();
        let mut vertices: IndexMap<VertexKey, (WorldPoint, Option<WorldVector>)> = IndexMap::new();
        let mut skipped = 0usize;

        for (object_index, o) in obj.objects.iter().enumerate() {
            for geometry in &o.geometry {
                for shape in &geometry.shapes {
                    let Primitive::Triangle(a, b, c) = shape.primitive else {
                        skipped += 1;
                        continue;
                    };

                    let face = faces.len();
                    let mut handle_vertex = |(v, _vt, vn): (usize, Option<usize>, Option<usize>)| {
                        let vertex = o.vertices.get(v).ok_or_else(|| MeshError::InvalidFaceIndex {
                            face,
                            index: v,
                            vertex_count: o.vertices.len(),
                        })?;
                        let normal = vn
                            .map(|i| {
                                o.normals.get(i).ok_or_else(|| MeshError::InvalidNormalIndex {
                                    face,
                                    index: i,
                                    normal_count: o.normals.len(),
                                })
                            })
                            .transpose()?;

                        let entry = vertices.entry((object_index, v, vn));
                        let index = entry.index();
                        entry.or_insert_with(|| {
                            (
                                WorldPoint::new(vertex.x, vertex.y, vertex.z),
                                normal.map(|n| WorldVector::new(n.x, n.y, n.z).normalize()),
                            )
                        });
                        Ok::<_, MeshError>(index)
                    };

                    faces.push([handle_vertex(a)?, handle_vertex(b)?, handle_vertex(c)?]);
                }
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {skipped} non-triangle primitives");
        }

        let (positions, normals): (Vec<_>, Vec<_>) = vertices.into_values().unzip();
        // Normals are all or nothing
        let normals: Option<Vec<WorldVector>> = normals.into_iter().collect();

        Mesh::new(positions, faces, normals)
    }
}
