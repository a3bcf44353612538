use index_vec::IndexVec;

index_vec::define_index_type! {
    /// Handle of a material stored in a scene.
    /// Shapes and intersections carry this handle, never the material itself.
    pub struct MaterialIdx = u32;
}

/// Append-only table of materials, owned by the scene.
#[derive(Clone, Debug)]
pub struct Materials<M> {
    items: IndexVec<MaterialIdx, M>,
}

impl<M> Materials<M> {
    pub fn new() -> Self {
        Materials {
            items: IndexVec::new(),
        }
    }

    pub fn push(&mut self, material: M) -> MaterialIdx {
        self.items.push(material)
    }

    pub fn get(&self, index: MaterialIdx) -> Option<&M> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<M> Default for Materials<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> std::ops::Index<MaterialIdx> for Materials<M> {
    type Output = M;

    fn index(&self, index: MaterialIdx) -> &M {
        &self.items[index]
    }
}
