//! Scene contents and selection state.

use crate::mesh::Mesh;

/// A member of the scene. Closed set: meshes are the only kind today, but
/// the variant keeps room for non-mesh members without leaking their
/// behavior into mesh-only logic.
pub enum SceneObject {
    Mesh(Mesh),
}

impl SceneObject {
    pub fn as_mesh(&self) -> Option<&Mesh> {
        match self {
            SceneObject::Mesh(mesh) => Some(mesh),
        }
    }

    pub fn as_mesh_mut(&mut self) -> Option<&mut Mesh> {
        match self {
            SceneObject::Mesh(mesh) => Some(mesh),
        }
    }
}

/// Ordered scene object list plus the selected-object reference.
///
/// Selection is a plain index into the list: it never extends an object's
/// lifetime, and removal clears or shifts it as needed.
#[derive(Default)]
pub struct SceneState {
    objects: Vec<SceneObject>,
    selected: Option<usize>,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Meshes with their scene indices, in scene order.
    pub fn meshes(&self) -> impl Iterator<Item = (usize, &Mesh)> {
        self.objects
            .iter()
            .enumerate()
            .filter_map(|(index, object)| object.as_mesh().map(|mesh| (index, mesh)))
    }

    pub fn add_object(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub fn remove_object(&mut self, index: usize) -> SceneObject {
        let removed = self.objects.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        removed
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.selected = None;
    }

    /// Change the selection. `None` clears it.
    pub fn select(&mut self, index: Option<usize>) {
        let index = index.filter(|i| *i < self.objects.len());
        if index != self.selected {
            tracing::debug!(from = ?self.selected, to = ?index, "selection changed");
        }
        self.selected = index;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_mesh(&self) -> Option<&Mesh> {
        self.objects.get(self.selected?)?.as_mesh()
    }

    pub fn selected_mesh_mut(&mut self) -> Option<&mut Mesh> {
        let index = self.selected?;
        self.objects.get_mut(index)?.as_mesh_mut()
    }
}
