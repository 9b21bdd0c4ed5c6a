//! Insertion-ordered storage for scene objects.
//!
//! Insertion order doubles as z-order for the rendering layer, so objects
//! live in a `Vec` and lookups are linear scans — scenes are tens of
//! objects, not thousands. Ids come from a monotonically increasing counter
//! that survives undo/redo (snapshots never capture it), so an id is never
//! reused within a session.

use serde::{Deserialize, Serialize};

use crate::model::{ObjectId, ObjectType, SceneObject};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectStore {
    objects: Vec<SceneObject>,
    next_id: ObjectId,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocates a fresh object id.
    pub fn generate_id(&mut self) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Appends an object at the top of the z-order.
    pub fn insert(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Removes an object, preserving the order of the rest.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        Some(self.objects.remove(index))
    }

    /// Replaces an object in place, keeping its z-order position.
    pub fn replace(&mut self, object: SceneObject) -> bool {
        match self.objects.iter_mut().find(|o| o.id == object.id) {
            Some(slot) => {
                *slot = object;
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    /// Objects in z-order, bottom first.
    pub fn as_slice(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// How many objects of the given type exist (used for auto-labels).
    pub fn count_of_type(&self, object_type: ObjectType) -> usize {
        self.objects
            .iter()
            .filter(|o| o.object_type() == object_type)
            .count()
    }

    /// Replaces the full object list (undo/redo restore). The id counter is
    /// deliberately left alone so restored scenes keep allocating fresh ids.
    pub fn restore(&mut self, objects: Vec<SceneObject>) {
        self.objects = objects;
    }

    /// A deep copy of the object list, for history snapshots.
    pub fn snapshot(&self) -> Vec<SceneObject> {
        self.objects.clone()
    }
}
