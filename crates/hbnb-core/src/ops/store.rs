use crate::engine::ObjectMap;
use crate::model::{Entity, EntityKind};

/// In-memory object table keyed by composite key
///
/// Backs the file storage engine. Not thread-safe (no Arc/RwLock); one
/// façade instance owns it for the lifetime of the process.
#[derive(Debug, Clone, Default)]
pub struct ObjectTable {
    objects: ObjectMap,
}

impl ObjectTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self {
            objects: ObjectMap::new(),
        }
    }

    /// Insert or overwrite the entry for `entity`'s composite key
    pub fn insert(&mut self, entity: Entity) {
        self.objects.insert(entity.key(), entity);
    }

    /// Remove the entry for `key`, returning it if present
    pub fn remove(&mut self, key: &str) -> Option<Entity> {
        self.objects.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&Entity> {
        self.objects.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Copy of the table, or of the entries of one kind
    pub fn snapshot(&self, kind: Option<EntityKind>) -> ObjectMap {
        match kind {
            None => self.objects.clone(),
            Some(kind) => self
                .objects
                .iter()
                .filter(|(_, e)| e.kind() == kind)
                .map(|(k, e)| (k.clone(), e.clone()))
                .collect(),
        }
    }

    /// Overlay `other` onto the table; matching keys are replaced, others kept
    pub fn merge(&mut self, other: ObjectMap) {
        self.objects.extend(other);
    }

    /// Borrow the full table
    pub fn as_map(&self) -> &ObjectMap {
        &self.objects
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
