use hbnb_core::{
    BackendKind, Entity, EntityKind, ObjectMap, ObjectTable, StorageEngine, StorageResult,
};

/// Minimal engine over an [`ObjectTable`] that counts `save` calls
#[derive(Default)]
pub struct MemoryEngine {
    pub table: ObjectTable,
    pub saves: usize,
}

#[allow(dead_code)]
impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageEngine for MemoryEngine {
    fn backend(&self) -> BackendKind {
        BackendKind::File
    }

    fn all(&self, kind: Option<EntityKind>) -> StorageResult<ObjectMap> {
        Ok(self.table.snapshot(kind))
    }

    fn new(&mut self, obj: Entity) -> StorageResult<()> {
        self.table.insert(obj);
        Ok(())
    }

    fn save(&mut self) -> StorageResult<()> {
        self.saves += 1;
        Ok(())
    }

    fn delete(&mut self, obj: &Entity) -> StorageResult<()> {
        self.table.remove(&obj.key());
        Ok(())
    }

    fn reload(&mut self) -> StorageResult<()> {
        Ok(())
    }

    fn close(&mut self) -> StorageResult<()> {
        Ok(())
    }
}
