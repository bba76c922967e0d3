use crate::{error::Error, model::RecordModel, schema::Schema};
use dashmap::DashMap;
use std::{
    any::TypeId,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use tracing::{debug, trace};

///
/// SchemaCache
///
/// Resolved schemas keyed by record type. Entries are immutable and never
/// evicted; their number is bounded by the record types a program declares.
///
/// Resolution runs outside any shard guard, so racing callers may resolve
/// the same type twice. The last insert wins and both results are equal.
///

#[derive(Debug, Default)]
pub struct SchemaCache {
    entries: DashMap<TypeId, Arc<Schema>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl SchemaCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached schema for `model`, resolving it on a miss.
    pub fn get_or_resolve(&self, model: &'static RecordModel) -> Result<Arc<Schema>, Error> {
        let type_id = model.type_id();

        if let Some(schema) = self.entries.get(&type_id) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(record = model.path, "schema cache hit");

            return Ok(Arc::clone(schema.value()));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let schema = Arc::new(Schema::resolve(model)?);
        debug!(
            record = model.path,
            fields = schema.len(),
            "resolved schema"
        );

        self.entries.insert(type_id, Arc::clone(&schema));

        Ok(schema)
    }

    /// Cached schema for `type_id`, without resolving.
    #[must_use]
    pub fn get(&self, type_id: TypeId) -> Option<Arc<Schema>> {
        self.entries.get(&type_id).map(|e| Arc::clone(e.value()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

///
/// CacheStats
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
}
