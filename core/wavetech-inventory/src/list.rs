//! Persisted record lists.

use crate::error::{InventoryError, InventoryResult};
use crate::ids::RecordId;
use crate::models::RecordMeta;
use crate::validation::Violations;
use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, info, warn};
use wavetech_storage::{Preferences, StorageError};

/// A record kind that can be kept in a [`RecordList`].
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Preference key holding the JSON array of this kind.
    const STORAGE_KEY: &'static str;
    /// Human-readable name used in logs.
    const LABEL: &'static str;

    fn meta(&self) -> &RecordMeta;

    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Appends every violated field rule to `v`.
    fn check(&self, v: &mut Violations);

    /// Text fields considered by [`Record::matches`].
    fn search_fields(&self) -> Vec<&str>;

    /// One-line description for listings.
    fn headline(&self) -> String;

    fn id(&self) -> RecordId {
        self.meta().id
    }

    /// Runs every field rule.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] with all violations, in rule
    /// order, if any rule fails.
    fn validate(&self) -> InventoryResult<()> {
        let mut violations = Violations::new();
        self.check(&mut violations);
        violations.into_result()
    }

    /// Case-insensitive substring match over the search fields.
    /// A blank query matches everything.
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
    }
}

/// In-memory copy of one record kind, written back after every change.
#[derive(Debug)]
pub struct RecordList<T: Record> {
    prefs: Arc<Preferences>,
    items: Vec<T>,
}

impl<T: Record> RecordList<T> {
    /// Loads the list stored under [`Record::STORAGE_KEY`].
    ///
    /// A missing entry, or one that no longer decodes, loads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error only if the preference store itself is unusable.
    pub fn load(prefs: Arc<Preferences>) -> InventoryResult<Self> {
        let items = match prefs.load::<Vec<T>>(T::STORAGE_KEY) {
            Ok(Some(items)) => items,
            Ok(None) => Vec::new(),
            Err(StorageError::Serialization(e)) => {
                warn!(key = T::STORAGE_KEY, error = %e, "Discarding unreadable records");
                Vec::new()
            }
            Err(e) => return Err(e.into()),
        };
        debug!(key = T::STORAGE_KEY, count = items.len(), "Loaded records");
        Ok(Self { prefs, items })
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Validates `record`, appends it, and persists the list.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Validation`] if the record is invalid, or a
    /// storage error if persisting fails. The list is unchanged on error.
    pub fn add(&mut self, mut record: T) -> InventoryResult<RecordId> {
        record.validate()?;
        record.meta_mut().touch(Utc::now());
        let id = record.id();
        let mut next = self.items.clone();
        next.push(record);
        self.commit(next)?;
        info!(kind = T::LABEL, %id, "Added record");
        Ok(id)
    }

    /// Removes the records at `offsets` and persists the list.
    ///
    /// Duplicate offsets are ignored. Nothing is removed unless every offset
    /// is in range.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::IndexOutOfRange`] for the first bad offset,
    /// or a storage error if persisting fails.
    pub fn remove_at(&mut self, offsets: &[usize]) -> InventoryResult<()> {
        let len = self.items.len();
        if let Some(&index) = offsets.iter().find(|&&i| i >= len) {
            return Err(InventoryError::IndexOutOfRange { index, len });
        }

        let mut offsets = offsets.to_vec();
        offsets.sort_unstable();
        offsets.dedup();
        let mut next = self.items.clone();
        for index in offsets.iter().rev() {
            next.remove(*index);
        }
        self.commit(next)?;
        info!(kind = T::LABEL, removed = offsets.len(), "Removed records");
        Ok(())
    }

    /// Removes the record with `id`. Returns whether it existed.
    ///
    /// # Errors
    ///
    /// Returns a storage error if persisting fails.
    pub fn remove(&mut self, id: RecordId) -> InventoryResult<bool> {
        let Some(index) = self.items.iter().position(|item| item.id() == id) else {
            return Ok(false);
        };
        self.remove_at(&[index])?;
        Ok(true)
    }

    /// Records matching `query`, in stored order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&T> {
        self.items.iter().filter(|item| item.matches(query)).collect()
    }

    /// Replaces the whole list, skipping validation. Used for seeding.
    pub(crate) fn replace(&mut self, items: Vec<T>) -> InventoryResult<()> {
        self.commit(items)
    }

    /// Writes `items` and adopts them only if the write succeeded.
    fn commit(&mut self, items: Vec<T>) -> InventoryResult<()> {
        self.prefs.save(T::STORAGE_KEY, &items)?;
        self.items = items;
        Ok(())
    }
}
