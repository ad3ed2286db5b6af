use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::{Arc, RwLock};

use atelier_core::Entity;

use crate::error::{StoreError, StoreResult};

/// CRUD surface over one record type. Services depend on this trait so
/// tests can hand them a fresh in-memory collection.
pub trait Collection<V>
where
    V: Entity + Clone,
    V::Id: Copy + Eq + Hash + Display,
{
    /// Adds a new record; fails if the id is already present.
    fn insert(&self, value: V) -> StoreResult<()>;

    /// Inserts or replaces, returning the previous record if any.
    fn upsert(&self, value: V) -> StoreResult<Option<V>>;

    fn get(&self, id: &V::Id) -> StoreResult<Option<V>>;

    /// Replaces an existing record; fails if the id is unknown.
    fn update(&self, value: V) -> StoreResult<()>;

    fn remove(&self, id: &V::Id) -> StoreResult<Option<V>>;

    fn list(&self) -> StoreResult<Vec<V>>;

    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// `RwLock<HashMap>` backed collection.
pub struct InMemoryCollection<V>
where
    V: Entity,
{
    records: RwLock<HashMap<V::Id, V>>,
}

impl<V: Entity> std::fmt::Debug for InMemoryCollection<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCollection").finish_non_exhaustive()
    }
}

impl<V> Default for InMemoryCollection<V>
where
    V: Entity,
    V::Id: Eq + Hash,
{
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<V> InMemoryCollection<V>
where
    V: Entity,
    V::Id: Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a closure over every record under the read lock, avoiding the
    /// clone that `list` makes.
    pub fn scan<T>(&self, f: impl FnOnce(&HashMap<V::Id, V>) -> T) -> StoreResult<T> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&records))
    }

    /// Runs a closure with exclusive access, for multi-record updates that
    /// must not interleave with readers.
    pub fn mutate<T>(&self, f: impl FnOnce(&mut HashMap<V::Id, V>) -> T) -> StoreResult<T> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(f(&mut records))
    }
}

impl<V> Collection<V> for InMemoryCollection<V>
where
    V: Entity + Clone,
    V::Id: Copy + Eq + Hash + Display,
{
    fn insert(&self, value: V) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let id = *value.id();
        if records.contains_key(&id) {
            return Err(StoreError::Duplicate(id.to_string()));
        }
        records.insert(id, value);
        Ok(())
    }

    fn upsert(&self, value: V) -> StoreResult<Option<V>> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(records.insert(*value.id(), value))
    }

    fn get(&self, id: &V::Id) -> StoreResult<Option<V>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.get(id).cloned())
    }

    fn update(&self, value: V) -> StoreResult<()> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        let id = *value.id();
        if !records.contains_key(&id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        records.insert(id, value);
        Ok(())
    }

    fn remove(&self, id: &V::Id) -> StoreResult<Option<V>> {
        let mut records = self.records.write().map_err(|_| StoreError::Poisoned)?;
        Ok(records.remove(id))
    }

    fn list(&self) -> StoreResult<Vec<V>> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.values().cloned().collect())
    }

    fn len(&self) -> StoreResult<usize> {
        let records = self.records.read().map_err(|_| StoreError::Poisoned)?;
        Ok(records.len())
    }
}

impl<V, C> Collection<V> for Arc<C>
where
    V: Entity + Clone,
    V::Id: Copy + Eq + Hash + Display,
    C: Collection<V>,
{
    fn insert(&self, value: V) -> StoreResult<()> {
        (**self).insert(value)
    }

    fn upsert(&self, value: V) -> StoreResult<Option<V>> {
        (**self).upsert(value)
    }

    fn get(&self, id: &V::Id) -> StoreResult<Option<V>> {
        (**self).get(id)
    }

    fn update(&self, value: V) -> StoreResult<()> {
        (**self).update(value)
    }

    fn remove(&self, id: &V::Id) -> StoreResult<Option<V>> {
        (**self).remove(id)
    }

    fn list(&self) -> StoreResult<Vec<V>> {
        (**self).list()
    }

    fn len(&self) -> StoreResult<usize> {
        (**self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_parties::Client;

    fn client(code: &str, name: &str) -> Client {
        Client::new(code, name, "Test").unwrap()
    }

    #[test]
    fn insert_rejects_duplicate_ids() {
        let store = InMemoryCollection::<Client>::new();
        let record = client("CL00001", "Bennis");
        store.insert(record.clone()).unwrap();
        let err = store.insert(record).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[test]
    fn update_requires_an_existing_record() {
        let store = InMemoryCollection::<Client>::new();
        let record = client("CL00001", "Bennis");
        assert!(matches!(
            store.update(record.clone()),
            Err(StoreError::NotFound(_))
        ));

        store.insert(record.clone()).unwrap();
        let mut changed = record.clone();
        changed.first_name = "Omar".into();
        store.update(changed).unwrap();
        assert_eq!(store.get(&record.id).unwrap().unwrap().first_name, "Omar");
    }

    #[test]
    fn remove_returns_the_record() {
        let store = InMemoryCollection::<Client>::new();
        let record = client("CL00001", "Bennis");
        store.insert(record.clone()).unwrap();
        assert_eq!(store.remove(&record.id).unwrap(), Some(record.clone()));
        assert_eq!(store.remove(&record.id).unwrap(), None);
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn works_through_an_arc() {
        let store = Arc::new(InMemoryCollection::<Client>::new());
        store.insert(client("CL00001", "Bennis")).unwrap();
        assert_eq!(store.len().unwrap(), 1);
    }
}
