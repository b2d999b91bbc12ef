use std::collections::HashMap;
use tokio::sync::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// MemoryStore is a keyed table that keeps rows in insertion order, it backs the
// in-memory repositories.
#[derive(Debug)]
pub(crate) struct MemoryStore<Entity> {
    table_name: String,
    table: RwLock<MemoryTable<Entity>>,
}

#[derive(Debug)]
struct MemoryTable<Entity> {
    keys: HashMap<String, usize>,
    rows: Vec<Entity>,
}

impl<Entity: Identifiable + Clone> MemoryStore<Entity> {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            table: RwLock::new(MemoryTable { keys: HashMap::new(), rows: vec![] }),
        }
    }

    pub(crate) async fn insert(&self, entity: &Entity) -> bool {
        let mut table = self.table.write().await;
        let key = entity.id();
        if table.keys.contains_key(&key) {
            return false;
        }
        let ndx = table.rows.len();
        table.rows.push(entity.clone());
        table.keys.insert(key, ndx);
        true
    }

    // replaces the row for next.id() when the stored row is still at expected_version
    pub(crate) async fn replace(&self, expected_version: i64, next: Entity) -> LibraryResult<usize> {
        let mut table = self.table.write().await;
        let key = next.id();
        let ndx = *table.keys.get(&key).ok_or_else(|| LibraryError::not_found(
            format!("{} item not found for {}", self.table_name, key).as_str()))?;
        let stored_version = table.rows[ndx].version();
        if stored_version != expected_version {
            return Err(LibraryError::version_conflict(key.as_str(), expected_version, stored_version));
        }
        table.rows[ndx] = next;
        Ok(1)
    }

    pub(crate) async fn get(&self, id: &str) -> Option<Entity> {
        let table = self.table.read().await;
        table.keys.get(id).map(|ndx| table.rows[*ndx].clone())
    }

    pub(crate) async fn all(&self) -> Vec<Entity> {
        self.table.read().await.rows.clone()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::LibraryError;
    use crate::utils::memory::MemoryStore;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        key: String,
        version: i64,
        value: String,
    }

    impl Identifiable for Row {
        fn id(&self) -> String {
            self.key.to_string()
        }

        fn version(&self) -> i64 {
            self.version
        }
    }

    fn row(key: &str, version: i64, value: &str) -> Row {
        Row { key: key.to_string(), version, value: value.to_string() }
    }

    #[tokio::test]
    async fn test_should_insert_once_per_key() {
        let store = MemoryStore::new("rows");
        assert!(store.insert(&row("a", 0, "first")).await);
        assert!(!store.insert(&row("a", 0, "second")).await);
        assert_eq!(Some(row("a", 0, "first")), store.get("a").await);
        assert_eq!(None, store.get("b").await);
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order() {
        let store = MemoryStore::new("rows");
        for key in ["c", "a", "b"] {
            assert!(store.insert(&row(key, 0, key)).await);
        }
        let keys: Vec<String> = store.all().await.iter().map(|r| r.key.clone()).collect();
        assert_eq!(vec!["c", "a", "b"], keys);
    }

    #[tokio::test]
    async fn test_should_replace_matching_version() {
        let store = MemoryStore::new("rows");
        store.insert(&row("a", 0, "first")).await;
        let size = store.replace(0, row("a", 1, "second")).await.expect("should replace");
        assert_eq!(1, size);
        assert_eq!(Some(row("a", 1, "second")), store.get("a").await);
    }

    #[tokio::test]
    async fn test_should_reject_stale_version() {
        let store = MemoryStore::new("rows");
        store.insert(&row("a", 0, "first")).await;
        store.replace(0, row("a", 1, "second")).await.expect("should replace");
        let res = store.replace(0, row("a", 1, "third")).await;
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable{ retryable: true, .. })));
        assert_eq!(Some(row("a", 1, "second")), store.get("a").await);
    }

    #[tokio::test]
    async fn test_should_not_replace_missing_key() {
        let store: MemoryStore<Row> = MemoryStore::new("rows");
        let res = store.replace(0, row("a", 1, "first")).await;
        assert!(matches!(res, Err(LibraryError::NotFound{ .. })));
    }
}
