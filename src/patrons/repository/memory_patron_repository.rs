use async_trait::async_trait;
use chrono::Utc;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryPatronRepository {
    store: MemoryStore<PatronEntity>,
}

impl MemoryPatronRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            store: MemoryStore::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<PatronEntity> for MemoryPatronRepository {
    async fn create(&self, entity: &PatronEntity) -> LibraryResult<bool> {
        Ok(self.store.insert(entity).await)
    }

    async fn update(&self, entity: &PatronEntity) -> LibraryResult<usize> {
        let mut next = entity.clone();
        next.version = entity.version + 1;
        next.updated_at = Utc::now().naive_utc();
        self.store.replace(entity.version, next).await
    }

    async fn find(&self, id: &str) -> LibraryResult<Option<PatronEntity>> {
        Ok(self.store.get(id).await)
    }

    async fn find_all(&self) -> LibraryResult<Vec<PatronEntity>> {
        Ok(self.store.all().await)
    }
}

impl PatronRepository for MemoryPatronRepository {}
