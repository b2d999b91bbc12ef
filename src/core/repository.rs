use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, returns false without writing if the key already exists
    async fn create(&self, entity: &Entity) -> LibraryResult<bool>;

    // replaces an entity by key, the entity version must match the stored version
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // find an entity by key
    async fn find(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}
