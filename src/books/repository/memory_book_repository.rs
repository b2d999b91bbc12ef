use async_trait::async_trait;
use chrono::Utc;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::utils::memory::MemoryStore;

#[derive(Debug)]
pub struct MemoryBookRepository {
    store: MemoryStore<BookEntity>,
}

impl MemoryBookRepository {
    pub(crate) fn new(table_name: &str) -> Self {
        Self {
            store: MemoryStore::new(table_name),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<bool> {
        Ok(self.store.insert(entity).await)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut next = entity.clone();
        next.version = entity.version + 1;
        next.updated_at = Utc::now().naive_utc();
        self.store.replace(entity.version, next).await
    }

    async fn find(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        Ok(self.store.get(id).await)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.store.all().await)
    }
}

impl BookRepository for MemoryBookRepository {}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::LibraryError;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_get_books() {
        let books_repo = MemoryBookRepository::new("books");
        let book = BookEntity::new("isbn", "test book", "author", 1999);
        let created = books_repo.create(&book).await.expect("should create book");
        assert!(created);

        let loaded = books_repo.find(book.isbn.as_str()).await.expect("should return book");
        assert_eq!(Some(book), loaded);
    }

    #[tokio::test]
    async fn test_should_not_create_duplicate_books() {
        let books_repo = MemoryBookRepository::new("books");
        let book = BookEntity::new("isbn", "test book", "author", 1999);
        assert!(books_repo.create(&book).await.expect("should create book"));

        let other = BookEntity::new("isbn", "other book", "other author", 2001);
        assert!(!books_repo.create(&other).await.expect("should not fail"));
        let loaded = books_repo.find("isbn").await.expect("should return book").expect("should exist");
        assert_eq!("test book", loaded.title.as_str());
    }

    #[tokio::test]
    async fn test_should_create_update_books() {
        let books_repo = MemoryBookRepository::new("books");
        let mut book = BookEntity::new("isbn", "test book", "author", 1999);
        let _ = books_repo.create(&book).await.expect("should create book");

        book.available = false;
        let size = books_repo.update(&book).await.expect("should update book");
        assert_eq!(1, size);

        let loaded = books_repo.find("isbn").await.expect("should return book").expect("should exist");
        assert!(!loaded.available);
        assert_eq!(1, loaded.version);
    }

    #[tokio::test]
    async fn test_should_reject_stale_update() {
        let books_repo = MemoryBookRepository::new("books");
        let book = BookEntity::new("isbn", "test book", "author", 1999);
        let _ = books_repo.create(&book).await.expect("should create book");
        let _ = books_repo.update(&book).await.expect("should update book");

        let res = books_repo.update(&book).await;
        assert!(matches!(res, Err(LibraryError::CurrentlyUnavailable{ .. })));
    }

    #[tokio::test]
    async fn test_should_list_books_in_insertion_order() {
        let books_repo = MemoryBookRepository::new("books");
        for i in 0..5 {
            let book = BookEntity::new(format!("isbn_{}", 4 - i).as_str(),
                                       format!("title_{}", i).as_str(), "author", 2000 + i);
            assert!(books_repo.create(&book).await.expect("should create book"));
        }
        let res = books_repo.find_all().await.expect("should return books");
        assert_eq!(5, res.len());
        assert_eq!("isbn_4", res[0].isbn.as_str());
        assert_eq!("isbn_0", res[4].isbn.as_str());
    }
}
