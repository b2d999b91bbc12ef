pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{BorrowResult, LibraryResult};
use crate::patrons::domain::model::PatronEntity;

// LibraryService is the only component that mutates books and patrons. Domain outcomes
// are returned as values, the error channel is reserved for storage faults.
#[async_trait]
pub trait LibraryService: Sync + Send {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<bool>;
    async fn register_patron(&self, patron: &PatronEntity) -> LibraryResult<bool>;
    async fn borrow_book(&self, patron_id: &str, isbn: &str) -> LibraryResult<BorrowResult>;
    async fn return_book(&self, patron_id: &str, isbn: &str) -> LibraryResult<bool>;
    async fn search(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;
    async fn find_book(&self, isbn: &str) -> LibraryResult<Option<BookEntity>>;
    async fn find_patron(&self, patron_id: &str) -> LibraryResult<Option<PatronEntity>>;
    async fn list_all_books(&self) -> LibraryResult<Vec<BookEntity>>;
    async fn list_all_patrons(&self) -> LibraryResult<Vec<PatronEntity>>;
}
