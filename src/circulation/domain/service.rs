use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::circulation::domain::LibraryService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{BorrowResult, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::patrons::domain::Patron;
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::repository::PatronRepository;

// Borrow and return read a record and write it back in two separate steps, one per
// repository. Versioned updates reject a write over a concurrently changed record but
// the book and patron writes are not atomic as a pair and nothing is rolled back. When
// the book write succeeds and the patron write then fails (e.g. a version conflict),
// a borrow leaves the book unavailable with no patron holding it, and a return leaves
// the book available while the patron still lists it. The caller sees the error.
pub(crate) struct LibraryServiceImpl {
    borrow_limit: usize,
    book_repository: Box<dyn BookRepository>,
    patron_repository: Box<dyn PatronRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LibraryServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
                      patron_repository: Box<dyn PatronRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            borrow_limit: config.borrow_limit,
            book_repository,
            patron_repository,
            events_publisher,
        }
    }

    fn loan_metadata(patron_id: &str) -> HashMap<String, String> {
        HashMap::from([("patron_id".to_string(), patron_id.to_string())])
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn add_book(&self, book: &BookEntity) -> LibraryResult<bool> {
        if !self.book_repository.create(book).await? {
            tracing::debug!(isbn = book.isbn.as_str(), "book already exists");
            return Ok(false);
        }
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "book_added", "books", book.isbn.as_str(), &HashMap::new(), book)?).await?;
        Ok(true)
    }

    async fn register_patron(&self, patron: &PatronEntity) -> LibraryResult<bool> {
        let mut patron = patron.clone();
        patron.borrowed_books.clear();
        if !self.patron_repository.create(&patron).await? {
            tracing::debug!(patron_id = patron.patron_id.as_str(), "patron already exists");
            return Ok(false);
        }
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "patron_registered", "patrons", patron.patron_id.as_str(), &HashMap::new(), &patron)?).await?;
        Ok(true)
    }

    async fn borrow_book(&self, patron_id: &str, isbn: &str) -> LibraryResult<BorrowResult> {
        let mut patron = match self.patron_repository.find(patron_id).await? {
            Some(patron) => patron,
            None => return Ok(BorrowResult::PatronNotFound),
        };
        let mut book = match self.book_repository.find(isbn).await? {
            Some(book) => book,
            None => return Ok(BorrowResult::BookNotFound),
        };
        if !book.is_available() {
            return Ok(BorrowResult::NotAvailable);
        }
        if patron.num_borrowed() >= self.borrow_limit {
            tracing::info!(patron_id, isbn, limit = self.borrow_limit, "borrow limit reached");
            return Ok(BorrowResult::LimitReached);
        }

        book.available = false;
        patron.borrow(isbn);
        self.book_repository.update(&book).await?;
        self.patron_repository.update(&patron).await?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "book_borrowed", "circulation", isbn, &Self::loan_metadata(patron_id), &book)?).await?;
        Ok(BorrowResult::Success)
    }

    async fn return_book(&self, patron_id: &str, isbn: &str) -> LibraryResult<bool> {
        let mut patron = match self.patron_repository.find(patron_id).await? {
            Some(patron) => patron,
            None => return Ok(false),
        };
        let mut book = match self.book_repository.find(isbn).await? {
            Some(book) => book,
            None => return Ok(false),
        };
        if !patron.has_borrowed(isbn) {
            return Ok(false);
        }
        // the availability flag is not checked, a held isbn is always accepted back
        if book.is_available() {
            tracing::warn!(patron_id, isbn, "returned book was already marked available");
        }

        book.available = true;
        patron.give_back(isbn);
        self.book_repository.update(&book).await?;
        self.patron_repository.update(&patron).await?;
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "book_returned", "circulation", isbn, &Self::loan_metadata(patron_id), &book)?).await?;
        Ok(true)
    }

    async fn search(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.into_iter().filter(|b| b.matches(query)).collect())
    }

    async fn find_book(&self, isbn: &str) -> LibraryResult<Option<BookEntity>> {
        self.book_repository.find(isbn).await
    }

    async fn find_patron(&self, patron_id: &str) -> LibraryResult<Option<PatronEntity>> {
        self.patron_repository.find(patron_id).await
    }

    async fn list_all_books(&self) -> LibraryResult<Vec<BookEntity>> {
        self.book_repository.find_all().await
    }

    async fn list_all_patrons(&self) -> LibraryResult<Vec<PatronEntity>> {
        self.patron_repository.find_all().await
    }
}
