use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::utils::date::serializer;

// BookEntity abstracts a book in the library, identified by its isbn. The library holds
// a single copy per isbn so availability is a flag on the book itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub available: bool,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, year: i32) -> Self {
        Self {
            isbn: isbn.to_string(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            year,
            available: true,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn status(&self) -> &'static str {
        if self.available { "Available" } else { "Borrowed" }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Book for BookEntity {
    fn is_available(&self) -> bool {
        self.available
    }

    fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(query.as_str()) ||
            self.author.to_lowercase().contains(query.as_str())
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("isbn", "title", "author", 2020);
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!(2020, book.year);
        assert_eq!(0, book.version);
        assert!(book.is_available());
        assert_eq!("Available", book.status());
    }

    #[tokio::test]
    async fn test_should_match_title_or_author_ignoring_case() {
        let book = BookEntity::new("A1", "Go Deep", "J. Doe", 2020);
        assert!(book.matches("go"));
        assert!(book.matches("DEEP"));
        assert!(book.matches("j. d"));
        assert!(book.matches(""));
        assert!(!book.matches("rust"));
    }
}
