use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::patrons::domain::Patron;
use crate::utils::date::serializer;

// PatronEntity abstracts library member and the isbns of the books it currently holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: String,
    pub version: i64,
    pub name: String,
    pub borrowed_books: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl PatronEntity {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            version: 0,
            name: name.to_string(),
            borrowed_books: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    // appends isbn unless already held
    pub fn borrow(&mut self, isbn: &str) {
        if !self.has_borrowed(isbn) {
            self.borrowed_books.push(isbn.to_string());
        }
    }

    pub fn give_back(&mut self, isbn: &str) {
        self.borrowed_books.retain(|b| b != isbn);
    }
}

impl Identifiable for PatronEntity {
    fn id(&self) -> String {
        self.patron_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Patron for PatronEntity {
    fn has_borrowed(&self, isbn: &str) -> bool {
        self.borrowed_books.iter().any(|b| b == isbn)
    }

    fn num_borrowed(&self) -> usize {
        self.borrowed_books.len()
    }
}
