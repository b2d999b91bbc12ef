use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl AddBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl AddBookCommandRequest {
    pub fn new(isbn: &str, title: &str, author: &str, year: i32) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            year,
        }
    }

    pub fn build_book(&self) -> BookEntity {
        BookEntity::new(self.isbn.as_str(), self.title.as_str(), self.author.as_str(), self.year)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: BookEntity,
    pub added: bool,
}

impl AddBookCommandResponse {
    pub fn new(book: BookEntity, added: bool) -> Self {
        Self {
            book,
            added,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.library_service.add_book(&book).await.map_err(CommandError::from).map(|added| AddBookCommandResponse::new(book, added))
    }
}

#[cfg(test)]
mod tests {
    use crate::circulation::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::circulation::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_add_book() {
        let cmd = AddBookCommand::new(factory::create_library_service(&Configuration::new("test")));

        let res = cmd.execute(AddBookCommandRequest::new("A1", "Go Deep", "J. Doe", 2020)).await.expect("should add book");
        assert!(res.added);
        assert!(res.book.available);
        let res = cmd.execute(AddBookCommandRequest::new("A1", "Again", "J. Doe", 2020)).await.expect("should add book");
        assert!(!res.added);
    }

    #[tokio::test]
    async fn test_should_run_add_book_from_json() {
        let cmd = AddBookCommand::new(factory::create_library_service(&Configuration::new("test")));

        let req: AddBookCommandRequest = serde_json::from_str(
            r#"{"isbn":"A1","title":"Go Deep","author":"J. Doe","year":2020}"#).expect("should parse request");
        let res = cmd.execute(req).await.expect("should add book");
        let json = serde_json::to_value(&res).expect("should serialize response");
        assert_eq!(true, json["added"]);
        assert_eq!("A1", json["book"]["isbn"]);
        assert_eq!(true, json["book"]["available"]);
    }
}
