use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::core::library::BorrowResult;

pub struct BorrowBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl BorrowBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub patron_id: String,
    pub isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub patron_id: String,
    pub isbn: String,
    pub result: BorrowResult,
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        let result = self.library_service.borrow_book(req.patron_id.as_str(), req.isbn.as_str()).await?;
        Ok(BorrowBookCommandResponse { patron_id: req.patron_id, isbn: req.isbn, result })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::circulation::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
    use crate::circulation::domain::LibraryService;
    use crate::circulation::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::library::BorrowResult;
    use crate::patrons::domain::model::PatronEntity;

    #[tokio::test]
    async fn test_should_run_borrow_book() {
        let svc = factory::create_library_service(&Configuration::new("test"));
        svc.add_book(&BookEntity::new("A1", "Go Deep", "J. Doe", 2020)).await.expect("should add book");
        svc.register_patron(&PatronEntity::new("P1", "Al")).await.expect("should register patron");
        let cmd = BorrowBookCommand::new(svc);

        let res = cmd.execute(BorrowBookCommandRequest::new("P1", "A1")).await.expect("should borrow book");
        assert_eq!(BorrowResult::Success, res.result);
        let res = cmd.execute(BorrowBookCommandRequest::new("P2", "A1")).await.expect("should borrow book");
        assert_eq!(BorrowResult::PatronNotFound, res.result);
    }

    #[tokio::test]
    async fn test_should_run_borrow_book_from_json() {
        let svc = factory::create_library_service(&Configuration::new("test"));
        svc.add_book(&BookEntity::new("A1", "Go Deep", "J. Doe", 2020)).await.expect("should add book");
        svc.register_patron(&PatronEntity::new("P1", "Al")).await.expect("should register patron");
        let cmd = BorrowBookCommand::new(svc);

        let req: BorrowBookCommandRequest = serde_json::from_str(r#"{"patron_id":"P1","isbn":"A1"}"#)
            .expect("should parse request");
        let res = cmd.execute(req).await.expect("should borrow book");
        let json = serde_json::to_string(&res).expect("should serialize response");
        assert_eq!(r#"{"patron_id":"P1","isbn":"A1","result":"Success"}"#, json);
    }
}
