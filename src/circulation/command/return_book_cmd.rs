use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct ReturnBookCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ReturnBookCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReturnBookCommandRequest {
    pub patron_id: String,
    pub isbn: String,
}

impl ReturnBookCommandRequest {
    pub fn new(patron_id: &str, isbn: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReturnBookCommandResponse {
    pub patron_id: String,
    pub isbn: String,
    pub returned: bool,
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let returned = self.library_service.return_book(req.patron_id.as_str(), req.isbn.as_str()).await?;
        Ok(ReturnBookCommandResponse { patron_id: req.patron_id, isbn: req.isbn, returned })
    }
}
