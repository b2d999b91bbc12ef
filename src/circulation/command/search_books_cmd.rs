use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct SearchBooksCommand {
    library_service: Arc<dyn LibraryService>,
}

impl SearchBooksCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchBooksCommandRequest {
    pub query: String,
}

impl SearchBooksCommandRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SearchBooksCommandResponse {
    pub query: String,
    pub books: Vec<BookEntity>,
}

#[async_trait]
impl Command<SearchBooksCommandRequest, SearchBooksCommandResponse> for SearchBooksCommand {
    async fn execute(&self, req: SearchBooksCommandRequest) -> Result<SearchBooksCommandResponse, CommandError> {
        let books = self.library_service.search(req.query.as_str()).await?;
        Ok(SearchBooksCommandResponse { query: req.query, books })
    }
}
