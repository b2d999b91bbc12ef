use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::model::PatronEntity;

pub struct ListPatronsCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ListPatronsCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListPatronsCommandResponse {
    pub patrons: Vec<PatronEntity>,
}

#[async_trait]
impl Command<(), ListPatronsCommandResponse> for ListPatronsCommand {
    async fn execute(&self, _req: ()) -> Result<ListPatronsCommandResponse, CommandError> {
        let patrons = self.library_service.list_all_patrons().await?;
        Ok(ListPatronsCommandResponse { patrons })
    }
}
