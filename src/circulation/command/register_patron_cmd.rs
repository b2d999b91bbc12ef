use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::model::PatronEntity;

pub struct RegisterPatronCommand {
    library_service: Arc<dyn LibraryService>,
}

impl RegisterPatronCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RegisterPatronCommandRequest {
    pub patron_id: String,
    pub name: String,
}

impl RegisterPatronCommandRequest {
    pub fn new(patron_id: &str, name: &str) -> Self {
        Self {
            patron_id: patron_id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn build_patron(&self) -> PatronEntity {
        PatronEntity::new(self.patron_id.as_str(), self.name.as_str())
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterPatronCommandResponse {
    pub patron: PatronEntity,
    pub registered: bool,
}

impl RegisterPatronCommandResponse {
    pub fn new(patron: PatronEntity, registered: bool) -> Self {
        Self {
            patron,
            registered,
        }
    }
}

#[async_trait]
impl Command<RegisterPatronCommandRequest, RegisterPatronCommandResponse> for RegisterPatronCommand {
    async fn execute(&self, req: RegisterPatronCommandRequest) -> Result<RegisterPatronCommandResponse, CommandError> {
        let patron = req.build_patron();
        self.library_service.register_patron(&patron).await.map_err(CommandError::from)
            .map(|registered| RegisterPatronCommandResponse::new(patron, registered))
    }
}
