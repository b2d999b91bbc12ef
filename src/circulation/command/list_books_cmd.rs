use std::sync::Arc;
use async_trait::async_trait;
use serde::Serialize;
use crate::books::domain::model::BookEntity;
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    library_service: Arc<dyn LibraryService>,
}

impl ListBooksCommand {
    pub fn new(library_service: Arc<dyn LibraryService>) -> Self {
        Self {
            library_service,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookEntity>,
}

#[async_trait]
impl Command<(), ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ()) -> Result<ListBooksCommandResponse, CommandError> {
        let books = self.library_service.list_all_books().await?;
        Ok(ListBooksCommandResponse { books })
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::circulation::command::list_books_cmd::ListBooksCommand;
    use crate::circulation::domain::LibraryService;
    use crate::circulation::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_run_list_books() {
        let svc = factory::create_library_service(&Configuration::new("test"));
        let cmd = ListBooksCommand::new(svc.clone());
        assert!(cmd.execute(()).await.expect("should list books").books.is_empty());

        svc.add_book(&BookEntity::new("A1", "Go Deep", "J. Doe", 2020)).await.expect("should add book");
        svc.add_book(&BookEntity::new("B2", "Deep Work", "C. Newport", 2016)).await.expect("should add book");
        assert_eq!(2, cmd.execute(()).await.expect("should list books").books.len());
    }
}
