use std::sync::Arc;
use crate::books::factory::create_book_repository;
use crate::circulation::domain::LibraryService;
use crate::circulation::domain::service::LibraryServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::patrons::factory::create_patron_repository;

pub fn create_library_service(config: &Configuration) -> Arc<dyn LibraryService> {
    Arc::new(LibraryServiceImpl::new(config, create_book_repository(),
                                     create_patron_repository(), create_publisher()))
}
