use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn is_available(&self) -> bool;
    // case-insensitive substring match against title or author
    fn matches(&self, query: &str) -> bool;
}
