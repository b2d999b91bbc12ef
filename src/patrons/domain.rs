pub mod model;

use crate::core::domain::Identifiable;

pub trait Patron: Identifiable {
    fn has_borrowed(&self, isbn: &str) -> bool;
    fn num_borrowed(&self) -> usize;
}
