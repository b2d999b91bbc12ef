pub mod books;
pub mod circulation;
pub mod core;
pub mod gateway;
pub mod menu;
pub mod patrons;
pub mod utils;
