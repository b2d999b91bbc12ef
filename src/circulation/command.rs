// Requests are read from JSON and responses written as JSON, the menu builds requests directly.
pub mod add_book_cmd;
pub mod borrow_book_cmd;
pub mod list_books_cmd;
pub mod list_patrons_cmd;
pub mod register_patron_cmd;
pub mod return_book_cmd;
pub mod search_books_cmd;
