use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use crate::books::domain::model::BookEntity;
use crate::circulation::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::circulation::command::borrow_book_cmd::{BorrowBookCommand, BorrowBookCommandRequest};
use crate::circulation::command::list_books_cmd::ListBooksCommand;
use crate::circulation::command::list_patrons_cmd::ListPatronsCommand;
use crate::circulation::command::register_patron_cmd::{RegisterPatronCommand, RegisterPatronCommandRequest};
use crate::circulation::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::circulation::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::circulation::domain::LibraryService;
use crate::core::command::{Command, CommandError};
use crate::core::library::{BorrowResult, LibraryResult};

const MENU: &[&str] = &[
    "",
    "Library Menu",
    "1. Add book",
    "2. Register patron",
    "3. Borrow book",
    "4. Return book",
    "5. Search books",
    "6. List all books",
    "7. List all patrons",
    "0. Exit",
    "Choose an option:",
];

// MenuController reads one choice per line and dispatches it to the matching command.
// Command failures are printed and the loop continues, io failures end the loop.
pub struct MenuController<R, W> {
    library_service: Arc<dyn LibraryService>,
    reader: R,
    writer: W,
}

impl<R, W> MenuController<R, W>
    where R: AsyncBufRead + Unpin, W: AsyncWrite + Unpin {
    pub fn new(library_service: Arc<dyn LibraryService>, reader: R, writer: W) -> Self {
        Self {
            library_service,
            reader,
            writer,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    // runs until 0 is chosen or the input ends
    pub async fn run(&mut self) -> LibraryResult<()> {
        loop {
            for line in MENU {
                self.println(line).await?;
            }
            let choice = match self.read_line().await? {
                Some(choice) => choice,
                None => break,
            };
            if !self.handle_menu_action(choice.trim()).await? {
                break;
            }
        }
        Ok(())
    }

    // returns false when the loop should stop
    pub async fn handle_menu_action(&mut self, choice: &str) -> LibraryResult<bool> {
        tracing::debug!(choice, "menu action");
        match choice {
            "1" => self.add_book().await?,
            "2" => self.register_patron().await?,
            "3" => self.borrow_book().await?,
            "4" => self.return_book().await?,
            "5" => self.search().await?,
            "6" => self.list_all_books().await?,
            "7" => self.list_all_patrons().await?,
            "0" => return Ok(false),
            _ => self.println("Invalid option").await?,
        }
        Ok(true)
    }

    async fn add_book(&mut self) -> LibraryResult<()> {
        let isbn = self.prompt("Enter ISBN:").await?;
        let title = self.prompt("Enter title:").await?;
        let author = self.prompt("Enter author:").await?;
        let year = self.prompt("Enter year:").await?.trim().parse::<i32>().unwrap_or(0);

        let req = AddBookCommandRequest::new(isbn.as_str(), title.as_str(), author.as_str(), year);
        match AddBookCommand::new(self.library_service.clone()).execute(req).await {
            Ok(res) if res.added => self.println("Book added successfully!").await?,
            Ok(_) => self.println("Book already exists.").await?,
            Err(err) => return self.print_error(err).await,
        }
        Ok(())
    }

    async fn register_patron(&mut self) -> LibraryResult<()> {
        let patron_id = self.prompt("Enter Patron ID:").await?;
        let name = self.prompt("Enter name:").await?;

        let req = RegisterPatronCommandRequest::new(patron_id.as_str(), name.as_str());
        match RegisterPatronCommand::new(self.library_service.clone()).execute(req).await {
            Ok(res) if res.registered => self.println("Patron added").await?,
            Ok(_) => self.println("Patron already exists").await?,
            Err(err) => return self.print_error(err).await,
        }
        Ok(())
    }

    async fn borrow_book(&mut self) -> LibraryResult<()> {
        let patron_id = self.prompt("Enter Patron ID:").await?;
        let isbn = self.prompt("Enter Book ISBN:").await?;

        let req = BorrowBookCommandRequest::new(patron_id.as_str(), isbn.as_str());
        let res = match BorrowBookCommand::new(self.library_service.clone()).execute(req).await {
            Ok(res) => res,
            Err(err) => return self.print_error(err).await,
        };
        let message = match res.result {
            BorrowResult::Success => "Book borrowed successfully!",
            BorrowResult::PatronNotFound => "Patron not found.",
            BorrowResult::BookNotFound => "Book not found.",
            BorrowResult::NotAvailable => "Book is currently not available.",
            BorrowResult::LimitReached => "Patron has reached borrow limit.",
        };
        self.println(message).await?;
        Ok(())
    }

    async fn return_book(&mut self) -> LibraryResult<()> {
        let patron_id = self.prompt("Enter Patron ID:").await?;
        let isbn = self.prompt("Enter Book ISBN:").await?;

        let req = ReturnBookCommandRequest::new(patron_id.as_str(), isbn.as_str());
        match ReturnBookCommand::new(self.library_service.clone()).execute(req).await {
            Ok(res) if res.returned => self.println("Book returned successfully!").await?,
            Ok(_) => self.println("Failed to return the book. Check Patron ID or ISBN.").await?,
            Err(err) => return self.print_error(err).await,
        }
        Ok(())
    }

    async fn search(&mut self) -> LibraryResult<()> {
        let query = self.prompt("Enter search query (title or author):").await?;

        let req = SearchBooksCommandRequest::new(query.as_str());
        let res = match SearchBooksCommand::new(self.library_service.clone()).execute(req).await {
            Ok(res) => res,
            Err(err) => return self.print_error(err).await,
        };
        if res.books.is_empty() {
            self.println(format!("No books found matching \"{}\"", res.query).as_str()).await?;
        } else {
            self.println("Found books:").await?;
            self.print_books(&res.books).await?;
        }
        Ok(())
    }

    async fn list_all_books(&mut self) -> LibraryResult<()> {
        let res = match ListBooksCommand::new(self.library_service.clone()).execute(()).await {
            Ok(res) => res,
            Err(err) => return self.print_error(err).await,
        };
        if res.books.is_empty() {
            self.println("No books in library.").await?;
        } else {
            self.println("Library Books:").await?;
            self.print_books(&res.books).await?;
        }
        Ok(())
    }

    async fn list_all_patrons(&mut self) -> LibraryResult<()> {
        let res = match ListPatronsCommand::new(self.library_service.clone()).execute(()).await {
            Ok(res) => res,
            Err(err) => return self.print_error(err).await,
        };
        if res.patrons.is_empty() {
            self.println("No registered patrons.").await?;
        } else {
            self.println("Registered Patrons:").await?;
            for patron in res.patrons.iter() {
                self.println(format!("{} [{}] - Borrowed books: {}",
                                     patron.name, patron.patron_id, patron.borrowed_books.join(", ")).as_str()).await?;
            }
        }
        Ok(())
    }

    async fn print_error(&mut self, err: CommandError) -> LibraryResult<()> {
        tracing::error!("menu action failed {:?}", err);
        self.println(format!("Error: {}", err.message()).as_str()).await
    }

    async fn print_books(&mut self, books: &[BookEntity]) -> LibraryResult<()> {
        for book in books {
            self.println(format!("{} by {} [{}] - {}",
                                 book.title, book.author, book.isbn, book.status()).as_str()).await?;
        }
        Ok(())
    }

    // a missing line reads as empty input
    async fn prompt(&mut self, label: &str) -> LibraryResult<String> {
        self.println(label).await?;
        Ok(self.read_line().await?.unwrap_or_default())
    }

    async fn read_line(&mut self) -> LibraryResult<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    async fn println(&mut self, line: &str) -> LibraryResult<()> {
        self.writer.write_all(line.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}
