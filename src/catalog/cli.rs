use std::io::{BufRead, Write};
use std::sync::Arc;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::remove_books_cmd::{RemoveBooksCommand, RemoveBooksCommandRequest};
use crate::catalog::domain::SharedCatalog;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::metadata::domain::MetadataResolver;

const MENU: &str = "\n--- Menu ---
1. Add book (by ISBN)
2. Remove book
3. List books
4. Find book (ISBN)
5. Remove many (comma separated ISBNs)
6. Exit
";

// CatalogMenu drives the catalog from a line oriented terminal session.
pub struct CatalogMenu {
    catalog: SharedCatalog,
    resolver: Arc<dyn MetadataResolver>,
}

impl CatalogMenu {
    pub fn new(catalog: SharedCatalog, resolver: Arc<dyn MetadataResolver>) -> Self {
        Self {
            catalog,
            resolver,
        }
    }

    /// Runs the menu until the exit choice or the end of input.
    pub async fn run<R: BufRead, W: Write>(&self, mut input: R, mut out: W) -> LibraryResult<()> {
        loop {
            write!(out, "{}", MENU)?;
            let Some(choice) = prompt(&mut input, &mut out, "Choice: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => {
                    let Some(isbn) = prompt(&mut input, &mut out, "ISBN: ")? else {
                        return Ok(());
                    };
                    let cmd = AddBookCommand::new(self.catalog.clone(), self.resolver.clone());
                    match cmd.execute(AddBookCommandRequest::by_isbn(isbn.as_str())).await {
                        Ok(res) => writeln!(out, "Added: {}", res.book)?,
                        Err(err) => writeln!(out, "Error: {}", err)?,
                    }
                }
                "2" => {
                    let Some(isbn) = prompt(&mut input, &mut out, "ISBN to remove: ")? else {
                        return Ok(());
                    };
                    let cmd = RemoveBookCommand::new(self.catalog.clone());
                    match cmd.execute(RemoveBookCommandRequest::new(isbn.as_str())).await {
                        Ok(_) => writeln!(out, "Removed")?,
                        Err(CommandError::NotFound { .. }) => writeln!(out, "Not found")?,
                        Err(err) => writeln!(out, "Error: {}", err)?,
                    }
                }
                "3" => {
                    let res = ListBooksCommand::new(self.catalog.clone())
                        .execute(ListBooksCommandRequest::default()).await;
                    match res {
                        Ok(res) => {
                            for book in res.books {
                                writeln!(out, "- {}", book)?;
                            }
                        }
                        Err(err) => writeln!(out, "Error: {}", err)?,
                    }
                }
                "4" => {
                    let Some(isbn) = prompt(&mut input, &mut out, "ISBN: ")? else {
                        return Ok(());
                    };
                    let cmd = GetBookCommand::new(self.catalog.clone());
                    match cmd.execute(GetBookCommandRequest::new(isbn.as_str())).await {
                        Ok(res) => writeln!(out, "{}", res.book)?,
                        Err(CommandError::NotFound { .. }) => writeln!(out, "Not found")?,
                        Err(err) => writeln!(out, "Error: {}", err)?,
                    }
                }
                "5" => {
                    let Some(raw) = prompt(&mut input, &mut out, "ISBNs to remove (comma separated): ")? else {
                        return Ok(());
                    };
                    let cmd = RemoveBooksCommand::new(self.catalog.clone());
                    match cmd.execute(RemoveBooksCommandRequest::parse(raw.as_str())).await {
                        Ok(res) => writeln!(out, "Removed: {}, Not found: {}",
                                            res.report.deleted.len(), res.report.not_found.len())?,
                        Err(err) => writeln!(out, "Error: {}", err)?,
                    }
                }
                "6" => {
                    writeln!(out, "Exiting...")?;
                    return Ok(());
                }
                _ => writeln!(out, "Invalid choice")?,
            }
        }
    }
}

// None on end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> LibraryResult<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;
    use crate::catalog::cli::CatalogMenu;
    use crate::catalog::factory;
    use crate::metadata::domain::BookMetadata;
    use crate::metadata::static_resolver::StaticResolver;

    async fn run_session(script: &str) -> String {
        let catalog = factory::create_memory_catalog().await;
        let resolver = StaticResolver::new()
            .with_book(BookMetadata::new("9780140328721", "Matilda", &["Roald Dahl"], &[]))
            .with_book(BookMetadata::new("9780345339683", "The Hobbit", &[], &[]));
        let menu = CatalogMenu::new(catalog, Arc::new(resolver));
        let mut out = vec![];
        menu.run(Cursor::new(script.to_string()), &mut out).await.expect("should run menu");
        String::from_utf8(out).expect("utf8 output")
    }

    #[tokio::test]
    async fn test_should_add_list_and_find() {
        let out = run_session("1\n978-0-14-032872-1\n1\n9780140328721\n3\n4\n9780140328721\n4\nmissing\n6\n").await;
        assert!(out.contains("Added: Matilda by Roald Dahl (ISBN: 9780140328721)"));
        assert!(out.contains("Error: Book with ISBN 9780140328721 already exists"));
        assert!(out.contains("- Matilda by Roald Dahl (ISBN: 9780140328721)"));
        assert!(out.contains("ISBN: Not found\n"));
        assert!(out.ends_with("Exiting...\n"));
    }

    #[tokio::test]
    async fn test_should_remove_books() {
        let out = run_session("1\n9780140328721\n1\n9780345339683\n2\n9780140328721\n2\n9780140328721\n5\n9780345339683, 1\n6\n").await;
        assert!(out.contains("Added: The Hobbit by Unknown (ISBN: 9780345339683)"));
        assert!(out.contains("ISBN to remove: Removed\n"));
        assert!(out.contains("ISBN to remove: Not found\n"));
        assert!(out.contains("Removed: 1, Not found: 1"));
    }

    #[tokio::test]
    async fn test_should_report_invalid_choice_and_exit_on_eof() {
        let out = run_session("9\n1\n12345\n").await;
        assert!(out.contains("Invalid choice"));
        assert!(out.contains("Error: "));
        assert!(!out.contains("Exiting..."));
    }
}
