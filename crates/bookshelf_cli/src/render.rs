//! Human and JSON rendering of catalog results.

use anyhow::Result;
use bookshelf_core::{Book, ImportResult};
use serde::Serialize;
use std::fmt::Display;

/// Output sink selected by `--json`.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn books(&self, books: &[Book]) -> Result<()> {
        if self.json {
            return print_json(books);
        }
        if books.is_empty() {
            println!("No books in the catalog.");
            return Ok(());
        }
        println!("{} book(s):", books.len());
        for book in books {
            println!("  {}", book_line(book));
        }
        Ok(())
    }

    pub fn book(&self, book: &Book) -> Result<()> {
        if self.json {
            return print_json(book);
        }
        println!("{}", book_line(book));
        Ok(())
    }

    /// Prints the import summary followed by one entry per rejected row.
    pub fn import_result(&self, result: &ImportResult) -> Result<()> {
        if self.json {
            return print_json(result);
        }

        for line in import_summary(result) {
            println!("{line}");
        }
        Ok(())
    }

    pub fn message(&self, message: &str) {
        if !self.json {
            println!("{message}");
        }
    }

    /// Reports a failed single-record operation as `<operation> failed: <reason>`.
    pub fn failure(&self, operation: &str, reason: impl Display) {
        eprintln!("{operation} failed: {reason}");
    }
}

fn book_line(book: &Book) -> String {
    format!(
        "{}  {} by {} ({})",
        book.id, book.title, book.author, book.published_year
    )
}

/// Summary line, then one `Row R: message` entry per rejected row.
fn import_summary(result: &ImportResult) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + result.errors.len() * 2);
    if result.added_count > 0 {
        lines.push(format!("Successfully imported {} books", result.added_count));
    } else {
        lines.push("No books were imported. Please check the errors.".to_string());
    }

    if !result.is_clean() {
        lines.push(format!("Import errors ({}):", result.errors.len()));
        for error in &result.errors {
            lines.push(format!("  Row {}: {}", error.row, error.message));
            if let Some(data) = &error.data {
                lines.push(format!("    > {data}"));
            }
        }
    }
    lines
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
