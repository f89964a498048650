//! Line-oriented interactive session.
//!
//! One store lives for the whole session, so ids printed by `list` stay
//! valid for `show`, `edit` and `delete`. Book fields are entered as a
//! single `title,author,year` argument.

use crate::ensure_csv_path;
use crate::render::Output;
use anyhow::Result;
use bookshelf_core::{BookFormData, BookId, BookRepository, BookService};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands:
  list
  show <id>
  add <title>,<author>,<year>
  edit <id> <title>,<author>,<year>
  delete <id>
  import <file.csv>
  help
  quit";

/// Parsed shell input line.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand {
    List,
    Show(BookId),
    Add(BookFormData),
    Edit(BookId, BookFormData),
    Delete(BookId),
    Import(String),
    Help,
    Quit,
}

pub async fn run<R: BookRepository>(service: &mut BookService<R>, output: &Output) -> Result<()> {
    output.message("bookshelf shell; type `help` for commands");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(message) => {
                output.failure("parse", message);
                continue;
            }
        };

        match command {
            ShellCommand::List => output.books(&service.list_books().await)?,
            ShellCommand::Show(id) => match service.get_book(id).await {
                Ok(book) => output.book(&book)?,
                Err(err) => output.failure("show", err),
            },
            ShellCommand::Add(data) => match service.create_book(data).await {
                Ok(book) => output.book(&book)?,
                Err(err) => output.failure("add", err),
            },
            ShellCommand::Edit(id, data) => match service.update_book(id, data).await {
                Ok(book) => output.book(&book)?,
                Err(err) => output.failure("edit", err),
            },
            ShellCommand::Delete(id) => match service.delete_book(id).await {
                Ok(()) => output.message(&format!("deleted {id}")),
                Err(err) => output.failure("delete", err),
            },
            ShellCommand::Import(path) => {
                let path = Path::new(&path);
                if let Err(err) = ensure_csv_path(path) {
                    output.failure("import", err);
                    continue;
                }
                let result = service.import_csv_file(path).await;
                output.import_result(&result)?;
            }
            ShellCommand::Help => output.message(HELP),
            ShellCommand::Quit => break,
        }
    }

    Ok(())
}

fn parse_command(line: &str) -> Result<ShellCommand, String> {
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(ShellCommand::List),
        "show" => parse_id(rest).map(ShellCommand::Show),
        "add" => parse_form(rest).map(ShellCommand::Add),
        "edit" => {
            let (id, fields) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: edit <id> <title>,<author>,<year>".to_string())?;
            Ok(ShellCommand::Edit(parse_id(id)?, parse_form(fields.trim())?))
        }
        "delete" | "rm" => parse_id(rest).map(ShellCommand::Delete),
        "import" if !rest.is_empty() => Ok(ShellCommand::Import(rest.to_string())),
        "import" => Err("usage: import <file.csv>".to_string()),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

fn parse_id(value: &str) -> Result<BookId, String> {
    BookId::parse_str(value.trim()).map_err(|_| format!("invalid book id `{}`", value.trim()))
}

// Same field rules as a form submit: trimmed text, unparseable year -> 0,
// left for the service to reject.
fn parse_form(value: &str) -> Result<BookFormData, String> {
    let fields: Vec<&str> = value.split(',').collect();
    let [title, author, year] = fields.as_slice() else {
        return Err("expected <title>,<author>,<year>".to_string());
    };
    Ok(BookFormData::new(
        title.trim(),
        author.trim(),
        year.trim().parse().unwrap_or(0),
    ))
}
