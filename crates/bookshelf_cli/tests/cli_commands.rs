use std::io::Write;
use std::process::{Command, Output, Stdio};

fn bookshelf(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .args(["--latency-ms", "0"])
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn list_prints_sample_catalog() {
    let output = bookshelf(&["list"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("4 book(s):"));
    assert!(text.contains("Clean Code by Robert C. Martin (2008)"));
}

#[test]
fn import_reports_summary_and_row_errors() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "title,author,publishedYear\nDune,Frank Herbert,1965\n,NoTitle,2000\nBadYear,Someone,abc"
    )
    .unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let output = bookshelf(&["--empty", "import", path]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.contains("Successfully imported 1 books"));
    assert!(text.contains("Row 2: Title is required"));
    assert!(text.contains("Row 3: Published year must be a positive number"));
    assert!(text.contains("Dune by Frank Herbert (1965)"));
}

#[test]
fn import_json_uses_external_field_names() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "title,author,publishedYear\nDune,Frank Herbert,1965").unwrap();
    file.flush().unwrap();

    let path = file.path().to_str().unwrap();
    let output = bookshelf(&["--empty", "--json", "import", path]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["addedCount"], 1);
    assert_eq!(json["errors"], serde_json::json!([]));
}

#[test]
fn import_rejects_non_csv_extension() {
    let output = bookshelf(&["import", "books.txt"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid file type: please select a CSV file"));
}

#[test]
fn add_rejects_blank_author() {
    let output = bookshelf(&["add", "--title", "Dune", "--author", " ", "--year", "1965"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("add failed"));
    assert!(stderr.contains("Author is required"));
}

#[test]
fn shell_reports_failed_operation_and_keeps_going() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bookshelf"))
        .args(["--latency-ms", "0", "--empty", "shell"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"add Dune,,1965\nadd Dune,Frank Herbert,1965\nlist\nquit\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("add failed: Author is required"));
    let text = stdout(&output);
    assert!(text.contains("1 book(s):"));
    assert!(text.contains("Dune by Frank Herbert (1965)"));
}
