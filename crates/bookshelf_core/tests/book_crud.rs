use bookshelf_core::{BookFormData, BookRepository, BookStore, InMemoryBookRepository, RepoError};
use std::collections::HashSet;
use uuid::Uuid;

fn dune() -> BookFormData {
    BookFormData::new("Dune", "Frank Herbert", 1965)
}

#[test]
fn create_and_get_roundtrip() {
    let mut store = BookStore::new();
    let mut repo = InMemoryBookRepository::new(&mut store);

    let created = repo.create_book(&dune());
    let loaded = repo.get_book(created.id).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.title, "Dune");
    assert!(!loaded.id.is_nil());
}

#[test]
fn created_ids_are_unique() {
    let mut store = BookStore::with_sample_catalog();
    let mut repo = InMemoryBookRepository::new(&mut store);

    for n in 0..200 {
        repo.create_book(&BookFormData::new(format!("Book {n}"), "Author", 2000));
    }

    let books = repo.list_books();
    let ids: HashSet<_> = books.iter().map(|book| book.id).collect();
    assert_eq!(books.len(), 204);
    assert_eq!(ids.len(), books.len());
}

#[test]
fn list_returns_insertion_order_and_is_stable() {
    let mut store = BookStore::new();
    let mut repo = InMemoryBookRepository::new(&mut store);

    let first = repo.create_book(&dune());
    let second = repo.create_book(&BookFormData::new("Emma", "Jane Austen", 1815));
    let third = repo.create_book(&BookFormData::new("Ulysses", "James Joyce", 1922));

    let listed = repo.list_books();
    let ids: Vec<_> = listed.iter().map(|book| book.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);
    assert_eq!(repo.list_books(), listed);
}

#[test]
fn update_changes_only_target_record() {
    let mut store = BookStore::with_sample_catalog();
    let mut repo = InMemoryBookRepository::new(&mut store);
    let before = repo.list_books();
    let target = before[1].clone();

    let updated = repo
        .update_book(target.id, &BookFormData::new("DDIA", "M. Kleppmann", 2018))
        .unwrap();
    assert_eq!(updated.id, target.id);
    assert_eq!(updated.title, "DDIA");
    assert_eq!(updated.author, "M. Kleppmann");
    assert_eq!(updated.published_year, 2018);

    let after = repo.list_books();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after.iter()) {
        assert_eq!(old.id, new.id);
        if old.id != target.id {
            assert_eq!(old, new);
        }
    }
    assert_eq!(after[1], updated);
}

#[test]
fn update_not_found_returns_not_found() {
    let mut store = BookStore::with_sample_catalog();
    let mut repo = InMemoryBookRepository::new(&mut store);
    let missing = Uuid::new_v4();

    let err = repo.update_book(missing, &dune()).unwrap_err();
    assert_eq!(err, RepoError::NotFound(missing));
    assert_eq!(repo.list_books().len(), 4);
}

#[test]
fn delete_removes_exactly_one_record() {
    let mut store = BookStore::with_sample_catalog();
    let mut repo = InMemoryBookRepository::new(&mut store);
    let target = repo.list_books()[2].id;

    repo.delete_book(target).unwrap();

    let remaining = repo.list_books();
    assert_eq!(remaining.len(), 3);
    assert!(remaining.iter().all(|book| book.id != target));
    assert_eq!(repo.get_book(target).unwrap_err(), RepoError::NotFound(target));
    assert_eq!(
        repo.delete_book(target).unwrap_err(),
        RepoError::NotFound(target)
    );
}

#[test]
fn repository_does_not_validate() {
    let mut store = BookStore::new();
    let mut repo = InMemoryBookRepository::new(&mut store);

    let created = repo.create_book(&BookFormData::new("", "", 0));
    assert_eq!(repo.get_book(created.id).unwrap().title, "");
}

#[test]
fn store_outlives_repository() {
    let mut store = BookStore::new();
    let id = {
        let mut repo = InMemoryBookRepository::new(&mut store);
        repo.create_book(&dune()).id
    };

    assert_eq!(store.len(), 1);
    assert!(store.contains(id));
    let repo = InMemoryBookRepository::new(&mut store);
    assert_eq!(repo.store().len(), 1);
}

#[test]
fn not_found_message_names_the_id() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    assert_eq!(
        RepoError::NotFound(id).to_string(),
        "book not found: 11111111-2222-4333-8444-555555555555"
    );
}
