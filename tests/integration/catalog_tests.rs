//! Catalog integration tests, driven through the public API only

use chrono::{Duration, Utc};
use library_catalog::{
    config::CatalogConfig,
    models::{Borrowable, CreateBook, CreateMember, Genre},
    AppError, Library,
};

fn seeded_library() -> Library {
    let mut library = Library::new(&CatalogConfig { overdue_days: 14 });
    library
        .add_item(CreateBook::new("B001", "1984", "George Orwell", Genre::Novel))
        .unwrap();
    library
        .add_item(CreateBook::new("B002", "The Raven", "Edgar Allan Poe", Genre::Poetry))
        .unwrap();
    library
        .add_item(CreateBook::new("B003", "Maus", "Art Spiegelman", Genre::Comics))
        .unwrap();
    library
        .add_item(CreateBook::new("B004", "Leaves of Grass", "Walt Whitman", Genre::Poetry))
        .unwrap();
    library.add_member(CreateMember::new(1, "John Doe")).unwrap();
    library.add_member(CreateMember::new(2, "Jane Roe")).unwrap();
    library
}

#[test]
fn test_borrow_scenario() {
    let mut library = seeded_library();

    library.checkout(1, "B001").unwrap();
    assert!(!library.get_item("B001").unwrap().is_available());

    let err = library.checkout(1, "B001").unwrap_err();
    assert!(matches!(err, AppError::ItemUnavailable(ref id) if id == "B001"));

    library.checkin(1, "B001").unwrap();
    assert!(library.get_item("B001").unwrap().is_available());

    let err = library.checkin(1, "B001").unwrap_err();
    assert!(matches!(err, AppError::ItemNotBorrowed(ref id) if id == "B001"));
}

#[test]
fn test_checkout_checkin_round_trip() {
    let mut library = seeded_library();
    let item_before = library.get_item("B002").unwrap().clone();
    let member_before = library.get_member(2).unwrap().clone();

    library.checkout(2, "B002").unwrap();
    assert!(library.get_item("B002").unwrap().borrowed_at.is_some());
    assert!(library.get_member(2).unwrap().holds("B002"));
    let held: Vec<&str> = library
        .member_items(2)
        .unwrap()
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(held, vec!["B002"]);

    library.checkin(2, "B002").unwrap();
    assert_eq!(library.get_item("B002").unwrap(), &item_before);
    assert_eq!(library.get_member(2).unwrap(), &member_before);
}

#[test]
fn test_failed_operations_leave_state_unchanged() {
    let mut library = seeded_library();
    library.checkout(1, "B001").unwrap();
    let snapshot = library.clone();

    assert!(matches!(library.checkout(2, "B001"), Err(AppError::ItemUnavailable(_))));
    assert!(matches!(library.checkin(1, "B002"), Err(AppError::ItemNotBorrowed(_))));
    assert!(matches!(library.checkout(99, "B002"), Err(AppError::MemberNotFound(99))));
    assert!(matches!(library.checkout(1, "B999"), Err(AppError::ItemNotFound(_))));
    assert!(matches!(library.checkin(99, "B001"), Err(AppError::MemberNotFound(99))));
    assert!(matches!(library.checkin(1, "B999"), Err(AppError::ItemNotFound(_))));

    assert_eq!(library.items(), snapshot.items());
    assert_eq!(library.members(), snapshot.members());
}

#[test]
fn test_find_by_category() {
    let library = seeded_library();

    let poetry: Vec<&str> = library
        .find_by_category(Genre::Poetry)
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(poetry, vec!["B002", "B004"]);

    for genre in Genre::ALL {
        assert!(library
            .find_by_category(genre)
            .iter()
            .all(|b| b.genre == genre));
    }
    assert!(library.find_by_category(Genre::Theater).is_empty());
}

#[test]
fn test_find_overdue() {
    let mut library = seeded_library();
    let now = Utc::now();

    library.checkout_at(1, "B001", now - Duration::days(30)).unwrap();
    library.checkout_at(1, "B002", now - Duration::days(3)).unwrap();
    library.checkout_at(2, "B004", now - Duration::days(15)).unwrap();

    let overdue: Vec<&str> = library
        .find_overdue_at(14, now)
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(overdue, vec!["B001", "B004"]);

    let overdue: Vec<&str> = library
        .find_overdue_at(20, now)
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(overdue, vec!["B001"]);

    assert_eq!(library.find_overdue_default().len(), 2);
    assert_eq!(
        library.display_overdue(14),
        "1984 by George Orwell - novel\nLeaves of Grass by Walt Whitman - poetry"
    );

    library.checkin(1, "B001").unwrap();
    assert_eq!(library.find_overdue_at(14, now).len(), 1);
}

#[test]
fn test_member_holdings_match_item_state() {
    let mut library = seeded_library();
    library.checkout(1, "B001").unwrap();
    library.checkout(1, "B003").unwrap();
    library.checkout(2, "B002").unwrap();
    library.checkin(1, "B001").unwrap();

    for member in library.members() {
        for book in library.member_items(member.id).unwrap() {
            assert!(!book.is_available());
        }
    }
    let held: usize = library
        .members()
        .iter()
        .map(|m| m.borrowed_items.len())
        .sum();
    let borrowed = library.items().iter().filter(|b| !b.is_available()).count();
    assert_eq!(held, borrowed);
}
