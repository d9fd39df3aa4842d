//! Repository and service tests against an in-memory SQLite database.

use std::sync::Arc;

use common::{AppError, DatabaseConfig};
use domain::{NewUser, PageRequest, ROWS_PER_PAGE};
use user_service_lib::infra::Database;
use user_service_lib::repository::{UserRepository, UserStore};
use user_service_lib::service::{UserManager, UserService};

async fn setup() -> (Database, UserStore) {
    let db = Database::connect(&DatabaseConfig::new("sqlite::memory:"))
        .await
        .expect("in-memory database");
    let store = UserStore::new(db.get_connection());
    (db, store)
}

#[tokio::test]
async fn test_create_assigns_id_and_timestamp() {
    let (_db, store) = setup().await;
    let before = chrono::Utc::now();

    let user = store
        .create("Alice".to_string(), Some("alice@example.com".to_string()))
        .await
        .unwrap();

    assert!(user.id > 0);
    assert_eq!(user.name, "Alice");
    assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    assert!(user.date_created >= before - chrono::Duration::seconds(1));

    let found = store.find_by_email("alice@example.com").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
}

#[tokio::test]
async fn test_find_by_email_missing() {
    let (_db, store) = setup().await;
    assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unique_constraint_rejects_duplicate_insert() {
    let (_db, store) = setup().await;
    store
        .create("First".to_string(), Some("dup@example.com".to_string()))
        .await
        .unwrap();

    // Bypasses the service pre-check, as a racing request would
    let result = store
        .create("Second".to_string(), Some("dup@example.com".to_string()))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
    let page = store
        .list_ordered_by_creation(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.meta.total, 1);
}

#[tokio::test]
async fn test_users_without_email_do_not_collide() {
    let (_db, store) = setup().await;
    store.create("Anon One".to_string(), None).await.unwrap();
    store.create("Anon Two".to_string(), None).await.unwrap();

    let page = store
        .list_ordered_by_creation(PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.meta.total, 2);
}

#[tokio::test]
async fn test_listing_is_paged_and_ordered() {
    let (_db, store) = setup().await;
    let names = ["A", "B", "C", "D", "E", "F"];
    for name in names {
        store
            .create(name.to_string(), Some(format!("{}@example.com", name.to_lowercase())))
            .await
            .unwrap();
    }

    let first = store
        .list_ordered_by_creation(PageRequest::new(1, ROWS_PER_PAGE))
        .await
        .unwrap();
    let first_names: Vec<_> = first.data.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(first_names, ["A", "B", "C", "D", "E"]);
    assert_eq!(first.next_page(), Some(2));
    assert_eq!(first.prev_page(), None);

    let second = store
        .list_ordered_by_creation(PageRequest::new(2, ROWS_PER_PAGE))
        .await
        .unwrap();
    let second_names: Vec<_> = second.data.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(second_names, ["F"]);
    assert_eq!(second.next_page(), None);
    assert_eq!(second.prev_page(), Some(1));

    // Same request, same answer
    let again = store
        .list_ordered_by_creation(PageRequest::new(1, ROWS_PER_PAGE))
        .await
        .unwrap();
    assert_eq!(again, first);
}

#[tokio::test]
async fn test_page_beyond_last_is_empty() {
    let (_db, store) = setup().await;
    store
        .create("Solo".to_string(), Some("solo@example.com".to_string()))
        .await
        .unwrap();

    let page = store
        .list_ordered_by_creation(PageRequest::new(9, ROWS_PER_PAGE))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_huge_page_number_is_empty() {
    let (_db, store) = setup().await;
    store
        .create("Solo".to_string(), Some("solo@example.com".to_string()))
        .await
        .unwrap();

    for page in [2_000_000_000_000_000_000, i64::MAX as u64] {
        let result = store
            .list_ordered_by_creation(PageRequest::new(page, ROWS_PER_PAGE))
            .await
            .unwrap();
        assert!(result.data.is_empty());
        assert_eq!(result.meta.total, 1);
        assert!(!result.has_next());
    }
}

#[tokio::test]
async fn test_service_rejects_second_registration() {
    let (db, store) = setup().await;
    let service = UserManager::new(Arc::new(store));

    service
        .add_user(NewUser::new("Xavier", "x@example.com"))
        .await
        .unwrap();
    let second = service
        .add_user(NewUser::new("Xena", "x@example.com"))
        .await;
    assert!(matches!(second, Err(AppError::Conflict(_))));

    let existing = service.find_user_by_email("x@example.com").await.unwrap();
    assert_eq!(existing.map(|u| u.name), Some("Xavier".to_string()));

    let page = service.list_users(PageRequest::default()).await.unwrap();
    assert_eq!(page.meta.total, 1);

    db.close().await.unwrap();
}
