//! Integration tests for the PostgreSQL credential store

mod common;

use appstore_backend::repositories::{
    NewUser, PgUserStore, ProfileUpdate, StoreError, UserStore,
};

async fn store() -> PgUserStore {
    let app = common::TestApp::new().await;
    PgUserStore::new(app.pool.clone())
}

fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$fake".to_string(),
        display_name: None,
        email: None,
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_find() {
    let store = store().await;
    let username = common::unique_username("store");

    let created = store.create(new_user(&username)).await.unwrap();
    let found = store.find_by_username(&username).await.unwrap().unwrap();

    assert_eq!(found.id, created.id);
    assert!(store.find_by_id(created.id).await.unwrap().is_some());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_username() {
    let store = store().await;
    let username = common::unique_username("dup");

    store.create(new_user(&username)).await.unwrap();
    let result = store.create(new_user(&username)).await;

    assert!(matches!(result, Err(StoreError::Duplicate(_))));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_unknown_user_returns_none() {
    let store = store().await;
    let result = store
        .update_profile(uuid::Uuid::new_v4(), ProfileUpdate::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_ping() {
    assert!(store().await.ping().await.is_ok());
}
