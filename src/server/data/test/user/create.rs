use super::*;

/// Tests creating a local user.
///
/// Verifies that the repository stores all identity fields and marks the account active.
///
/// Expected: Ok with active user
#[tokio::test]
async fn creates_active_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(local_user_params("cook@example.com", "cook"))
        .await?;

    assert_eq!(user.email, "cook@example.com");
    assert_eq!(user.nickname, "cook");
    assert_eq!(user.gender, Some(Gender::Female));
    assert_eq!(user.phone_digest.as_deref(), Some("digest-cook"));
    assert!(user.is_active());

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?;
    assert!(stored.is_some());

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err on the second insert with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(local_user_params("same@example.com", "first"))
        .await?;

    let result = repo
        .create(local_user_params("same@example.com", "second"))
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests the existence probes used before sign-up.
///
/// Expected: true for stored values, false otherwise
#[tokio::test]
async fn reports_existing_email_nickname_and_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(local_user_params("taken@example.com", "taken"))
        .await?;

    assert!(repo.email_exists("taken@example.com").await?);
    assert!(!repo.email_exists("free@example.com").await?);
    assert!(repo.nickname_exists("taken").await?);
    assert!(!repo.nickname_exists("free").await?);
    assert!(repo.phone_exists("digest-taken").await?);
    assert!(!repo.phone_exists("digest-free").await?);

    Ok(())
}
