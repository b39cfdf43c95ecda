use super::*;

/// Tests deactivating a user.
///
/// Expected: Ok with the stored status switched to inactive
#[tokio::test]
async fn deactivates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.set_status(user.id, UserStatus::Inactive).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.status, UserStatus::Inactive);
    assert!(!stored.is_active());

    Ok(())
}

/// Tests updating a password hash.
///
/// Expected: Ok with the new hash stored
#[tokio::test]
async fn updates_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "new-hash".to_string()).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.set_status(9999, UserStatus::Inactive).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
