use super::*;

/// Tests account recovery lookup by name, birth and phone digest.
///
/// Expected: Ok(Some) for matching identity
#[tokio::test]
async fn finds_user_by_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(local_user_params("find@example.com", "finder"))
        .await?;

    let found = repo
        .find_by_identity("Cook", created.birth, "digest-finder")
        .await?;

    assert_eq!(found.map(|u| u.email), Some("find@example.com".to_string()));

    Ok(())
}

/// Tests that a mismatching birth date yields no user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_wrong_birth() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(local_user_params("find@example.com", "finder"))
        .await?;

    let found = repo
        .find_by_identity(
            "Cook",
            NaiveDate::from_ymd_opt(2001, 1, 1).unwrap(),
            "digest-finder",
        )
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that withdrawn accounts cannot be recovered.
///
/// Expected: Ok(None) for an inactive user
#[tokio::test]
async fn ignores_inactive_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let created = repo
        .create(local_user_params("gone@example.com", "gone"))
        .await?;
    repo.set_status(created.id, UserStatus::Inactive).await?;

    let found = repo
        .find_by_identity("Cook", created.birth, "digest-gone")
        .await?;

    assert!(found.is_none());

    Ok(())
}
