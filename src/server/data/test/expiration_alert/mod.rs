use crate::server::data::expiration_alert::ExpirationAlertRepository;
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests which alerts count as due.
///
/// Expected: Ok with past and today's unread alerts, excluding future and read ones
#[tokio::test]
async fn returns_due_unread_alerts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, category, ingredient) =
        factory::helpers::create_ingredient_with_dependencies(db).await?;
    let today = chrono::Utc::now().date_naive();

    let past = factory::create_alert(db, &ingredient, today - Duration::days(1)).await?;
    let due = factory::create_alert(db, &ingredient, today).await?;
    factory::create_alert(db, &ingredient, today + Duration::days(1)).await?;

    let other = factory::create_ingredient(db, user.id, category.id).await?;
    let read = factory::create_alert(db, &other, today).await?;

    let repo = ExpirationAlertRepository::new(db);
    assert!(repo.mark_read(read.id, user.id).await?);

    let alerts = repo.get_due_unread(user.id, today).await?;
    let ids: Vec<i32> = alerts.iter().map(|a| a.id).collect();

    assert_eq!(ids, vec![past.id, due.id]);
    assert_eq!(alerts[0].ingredient_name, ingredient.ingredient_name);
    assert_eq!(alerts[0].expiration_date, ingredient.expiration_date);

    Ok(())
}

/// Tests marking another user's alert as read.
///
/// Expected: Ok(false) and the alert stays due for its owner
#[tokio::test]
async fn mark_read_is_scoped_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, ingredient) = factory::helpers::create_ingredient_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;
    let today = chrono::Utc::now().date_naive();
    let alert = factory::create_alert(db, &ingredient, today).await?;

    let repo = ExpirationAlertRepository::new(db);

    assert!(!repo.mark_read(alert.id, stranger.id).await?);
    assert_eq!(repo.get_due_unread(owner.id, today).await?.len(), 1);

    Ok(())
}
