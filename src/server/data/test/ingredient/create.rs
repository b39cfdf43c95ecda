use super::*;

/// Tests that creating an ingredient also schedules its alert.
///
/// Expected: Ok with category name resolved and one unread alert on the given date
#[tokio::test]
async fn creates_ingredient_with_alert() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let category = factory::ingredient_category::CategoryFactory::new(db)
        .name("dairy")
        .build()
        .await?;

    let repo = IngredientRepository::new(db);
    let ingredient = repo
        .create(CreateIngredientParams {
            user_id: user.id,
            ingredient_name: "milk".to_string(),
            category_id: category.id,
            purchase_date: date(2026, 3, 1),
            expiration_date: date(2026, 3, 8),
            alert_date: date(2026, 3, 6),
        })
        .await?;

    assert_eq!(ingredient.ingredient_name, "milk");
    assert_eq!(ingredient.category_name, "dairy");

    let alerts = entity::prelude::ExpirationAlert::find().all(db).await?;
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].ingredient_id, ingredient.id);
    assert_eq!(alerts[0].alert_date, date(2026, 3, 6));
    assert!(!alerts[0].is_read);

    Ok(())
}

/// Tests creating an ingredient for a missing category.
///
/// Expected: Err from the foreign key and no alert left behind
#[tokio::test]
async fn fails_for_missing_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = IngredientRepository::new(db);
    let result = repo
        .create(CreateIngredientParams {
            user_id: user.id,
            ingredient_name: "milk".to_string(),
            category_id: 9999,
            purchase_date: date(2026, 3, 1),
            expiration_date: date(2026, 3, 8),
            alert_date: date(2026, 3, 6),
        })
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::ExpirationAlert::find().count(db).await?, 0);

    Ok(())
}
