use super::*;

/// Tests deleting an ingredient that has an alert.
///
/// Expected: Ok(true) with ingredient and alert rows gone
#[tokio::test]
async fn deletes_ingredient_and_alerts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, ingredient) = factory::helpers::create_ingredient_with_dependencies(db).await?;
    factory::create_alert(db, &ingredient, ingredient.purchase_date).await?;

    let repo = IngredientRepository::new(db);

    assert!(repo.delete_for_user(ingredient.id, owner.id).await?);
    assert_eq!(entity::prelude::Ingredient::find().count(db).await?, 0);
    assert_eq!(entity::prelude::ExpirationAlert::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting another user's ingredient.
///
/// Expected: Ok(false) and nothing removed
#[tokio::test]
async fn refuses_foreign_ingredient() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, ingredient) = factory::helpers::create_ingredient_with_dependencies(db).await?;
    factory::create_alert(db, &ingredient, ingredient.purchase_date).await?;
    let stranger = factory::create_user(db).await?;

    let repo = IngredientRepository::new(db);

    assert!(!repo.delete_for_user(ingredient.id, stranger.id).await?);
    assert_eq!(entity::prelude::Ingredient::find().count(db).await?, 1);
    assert_eq!(entity::prelude::ExpirationAlert::find().count(db).await?, 1);

    Ok(())
}
