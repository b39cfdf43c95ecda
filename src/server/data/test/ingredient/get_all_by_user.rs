use super::*;

/// Tests that listing is scoped to the owner and sorted by expiration.
///
/// Expected: Ok with only the owner's rows, soonest expiration first
#[tokio::test]
async fn lists_owner_rows_by_expiration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let category = factory::create_category(db).await?;
    let today = chrono::Utc::now().date_naive();

    let late = factory::ingredient::IngredientFactory::new(db, owner.id, category.id)
        .ingredient_name("rice")
        .expiration_date(today + Duration::days(30))
        .build()
        .await?;
    let soon = factory::ingredient::IngredientFactory::new(db, owner.id, category.id)
        .ingredient_name("tofu")
        .expiration_date(today + Duration::days(2))
        .build()
        .await?;
    factory::create_ingredient(db, other.id, category.id).await?;

    let repo = IngredientRepository::new(db);
    let rows = repo.get_all_by_user(owner.id).await?;

    let ids: Vec<i32> = rows.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![soon.id, late.id]);

    let names = repo.get_names_by_user(owner.id).await?;
    assert_eq!(names, vec!["rice", "tofu"]);

    Ok(())
}

/// Tests fetching another user's ingredient.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_for_user_ignores_other_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_ingredient_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, _, ingredient) = factory::helpers::create_ingredient_with_dependencies(db).await?;
    let stranger = factory::create_user(db).await?;

    let repo = IngredientRepository::new(db);

    assert!(repo.find_for_user(ingredient.id, stranger.id).await?.is_none());
    assert!(repo.find_for_user(ingredient.id, owner.id).await?.is_some());

    Ok(())
}
