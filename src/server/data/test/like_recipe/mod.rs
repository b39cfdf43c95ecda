use crate::server::data::like_recipe::LikeRecipeRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

/// Tests saving a recipe and reading it back.
///
/// Expected: Ok with the same JSON value and visible status
#[tokio::test]
async fn saves_recipe_json() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let recipe = json!({"title": "Omelette", "steps": ["beat eggs", "fry"]});

    let repo = LikeRecipeRepository::new(db);
    let saved = repo.create(user.id, &recipe).await?;

    assert_eq!(saved.recipe, recipe);
    assert!(saved.status);

    let listed = repo.get_visible_by_user(user.id).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].recipe, recipe);

    Ok(())
}

/// Tests soft deleting saved recipes.
///
/// Expected: hidden recipe excluded, second delete and foreign delete return false
#[tokio::test]
async fn soft_delete_hides_recipe() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let kept = factory::create_like_recipe(db, user.id, json!({"title": "Soup"})).await?;
    let hidden = factory::create_like_recipe(db, user.id, json!({"title": "Stew"})).await?;

    let repo = LikeRecipeRepository::new(db);

    assert!(!repo.soft_delete(hidden.id, stranger.id).await?);
    assert!(repo.soft_delete(hidden.id, user.id).await?);
    assert!(!repo.soft_delete(hidden.id, user.id).await?);

    let listed = repo.get_visible_by_user(user.id).await?;
    let ids: Vec<i32> = listed.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![kept.id]);

    Ok(())
}
