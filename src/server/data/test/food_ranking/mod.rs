use crate::server::data::food_ranking::FoodRankingRepository;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

/// Tests counting repeated requests for the same dish.
///
/// Expected: count grows by one per call on a single row
#[tokio::test]
async fn increments_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoodRankingRepository::new(db);

    assert_eq!(repo.increment("bibimbap").await?.count, 1);
    assert_eq!(repo.increment("bibimbap").await?.count, 2);

    let top = repo.top(10).await?;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].count, 2);

    Ok(())
}

/// Tests ranking order and limit.
///
/// Expected: highest count first, ties by name, truncated to the limit
#[tokio::test]
async fn top_orders_by_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_recipe_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = FoodRankingRepository::new(db);
    for name in ["ramen", "curry", "ramen", "bulgogi", "ramen", "curry"] {
        repo.increment(name).await?;
    }

    let top = repo.top(2).await?;
    let names: Vec<&str> = top.iter().map(|r| r.food_name.as_str()).collect();

    assert_eq!(names, vec!["ramen", "curry"]);
    assert_eq!(top[0].count, 3);

    Ok(())
}
