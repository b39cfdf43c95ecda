use super::*;

/// Tests that liking twice returns to the original state.
///
/// Expected: first toggle likes and increments, second unlikes and restores the count
#[tokio::test]
async fn toggling_twice_restores_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_author(db).await?;
    let fan = factory::create_user(db).await?;

    let repo = BoardRepository::new(db);

    let liked = repo.toggle_like(board.id, fan.id).await?;
    assert!(liked.liked);
    assert_eq!(liked.like_count, 1);
    assert_eq!(entity::prelude::BoardLike::find().count(db).await?, 1);

    let unliked = repo.toggle_like(board.id, fan.id).await?;
    assert!(!unliked.liked);
    assert_eq!(unliked.like_count, 0);
    assert_eq!(entity::prelude::BoardLike::find().count(db).await?, 0);

    let stored = repo.find_visible_by_id(board.id).await?.unwrap();
    assert_eq!(stored.like_count, 0);

    Ok(())
}

/// Tests that likes from different users add up.
///
/// Expected: like_count 2 after two users like the post
#[tokio::test]
async fn counts_likes_per_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_author(db).await?;
    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let repo = BoardRepository::new(db);
    repo.toggle_like(board.id, first.id).await?;
    let toggle = repo.toggle_like(board.id, second.id).await?;

    assert_eq!(toggle.like_count, 2);

    Ok(())
}

/// Tests that removing a like never drives the counter negative.
///
/// Expected: like_count 0 when the stored counter was already 0
#[tokio::test]
async fn count_never_goes_negative() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let board = factory::create_board(db, user.id).await?;

    let repo = BoardRepository::new(db);
    repo.toggle_like(board.id, user.id).await?;

    // Desynchronize the counter from the like rows
    let model = entity::prelude::Board::find_by_id(board.id).one(db).await?.unwrap();
    let mut active: entity::board::ActiveModel = model.into();
    active.like_count = sea_orm::ActiveValue::Set(0);
    sea_orm::ActiveModelTrait::update(active, db).await?;

    let toggle = repo.toggle_like(board.id, user.id).await?;
    assert!(!toggle.liked);
    assert_eq!(toggle.like_count, 0);

    Ok(())
}
