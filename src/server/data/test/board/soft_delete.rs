use super::*;

/// Tests soft deleting a post with images.
///
/// Expected: Ok with image URLs returned, post hidden and image rows removed
#[tokio::test]
async fn hides_board_and_returns_image_urls() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_author(db).await?;
    factory::board::create_image(db, board.id, "http://img/x.png").await?;

    let repo = BoardRepository::new(db);
    let urls = repo.soft_delete(board.id).await?;

    assert_eq!(urls, vec!["http://img/x.png"]);
    assert!(repo.find_visible_by_id(board.id).await?.is_none());

    let stored = entity::prelude::Board::find_by_id(board.id).one(db).await?.unwrap();
    assert!(!stored.status);
    assert_eq!(entity::prelude::BoardImage::find().count(db).await?, 0);

    Ok(())
}

/// Tests editing only the title.
///
/// Expected: Ok with new title and unchanged content
#[tokio::test]
async fn update_keeps_missing_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_author(db).await?;

    let repo = BoardRepository::new(db);
    let updated = repo
        .update(
            board.id,
            UpdateBoardParams {
                title: Some("Renamed".to_string()),
                content: None,
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.content, board.content);
    assert!(updated.updated_at >= board.updated_at);

    Ok(())
}
