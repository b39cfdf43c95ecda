use super::*;

/// Tests the detail view of a post.
///
/// Expected: Ok(Some) with author nickname and images in upload order
#[tokio::test]
async fn returns_detail_with_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .nickname("chef")
        .build()
        .await?;
    let board = factory::create_board(db, user.id).await?;
    factory::board::create_image(db, board.id, "http://img/1.png").await?;
    factory::board::create_image(db, board.id, "http://img/2.png").await?;

    let repo = BoardRepository::new(db);
    let detail = repo.get_detail(board.id).await?.unwrap();

    assert_eq!(detail.nickname, "chef");
    assert_eq!(detail.images, vec!["http://img/1.png", "http://img/2.png"]);

    Ok(())
}

/// Tests that soft deleted posts have no detail view.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_soft_deleted_board() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let board = factory::board::BoardFactory::new(db, user.id)
        .status(false)
        .build()
        .await?;

    let repo = BoardRepository::new(db);

    assert!(repo.get_detail(board.id).await?.is_none());
    assert!(repo.find_visible_by_id(board.id).await?.is_none());

    Ok(())
}
