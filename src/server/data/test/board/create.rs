use super::*;

/// Tests creating a post with two images.
///
/// Expected: Ok with visible board and both image rows stored
#[tokio::test]
async fn creates_board_with_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BoardRepository::new(db);
    let board = repo
        .create(CreateBoardParams {
            user_id: user.id,
            title: "Kimchi stew".to_string(),
            content: "Boil it".to_string(),
            image_urls: vec![
                "http://img/board/a.png".to_string(),
                "http://img/board/b.png".to_string(),
            ],
        })
        .await?;

    assert_eq!(board.title, "Kimchi stew");
    assert_eq!(board.like_count, 0);
    assert!(board.status);

    let image_count = entity::prelude::BoardImage::find().count(db).await?;
    assert_eq!(image_count, 2);

    Ok(())
}
