use super::*;

/// Tests that the list is newest first and skips hidden posts.
///
/// Expected: Ok with visible posts in reverse creation order
#[tokio::test]
async fn lists_visible_boards_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let first = factory::create_board(db, user.id).await?;
    factory::board::BoardFactory::new(db, user.id)
        .status(false)
        .build()
        .await?;
    let third = factory::create_board(db, user.id).await?;

    let repo = BoardRepository::new(db);
    let boards = repo
        .search(BoardSearchParams::new(0, 10, None, None))
        .await?;

    let ids: Vec<i32> = boards.iter().map(|b| b.board.id).collect();
    assert_eq!(ids, vec![third.id, first.id]);

    Ok(())
}

/// Tests filtering by title and by author nickname.
///
/// Expected: Ok with only matching posts
#[tokio::test]
async fn filters_by_title_and_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::user::UserFactory::new(db)
        .nickname("alice")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .nickname("bob")
        .build()
        .await?;
    let stew = factory::board::BoardFactory::new(db, alice.id)
        .title("Tofu stew")
        .build()
        .await?;
    let salad = factory::board::BoardFactory::new(db, bob.id)
        .title("Green salad")
        .build()
        .await?;

    let repo = BoardRepository::new(db);

    let by_title = repo
        .search(BoardSearchParams::new(0, 10, Some("stew".to_string()), None))
        .await?;
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].board.id, stew.id);

    let by_nickname = repo
        .search(BoardSearchParams::new(0, 10, None, Some("bob".to_string())))
        .await?;
    assert_eq!(by_nickname.len(), 1);
    assert_eq!(by_nickname[0].board.id, salad.id);
    assert_eq!(by_nickname[0].nickname, "bob");

    Ok(())
}

/// Tests skip and limit paging together with thumbnails.
///
/// Expected: Ok with one post per page and its first image as thumbnail
#[tokio::test]
async fn pages_results_with_thumbnail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let older = factory::create_board(db, user.id).await?;
    factory::board::create_image(db, older.id, "http://img/first.png").await?;
    factory::board::create_image(db, older.id, "http://img/second.png").await?;
    factory::create_board(db, user.id).await?;

    let repo = BoardRepository::new(db);
    let page = repo.search(BoardSearchParams::new(1, 1, None, None)).await?;

    assert_eq!(page.len(), 1);
    assert_eq!(page[0].board.id, older.id);
    assert_eq!(page[0].thumbnail.as_deref(), Some("http://img/first.png"));

    Ok(())
}
