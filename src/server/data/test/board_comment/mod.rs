use crate::server::data::board_comment::BoardCommentRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating a comment.
///
/// Expected: Ok with visible comment carrying the author nickname
#[tokio::test]
async fn creates_comment_with_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, board) = factory::helpers::create_board_with_author(db).await?;
    let commenter = factory::user::UserFactory::new(db)
        .nickname("taster")
        .build()
        .await?;

    let repo = BoardCommentRepository::new(db);
    let comment = repo
        .create(board.id, commenter.id, "Looks tasty".to_string())
        .await?;

    assert_eq!(comment.nickname, "taster");
    assert_eq!(comment.content, "Looks tasty");
    assert!(comment.status);

    Ok(())
}

/// Tests that hidden comments are excluded and order is oldest first.
///
/// Expected: Ok with the two visible comments in creation order
#[tokio::test]
async fn lists_visible_comments_oldest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_board_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, board) = factory::helpers::create_board_with_author(db).await?;
    let first = factory::create_comment(db, board.id, user.id).await?;
    let hidden = factory::create_comment(db, board.id, user.id).await?;
    let third = factory::create_comment(db, board.id, user.id).await?;

    let repo = BoardCommentRepository::new(db);
    repo.soft_delete(hidden.id).await?;

    let comments = repo.get_visible_by_board(board.id).await?;
    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first.id, third.id]);

    let stored = repo.find_by_id(hidden.id).await?.unwrap();
    assert!(!stored.status);

    Ok(())
}
