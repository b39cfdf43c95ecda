use super::*;

/// Tests lookup of a linked provider account.
///
/// Expected: Ok(Some) only for the matching provider and id
#[tokio::test]
async fn finds_user_by_provider_and_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let linked = factory::user::UserFactory::new(db)
        .social(SocialAuth::Naver, "naver-1")
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let found = repo.find_by_social(SocialAuth::Naver, "naver-1").await?;
    assert_eq!(found.map(|u| u.id), Some(linked.id));

    let other_provider = repo.find_by_social(SocialAuth::Kakao, "naver-1").await?;
    assert!(other_provider.is_none());

    Ok(())
}
