use super::*;

/// Tests finding a user row by email.
///
/// Expected: Ok(Some) including the stored password digest
#[tokio::test]
async fn finds_user_with_digest() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .password("digest".to_string())
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("ada@example.com").await?.unwrap();

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.password, "digest");

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.find_by_email("nobody@example.com").await?;

    assert!(user.is_none());

    Ok(())
}
