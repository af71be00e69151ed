use super::*;

/// Tests creating a user.
///
/// Expected: Ok with the user stored and the default role applied
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(create_params("ada@example.com")).await?;

    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.role, Role::User);

    Ok(())
}

/// Tests the unique constraint on emails.
///
/// Expected: Err(DbErr) on the second insert with the same email
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(create_params("ada@example.com")).await?;
    let result = repo.create(create_params("ada@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
