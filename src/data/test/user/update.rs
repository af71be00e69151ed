use super::*;

/// Tests a partial update leaving other fields untouched.
///
/// Expected: Ok(Some) with role changed and email preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("ada@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateUserParams {
                role: Some(Role::Guide),
                ..UpdateUserParams::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.role, Role::Guide);
    assert_eq!(updated.email, "ada@example.com");

    Ok(())
}

/// Tests updating a missing user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let updated = repo
        .update(
            999999,
            UpdateUserParams {
                name: Some("Ghost".to_string()),
                ..UpdateUserParams::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
