use super::*;

/// Tests fetching all users ordered by name.
///
/// Expected: Ok with users in name order
#[tokio::test]
async fn returns_users_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db).name("Charlie").build().await?;
    factory::user::UserFactory::new(db).name("Ada").build().await?;
    factory::user::UserFactory::new(db).name("Bob").build().await?;

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    let names: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Bob", "Charlie"]);

    Ok(())
}

/// Tests fetching from an empty table.
///
/// Expected: Ok with no users
#[tokio::test]
async fn returns_empty_for_no_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.get_all().await?;

    assert!(users.is_empty());

    Ok(())
}
