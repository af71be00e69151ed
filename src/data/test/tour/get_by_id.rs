use super::*;

/// Tests finding a visible tour by ID.
///
/// Expected: Ok(Some) with matching fields
#[tokio::test]
async fn finds_visible_tour() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tour::TourFactory::new(db).name("The Forest Hiker").build().await?;

    let repo = TourRepository::new(db);
    let tour = repo.find_by_id(created.id).await?;

    assert!(tour.is_some());
    assert_eq!(tour.unwrap().name, "The Forest Hiker");

    Ok(())
}

/// Tests that a missing ID returns None.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TourRepository::new(db);
    let tour = repo.find_by_id(999999).await?;

    assert!(tour.is_none());

    Ok(())
}

/// Tests that secret tours are invisible to single-document reads.
///
/// Expected: Ok(None) even though the row exists
#[tokio::test]
async fn returns_none_for_secret_tour() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tour::TourFactory::new(db).secret_tour(true).build().await?;

    let repo = TourRepository::new(db);
    let tour = repo.find_by_id(created.id).await?;

    assert!(tour.is_none());

    Ok(())
}
