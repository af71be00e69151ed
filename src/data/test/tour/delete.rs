use super::*;

/// Tests deleting an existing tour.
///
/// Expected: Ok(true) and the tour gone afterwards
#[tokio::test]
async fn deletes_existing_tour() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tour::create_tour(db).await?;

    let repo = TourRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(created.id).await?.is_none());

    Ok(())
}

/// Tests deleting a missing tour.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TourRepository::new(db);
    let deleted = repo.delete(999999).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that secret tours cannot be deleted through the public path.
///
/// Expected: Ok(false) even though the row exists
#[tokio::test]
async fn returns_false_for_secret_tour() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tour::TourFactory::new(db).secret_tour(true).build().await?;

    let repo = TourRepository::new(db);
    let deleted = repo.delete(created.id).await?;

    assert!(!deleted);

    Ok(())
}
