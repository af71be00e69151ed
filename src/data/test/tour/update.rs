use super::*;

/// Tests a partial update leaving other fields untouched.
///
/// Expected: Ok(Some) with the price changed and the name preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tour::TourFactory::new(db)
        .name("The Forest Hiker")
        .price(397.0)
        .build()
        .await?;

    let repo = TourRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateTourParams {
                price: Some(450.0),
                ..UpdateTourParams::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.price, 450.0);
    assert_eq!(updated.name, "The Forest Hiker");

    Ok(())
}

/// Tests that renaming a tour re-derives its slug in the same write.
///
/// Expected: Ok(Some) with the slug tracking the new name
#[tokio::test]
async fn rederives_slug_on_rename() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tour::TourFactory::new(db).name("The Forest Hiker").build().await?;

    let repo = TourRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateTourParams {
                name: Some("The Snow Adventurer".to_string()),
                ..UpdateTourParams::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "The Snow Adventurer");
    assert_eq!(updated.slug, "the-snow-adventurer");

    Ok(())
}

/// Tests updating a missing tour.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TourRepository::new(db);
    let updated = repo
        .update(
            999999,
            UpdateTourParams {
                price: Some(450.0),
                ..UpdateTourParams::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}

/// Tests that secret tours cannot be updated through the public path.
///
/// Expected: Ok(None) even though the row exists
#[tokio::test]
async fn returns_none_for_secret_tour() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::tour::TourFactory::new(db).secret_tour(true).build().await?;

    let repo = TourRepository::new(db);
    let updated = repo
        .update(
            created.id,
            UpdateTourParams {
                price: Some(450.0),
                ..UpdateTourParams::default()
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
