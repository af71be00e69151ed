use super::*;

/// Tests creating a tour with minimal valid parameters.
///
/// Verifies that the repository inserts the tour, derives the slug from the
/// name, and applies the rating and discount defaults.
///
/// Expected: Ok with tour created
#[tokio::test]
async fn creates_tour_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TourRepository::new(db);
    let tour = repo.create(create_params("The Forest Hiker")).await?;

    assert_eq!(tour.name, "The Forest Hiker");
    assert_eq!(tour.slug, "the-forest-hiker");
    assert_eq!(tour.ratings_average, 4.5);
    assert_eq!(tour.ratings_quantity, 0);
    assert_eq!(tour.price_discount, 0.0);
    assert!(!tour.secret_tour);

    Ok(())
}

/// Tests creating a tour with all optional fields provided.
///
/// Expected: Ok with the provided values stored verbatim
#[tokio::test]
async fn creates_tour_with_optional_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mut params = create_params("The Sea Explorer");
    params.ratings_average = Some(4.8);
    params.ratings_quantity = Some(23);
    params.price_discount = Some(100.0);
    params.description = Some("A longer description".to_string());
    params.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
    params.secret_tour = true;

    let repo = TourRepository::new(db);
    let tour = repo.create(params).await?;

    assert_eq!(tour.ratings_average, 4.8);
    assert_eq!(tour.ratings_quantity, 23);
    assert_eq!(tour.price_discount, 100.0);
    assert_eq!(tour.description.as_deref(), Some("A longer description"));
    assert_eq!(tour.images.len(), 2);
    assert!(tour.secret_tour);

    Ok(())
}

/// Tests the unique constraint on tour names.
///
/// Expected: Err(DbErr) on the second insert with the same name
#[tokio::test]
async fn fails_for_duplicate_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TourRepository::new(db);
    repo.create(create_params("The Forest Hiker")).await?;
    let result = repo.create(create_params("The Forest Hiker")).await;

    assert!(result.is_err());

    Ok(())
}
