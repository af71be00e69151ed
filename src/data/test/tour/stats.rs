use super::*;

/// Tests per-difficulty aggregation over well-rated tours.
///
/// Two easy tours at 4.5+ and one medium tour; verifies counts, sums, and
/// price extremes per group.
///
/// Expected: Ok with one row per difficulty, ordered by average price
#[tokio::test]
async fn aggregates_per_difficulty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db)
        .difficulty(Difficulty::Easy)
        .ratings_average(4.5)
        .ratings_quantity(10)
        .price(100.0)
        .build()
        .await?;
    factory::tour::TourFactory::new(db)
        .difficulty(Difficulty::Easy)
        .ratings_average(4.9)
        .ratings_quantity(30)
        .price(300.0)
        .build()
        .await?;
    factory::tour::TourFactory::new(db)
        .difficulty(Difficulty::Medium)
        .ratings_average(4.7)
        .ratings_quantity(5)
        .price(900.0)
        .build()
        .await?;

    let repo = TourRepository::new(db);
    let rows = repo.stats().await?;

    assert_eq!(rows.len(), 2);

    let easy = &rows[0];
    assert_eq!(easy.difficulty, "easy");
    assert_eq!(easy.num_tours, 2);
    assert_eq!(easy.num_ratings, 40);
    assert_eq!(easy.avg_price, 200.0);
    assert_eq!(easy.min_price, 100.0);
    assert_eq!(easy.max_price, 300.0);

    let medium = &rows[1];
    assert_eq!(medium.difficulty, "medium");
    assert_eq!(medium.num_tours, 1);

    Ok(())
}

/// Tests that poorly rated tours are excluded from the aggregates.
///
/// Expected: Ok with no rows, the only tour being rated below 4.5
#[tokio::test]
async fn excludes_low_rated_tours() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db).ratings_average(3.9).build().await?;

    let repo = TourRepository::new(db);
    let rows = repo.stats().await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests that secret tours are excluded from the aggregates.
///
/// Expected: Ok counting only the public tour
#[tokio::test]
async fn excludes_secret_tours() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db).ratings_average(4.8).build().await?;
    factory::tour::TourFactory::new(db)
        .ratings_average(4.8)
        .secret_tour(true)
        .build()
        .await?;

    let repo = TourRepository::new(db);
    let rows = repo.stats().await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].num_tours, 1);

    Ok(())
}
