use super::*;

use crate::validation::query::{RangeBounds, RangeFilter};

/// Tests that the default listing returns visible tours with the total count.
///
/// Expected: Ok with both tours and total 2
#[tokio::test]
async fn lists_visible_tours() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db).name("Tour A").build().await?;
    factory::tour::TourFactory::new(db).name("Tour B").build().await?;

    let repo = TourRepository::new(db);
    let (tours, total) = repo.list(&TourListQuery::default()).await?;

    assert_eq!(tours.len(), 2);
    assert_eq!(total, 2);

    Ok(())
}

/// Tests that secret tours are excluded from listings and the total.
///
/// Expected: Ok with only the public tour
#[tokio::test]
async fn excludes_secret_tours() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db).name("Public Tour").build().await?;
    factory::tour::TourFactory::new(db)
        .name("Secret Tour")
        .secret_tour(true)
        .build()
        .await?;

    let repo = TourRepository::new(db);
    let (tours, total) = repo.list(&TourListQuery::default()).await?;

    assert_eq!(tours.len(), 1);
    assert_eq!(total, 1);
    assert_eq!(tours[0].name, "Public Tour");

    Ok(())
}

/// Tests difficulty equality filtering.
///
/// Expected: Ok with only the medium tour
#[tokio::test]
async fn filters_by_difficulty() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db)
        .name("Easy Tour")
        .difficulty(Difficulty::Easy)
        .build()
        .await?;
    factory::tour::TourFactory::new(db)
        .name("Medium Tour")
        .difficulty(Difficulty::Medium)
        .build()
        .await?;

    let repo = TourRepository::new(db);
    let query = TourListQuery {
        difficulty: Some(Difficulty::Medium),
        ..TourListQuery::default()
    };
    let (tours, total) = repo.list(&query).await?;

    assert_eq!(total, 1);
    assert_eq!(tours[0].name, "Medium Tour");

    Ok(())
}

/// Tests inclusive and exclusive price range bounds.
///
/// With tours at 100, 200, and 300, `price[gte]=200&price[lt]=300` matches
/// only the 200 tour.
///
/// Expected: Ok with the single matching tour
#[tokio::test]
async fn applies_range_bounds_with_inclusivity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for (name, price) in [("Cheap", 100.0), ("Mid", 200.0), ("Dear", 300.0)] {
        factory::tour::TourFactory::new(db).name(name).price(price).build().await?;
    }

    let repo = TourRepository::new(db);
    let query = TourListQuery {
        price: Some(RangeFilter::Range(RangeBounds {
            gte: Some(200.0),
            lt: Some(300.0),
            ..RangeBounds::default()
        })),
        ..TourListQuery::default()
    };
    let (tours, total) = repo.list(&query).await?;

    assert_eq!(total, 1);
    assert_eq!(tours[0].name, "Mid");

    Ok(())
}

/// Tests exact-value filtering on duration.
///
/// Expected: Ok with only the 7-day tour
#[tokio::test]
async fn filters_by_exact_duration() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db).name("Short").duration(5).build().await?;
    factory::tour::TourFactory::new(db).name("Week").duration(7).build().await?;

    let repo = TourRepository::new(db);
    let query = TourListQuery {
        duration: Some(RangeFilter::Exact(7)),
        ..TourListQuery::default()
    };
    let (tours, _) = repo.list(&query).await?;

    assert_eq!(tours.len(), 1);
    assert_eq!(tours[0].name, "Week");

    Ok(())
}

/// Tests that normalized sort tokens are honored in order.
///
/// Expected: Ok with tours ordered by price descending
#[tokio::test]
async fn sorts_by_requested_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::tour::TourFactory::new(db).name("Cheap").price(100.0).build().await?;
    factory::tour::TourFactory::new(db).name("Dear").price(900.0).build().await?;
    factory::tour::TourFactory::new(db).name("Mid").price(500.0).build().await?;

    let repo = TourRepository::new(db);
    let query = TourListQuery {
        sort: Some(vec!["-price".to_string()]),
        ..TourListQuery::default()
    };
    let (tours, _) = repo.list(&query).await?;

    let names: Vec<&str> = tours.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Dear", "Mid", "Cheap"]);

    Ok(())
}

/// Tests offset/limit pagination.
///
/// Expected: Ok with the second page containing the remaining tour and the
/// total still covering the whole match set
#[tokio::test]
async fn paginates_with_total_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_tour_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for price in [100.0, 200.0, 300.0] {
        factory::tour::TourFactory::new(db).price(price).build().await?;
    }

    let repo = TourRepository::new(db);
    let query = TourListQuery {
        page: 2,
        limit: 2,
        ..TourListQuery::default()
    };
    let (tours, total) = repo.list(&query).await?;

    assert_eq!(tours.len(), 1);
    assert_eq!(total, 3);

    Ok(())
}
