//! Tour factory for creating test tour entities.
//!
//! This module provides factory methods for creating tour entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{prelude::DateTimeUtc, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use entity::tour::{DateList, Difficulty, StringList};

/// Factory for creating test tours with customizable fields.
///
/// Provides a builder pattern for creating tour entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::tour::TourFactory;
///
/// let tour = TourFactory::new(&db)
///     .name("The Forest Hiker")
///     .difficulty(Difficulty::Difficult)
///     .price(997.0)
///     .build()
///     .await?;
/// ```
pub struct TourFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: Option<String>,
    duration: i32,
    max_group_size: i32,
    difficulty: Difficulty,
    ratings_average: f64,
    ratings_quantity: i32,
    price: f64,
    price_discount: f64,
    summary: String,
    description: Option<String>,
    image_cover: String,
    images: Vec<String>,
    start_dates: Vec<DateTimeUtc>,
    secret_tour: bool,
}

impl<'a> TourFactory<'a> {
    /// Creates a new TourFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Tour {id}"` where id is auto-incremented
    /// - duration: `5`, max_group_size: `25`, difficulty: `easy`
    /// - ratings_average: `4.5`, ratings_quantity: `0`
    /// - price: `397.0`, price_discount: `0.0`
    /// - summary: `"Summary for tour {id}"`, image_cover: `"tour-{id}-cover.jpg"`
    /// - secret_tour: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `TourFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Tour {}", id),
            slug: None,
            duration: 5,
            max_group_size: 25,
            difficulty: Difficulty::Easy,
            ratings_average: 4.5,
            ratings_quantity: 0,
            price: 397.0,
            price_discount: 0.0,
            summary: format!("Summary for tour {}", id),
            description: None,
            image_cover: format!("tour-{}-cover.jpg", id),
            images: Vec::new(),
            start_dates: Vec::new(),
            secret_tour: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Overrides the slug; defaults to a lowercased, hyphenated name.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    pub fn max_group_size(mut self, max_group_size: i32) -> Self {
        self.max_group_size = max_group_size;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn ratings_average(mut self, ratings_average: f64) -> Self {
        self.ratings_average = ratings_average;
        self
    }

    pub fn ratings_quantity(mut self, ratings_quantity: i32) -> Self {
        self.ratings_quantity = ratings_quantity;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn price_discount(mut self, price_discount: f64) -> Self {
        self.price_discount = price_discount;
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn start_dates(mut self, start_dates: Vec<DateTimeUtc>) -> Self {
        self.start_dates = start_dates;
        self
    }

    pub fn secret_tour(mut self, secret_tour: bool) -> Self {
        self.secret_tour = secret_tour;
        self
    }

    /// Builds and inserts the tour entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::tour::Model)` - Created tour entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::tour::Model, DbErr> {
        let slug = self
            .slug
            .unwrap_or_else(|| self.name.to_lowercase().replace(' ', "-"));

        entity::tour::ActiveModel {
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(slug),
            duration: ActiveValue::Set(self.duration),
            max_group_size: ActiveValue::Set(self.max_group_size),
            difficulty: ActiveValue::Set(self.difficulty),
            ratings_average: ActiveValue::Set(self.ratings_average),
            ratings_quantity: ActiveValue::Set(self.ratings_quantity),
            price: ActiveValue::Set(self.price),
            price_discount: ActiveValue::Set(self.price_discount),
            summary: ActiveValue::Set(self.summary),
            description: ActiveValue::Set(self.description),
            image_cover: ActiveValue::Set(self.image_cover),
            images: ActiveValue::Set(StringList(self.images)),
            created_at: ActiveValue::Set(Utc::now()),
            start_dates: ActiveValue::Set(DateList(self.start_dates)),
            secret_tour: ActiveValue::Set(self.secret_tour),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a tour with default values.
///
/// Shorthand for `TourFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::tour::Model)` - Created tour entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_tour(db: &DatabaseConnection) -> Result<entity::tour::Model, DbErr> {
    TourFactory::new(db).build().await
}
