//! Domain model for tours, decoupled from both the database rows and the
//! wire DTOs.

use sea_orm::prelude::DateTimeUtc;

use entity::tour::Difficulty;

use crate::dto::tour::TourDto;

/// A tour as the service layer sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub duration: i32,
    pub max_group_size: i32,
    pub difficulty: Difficulty,
    pub ratings_average: f64,
    pub ratings_quantity: i32,
    pub price: f64,
    pub price_discount: f64,
    pub summary: String,
    pub description: Option<String>,
    pub image_cover: String,
    pub images: Vec<String>,
    pub created_at: DateTimeUtc,
    pub start_dates: Vec<DateTimeUtc>,
    pub secret_tour: bool,
}

impl Tour {
    pub fn from_entity(entity: entity::tour::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            duration: entity.duration,
            max_group_size: entity.max_group_size,
            difficulty: entity.difficulty,
            ratings_average: entity.ratings_average,
            ratings_quantity: entity.ratings_quantity,
            price: entity.price,
            price_discount: entity.price_discount,
            summary: entity.summary,
            description: entity.description,
            image_cover: entity.image_cover,
            images: entity.images.0,
            created_at: entity.created_at,
            start_dates: entity.start_dates.0,
            secret_tour: entity.secret_tour,
        }
    }

    /// Duration expressed in weeks; derived, never stored.
    pub fn duration_weeks(&self) -> f64 {
        f64::from(self.duration) / 7.0
    }

    pub fn into_dto(self) -> TourDto {
        let duration_weeks = self.duration_weeks();
        TourDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            duration_weeks,
            duration: self.duration,
            max_group_size: self.max_group_size,
            difficulty: self.difficulty,
            ratings_average: self.ratings_average,
            ratings_quantity: self.ratings_quantity,
            price: self.price,
            price_discount: self.price_discount,
            summary: self.summary,
            description: self.description,
            image_cover: self.image_cover,
            images: self.images,
            created_at: self.created_at,
            start_dates: self.start_dates,
        }
    }
}

/// Validated parameters for creating a tour.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTourParams {
    pub name: String,
    pub duration: i32,
    pub max_group_size: i32,
    pub difficulty: Difficulty,
    pub ratings_average: Option<f64>,
    pub ratings_quantity: Option<i32>,
    pub price: f64,
    pub price_discount: Option<f64>,
    pub summary: String,
    pub description: Option<String>,
    pub image_cover: String,
    pub images: Vec<String>,
    pub start_dates: Vec<DateTimeUtc>,
    pub secret_tour: bool,
}

/// Validated parameters for patching a tour; `None` means leave unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTourParams {
    pub name: Option<String>,
    pub duration: Option<i32>,
    pub max_group_size: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub ratings_average: Option<f64>,
    pub ratings_quantity: Option<i32>,
    pub price: Option<f64>,
    pub price_discount: Option<f64>,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub image_cover: Option<String>,
    pub images: Option<Vec<String>>,
    pub start_dates: Option<Vec<DateTimeUtc>>,
    pub secret_tour: Option<bool>,
}

/// Per-difficulty aggregates over the visible, well-rated catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct TourStats {
    pub difficulty: Difficulty,
    pub num_tours: i64,
    pub num_ratings: i64,
    pub avg_rating: f64,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

/// One month of the yearly starting plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyPlanEntry {
    pub month: u32,
    pub num_tour_starts: usize,
    pub tours: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_tour(duration: i32) -> Tour {
        Tour {
            id: 1,
            name: "The Forest Hiker".to_string(),
            slug: "the-forest-hiker".to_string(),
            duration,
            max_group_size: 25,
            difficulty: Difficulty::Easy,
            ratings_average: 4.5,
            ratings_quantity: 0,
            price: 397.0,
            price_discount: 0.0,
            summary: "A summary".to_string(),
            description: None,
            image_cover: "cover.jpg".to_string(),
            images: Vec::new(),
            created_at: Utc::now(),
            start_dates: Vec::new(),
            secret_tour: false,
        }
    }

    #[test]
    fn dto_carries_derived_duration_weeks() {
        let tour = sample_tour(14);

        assert_eq!(tour.duration_weeks(), 2.0);
        assert_eq!(tour.into_dto().duration_weeks, 2.0);
    }

    #[test]
    fn duration_weeks_is_fractional() {
        assert_eq!(sample_tour(10).duration_weeks(), 10.0 / 7.0);
    }
}
