//! Wire representations of tours and their derived reports.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use entity::tour::Difficulty;

/// A tour document as serialized to clients.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub duration: i32,
    pub duration_weeks: f64,
    pub max_group_size: i32,
    #[schema(value_type = String)]
    pub difficulty: Difficulty,
    pub ratings_average: f64,
    pub ratings_quantity: i32,
    pub price: f64,
    pub price_discount: f64,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub image_cover: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub start_dates: Vec<DateTime<Utc>>,
}

#[derive(Serialize, ToSchema)]
pub struct TourData {
    #[schema(value_type = Object)]
    pub tour: serde_json::Value,
}

/// Tours are serialized to plain JSON values so that a validated field
/// selection can be applied before they hit the wire.
#[derive(Serialize, ToSchema)]
pub struct ToursData {
    #[schema(value_type = Vec<Object>)]
    pub tours: Vec<serde_json::Value>,
}

/// Per-difficulty aggregate row of the stats report.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TourStatsDto {
    #[schema(value_type = String)]
    pub difficulty: Difficulty,
    pub num_tours: i64,
    pub num_ratings: i64,
    pub avg_rating: f64,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Serialize, ToSchema)]
pub struct StatsData {
    pub stats: Vec<TourStatsDto>,
}

/// One month of the yearly plan report.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPlanEntryDto {
    pub month: u32,
    pub num_tour_starts: usize,
    pub tours: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct PlanData {
    pub plan: Vec<MonthlyPlanEntryDto>,
}
