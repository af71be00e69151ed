use crate::{
    data::tour::TourRepository,
    model::tour::{CreateTourParams, UpdateTourParams},
    validation::query::TourListQuery,
};
use entity::tour::Difficulty;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_id;
mod list;
mod stats;
mod update;

/// Minimal valid creation parameters for tests that just need a tour.
fn create_params(name: &str) -> CreateTourParams {
    CreateTourParams {
        name: name.to_string(),
        duration: 5,
        max_group_size: 25,
        difficulty: Difficulty::Easy,
        ratings_average: None,
        ratings_quantity: None,
        price: 397.0,
        price_discount: None,
        summary: "A test summary".to_string(),
        description: None,
        image_cover: "cover.jpg".to_string(),
        images: Vec::new(),
        start_dates: Vec::new(),
        secret_tour: false,
    }
}
