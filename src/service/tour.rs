use std::collections::BTreeMap;

use chrono::Datelike;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::tour::TourRepository,
    error::AppError,
    model::tour::{CreateTourParams, MonthlyPlanEntry, Tour, TourStats, UpdateTourParams},
    validation::{tour::price_discount_error, query::TourListQuery, ValidationFailure},
};

use entity::tour::Difficulty;

pub struct TourService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TourService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new tour.
    ///
    /// # Arguments
    /// - `params`: Validated creation parameters
    ///
    /// # Returns
    /// - `Ok(Tour)`: The created tour
    /// - `Err(AppError)`: 400 for a duplicate name, otherwise database error
    pub async fn create(&self, params: CreateTourParams) -> Result<Tour, AppError> {
        let repo = TourRepository::new(self.db);

        repo.create(params).await.map_err(map_unique_name)
    }

    /// Runs a validated listing query.
    ///
    /// # Arguments
    /// - `query`: Validated, normalized listing query
    ///
    /// # Returns
    /// - `Ok((tours, total))`: One page of tours and the total matching count
    /// - `Err(AppError)`: 400 when a page past the first starts at or beyond
    ///   the total, otherwise database error
    pub async fn list(&self, query: &TourListQuery) -> Result<(Vec<Tour>, u64), AppError> {
        let repo = TourRepository::new(self.db);
        let (tours, total) = repo.list(query).await?;

        if query.page > 1 && query.skip() >= total {
            return Err(AppError::BadRequest("This page does not exist".to_string()));
        }

        Ok((tours, total))
    }

    /// Gets one visible tour by ID.
    ///
    /// # Returns
    /// - `Ok(Tour)`: The tour
    /// - `Err(AppError)`: 404 when no visible tour has that ID
    pub async fn get(&self, id: i32) -> Result<Tour, AppError> {
        let repo = TourRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No tour found with that ID".to_string()))
    }

    /// Applies a partial update to a tour.
    ///
    /// The discount rule is re-checked against the stored document after
    /// merging the patch, so a lone `priceDiscount` can still be rejected
    /// against the stored price.
    ///
    /// # Returns
    /// - `Ok(Tour)`: The updated tour
    /// - `Err(AppError)`: 400 for a failed discount check or duplicate name,
    ///   404 when no visible tour has that ID
    pub async fn update(&self, id: i32, params: UpdateTourParams) -> Result<Tour, AppError> {
        let repo = TourRepository::new(self.db);

        let current = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("No tour found with that ID".to_string()))?;

        let price = params.price.unwrap_or(current.price);
        let discount = params.price_discount.unwrap_or(current.price_discount);
        if discount > 0.0 {
            if let Some(error) = price_discount_error(price, discount) {
                return Err(ValidationFailure::in_body(vec![error]).into());
            }
        }

        repo.update(id, params)
            .await
            .map_err(map_unique_name)?
            .ok_or_else(|| AppError::NotFound("No tour found with that ID".to_string()))
    }

    /// Deletes a tour.
    ///
    /// # Returns
    /// - `Ok(())`: The tour was deleted
    /// - `Err(AppError)`: 404 when no visible tour has that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = TourRepository::new(self.db);

        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(AppError::NotFound("No tour found with that ID".to_string()))
        }
    }

    /// Computes per-difficulty aggregates over the well-rated catalog.
    pub async fn stats(&self) -> Result<Vec<TourStats>, AppError> {
        let repo = TourRepository::new(self.db);
        let rows = repo.stats().await?;

        let mut stats = Vec::with_capacity(rows.len());
        for row in rows {
            stats.push(TourStats {
                difficulty: parse_difficulty(&row.difficulty)?,
                num_tours: row.num_tours,
                num_ratings: row.num_ratings,
                avg_rating: row.avg_rating,
                avg_price: row.avg_price,
                min_price: row.min_price,
                max_price: row.max_price,
            });
        }

        Ok(stats)
    }

    /// Computes the monthly starting plan for one year.
    ///
    /// Groups every start date in the given year by month and reports, per
    /// month, how many tours start and which ones. Months with no starts are
    /// omitted; results are ordered by start count descending, month
    /// ascending on ties.
    ///
    /// # Arguments
    /// - `year`: Four-digit year to report on
    pub async fn monthly_plan(&self, year: i32) -> Result<Vec<MonthlyPlanEntry>, AppError> {
        let repo = TourRepository::new(self.db);
        let tours = repo.all_visible().await?;

        let mut months: BTreeMap<u32, Vec<String>> = BTreeMap::new();
        for tour in &tours {
            for date in &tour.start_dates {
                if date.year() == year {
                    months.entry(date.month()).or_default().push(tour.name.clone());
                }
            }
        }

        let mut plan: Vec<MonthlyPlanEntry> = months
            .into_iter()
            .map(|(month, tours)| MonthlyPlanEntry {
                month,
                num_tour_starts: tours.len(),
                tours,
            })
            .collect();
        plan.sort_by(|a, b| {
            b.num_tour_starts
                .cmp(&a.num_tour_starts)
                .then(a.month.cmp(&b.month))
        });

        Ok(plan)
    }
}

/// Translates the unique name constraint into a client error.
fn map_unique_name(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::BadRequest("A tour with this name already exists".to_string())
        }
        _ => AppError::DbErr(err),
    }
}

fn parse_difficulty(value: &str) -> Result<Difficulty, AppError> {
    match value {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "difficult" => Ok(Difficulty::Difficult),
        other => Err(AppError::InternalError(format!(
            "Unknown difficulty in aggregate row: {other}"
        ))),
    }
}
