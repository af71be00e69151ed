use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Value,
};

use entity::tour::{Column, DateList, StringList};

use crate::{
    model::tour::{CreateTourParams, Tour, UpdateTourParams},
    util::slug::slugify,
    validation::query::{RangeFilter, TourListQuery},
};

use super::visible;

/// Raw aggregate row of the stats query, one per difficulty.
#[derive(Debug, FromQueryResult)]
pub struct TourStatsRow {
    pub difficulty: String,
    pub num_tours: i64,
    pub num_ratings: i64,
    pub avg_rating: f64,
    pub avg_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

pub struct TourRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TourRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new tour.
    ///
    /// The slug is derived from the name here so it can never drift from it;
    /// optional rating fields fall back to the catalog defaults.
    ///
    /// # Arguments
    /// - `params`: Validated creation parameters
    ///
    /// # Returns
    /// - `Ok(Tour)`: The created tour
    /// - `Err(DbErr)`: Database error, including unique name violations
    pub async fn create(&self, params: CreateTourParams) -> Result<Tour, DbErr> {
        let slug = slugify(&params.name);

        let tour = entity::tour::ActiveModel {
            name: ActiveValue::Set(params.name),
            slug: ActiveValue::Set(slug),
            duration: ActiveValue::Set(params.duration),
            max_group_size: ActiveValue::Set(params.max_group_size),
            difficulty: ActiveValue::Set(params.difficulty),
            ratings_average: ActiveValue::Set(params.ratings_average.unwrap_or(4.5)),
            ratings_quantity: ActiveValue::Set(params.ratings_quantity.unwrap_or(0)),
            price: ActiveValue::Set(params.price),
            price_discount: ActiveValue::Set(params.price_discount.unwrap_or(0.0)),
            summary: ActiveValue::Set(params.summary),
            description: ActiveValue::Set(params.description),
            image_cover: ActiveValue::Set(params.image_cover),
            images: ActiveValue::Set(StringList(params.images)),
            created_at: ActiveValue::Set(Utc::now()),
            start_dates: ActiveValue::Set(DateList(params.start_dates)),
            secret_tour: ActiveValue::Set(params.secret_tour),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tour::from_entity(tour))
    }

    /// Runs a validated listing query against the visible catalog.
    ///
    /// The total is counted on the filtered set before pagination so the
    /// service layer can reject pages past the end.
    ///
    /// # Arguments
    /// - `query`: Validated, normalized listing query
    ///
    /// # Returns
    /// - `Ok((tours, total))`: One page of tours and the total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn list(&self, query: &TourListQuery) -> Result<(Vec<Tour>, u64), DbErr> {
        let mut select = entity::prelude::Tour::find().filter(visible());

        if let Some(difficulty) = &query.difficulty {
            select = select.filter(Column::Difficulty.eq(difficulty.clone()));
        }
        if let Some(filter) = &query.duration {
            select = select.filter(range_condition(Column::Duration, filter));
        }
        if let Some(filter) = &query.price {
            select = select.filter(range_condition(Column::Price, filter));
        }

        let total = select.clone().count(self.db).await?;

        let default_sort = ["price".to_string(), "-ratingsAverage".to_string()];
        let tokens = query.sort.as_deref().unwrap_or(&default_sort);
        for token in tokens {
            let (field, descending) = match token.strip_prefix('-') {
                Some(field) => (field, true),
                None => (token.as_str(), false),
            };
            if let Some(column) = sort_column(field) {
                select = if descending {
                    select.order_by_desc(column)
                } else {
                    select.order_by_asc(column)
                };
            }
        }

        let tours = select
            .offset(query.skip())
            .limit(query.limit)
            .all(self.db)
            .await?
            .into_iter()
            .map(Tour::from_entity)
            .collect();

        Ok((tours, total))
    }

    /// Finds one visible tour by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Tour))`: The tour
    /// - `Ok(None)`: No visible tour with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Tour>, DbErr> {
        let tour = entity::prelude::Tour::find_by_id(id)
            .filter(visible())
            .one(self.db)
            .await?;

        Ok(tour.map(Tour::from_entity))
    }

    /// Applies a partial update to a visible tour.
    ///
    /// A name change re-derives the slug in the same write.
    ///
    /// # Returns
    /// - `Ok(Some(Tour))`: The updated tour
    /// - `Ok(None)`: No visible tour with that ID
    /// - `Err(DbErr)`: Database error, including unique name violations
    pub async fn update(&self, id: i32, params: UpdateTourParams) -> Result<Option<Tour>, DbErr> {
        let Some(tour) = entity::prelude::Tour::find_by_id(id)
            .filter(visible())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = tour.into_active_model();
        if let Some(name) = params.name {
            active.slug = ActiveValue::Set(slugify(&name));
            active.name = ActiveValue::Set(name);
        }
        if let Some(duration) = params.duration {
            active.duration = ActiveValue::Set(duration);
        }
        if let Some(max_group_size) = params.max_group_size {
            active.max_group_size = ActiveValue::Set(max_group_size);
        }
        if let Some(difficulty) = params.difficulty {
            active.difficulty = ActiveValue::Set(difficulty);
        }
        if let Some(ratings_average) = params.ratings_average {
            active.ratings_average = ActiveValue::Set(ratings_average);
        }
        if let Some(ratings_quantity) = params.ratings_quantity {
            active.ratings_quantity = ActiveValue::Set(ratings_quantity);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(price_discount) = params.price_discount {
            active.price_discount = ActiveValue::Set(price_discount);
        }
        if let Some(summary) = params.summary {
            active.summary = ActiveValue::Set(summary);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(image_cover) = params.image_cover {
            active.image_cover = ActiveValue::Set(image_cover);
        }
        if let Some(images) = params.images {
            active.images = ActiveValue::Set(StringList(images));
        }
        if let Some(start_dates) = params.start_dates {
            active.start_dates = ActiveValue::Set(DateList(start_dates));
        }
        if let Some(secret_tour) = params.secret_tour {
            active.secret_tour = ActiveValue::Set(secret_tour);
        }

        let updated = active.update(self.db).await?;
        Ok(Some(Tour::from_entity(updated)))
    }

    /// Deletes a visible tour by ID.
    ///
    /// # Returns
    /// - `Ok(true)`: The tour was deleted
    /// - `Ok(false)`: No visible tour with that ID
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Tour::delete_many()
            .filter(Column::Id.eq(id))
            .filter(visible())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Computes per-difficulty aggregates over visible tours rated 4.5 or
    /// better, ordered by average price ascending.
    ///
    /// # Returns
    /// - `Ok(Vec<TourStatsRow>)`: One aggregate row per difficulty present
    /// - `Err(DbErr)`: Database error
    pub async fn stats(&self) -> Result<Vec<TourStatsRow>, DbErr> {
        let mut rows = entity::prelude::Tour::find()
            .select_only()
            .column(Column::Difficulty)
            .column_as(Column::Id.count(), "num_tours")
            .column_as(Column::RatingsQuantity.sum(), "num_ratings")
            .column_as(
                Expr::expr(Func::avg(Expr::col(Column::RatingsAverage))),
                "avg_rating",
            )
            .column_as(Expr::expr(Func::avg(Expr::col(Column::Price))), "avg_price")
            .column_as(Column::Price.min(), "min_price")
            .column_as(Column::Price.max(), "max_price")
            .filter(visible())
            .filter(Column::RatingsAverage.gte(4.5))
            .group_by(Column::Difficulty)
            .into_model::<TourStatsRow>()
            .all(self.db)
            .await?;

        rows.sort_by(|a, b| a.avg_price.total_cmp(&b.avg_price));
        Ok(rows)
    }

    /// Fetches every visible tour, for reports computed in the service layer.
    pub async fn all_visible(&self) -> Result<Vec<Tour>, DbErr> {
        let tours = entity::prelude::Tour::find()
            .filter(visible())
            .all(self.db)
            .await?
            .into_iter()
            .map(Tour::from_entity)
            .collect();

        Ok(tours)
    }
}

/// Maps a normalized sort field to its column.
fn sort_column(field: &str) -> Option<Column> {
    match field {
        "price" => Some(Column::Price),
        "ratingsAverage" => Some(Column::RatingsAverage),
        "duration" => Some(Column::Duration),
        _ => None,
    }
}

/// Translates a validated numeric filter into column comparisons.
fn range_condition<T>(column: Column, filter: &RangeFilter<T>) -> Condition
where
    T: Into<Value> + Copy,
{
    match filter {
        RangeFilter::Exact(value) => Condition::all().add(column.eq(*value)),
        RangeFilter::Range(bounds) => {
            let mut condition = Condition::all();
            if let Some(value) = bounds.gt {
                condition = condition.add(column.gt(value));
            }
            if let Some(value) = bounds.gte {
                condition = condition.add(column.gte(value));
            }
            if let Some(value) = bounds.lt {
                condition = condition.add(column.lt(value));
            }
            if let Some(value) = bounds.lte {
                condition = condition.add(column.lte(value));
            }
            condition
        }
    }
}
