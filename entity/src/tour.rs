//! Tour entity model.
//!
//! Tours are the primary bookable resource. The `images` and `start_dates`
//! columns are stored as JSON arrays; `slug` is derived from `name` by the
//! repository layer on every write, and `secret_tour` rows are hidden from
//! default reads by a standing filter applied at the query call sites.

use sea_orm::entity::prelude::*;
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tour")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
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
    #[sea_orm(column_type = "Json")]
    pub images: StringList,
    pub created_at: DateTimeUtc,
    #[sea_orm(column_type = "Json")]
    pub start_dates: DateList,
    pub secret_tour: bool,
}

/// Tour difficulty rating, stored as a lowercase string.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "difficult")]
    Difficult,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Difficult => "difficult",
        }
    }
}

/// JSON-backed list of strings (tour image paths).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct StringList(pub Vec<String>);

/// JSON-backed list of UTC datetimes (tour start dates).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct DateList(pub Vec<DateTimeUtc>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
