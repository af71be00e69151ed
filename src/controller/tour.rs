use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use entity::user::Role;

use crate::{
    controller::JsonBody,
    dto::{
        api::{CollectionDto, DocumentDto, MessageDto, ValidationErrorsDto},
        tour::{MonthlyPlanEntryDto, PlanData, StatsData, ToursData, TourData, TourStatsDto},
    },
    error::AppError,
    middleware::auth::AuthGuard,
    model::tour::Tour,
    service::tour::TourService,
    state::AppState,
    util::projection,
    validation::{
        query::{parse_tour_list_query, require_empty_query, TourListQuery},
        tour::{parse_create_body, parse_patch_body, parse_plan_year, parse_tour_id},
        ValidationFailure,
    },
};

pub static TOUR_TAG: &str = "tours";

/// Serializes one page of tours, applying the validated field selection.
fn project_tours(
    tours: Vec<Tour>,
    query: &TourListQuery,
) -> Result<Vec<serde_json::Value>, AppError> {
    let mut documents = Vec::with_capacity(tours.len());
    for tour in tours {
        let mut document = serde_json::to_value(tour.into_dto())?;
        if let Some(selection) = &query.fields {
            projection::apply(&mut document, selection);
        }
        documents.push(document);
    }
    Ok(documents)
}

#[utoipa::path(
    get,
    path = "/api/v1/tours",
    tag = TOUR_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 1)"),
        ("limit" = Option<u64>, Query, description = "Items per page (default: 10)"),
        ("sort" = Option<String>, Query, description = "Comma-separated field:direction list"),
        ("fields" = Option<String>, Query, description = "Comma-separated field selection"),
        ("difficulty" = Option<String>, Query, description = "Difficulty filter"),
    ),
    responses(
        (status = 200, description = "Successfully retrieved tours", body = CollectionDto<ToursData>),
        (status = 400, description = "Invalid query parameters", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_all_tours(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let query = parse_tour_list_query(&pairs).map_err(ValidationFailure::in_query)?;

    let (tours, _total) = TourService::new(&state.db).list(&query).await?;
    let documents = project_tours(tours, &query)?;

    Ok((
        StatusCode::OK,
        Json(CollectionDto::new(
            documents.len(),
            query.page,
            ToursData { tours: documents },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/tours/top-5",
    tag = TOUR_TAG,
    responses(
        (status = 200, description = "Successfully retrieved the top five tours", body = CollectionDto<ToursData>),
        (status = 400, description = "Unexpected query parameters", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_top_five_tours(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    require_empty_query(&pairs).map_err(ValidationFailure::in_query)?;

    let query = TourListQuery::top_five();
    let (tours, _total) = TourService::new(&state.db).list(&query).await?;
    let documents = project_tours(tours, &query)?;

    Ok((
        StatusCode::OK,
        Json(CollectionDto::new(
            documents.len(),
            query.page,
            ToursData { tours: documents },
        )),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/tours/{id}",
    tag = TOUR_TAG,
    params(
        ("id" = i32, Path, description = "Tour ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tour", body = DocumentDto<TourData>),
        (status = 400, description = "Invalid tour ID", body = ValidationErrorsDto),
        (status = 404, description = "Tour not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_tour_id(&id).map_err(ValidationFailure::in_params)?;

    let tour = TourService::new(&state.db).get(id).await?;
    let document = serde_json::to_value(tour.into_dto())?;

    Ok((
        StatusCode::OK,
        Json(DocumentDto::new(TourData { tour: document })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/tours",
    tag = TOUR_TAG,
    request_body = Object,
    responses(
        (status = 201, description = "Successfully created tour", body = DocumentDto<TourData>),
        (status = 400, description = "Invalid tour data", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn create_tour(
    State(state): State<AppState>,
    headers: HeaderMap,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin, Role::LeadGuide])
        .await?;

    let params = parse_create_body(body).map_err(ValidationFailure::in_body)?;

    let tour = TourService::new(&state.db).create(params).await?;
    let document = serde_json::to_value(tour.into_dto())?;

    Ok((
        StatusCode::CREATED,
        Json(DocumentDto::new(TourData { tour: document })),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/v1/tours/{id}",
    tag = TOUR_TAG,
    params(
        ("id" = i32, Path, description = "Tour ID")
    ),
    request_body = Object,
    responses(
        (status = 200, description = "Successfully updated tour", body = DocumentDto<TourData>),
        (status = 400, description = "Invalid tour data", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 404, description = "Tour not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn update_tour(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin, Role::LeadGuide])
        .await?;

    let id = parse_tour_id(&id).map_err(ValidationFailure::in_params)?;
    let params = parse_patch_body(body).map_err(ValidationFailure::in_body)?;

    let tour = TourService::new(&state.db).update(id, params).await?;
    let document = serde_json::to_value(tour.into_dto())?;

    Ok((
        StatusCode::OK,
        Json(DocumentDto::new(TourData { tour: document })),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/tours/{id}",
    tag = TOUR_TAG,
    params(
        ("id" = i32, Path, description = "Tour ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted tour"),
        (status = 400, description = "Invalid tour ID", body = ValidationErrorsDto),
        (status = 401, description = "Not authenticated", body = MessageDto),
        (status = 403, description = "Role not allowed", body = MessageDto),
        (status = 404, description = "Tour not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn delete_tour(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &headers)
        .require(&[Role::Admin, Role::LeadGuide])
        .await?;

    let id = parse_tour_id(&id).map_err(ValidationFailure::in_params)?;

    TourService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/tours/stats",
    tag = TOUR_TAG,
    responses(
        (status = 200, description = "Successfully computed tour statistics", body = DocumentDto<StatsData>),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_tour_stats(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let stats = TourService::new(&state.db).stats().await?;

    let stats = stats
        .into_iter()
        .map(|row| TourStatsDto {
            difficulty: row.difficulty,
            num_tours: row.num_tours,
            num_ratings: row.num_ratings,
            avg_rating: row.avg_rating,
            avg_price: row.avg_price,
            min_price: row.min_price,
            max_price: row.max_price,
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(DocumentDto::new(StatsData { stats })),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/tours/monthly-plan/{year}",
    tag = TOUR_TAG,
    params(
        ("year" = i32, Path, description = "Four-digit year")
    ),
    responses(
        (status = 200, description = "Successfully computed the monthly plan", body = DocumentDto<PlanData>),
        (status = 400, description = "Invalid year", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = MessageDto)
    ),
)]
pub async fn get_monthly_plan(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let year = parse_plan_year(&year).map_err(ValidationFailure::in_params)?;

    let plan = TourService::new(&state.db).monthly_plan(year).await?;

    let plan = plan
        .into_iter()
        .map(|entry| MonthlyPlanEntryDto {
            month: entry.month,
            num_tour_starts: entry.num_tour_starts,
            tours: entry.tours,
        })
        .collect();

    Ok((StatusCode::OK, Json(DocumentDto::new(PlanData { plan }))))
}
