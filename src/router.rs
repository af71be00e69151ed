use axum::{
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{delete, get, patch, post},
    Json, Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, tour, user},
    dto::{
        api::{
            CollectionDto, DocumentDto, FieldErrorDto, MessageDto, SurfaceErrorsDto,
            ValidationErrorsDto,
        },
        tour::{MonthlyPlanEntryDto, PlanData, StatsData, TourData, TourStatsDto, ToursData},
        user::{UserData, UserDto, UsersData},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        tour::get_all_tours,
        tour::get_top_five_tours,
        tour::get_tour,
        tour::create_tour,
        tour::update_tour,
        tour::delete_tour,
        tour::get_tour_stats,
        tour::get_monthly_plan,
        user::get_all_users,
        user::get_user,
        user::create_user,
        user::update_user,
        user::delete_user,
        user::update_my_profile,
        user::delete_my_profile,
        auth::signup,
        auth::login,
        auth::forgot_password,
        auth::reset_password,
        auth::update_password,
    ),
    components(schemas(
        MessageDto,
        ValidationErrorsDto,
        SurfaceErrorsDto,
        FieldErrorDto,
        DocumentDto<TourData>,
        CollectionDto<ToursData>,
        DocumentDto<StatsData>,
        DocumentDto<PlanData>,
        DocumentDto<UserData>,
        CollectionDto<UsersData>,
        TourData,
        ToursData,
        TourStatsDto,
        StatsData,
        MonthlyPlanEntryDto,
        PlanData,
        UserDto,
        UserData,
        UsersData,
    )),
    tags(
        (name = "tours", description = "Tour catalog and reports"),
        (name = "users", description = "User administration and profiles"),
        (name = "auth", description = "Signup, login, and password flows"),
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/tours",
            get(tour::get_all_tours).post(tour::create_tour),
        )
        .route("/api/v1/tours/top-5", get(tour::get_top_five_tours))
        .route("/api/v1/tours/stats", get(tour::get_tour_stats))
        .route(
            "/api/v1/tours/monthly-plan/{year}",
            get(tour::get_monthly_plan),
        )
        .route(
            "/api/v1/tours/{id}",
            get(tour::get_tour)
                .patch(tour::update_tour)
                .delete(tour::delete_tour),
        )
        .route(
            "/api/v1/users",
            get(user::get_all_users).post(user::create_user),
        )
        .route("/api/v1/users/signup", post(auth::signup))
        .route("/api/v1/users/login", post(auth::login))
        .route("/api/v1/users/forgotPassword", post(auth::forgot_password))
        .route(
            "/api/v1/users/resetPassword/{token}",
            patch(auth::reset_password),
        )
        .route("/api/v1/users/updatePassword", patch(auth::update_password))
        .route(
            "/api/v1/users/updateMyProfile",
            patch(user::update_my_profile),
        )
        .route(
            "/api/v1/users/deleteMyProfile",
            delete(user::delete_my_profile),
        )
        .route(
            "/api/v1/users/{id}",
            get(user::get_user)
                .patch(user::update_user)
                .delete(user::delete_user),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(route_not_found)
}

/// The 404 fail envelope for unmatched routes, naming the requested path.
async fn route_not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageDto::fail(format!(
            "Can't find {uri} on this server!"
        ))),
    )
}
