use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::{middleware::Logger, web, App, HttpResponse, Responder};

use trailaz_api::middleware::auth::AuthMiddleware;
use trailaz_api::routes;

/// Test app with the real DB-free handlers (planner, chat request shape) and
/// mock handlers standing in for the MongoDB-backed routes, so the suite runs
/// without a live database.
pub fn create_app() -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(
            Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        )
        .wrap(Logger::default())
        .route("/", web::get().to(|| async { "TrailAZ API is running" }))
        .route("/health", web::get().to(health_check))
        .route("/mountains", web::get().to(get_mountains))
        .route("/mountains/{id}", web::get().to(get_mountain_by_id))
        .service(
            web::scope("/planner")
                .route("/packages", web::get().to(routes::planner::get_packages))
                .route(
                    "/itinerary",
                    web::post().to(routes::planner::generate_itinerary),
                ),
        )
        .service(
            web::scope("/auth")
                .route("/signin", web::post().to(signin))
                .route("/signup", web::post().to(signup))
                .route("/session", web::get().to(unauthorized_handler)),
        )
        .service(
            web::scope("/account/{user_id}")
                .wrap(AuthMiddleware)
                .route("/profile", web::get().to(protected_ok))
                .route("/profile", web::put().to(protected_ok))
                .route("/trips", web::get().to(protected_ok))
                .route("/trips", web::post().to(protected_ok))
                .route("/trips/{trip_id}", web::get().to(protected_ok))
                .route("/trips/{trip_id}/status", web::put().to(protected_ok)),
        )
}

// Mock handler functions for testing
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "OK"}))
}

async fn get_mountains() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!([]))
}

async fn get_mountain_by_id() -> impl Responder {
    HttpResponse::NotFound().json(serde_json::json!({"error": "Mountain not found"}))
}

async fn signin() -> impl Responder {
    HttpResponse::Unauthorized().json(serde_json::json!({"error": "Invalid credentials"}))
}

async fn signup() -> impl Responder {
    HttpResponse::BadRequest().json(serde_json::json!({"error": "Invalid input"}))
}

async fn unauthorized_handler() -> impl Responder {
    HttpResponse::Unauthorized().json(serde_json::json!({"error": "Unauthorized"}))
}

async fn protected_ok() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "ok"}))
}

pub fn get_test_user_id() -> String {
    "64f000000000000000000001".to_string()
}

pub fn get_test_email() -> String {
    "test@example.com".to_string()
}
