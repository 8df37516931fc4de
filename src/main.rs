use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use trailaz_api::{db, middleware, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let mongo_uri = std::env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    println!("Got MongoDB URI, attempting connection...");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;
    println!("MongoDB connection established");

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .app_data(web::Data::new(client.clone()))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(routes::health::health_check))
                    // Public routes
                    .service(
                        web::scope("/auth")
                            .route("/signup", web::post().to(routes::account::auth::signup))
                            .route("/signin", web::post().to(routes::account::auth::signin))
                            .service(
                                web::scope("").wrap(middleware::auth::AuthMiddleware).route(
                                    "/session",
                                    web::get().to(routes::account::auth::user_session),
                                ),
                            ),
                    )
                    .service(
                        web::scope("/mountains")
                            .route("", web::get().to(routes::mountain::get_mountains))
                            .route("/{id}", web::get().to(routes::mountain::get_mountain_by_id)),
                    )
                    .service(
                        web::scope("/planner")
                            .route("/packages", web::get().to(routes::planner::get_packages))
                            .route(
                                "/itinerary",
                                web::post().to(routes::planner::generate_itinerary),
                            ),
                    )
                    .route("/chat", web::post().to(routes::chat::ask))
                    // Protected routes
                    .service(
                        web::scope("/account/{user_id}")
                            .wrap(middleware::auth::AuthMiddleware)
                            .route(
                                "/profile",
                                web::get().to(routes::account::profile::get_profile),
                            )
                            .route(
                                "/profile",
                                web::put().to(routes::account::profile::update_profile),
                            )
                            .route("/trips", web::get().to(routes::account::trips::get_trips))
                            .route("/trips", web::post().to(routes::account::trips::add_trip))
                            .route(
                                "/trips/{trip_id}",
                                web::get().to(routes::account::trips::get_trip_by_id),
                            )
                            .route(
                                "/trips/{trip_id}/status",
                                web::put().to(routes::account::trips::update_trip_status),
                            ),
                    ),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
