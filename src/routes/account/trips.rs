use actix_web::{web, HttpResponse, Responder};
use bson::{doc, oid::ObjectId};
use chrono::Utc;
use futures::TryStreamExt;
use mongodb::Client;
use std::sync::Arc;

use crate::db::mongo::DATABASE;
use crate::middleware::auth::Claims;
use crate::models::planner::AddonLine;
use crate::models::trip::{Trip, TripInput, TripStatus, TripStatusUpdate};
use crate::services::planner_service::PlannerService;

/// Trips for the signed-in user, newest first.
pub async fn get_trips(
    data: web::Data<Arc<Client>>,
    path: web::Path<(String,)>,
    claims: Claims,
) -> impl Responder {
    if path.into_inner().0 != claims.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let client = data.into_inner();
    let collection: mongodb::Collection<Trip> = client.database(DATABASE).collection("Trips");

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let filter = doc! { "user_id": user_id };

    match collection
        .find(filter)
        .sort(doc! { "created_at": -1 })
        .await
    {
        Ok(cursor) => match cursor.try_collect::<Vec<Trip>>().await {
            Ok(trips) => HttpResponse::Ok().json(trips),
            Err(err) => {
                eprintln!("Error retrieving trips: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to retrieve trips")
            }
        },
        Err(err) => {
            eprintln!("Error fetching trips: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch trips")
        }
    }
}

/// Save a planned trip. The total is recomputed here from the duration and
/// the deduplicated add-on selection; a client-sent price is never trusted.
pub async fn add_trip(
    data: web::Data<Arc<Client>>,
    input: web::Json<TripInput>,
    path: web::Path<(String,)>,
    claims: Claims,
) -> impl Responder {
    if path.into_inner().0 != claims.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let client = data.into_inner();
    let collection: mongodb::Collection<Trip> = client.database(DATABASE).collection("Trips");

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let input = input.into_inner();

    let duration_days = PlannerService::clamp_duration(input.duration_days);
    let selection = PlannerService::addon_set(&input.addons);
    let total_cost = PlannerService::total_cost(duration_days, &selection);

    let time = Utc::now();
    let trip = Trip {
        id: None,
        user_id,
        title: input.title,
        mountain: input.mountain,
        activity_type: input.activity_type,
        start_date: input.start_date,
        end_date: input.end_date,
        addons: selection.iter().map(|pkg| AddonLine::from(*pkg)).collect(),
        total_cost,
        status: TripStatus::Planned,
        created_at: Some(time),
        updated_at: Some(time),
    };

    match collection.insert_one(&trip).await {
        Ok(result) => {
            let trip_id = match result.inserted_id.as_object_id() {
                Some(id) => id.to_string(),
                None => {
                    return HttpResponse::InternalServerError().body("Failed to read trip id")
                }
            };
            HttpResponse::Ok().json(serde_json::json!({
                "trip_id": trip_id,
                "total_cost": total_cost
            }))
        }
        Err(err) => {
            eprintln!("Error creating trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create trip")
        }
    }
}

pub async fn get_trip_by_id(
    data: web::Data<Arc<Client>>,
    path: web::Path<(String, String)>,
    claims: Claims,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Trip> = client.database(DATABASE).collection("Trips");

    let (user_id, trip_id) = path.into_inner();
    if user_id != claims.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let trip_object_id = match ObjectId::parse_str(&trip_id) {
        Ok(id) => id,
        Err(e) => {
            eprintln!("Invalid trip ID format: {:?}", e);
            return HttpResponse::BadRequest().body("Invalid trip ID format");
        }
    };
    let user_object_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let filter = doc! {
        "_id": trip_object_id,
        "user_id": user_object_id,
    };

    match collection.find_one(filter).await {
        Ok(Some(trip)) => HttpResponse::Ok().json(trip),
        Ok(None) => HttpResponse::NotFound().body("Trip not found"),
        Err(e) => {
            eprintln!("Error fetching trip: {:?}", e);
            HttpResponse::InternalServerError().body("Failed to fetch trip")
        }
    }
}

pub async fn update_trip_status(
    data: web::Data<Arc<Client>>,
    input: web::Json<TripStatusUpdate>,
    path: web::Path<(String, String)>,
    claims: Claims,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Trip> = client.database(DATABASE).collection("Trips");

    let (user_id, trip_id) = path.into_inner();
    if user_id != claims.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let trip_object_id = match ObjectId::parse_str(&trip_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid trip ID format"),
    };
    let user_object_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let status = match bson::to_bson(&input.into_inner().status) {
        Ok(status) => status,
        Err(_) => return HttpResponse::BadRequest().body("Invalid status"),
    };

    let filter = doc! {
        "_id": trip_object_id,
        "user_id": user_object_id,
    };
    let update = doc! {
        "$set": {
            "status": status,
            "updated_at": Utc::now().to_rfc3339()
        }
    };

    match collection.update_one(filter, update).await {
        Ok(result) => {
            if result.matched_count == 0 {
                return HttpResponse::NotFound().body("Trip not found");
            }
            HttpResponse::Ok().body("Trip status updated")
        }
        Err(err) => {
            eprintln!("Error updating trip: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update trip")
        }
    }
}
