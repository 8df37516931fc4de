use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::db::mongo::DATABASE;
use crate::models::mountain::{Mountain, MountainRow};
use crate::services::catalog_filter::{filter_mountains, FilterCriteria};

async fn load_catalog(client: &Client) -> Result<Vec<Mountain>, mongodb::error::Error> {
    let collection: mongodb::Collection<MountainRow> =
        client.database(DATABASE).collection("Mountains");

    let cursor = collection.find(doc! {}).await?;
    let rows = cursor.try_collect::<Vec<MountainRow>>().await?;
    Ok(rows.into_iter().map(Mountain::from_row).collect())
}

/// GET /api/mountains?search=&region=&difficulty=&season=&activity=
/// Absent or "All" parameters impose no constraint.
pub async fn get_mountains(
    data: web::Data<Arc<Client>>,
    params: web::Query<FilterCriteria>,
) -> impl Responder {
    let client = data.into_inner();

    match load_catalog(&client).await {
        Ok(catalog) => {
            let criteria = params.into_inner();
            if criteria.is_unconstrained() {
                HttpResponse::Ok().json(catalog)
            } else {
                HttpResponse::Ok().json(filter_mountains(&catalog, &criteria))
            }
        }
        Err(err) => {
            eprintln!("Failed to find documents: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find mountains.")
        }
    }
}

pub async fn get_mountain_by_id(
    data: web::Data<Arc<Client>>,
    path: web::Path<(i64,)>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<MountainRow> =
        client.database(DATABASE).collection("Mountains");

    let catalog_id = path.into_inner().0;

    match collection.find_one(doc! { "id": catalog_id }).await {
        Ok(Some(row)) => HttpResponse::Ok().json(Mountain::from_row(row)),
        Ok(None) => HttpResponse::NotFound().body("Mountain not found"),
        Err(err) => {
            eprintln!("Failed to find document: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find mountain.")
        }
    }
}
