use actix_web::{web, HttpResponse, Responder};

use crate::models::planner::{AddonLine, AddonPackage, ItineraryRequest};
use crate::services::planner_service::PlannerService;

/// Fixed add-on package price list shown in the planner form.
pub async fn get_packages() -> impl Responder {
    let packages: Vec<AddonLine> = AddonPackage::ALL
        .iter()
        .map(|pkg| AddonLine::from(*pkg))
        .collect();
    HttpResponse::Ok().json(packages)
}

/// Compute an itinerary preview. Pure arithmetic over the request; the
/// selected mountain and start date never change the price.
pub async fn generate_itinerary(input: web::Json<ItineraryRequest>) -> impl Responder {
    let request = input.into_inner();
    let itinerary = PlannerService::generate_itinerary(request.duration_days, &request.addons);
    HttpResponse::Ok().json(itinerary)
}
