use actix_web::{web, HttpResponse, Responder};
use bson::{doc, oid::ObjectId};
use chrono::Utc;
use mongodb::Client;
use std::sync::Arc;

use crate::db::mongo::DATABASE;
use crate::middleware::auth::Claims;
use crate::models::user::{Profile, ProfileUpdate};

/// Read the caller's profile, creating an empty row from the token claims on
/// first access. Mirrors the lazy-upsert the web client used to do.
pub async fn get_profile(
    data: web::Data<Arc<Client>>,
    path: web::Path<(String,)>,
    claims: Claims,
) -> impl Responder {
    if path.into_inner().0 != claims.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let client = data.into_inner();
    let collection: mongodb::Collection<Profile> =
        client.database(DATABASE).collection("Profiles");

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    match collection.find_one(doc! { "user_id": user_id }).await {
        Ok(Some(profile)) => HttpResponse::Ok().json(profile),
        Ok(None) => {
            let time = Utc::now();
            let profile = Profile {
                id: None,
                user_id,
                email: Some(claims.sub.clone()),
                full_name: None,
                birthday: None,
                avatar_url: None,
                preferences: None,
                created_at: Some(time),
                updated_at: Some(time),
            };
            match collection.insert_one(&profile).await {
                Ok(_) => HttpResponse::Ok().json(profile),
                Err(err) => {
                    eprintln!("Failed to create profile: {:?}", err);
                    HttpResponse::InternalServerError().body("Failed to create profile")
                }
            }
        }
        Err(err) => {
            eprintln!("Failed to fetch profile: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch profile")
        }
    }
}

pub async fn update_profile(
    data: web::Data<Arc<Client>>,
    path: web::Path<(String,)>,
    input: web::Json<ProfileUpdate>,
    claims: Claims,
) -> impl Responder {
    if path.into_inner().0 != claims.user_id {
        return HttpResponse::Forbidden().body("Forbidden");
    }

    let client = data.into_inner();
    let collection: mongodb::Collection<Profile> =
        client.database(DATABASE).collection("Profiles");

    let user_id = match ObjectId::parse_str(&claims.user_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid user ID"),
    };

    let update = input.into_inner();

    let mut set_doc = doc! { "updated_at": Utc::now().to_rfc3339() };
    if let Some(full_name) = update.full_name {
        set_doc.insert("full_name", full_name);
    }
    if let Some(birthday) = update.birthday {
        set_doc.insert("birthday", birthday.to_string());
    }
    if let Some(avatar_url) = update.avatar_url {
        set_doc.insert("avatar_url", avatar_url);
    }
    if let Some(preferences) = update.preferences {
        set_doc.insert("preferences", preferences);
    }

    let filter = doc! { "user_id": user_id };
    let update_doc = doc! {
        "$set": set_doc,
        "$setOnInsert": {
            "user_id": user_id,
            "email": &claims.sub,
            "created_at": Utc::now().to_rfc3339()
        }
    };

    match collection
        .update_one(filter, update_doc)
        .upsert(true)
        .await
    {
        Ok(_) => HttpResponse::Ok().body("Profile updated"),
        Err(err) => {
            eprintln!("Failed to update profile: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update profile")
        }
    }
}
