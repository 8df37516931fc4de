use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password: String, // Always hashed
    pub full_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    // Security related fields
    pub last_signin: Option<DateTime<Utc>>,
    pub failed_signins: Option<i32>,
    // We always want these fields, but have them optional so we can set them in the code
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize)]
pub struct UserSession {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub email: String,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

/// Profile row keyed by the owning user's id. Created on first read when the
/// user has no row yet.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Profile {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub preferences: Option<bson::Document>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Client-editable subset of a profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub avatar_url: Option<String>,
    pub preferences: Option<bson::Document>,
}
