use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::planner::{AddonLine, AddonPackage};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    Planned,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Saved trip owned by a user. The total is always recomputed server-side
/// when the trip is created; the client never supplies a price.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Trip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub title: String,
    pub mountain: Option<String>,
    pub activity_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub addons: Vec<AddonLine>,
    pub total_cost: u32,
    pub status: TripStatus,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TripInput {
    pub title: String,
    pub mountain: Option<String>,
    pub activity_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub duration_days: u32,
    #[serde(default)]
    pub addons: Vec<AddonPackage>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TripStatusUpdate {
    pub status: TripStatus,
}
