use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// Fallback image used when a catalog row carries none.
pub const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1504280317859-9da4284e948f?auto=format&fit=crop&w=1200&q=80";

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Moderate,
    Difficult,
    Expert,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Difficult => "Difficult",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Array-ish column that arrives either as a real list or as a
/// comma-separated string, depending on how the row was seeded.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum StringListField {
    List(Vec<String>),
    Joined(String),
}

impl StringListField {
    pub fn normalize(value: Option<Self>) -> Vec<String> {
        match value {
            None => Vec::new(),
            Some(StringListField::List(items)) => {
                items.into_iter().filter(|s| !s.is_empty()).collect()
            }
            Some(StringListField::Joined(joined)) => joined
                .split(',')
                .map(|part| part.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// Elevation column: seeded rows mix numbers ("4243") and strings ("4,243m").
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum ElevationField {
    Number(f64),
    Text(String),
}

impl ElevationField {
    pub fn format(value: Option<Self>) -> Option<String> {
        match value {
            None => None,
            Some(ElevationField::Number(n)) => Some(format!("{}m", n)),
            Some(ElevationField::Text(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else if trimmed.ends_with('m') {
                    Some(trimmed.to_string())
                } else {
                    Some(format!("{}m", trimmed))
                }
            }
        }
    }
}

/// Raw catalog row as stored in the `Mountains` collection. Everything except
/// the catalog id is optional; `Mountain::from_row` applies the defaults.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MountainRow {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<ObjectId>,
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub season: Option<StringListField>,
    pub activity: Option<String>,
    pub elevation: Option<ElevationField>,
    pub image: Option<String>,
    pub activities: Option<StringListField>,
    pub tips: Option<String>,
    pub facts: Option<String>,
    #[serde(alias = "bestTime")]
    pub best_time: Option<String>,
    #[serde(alias = "whatToBring")]
    pub what_to_bring: Option<StringListField>,
}

/// A destination in the TrailAZ catalog. Read-only from the app's point of
/// view; rows are seeded externally.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Mountain {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub region: String,
    pub difficulty: Difficulty,
    pub season: Vec<String>,
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation: Option<String>,
    pub image: String,
    pub activities: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_time: Option<String>,
    pub what_to_bring: Vec<String>,
}

impl Mountain {
    pub fn from_row(row: MountainRow) -> Self {
        Mountain {
            id: row.id,
            name: row.name.unwrap_or_default(),
            description: row.description.unwrap_or_default(),
            region: row.region.unwrap_or_default(),
            difficulty: row.difficulty.unwrap_or(Difficulty::Moderate),
            season: StringListField::normalize(row.season),
            activity: row.activity.unwrap_or_else(|| "Hiking".to_string()),
            elevation: ElevationField::format(row.elevation),
            image: row.image.unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            activities: StringListField::normalize(row.activities),
            tips: row.tips,
            facts: row.facts,
            best_time: row.best_time,
            what_to_bring: StringListField::normalize(row.what_to_bring),
        }
    }
}
