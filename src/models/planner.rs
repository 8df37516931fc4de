use serde::{Deserialize, Serialize};

/// Optional fixed-price packages a traveler can bundle into a trip.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AddonPackage {
    Guide,
    Equipment,
    Transport,
    Meals,
    Insurance,
}

impl AddonPackage {
    pub const ALL: [AddonPackage; 5] = [
        AddonPackage::Guide,
        AddonPackage::Equipment,
        AddonPackage::Transport,
        AddonPackage::Meals,
        AddonPackage::Insurance,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            AddonPackage::Guide => "guide",
            AddonPackage::Equipment => "equipment",
            AddonPackage::Transport => "transport",
            AddonPackage::Meals => "meals",
            AddonPackage::Insurance => "insurance",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AddonPackage::Guide => "Professional Guide",
            AddonPackage::Equipment => "Equipment Rental",
            AddonPackage::Transport => "Transport from Baku",
            AddonPackage::Meals => "Meal Package",
            AddonPackage::Insurance => "Travel Insurance",
        }
    }

    pub fn price(&self) -> u32 {
        match self {
            AddonPackage::Guide => 150,
            AddonPackage::Equipment => 80,
            AddonPackage::Transport => 100,
            AddonPackage::Meals => 60,
            AddonPackage::Insurance => 40,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AddonLine {
    pub id: String,
    pub name: String,
    pub price: u32,
}

impl From<AddonPackage> for AddonLine {
    fn from(pkg: AddonPackage) -> Self {
        AddonLine {
            id: pkg.id().to_string(),
            name: pkg.name().to_string(),
            price: pkg.price(),
        }
    }
}

/// Request body for the itinerary preview. `mountain_id` and `start_date` are
/// informational only and never feed the pricing.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ItineraryRequest {
    pub mountain_id: Option<i64>,
    pub duration_days: u32,
    #[serde(default)]
    pub addons: Vec<AddonPackage>,
    pub start_date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ItineraryDay {
    pub day: u32,
    pub activity: String,
    pub cost: u32,
}

/// Computed trip plan. Recomputed on every request, never stored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Itinerary {
    pub duration_days: u32,
    pub days: Vec<ItineraryDay>,
    pub base_cost: u32,
    pub addons: Vec<AddonLine>,
    pub total_cost: u32,
}
