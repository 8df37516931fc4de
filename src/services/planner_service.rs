use std::collections::BTreeSet;

use crate::models::planner::{AddonLine, AddonPackage, Itinerary, ItineraryDay};

pub const MIN_DURATION_DAYS: u32 = 1;
pub const MAX_DURATION_DAYS: u32 = 7;

const BASE_DAY_COST: u32 = 50;
const ARRIVAL_DAY_COST: u32 = 80;
const FINALE_DAY_COST: u32 = 70;

const ARRIVAL_ACTIVITY: &str = "Arrival, base camp setup and safety briefing";
const FINALE_ACTIVITY: &str = "Summit celebration, descent and departure";

// Middle days cycle through these by day number.
const DAY_ROTATION: [&str; 5] = [
    "Guided trail hike to scenic viewpoints",
    "Summit approach and acclimatization",
    "Local village visit and cultural immersion",
    "Sunrise photography and nature walk",
    "Rest day with optional short excursions",
];

pub struct PlannerService;

impl PlannerService {
    /// Clamp a requested duration into the supported 1-7 day range.
    pub fn clamp_duration(duration_days: u32) -> u32 {
        duration_days.clamp(MIN_DURATION_DAYS, MAX_DURATION_DAYS)
    }

    /// Deduplicate the user's add-on selection. Picking the same package
    /// twice has no extra effect.
    pub fn addon_set(addons: &[AddonPackage]) -> BTreeSet<AddonPackage> {
        addons.iter().copied().collect()
    }

    /// Total price for a trip: duration times the base day rate plus the
    /// selected packages. The per-day costs shown in the itinerary (80/70/50)
    /// are display values and deliberately do not feed this sum.
    pub fn total_cost(duration_days: u32, addons: &BTreeSet<AddonPackage>) -> u32 {
        let base = duration_days * BASE_DAY_COST;
        let packages: u32 = addons.iter().map(|pkg| pkg.price()).sum();
        base + packages
    }

    /// Expand a duration and add-on selection into a priced day-by-day plan.
    /// Pure function of its inputs; the destination never affects pricing.
    /// Day 1 is always the arrival day, so a 1-day trip gets the arrival
    /// label and price rather than the finale.
    pub fn generate_itinerary(duration_days: u32, addons: &[AddonPackage]) -> Itinerary {
        let duration_days = Self::clamp_duration(duration_days);
        let selection = Self::addon_set(addons);

        let mut days = Vec::with_capacity(duration_days as usize);
        for day in 1..=duration_days {
            let (activity, cost) = if day == 1 {
                (ARRIVAL_ACTIVITY.to_string(), ARRIVAL_DAY_COST)
            } else if day == duration_days {
                (FINALE_ACTIVITY.to_string(), FINALE_DAY_COST)
            } else {
                let rotation = DAY_ROTATION[day as usize % DAY_ROTATION.len()];
                (rotation.to_string(), BASE_DAY_COST)
            };
            days.push(ItineraryDay { day, activity, cost });
        }

        Itinerary {
            duration_days,
            days,
            base_cost: duration_days * BASE_DAY_COST,
            addons: selection.iter().map(|pkg| AddonLine::from(*pkg)).collect(),
            total_cost: Self::total_cost(duration_days, &selection),
        }
    }
}
