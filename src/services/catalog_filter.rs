use serde::{Deserialize, Serialize};

use crate::models::mountain::Mountain;

/// User-selected constraints for narrowing the catalog. Each field defaults
/// to unconstrained; the literal string "All" is treated the same as absent,
/// matching the value the filter controls send for the empty selection.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FilterCriteria {
    pub search: Option<String>,
    pub region: Option<String>,
    pub difficulty: Option<String>,
    pub season: Option<String>,
    pub activity: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    match value.as_deref() {
        None | Some("") | Some("All") => None,
        Some(v) => Some(v),
    }
}

impl FilterCriteria {
    pub fn is_unconstrained(&self) -> bool {
        active(&self.search).is_none()
            && active(&self.region).is_none()
            && active(&self.difficulty).is_none()
            && active(&self.season).is_none()
            && active(&self.activity).is_none()
    }

    pub fn matches(&self, mountain: &Mountain) -> bool {
        if let Some(term) = active(&self.search) {
            let term = term.to_lowercase();
            let hit = mountain.name.to_lowercase().contains(&term)
                || mountain.description.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(region) = active(&self.region) {
            if mountain.region != region {
                return false;
            }
        }
        if let Some(difficulty) = active(&self.difficulty) {
            if mountain.difficulty.as_str() != difficulty {
                return false;
            }
        }
        if let Some(season) = active(&self.season) {
            if !mountain.season.iter().any(|s| s == season) {
                return false;
            }
        }
        if let Some(activity) = active(&self.activity) {
            if !mountain.activity.eq_ignore_ascii_case(activity) {
                return false;
            }
        }
        true
    }
}

/// Keeps exactly the destinations satisfying every active constraint,
/// preserving catalog order. An empty result is a valid outcome.
pub fn filter_mountains(catalog: &[Mountain], criteria: &FilterCriteria) -> Vec<Mountain> {
    catalog
        .iter()
        .filter(|m| criteria.matches(m))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::mountain::{Difficulty, PLACEHOLDER_IMAGE};

    fn mountain(id: i64, name: &str, region: &str, difficulty: Difficulty) -> Mountain {
        Mountain {
            id,
            name: name.to_string(),
            description: format!("{} description", name),
            region: region.to_string(),
            difficulty,
            season: vec!["Summer".to_string()],
            activity: "Hiking".to_string(),
            elevation: None,
            image: PLACEHOLDER_IMAGE.to_string(),
            activities: Vec::new(),
            tips: None,
            facts: None,
            best_time: None,
            what_to_bring: Vec::new(),
        }
    }

    fn catalog() -> Vec<Mountain> {
        let mut shahdag = mountain(1, "Shahdag Peak", "Qusar", Difficulty::Expert);
        shahdag.activity = "Climbing".to_string();
        shahdag.season = vec!["Summer".to_string(), "Autumn".to_string()];
        shahdag.description = "Highest peak of the Greater Caucasus range".to_string();

        let mut tufandag = mountain(3, "Tufandag Mountain", "Gabala", Difficulty::Moderate);
        tufandag.activity = "Skiing".to_string();
        tufandag.season = vec!["Winter".to_string(), "Spring".to_string()];

        let laza = mountain(5, "Laza Waterfall Trail", "Qusar", Difficulty::Easy);

        vec![shahdag, tufandag, laza]
    }

    #[test]
    fn all_sentinel_criteria_is_identity() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            search: Some("".to_string()),
            region: Some("All".to_string()),
            difficulty: Some("All".to_string()),
            season: Some("All".to_string()),
            activity: Some("All".to_string()),
        };
        assert!(criteria.is_unconstrained());
        assert_eq!(filter_mountains(&catalog, &criteria), catalog);
    }

    #[test]
    fn default_criteria_is_identity() {
        let catalog = catalog();
        assert_eq!(filter_mountains(&catalog, &FilterCriteria::default()), catalog);
    }

    #[test]
    fn filtering_is_idempotent() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            region: Some("Qusar".to_string()),
            ..Default::default()
        };
        let once = filter_mountains(&catalog, &criteria);
        let twice = filter_mountains(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let catalog = catalog();
        let by_name = FilterCriteria {
            search: Some("tufandag".to_string()),
            ..Default::default()
        };
        let result = filter_mountains(&catalog, &by_name);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);

        let by_description = FilterCriteria {
            search: Some("CAUCASUS".to_string()),
            ..Default::default()
        };
        let result = filter_mountains(&catalog, &by_description);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn predicates_combine_with_logical_and() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            region: Some("Qusar".to_string()),
            difficulty: Some("Easy".to_string()),
            ..Default::default()
        };
        let result = filter_mountains(&catalog, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 5);
        // Soundness: everything returned satisfies every active predicate.
        for m in &result {
            assert!(criteria.matches(m));
        }
        // Completeness: nothing satisfying the predicates was dropped.
        let satisfying = catalog.iter().filter(|m| criteria.matches(m)).count();
        assert_eq!(result.len(), satisfying);
    }

    #[test]
    fn season_filter_uses_set_membership() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            season: Some("Autumn".to_string()),
            ..Default::default()
        };
        let result = filter_mountains(&catalog, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 1);
    }

    #[test]
    fn activity_filter_is_case_insensitive() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            activity: Some("skiing".to_string()),
            ..Default::default()
        };
        let result = filter_mountains(&catalog, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, 3);
    }

    #[test]
    fn difficulty_filter_is_exact() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            difficulty: Some("easy".to_string()),
            ..Default::default()
        };
        // Lowercase does not match the Easy level.
        assert!(filter_mountains(&catalog, &criteria).is_empty());
    }

    #[test]
    fn unknown_region_returns_empty_not_error() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            region: Some("Nakhchivan".to_string()),
            ..Default::default()
        };
        assert!(filter_mountains(&catalog, &criteria).is_empty());
    }

    #[test]
    fn result_preserves_catalog_order() {
        let catalog = catalog();
        let criteria = FilterCriteria {
            region: Some("Qusar".to_string()),
            ..Default::default()
        };
        let result = filter_mountains(&catalog, &criteria);
        let ids: Vec<i64> = result.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }
}
