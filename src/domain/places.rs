// SPDX-License-Identifier: MPL-2.0
//! Points of interest and reported issues shown on the city map.

/// Map filter category. [`PlaceCategory::All`] matches every place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaceCategory {
    #[default]
    All,
    Transport,
    Healthcare,
    Education,
    Parks,
    Government,
    Dining,
    Services,
}

impl PlaceCategory {
    pub const ALL: [PlaceCategory; 8] = [
        PlaceCategory::All,
        PlaceCategory::Transport,
        PlaceCategory::Healthcare,
        PlaceCategory::Education,
        PlaceCategory::Parks,
        PlaceCategory::Government,
        PlaceCategory::Dining,
        PlaceCategory::Services,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PlaceCategory::All => "all",
            PlaceCategory::Transport => "transport",
            PlaceCategory::Healthcare => "healthcare",
            PlaceCategory::Education => "education",
            PlaceCategory::Parks => "parks",
            PlaceCategory::Government => "government",
            PlaceCategory::Dining => "dining",
            PlaceCategory::Services => "services",
        }
    }

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            PlaceCategory::All => "place-category-all",
            PlaceCategory::Transport => "place-category-transport",
            PlaceCategory::Healthcare => "place-category-healthcare",
            PlaceCategory::Education => "place-category-education",
            PlaceCategory::Parks => "place-category-parks",
            PlaceCategory::Government => "place-category-government",
            PlaceCategory::Dining => "place-category-dining",
            PlaceCategory::Services => "place-category-services",
        }
    }

    /// Whether a place of category `other` passes this filter.
    #[must_use]
    pub fn matches(self, other: PlaceCategory) -> bool {
        self == PlaceCategory::All || self == other
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Place {
    pub name: &'static str,
    pub category: PlaceCategory,
    pub address: &'static str,
    pub distance: &'static str,
    pub hours: &'static str,
}

pub const PLACES: [Place; 6] = [
    Place {
        name: "City Hall",
        category: PlaceCategory::Government,
        address: "123 Main St",
        distance: "0.2 miles",
        hours: "8 AM - 5 PM",
    },
    Place {
        name: "Central Library",
        category: PlaceCategory::Education,
        address: "456 Oak Ave",
        distance: "0.4 miles",
        hours: "9 AM - 8 PM",
    },
    Place {
        name: "Memorial Hospital",
        category: PlaceCategory::Healthcare,
        address: "789 Elm St",
        distance: "0.6 miles",
        hours: "24/7",
    },
    Place {
        name: "Riverside Park",
        category: PlaceCategory::Parks,
        address: "321 River Rd",
        distance: "0.8 miles",
        hours: "6 AM - 10 PM",
    },
    Place {
        name: "Metro Station",
        category: PlaceCategory::Transport,
        address: "555 Transit Way",
        distance: "0.3 miles",
        hours: "5 AM - 12 AM",
    },
    Place {
        name: "Fire Station #3",
        category: PlaceCategory::Government,
        address: "777 Safety Blvd",
        distance: "0.5 miles",
        hours: "24/7",
    },
];

/// Places in `category` whose name contains `query`, ignoring case.
///
/// Input order is preserved. An empty query matches every name.
#[must_use]
pub fn filter_places<'a>(
    places: &'a [Place],
    category: PlaceCategory,
    query: &str,
) -> Vec<&'a Place> {
    let needle = query.to_lowercase();
    places
        .iter()
        .filter(|place| category.matches(place.category))
        .filter(|place| needle.is_empty() || place.name.to_lowercase().contains(&needle))
        .collect()
}

// =============================================================================
// Nearby Issues
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Severity::Low => "severity-low",
            Severity::Medium => "severity-medium",
            Severity::High => "severity-high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueState {
    Reported,
    InProgress,
    Critical,
}

impl IssueState {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            IssueState::Reported => "issue-state-reported",
            IssueState::InProgress => "issue-state-in-progress",
            IssueState::Critical => "issue-state-critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NearbyIssue {
    pub title: &'static str,
    pub location: &'static str,
    pub state: IssueState,
    pub severity: Severity,
}

pub const NEARBY_ISSUES: [NearbyIssue; 3] = [
    NearbyIssue {
        title: "Pothole",
        location: "Main St & 1st Ave",
        state: IssueState::Reported,
        severity: Severity::Medium,
    },
    NearbyIssue {
        title: "Street Light Out",
        location: "Oak Park",
        state: IssueState::InProgress,
        severity: Severity::Low,
    },
    NearbyIssue {
        title: "Water Main",
        location: "Elm Street",
        state: IssueState::Critical,
        severity: Severity::High,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    fn names(found: &[&Place]) -> Vec<&'static str> {
        found.iter().map(|p| p.name).collect()
    }

    #[test]
    fn all_with_empty_query_keeps_every_place() {
        assert_eq!(filter_places(&PLACES, PlaceCategory::All, "").len(), 6);
    }

    #[test]
    fn category_filter_keeps_order() {
        let found = filter_places(&PLACES, PlaceCategory::Government, "");
        assert_eq!(names(&found), vec!["City Hall", "Fire Station #3"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let found = filter_places(&PLACES, PlaceCategory::All, "LIBRARY");
        assert_eq!(names(&found), vec!["Central Library"]);
    }

    #[test]
    fn category_and_query_combine() {
        assert!(filter_places(&PLACES, PlaceCategory::Parks, "hall").is_empty());
        let found = filter_places(&PLACES, PlaceCategory::Government, "fire");
        assert_eq!(names(&found), vec!["Fire Station #3"]);
    }

    #[test]
    fn category_without_places_is_empty() {
        assert!(filter_places(&PLACES, PlaceCategory::Dining, "").is_empty());
    }

    #[test]
    fn severity_orders_low_to_high() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }
}
