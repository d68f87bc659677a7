// SPDX-License-Identifier: MPL-2.0
//! Community hub content: forum posts, events and surveys.

/// Topic shared by posts and events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Transportation,
    Environment,
    Safety,
    Government,
}

impl Topic {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Topic::Transportation => "topic-transportation",
            Topic::Environment => "topic-environment",
            Topic::Safety => "topic-safety",
            Topic::Government => "topic-government",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForumPost {
    pub title: &'static str,
    pub author: &'static str,
    pub topic: Topic,
    pub replies: u32,
    pub likes: u32,
    pub posted: &'static str,
    pub hot: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub location: &'static str,
    pub attendees: u32,
    pub topic: Topic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Survey {
    pub title: &'static str,
    pub description: &'static str,
    pub responses: u32,
    pub deadline: &'static str,
}

/// Response count at which a survey bar is full.
pub const SURVEY_TARGET_RESPONSES: u32 = 300;

pub const FORUM_POSTS: [ForumPost; 3] = [
    ForumPost {
        title: "New Bike Lane Proposal for Downtown",
        author: "Sarah Chen",
        topic: Topic::Transportation,
        replies: 24,
        likes: 18,
        posted: "2 hours ago",
        hot: true,
    },
    ForumPost {
        title: "Community Garden Initiative",
        author: "Mike Johnson",
        topic: Topic::Environment,
        replies: 12,
        likes: 31,
        posted: "5 hours ago",
        hot: false,
    },
    ForumPost {
        title: "Street Lighting Improvements Discussion",
        author: "Emma Rodriguez",
        topic: Topic::Safety,
        replies: 8,
        likes: 15,
        posted: "1 day ago",
        hot: false,
    },
];

pub const EVENTS: [Event; 3] = [
    Event {
        title: "Town Hall Meeting",
        date: "March 15, 2024",
        time: "7:00 PM",
        location: "City Hall",
        attendees: 127,
        topic: Topic::Government,
    },
    Event {
        title: "Community Clean-up Day",
        date: "March 22, 2024",
        time: "9:00 AM",
        location: "Central Park",
        attendees: 89,
        topic: Topic::Environment,
    },
    Event {
        title: "Neighborhood Watch Meeting",
        date: "March 28, 2024",
        time: "6:30 PM",
        location: "Community Center",
        attendees: 45,
        topic: Topic::Safety,
    },
];

pub const SURVEYS: [Survey; 2] = [
    Survey {
        title: "Public Transportation Improvements",
        description: "Help us prioritize transit improvements in your area",
        responses: 234,
        deadline: "March 20, 2024",
    },
    Survey {
        title: "Park Renovation Plans",
        description: "Share your ideas for upgrading local parks",
        responses: 156,
        deadline: "March 25, 2024",
    },
];

/// Headline figures: (value, translation key of the label).
pub const STATS: [(&str, &str); 4] = [
    ("1,247", "community-stat-members"),
    ("89", "community-stat-discussions"),
    ("12", "community-stat-events"),
    ("156", "community-stat-surveys"),
];

/// Most active topics with their discussion counts.
pub const POPULAR_TOPICS: [(Topic, u32); 4] = [
    (Topic::Transportation, 23),
    (Topic::Environment, 18),
    (Topic::Safety, 15),
    (Topic::Government, 12),
];

/// First letter of each word of `name`, e.g. "Sarah Chen" → "SC".
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Fraction of [`SURVEY_TARGET_RESPONSES`] reached, capped at 1.
#[must_use]
pub fn survey_progress(responses: u32) -> f32 {
    (responses as f32 / SURVEY_TARGET_RESPONSES as f32).min(1.0)
}

/// Posts whose title contains `query`, ignoring case. An empty or
/// whitespace-only query keeps every post.
#[must_use]
pub fn filter_posts<'a>(posts: &'a [ForumPost], query: &str) -> Vec<&'a ForumPost> {
    let needle = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| needle.is_empty() || post.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_letter_of_each_word() {
        assert_eq!(initials("Sarah Chen"), "SC");
        assert_eq!(initials("Emma  Rodriguez"), "ER");
        assert_eq!(initials("mike johnson"), "MJ");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn survey_progress_is_capped() {
        assert!((survey_progress(150) - 0.5).abs() < f32::EPSILON);
        assert!((survey_progress(300) - 1.0).abs() < f32::EPSILON);
        assert!((survey_progress(900) - 1.0).abs() < f32::EPSILON);
        assert_eq!(survey_progress(0), 0.0);
    }

    #[test]
    fn filter_posts_matches_case_insensitively() {
        let found = filter_posts(&FORUM_POSTS, "GARDEN");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author, "Mike Johnson");
    }

    #[test]
    fn filter_posts_with_blank_query_keeps_all() {
        assert_eq!(filter_posts(&FORUM_POSTS, "").len(), FORUM_POSTS.len());
        assert_eq!(filter_posts(&FORUM_POSTS, "  ").len(), FORUM_POSTS.len());
    }

    #[test]
    fn filter_posts_without_match_is_empty() {
        assert!(filter_posts(&FORUM_POSTS, "zoning").is_empty());
    }

    #[test]
    fn only_one_post_is_hot() {
        assert_eq!(FORUM_POSTS.iter().filter(|p| p.hot).count(), 1);
    }
}
