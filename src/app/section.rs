// SPDX-License-Identifier: MPL-2.0
//! Section identifiers for application navigation.
//!
//! A section is the top-level screen selected from the header. The set is
//! closed: anything that does not parse into a [`SectionId`] resolves to
//! [`SectionId::Home`].

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Sections the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    Report,
    Community,
    Map,
}

impl SectionId {
    /// All sections in header order.
    pub const ALL: [SectionId; 4] = [
        SectionId::Home,
        SectionId::Report,
        SectionId::Community,
        SectionId::Map,
    ];

    /// Stable identifier written to the session store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Report => "report",
            SectionId::Community => "community",
            SectionId::Map => "map",
        }
    }

    /// Parses `raw`, falling back to [`SectionId::Home`] for unknown values.
    #[must_use]
    pub fn parse_or_default(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }

    /// i18n key of the header label for this section.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::Report => "nav-report",
            SectionId::Community => "nav-community",
            SectionId::Map => "nav-map",
        }
    }
}

impl FromStr for SectionId {
    type Err = Error;

    fn from_str(raw: &str) -> Result<Self> {
        match raw {
            "home" => Ok(SectionId::Home),
            "report" => Ok(SectionId::Report),
            "community" => Ok(SectionId::Community),
            "map" => Ok(SectionId::Map),
            other => Err(Error::InvalidSection(other.to_string())),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_strings() {
        for section in SectionId::ALL {
            assert_eq!(section.as_str().parse::<SectionId>(), Ok(section));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Home".parse::<SectionId>().is_err());
        assert!("MAP".parse::<SectionId>().is_err());
    }

    #[test]
    fn unknown_values_fall_back_to_home() {
        assert_eq!(SectionId::parse_or_default("bogus"), SectionId::Home);
        assert_eq!(SectionId::parse_or_default(""), SectionId::Home);
        assert_eq!(SectionId::parse_or_default(" report"), SectionId::Home);
    }

    #[test]
    fn rejected_value_is_reported_in_error() {
        let err = "settings".parse::<SectionId>().unwrap_err();
        assert_eq!(err, Error::InvalidSection("settings".into()));
    }

    #[test]
    fn default_section_is_home() {
        assert_eq!(SectionId::default(), SectionId::Home);
    }
}
