// SPDX-License-Identifier: MPL-2.0
//! Maps a section identifier to the view the shell mounts.

use super::section::SectionId;

/// The view rendered in the main area for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewDescriptor {
    /// Hero banner followed by the feature list.
    Landing,
    IssueReporting,
    CommunityHub,
    InteractiveMap,
}

/// Pure, total mapping from section to view.
#[must_use]
pub fn select_view(id: SectionId) -> ViewDescriptor {
    match id {
        SectionId::Home => ViewDescriptor::Landing,
        SectionId::Report => ViewDescriptor::IssueReporting,
        SectionId::Community => ViewDescriptor::CommunityHub,
        SectionId::Map => ViewDescriptor::InteractiveMap,
    }
}

/// String-keyed entry point; anything outside the known set lands on the
/// landing view.
#[must_use]
pub fn select_view_raw(raw: &str) -> ViewDescriptor {
    select_view(SectionId::parse_or_default(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_its_own_view() {
        assert_eq!(select_view(SectionId::Home), ViewDescriptor::Landing);
        assert_eq!(select_view(SectionId::Report), ViewDescriptor::IssueReporting);
        assert_eq!(select_view(SectionId::Community), ViewDescriptor::CommunityHub);
        assert_eq!(select_view(SectionId::Map), ViewDescriptor::InteractiveMap);
    }

    #[test]
    fn selection_is_deterministic() {
        for section in SectionId::ALL {
            assert_eq!(select_view(section), select_view(section));
        }
    }

    #[test]
    fn unknown_strings_select_landing() {
        for raw in ["bogus", "", "HOME", "settings", "report "] {
            assert_eq!(select_view_raw(raw), ViewDescriptor::Landing, "{raw:?}");
        }
    }

    #[test]
    fn known_strings_match_typed_selection() {
        for section in SectionId::ALL {
            assert_eq!(select_view_raw(section.as_str()), select_view(section));
        }
    }
}
