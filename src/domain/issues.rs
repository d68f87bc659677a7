// SPDX-License-Identifier: MPL-2.0
//! Issue reporting types.
//!
//! # Contents
//!
//! - [`IssueType`]: The seven categories a citizen can report under
//! - [`IssueDraft`]: Form contents and their validation
//! - [`RecentReport`]: Sample reports shown next to the form

// =============================================================================
// Issue Type
// =============================================================================

/// Category of a reported issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueType {
    Pothole,
    Streetlight,
    Waste,
    Water,
    Parks,
    Traffic,
    Other,
}

impl IssueType {
    pub const ALL: [IssueType; 7] = [
        IssueType::Pothole,
        IssueType::Streetlight,
        IssueType::Waste,
        IssueType::Water,
        IssueType::Parks,
        IssueType::Traffic,
        IssueType::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::Pothole => "pothole",
            IssueType::Streetlight => "streetlight",
            IssueType::Waste => "waste",
            IssueType::Water => "water",
            IssueType::Parks => "parks",
            IssueType::Traffic => "traffic",
            IssueType::Other => "other",
        }
    }

    /// Translation key of the human-readable label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            IssueType::Pothole => "issue-type-pothole",
            IssueType::Streetlight => "issue-type-streetlight",
            IssueType::Waste => "issue-type-waste",
            IssueType::Water => "issue-type-water",
            IssueType::Parks => "issue-type-parks",
            IssueType::Traffic => "issue-type-traffic",
            IssueType::Other => "issue-type-other",
        }
    }
}

// =============================================================================
// Draft Validation
// =============================================================================

/// A required field left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    IssueType,
    Location,
    Description,
}

/// Contents of the report form.
///
/// Text fields count as empty when they hold only whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    pub issue_type: Option<IssueType>,
    pub location: String,
    pub description: String,
    pub name: String,
    pub email: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueReport {
    pub issue_type: IssueType,
    pub location: String,
    pub description: String,
    pub name: Option<String>,
    pub email: Option<String>,
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl IssueDraft {
    /// Lists the required fields that are still empty, in form order.
    ///
    /// Stricter than a plain emptiness check: a location or description
    /// made only of whitespace is reported as missing.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<MissingField> {
        let mut missing = Vec::new();
        if self.issue_type.is_none() {
            missing.push(MissingField::IssueType);
        }
        if self.location.trim().is_empty() {
            missing.push(MissingField::Location);
        }
        if self.description.trim().is_empty() {
            missing.push(MissingField::Description);
        }
        missing
    }

    /// Validates the draft. Optional contact fields become `None` when blank.
    pub fn validate(&self) -> Result<IssueReport, Vec<MissingField>> {
        let missing = self.missing_fields();
        match (self.issue_type, missing.is_empty()) {
            (Some(issue_type), true) => Ok(IssueReport {
                issue_type,
                location: self.location.trim().to_string(),
                description: self.description.trim().to_string(),
                name: non_empty(&self.name),
                email: non_empty(&self.email),
            }),
            _ => Err(missing),
        }
    }
}

// =============================================================================
// Recent Reports
// =============================================================================

/// Processing state of a submitted report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
}

impl ReportStatus {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            ReportStatus::Pending => "report-status-pending",
            ReportStatus::InProgress => "report-status-in-progress",
            ReportStatus::Resolved => "report-status-resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentReport {
    pub title: &'static str,
    pub location: &'static str,
    pub status: ReportStatus,
    pub reported: &'static str,
}

pub const RECENT_REPORTS: [RecentReport; 3] = [
    RecentReport {
        title: "Pothole",
        location: "Main Street & Oak Ave",
        status: ReportStatus::InProgress,
        reported: "2 hours ago",
    },
    RecentReport {
        title: "Street Light",
        location: "Park Road",
        status: ReportStatus::Resolved,
        reported: "1 day ago",
    },
    RecentReport {
        title: "Waste Collection",
        location: "Elm Street",
        status: ReportStatus::Pending,
        reported: "3 days ago",
    },
];
