use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque complaint identifier, immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(Uuid);

impl ComplaintId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(s: &str) -> Result<Self, ParseLabelError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ParseLabelError::new("complaint id", s))
    }
}

impl Default for ComplaintId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Failed to parse an enum label or identifier from its string form.
#[derive(Debug, thiserror::Error)]
#[error("unknown {kind}: {value}")]
pub struct ParseLabelError {
    kind: &'static str,
    value: String,
}

impl ParseLabelError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Complaint category. Fixed enumeration; serialized with the labels the
/// intake forms show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electricity,
    Water,
    Cleanliness,
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Electricity => write!(f, "Electricity"),
            Category::Water => write!(f, "Water"),
            Category::Cleanliness => write!(f, "Cleanliness"),
            Category::Other => write!(f, "Other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Electricity" | "electricity" => Ok(Category::Electricity),
            "Water" | "water" => Ok(Category::Water),
            "Cleanliness" | "cleanliness" => Ok(Category::Cleanliness),
            "Other" | "other" => Ok(Category::Other),
            _ => Err(ParseLabelError::new("category", s)),
        }
    }
}

/// Complaint priority, ordered lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
            Priority::Critical => write!(f, "Critical"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" | "low" => Ok(Priority::Low),
            "Medium" | "medium" => Ok(Priority::Medium),
            "High" | "high" => Ok(Priority::High),
            "Critical" | "critical" => Ok(Priority::Critical),
            _ => Err(ParseLabelError::new("priority", s)),
        }
    }
}

/// Lifecycle status. Transitions only move forward:
/// `Pending -> InProgress -> Resolved`.
///
/// Wire labels are the human-facing ones (`"In Progress"` with a space),
/// so persisted records read the way operators see them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Pending => write!(f, "Pending"),
            Status::InProgress => write!(f, "In Progress"),
            Status::Resolved => write!(f, "Resolved"),
        }
    }
}

impl std::str::FromStr for Status {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" | "pending" => Ok(Status::Pending),
            "In Progress" | "in-progress" | "InProgress" => Ok(Status::InProgress),
            "Resolved" | "resolved" => Ok(Status::Resolved),
            _ => Err(ParseLabelError::new("status", s)),
        }
    }
}

/// Default assignee label applied when a complaint is moved to
/// `InProgress` without naming anyone.
pub const DEFAULT_ASSIGNEE: &str = "Maintenance Team";

/// A maintenance complaint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: ComplaintId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub priority: Priority,
    pub status: Status,
    /// Empty while `Pending`; non-empty once `InProgress`.
    #[serde(default)]
    pub assigned_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Intake payload for a new complaint, as supplied by the reporting form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: Category,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Complaint {
    /// Build a freshly reported complaint: `Pending`, unassigned.
    pub fn report(input: NewComplaint, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ComplaintId::new(),
            title: input.title,
            description: input.description,
            location: input.location,
            category: input.category,
            priority: input.priority,
            status: Status::Pending,
            assigned_to: String::new(),
            image_url: input.image_url,
            ai_analysis: None,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_labels_keep_the_space() {
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(serde_json::to_string(&Status::Pending).unwrap(), "\"Pending\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"In Progress\"").unwrap(),
            Status::InProgress
        );
    }

    #[test]
    fn priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::High < Priority::Critical);
    }

    #[test]
    fn labels_round_trip_through_from_str() {
        for s in ["Pending", "In Progress", "Resolved"] {
            let status: Status = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        for c in ["Electricity", "Water", "Cleanliness", "Other"] {
            let cat: Category = c.parse().unwrap();
            assert_eq!(cat.to_string(), c);
        }
    }

    #[test]
    fn report_starts_pending_and_unassigned() {
        let input = NewComplaint {
            title: "Broken light".to_string(),
            description: "Corridor light flickers".to_string(),
            location: "Block A".to_string(),
            category: Category::Electricity,
            priority: Priority::Medium,
            image_url: None,
        };
        let complaint = Complaint::report(input, chrono::Utc::now());
        assert_eq!(complaint.status, Status::Pending);
        assert!(complaint.assigned_to.is_empty());
    }
}
