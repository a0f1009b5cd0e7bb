//! Incident timeline markers.
//!
//! A marker is one discrete event on the incident timeline. The marker
//! sequence is built once and never mutated afterwards; display order is the
//! order the sequence was given in, not the order of `occurred_at`.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Stable marker identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(pub u64);

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of timeline event.
///
/// Names outside the known set deserialize to [`EventCategory::Unknown`],
/// which renders with the neutral default icon and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Incident,
    Patch,
    Config,
    Change,
    Failover,
    Maintenance,
    Optimization,
    Network,
    Security,
    Deployment,
    Monitoring,
    Backup,
    Log,
    Access,
    #[serde(other)]
    Unknown,
}

impl EventCategory {
    /// All known categories, in legend order.
    pub const KNOWN: [EventCategory; 14] = [
        Self::Incident,
        Self::Patch,
        Self::Config,
        Self::Change,
        Self::Failover,
        Self::Maintenance,
        Self::Optimization,
        Self::Network,
        Self::Security,
        Self::Deployment,
        Self::Monitoring,
        Self::Backup,
        Self::Log,
        Self::Access,
    ];

    /// Parse a category name. Unrecognized names map to `Unknown`.
    pub fn parse(name: &str) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or(Self::Unknown)
    }

    /// Wire name of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incident => "incident",
            Self::Patch => "patch",
            Self::Config => "config",
            Self::Change => "change",
            Self::Failover => "failover",
            Self::Maintenance => "maintenance",
            Self::Optimization => "optimization",
            Self::Network => "network",
            Self::Security => "security",
            Self::Deployment => "deployment",
            Self::Monitoring => "monitoring",
            Self::Backup => "backup",
            Self::Log => "log",
            Self::Access => "access",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event on the incident timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,
    pub category: EventCategory,
    pub label: String,
    /// Display-formatted timestamp. Never parsed.
    pub occurred_at: String,
}

impl Marker {
    pub fn new(
        id: u64,
        category: EventCategory,
        label: impl Into<String>,
        occurred_at: impl Into<String>,
    ) -> Self {
        Self {
            id: MarkerId(id),
            category,
            label: label.into(),
            occurred_at: occurred_at.into(),
        }
    }
}

/// Immutable, ordered marker sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    markers: Vec<Marker>,
}

impl Timeline {
    /// Build a timeline from markers in display order.
    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// Markers in display order.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.markers.get(index)
    }

    /// Display index of the marker with the given id.
    pub fn position(&self, id: MarkerId) -> Option<usize> {
        self.markers.iter().position(|m| m.id == id)
    }

    pub fn find(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    /// The incident timeline shown when no feed is supplied.
    pub fn mock() -> Self {
        use EventCategory as C;
        Self::new(vec![
            Marker::new(1, C::Incident, "INCXXXXXX", "1/12/2025 18:00h"),
            Marker::new(2, C::Patch, "Patching", "1/13/2025 0:30h"),
            Marker::new(3, C::Config, "Undocumented Config Change Detected", "1/13/2025 8:14h"),
            Marker::new(4, C::Change, "Change Control XYZ", "1/13/2025 12:47h"),
            Marker::new(
                5,
                C::Failover,
                "Automated Failover (VMotion,Switch Failure)",
                "1/13/2025 18:44h",
            ),
            Marker::new(6, C::Incident, "INCYYYYYY", "1/14/2025 02:00h"),
            Marker::new(7, C::Maintenance, "Scheduled Maintenance", "1/14/2025 06:30h"),
            Marker::new(8, C::Optimization, "Database Optimization", "1/14/2025 10:15h"),
            Marker::new(9, C::Network, "Network Configuration Update", "1/14/2025 14:22h"),
            Marker::new(10, C::Security, "Security Scan Initiated", "1/14/2025 19:55h"),
            Marker::new(11, C::Deployment, "Application Deployment", "1/15/2025 01:10h"),
            Marker::new(12, C::Monitoring, "Performance Monitoring", "1/15/2025 07:45h"),
            Marker::new(13, C::Backup, "System Backup", "1/15/2025 12:30h"),
            Marker::new(14, C::Log, "Log Analysis", "1/15/2025 16:00h"),
            Marker::new(15, C::Access, "User Access Review", "1/15/2025 21:20h"),
        ])
    }
}

/// Boundary for marker sequences coming from an external event feed.
pub struct MarkerFeed;

impl MarkerFeed {
    /// Parse a JSON array of markers.
    ///
    /// Rejects malformed JSON and duplicate ids. Timestamps are not
    /// validated and unknown categories fall back to `Unknown`.
    pub fn from_json(json: &str) -> Result<Timeline, FeedError> {
        let markers: Vec<Marker> = serde_json::from_str(json).map_err(FeedError::Parse)?;

        let mut seen = HashSet::with_capacity(markers.len());
        for marker in &markers {
            if !seen.insert(marker.id) {
                return Err(FeedError::DuplicateId(marker.id));
            }
        }

        tracing::debug!(count = markers.len(), "loaded marker feed");
        Ok(Timeline::new(markers))
    }

    /// Read and parse a marker feed file.
    pub fn load(path: &Path) -> Result<Timeline, FeedError> {
        let content = std::fs::read_to_string(path).map_err(FeedError::Io)?;
        Self::from_json(&content)
    }
}

/// Errors rejecting a marker feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Duplicate marker id: {0}")]
    DuplicateId(MarkerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_categories() {
        assert_eq!(EventCategory::parse("incident"), EventCategory::Incident);
        assert_eq!(EventCategory::parse("Failover"), EventCategory::Failover);
        assert_eq!(EventCategory::parse(" access "), EventCategory::Access);
    }

    #[test]
    fn test_parse_unknown_category_falls_back() {
        assert_eq!(EventCategory::parse("reboot"), EventCategory::Unknown);
        assert_eq!(EventCategory::parse(""), EventCategory::Unknown);
    }

    #[test]
    fn test_category_names_round_trip() {
        for category in EventCategory::KNOWN {
            assert_eq!(EventCategory::parse(category.as_str()), category);
        }
    }

    #[test]
    fn test_mock_timeline() {
        let timeline = Timeline::mock();
        assert_eq!(timeline.len(), 15);
        assert_eq!(timeline.markers()[0].label, "INCXXXXXX");
        assert_eq!(timeline.position(MarkerId(5)), Some(4));
        assert_eq!(
            timeline.find(MarkerId(15)).map(|m| m.category),
            Some(EventCategory::Access)
        );

        let ids: HashSet<_> = timeline.markers().iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), timeline.len());
    }

    #[test]
    fn test_feed_unknown_category() {
        let json = r#"[
            {"id": 1, "category": "incident", "label": "INC1", "occurred_at": "now"},
            {"id": 2, "category": "reboot", "label": "Reboot", "occurred_at": "later"}
        ]"#;
        let timeline = MarkerFeed::from_json(json).unwrap();
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.markers()[0].category, EventCategory::Incident);
        assert_eq!(timeline.markers()[1].category, EventCategory::Unknown);
    }

    #[test]
    fn test_feed_keeps_input_order() {
        let json = r#"[
            {"id": 9, "category": "log", "label": "b", "occurred_at": "2"},
            {"id": 3, "category": "log", "label": "a", "occurred_at": "1"}
        ]"#;
        let timeline = MarkerFeed::from_json(json).unwrap();
        let ids: Vec<u64> = timeline.markers().iter().map(|m| m.id.0).collect();
        assert_eq!(ids, vec![9, 3]);
    }

    #[test]
    fn test_feed_rejects_duplicate_ids() {
        let json = r#"[
            {"id": 1, "category": "patch", "label": "a", "occurred_at": "x"},
            {"id": 1, "category": "patch", "label": "b", "occurred_at": "y"}
        ]"#;
        let err = MarkerFeed::from_json(json).unwrap_err();
        assert!(matches!(err, FeedError::DuplicateId(MarkerId(1))));
    }

    #[test]
    fn test_feed_rejects_malformed_json() {
        let err = MarkerFeed::from_json("[{\"id\": \"one\"}]").unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn test_empty_feed() {
        let timeline = MarkerFeed::from_json("[]").unwrap();
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = MarkerFeed::load(Path::new("/nonexistent/markers.json")).unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }
}
