//! AI-generated insight feed.

use serde::{Deserialize, Serialize};

/// Insight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Alert,
    Backup,
    Performance,
    Config,
    Security,
}

/// Insight severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// One insight card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub id: u32,
    pub kind: InsightKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub timestamp: String,
    pub affected_hosts: Vec<String>,
}

impl Insight {
    /// Whether `host` is listed as affected.
    pub fn affects(&self, host: &str) -> bool {
        self.affected_hosts.iter().any(|h| h == host)
    }
}

#[allow(clippy::too_many_arguments)]
fn insight(
    id: u32,
    kind: InsightKind,
    title: &str,
    description: &str,
    severity: Severity,
    timestamp: &str,
    hosts: &[&str],
) -> Insight {
    Insight {
        id,
        kind,
        title: title.into(),
        description: description.into(),
        severity,
        timestamp: timestamp.into(),
        affected_hosts: hosts.iter().map(|h| (*h).to_string()).collect(),
    }
}

/// Mock insight feed, keyed by server-list hostnames.
pub fn mock_insights() -> Vec<Insight> {
    use InsightKind as K;
    use Severity::{High, Low, Medium};
    vec![
        insight(
            1,
            K::Alert,
            "Alert Pattern Change",
            "Unusual spike in authentication failures detected across multiple application servers",
            High,
            "2024-03-15 10:15:00",
            &["app-server-01", "app-server-02"],
        ),
        insight(
            2,
            K::Backup,
            "Failed Backup",
            "Database backup failed on primary database server during scheduled window",
            Medium,
            "2024-03-15 02:00:00",
            &["db-server-01"],
        ),
        insight(
            3,
            K::Performance,
            "CPU Spike Detected",
            "Sustained CPU usage above 90% on cache server for last 15 minutes",
            High,
            "2024-03-15 09:45:00",
            &["cache-server-01"],
        ),
        insight(
            4,
            K::Config,
            "Configuration Issue",
            "Non-standard hostname pattern detected on newly provisioned instances",
            Low,
            "2024-03-15 08:30:00",
            &["app-server-03", "db-server-03"],
        ),
        insight(
            5,
            K::Security,
            "Security Update Required",
            "Critical security patches pending installation on multiple servers",
            High,
            "2024-03-15 07:15:00",
            &["app-server-01", "app-server-02", "db-server-01"],
        ),
        insight(
            6,
            K::Performance,
            "Memory Usage Alert",
            "High memory utilization trending upward over past 6 hours",
            Medium,
            "2024-03-15 06:00:00",
            &["app-server-02", "cache-server-02"],
        ),
    ]
}

/// Same issues as [`mock_insights`], keyed by topology node ids.
pub fn mock_topology_issues() -> Vec<Insight> {
    let mut issues = mock_insights();
    let rename = |host: &mut String| {
        let mapped = match host.as_str() {
            "db-server-01" => "db-primary",
            "cache-server-01" | "cache-server-02" => "cache-01",
            _ => return,
        };
        *host = mapped.to_string();
    };
    for issue in &mut issues {
        issue.affected_hosts.iter_mut().for_each(rename);
        issue.affected_hosts.dedup();
    }
    issues
}
