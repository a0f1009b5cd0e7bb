//! Infrastructure inventory (server list).

use serde::{Deserialize, Serialize};

/// Health of a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Healthy,
    Warning,
    Critical,
    /// Status not reported.
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// One host in the server list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerNode {
    pub id: u32,
    pub hostname: String,
    pub ip_address: String,
    pub status: HealthStatus,
    pub application_id: String,
}

impl ServerNode {
    fn new(id: u32, hostname: &str, ip: &str, status: HealthStatus, app: &str) -> Self {
        Self {
            id,
            hostname: hostname.into(),
            ip_address: ip.into(),
            status,
            application_id: app.into(),
        }
    }
}

/// Mock inventory.
pub fn mock_servers() -> Vec<ServerNode> {
    use HealthStatus::{Critical, Healthy, Warning};
    vec![
        ServerNode::new(1, "app-server-01", "10.0.1.101", Healthy, "APP001"),
        ServerNode::new(2, "db-server-01", "10.0.1.201", Warning, "APP001"),
        ServerNode::new(3, "cache-server-01", "10.0.1.301", Healthy, "APP001"),
        ServerNode::new(4, "app-server-02", "10.0.1.102", Critical, "APP001"),
        ServerNode::new(5, "db-server-02", "10.0.1.202", Healthy, "APP001"),
        ServerNode::new(6, "cache-server-02", "10.0.1.302", Warning, "APP001"),
        ServerNode::new(7, "app-server-03", "10.0.1.103", Healthy, "APP002"),
        ServerNode::new(8, "db-server-03", "10.0.1.203", Healthy, "APP002"),
        ServerNode::new(9, "cache-server-03", "10.0.1.303", Healthy, "APP002"),
    ]
}
