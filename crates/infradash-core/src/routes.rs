//! Route-trace results.

use serde::{Deserialize, Serialize};

/// Outcome of a route trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Success,
    Warning,
    Failed,
}

/// One hop of a trace. A latency of zero means the hop did not answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    pub hop: u32,
    pub address: String,
    pub latency_ms: f64,
}

impl Hop {
    pub fn responded(&self) -> bool {
        self.latency_ms > 0.0
    }

    /// Latency as shown in the trace (`3.5ms`, or `-` for no answer).
    pub fn latency_label(&self) -> String {
        if self.responded() {
            format!("{}ms", self.latency_ms)
        } else {
            "-".to_string()
        }
    }
}

/// A route trace from a source to a destination host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTest {
    pub id: u32,
    pub source: String,
    pub destination: String,
    pub timestamp: String,
    pub status: RouteStatus,
    pub hops: Vec<Hop>,
}

impl RouteTest {
    /// Whether the trace stopped before reaching the destination.
    pub fn is_incomplete(&self) -> bool {
        self.status == RouteStatus::Failed
    }
}

fn route(
    id: u32,
    destination: &str,
    timestamp: &str,
    status: RouteStatus,
    hops: &[(&str, f64)],
) -> RouteTest {
    RouteTest {
        id,
        source: "192.168.1.1".into(),
        destination: destination.into(),
        timestamp: timestamp.into(),
        status,
        hops: hops
            .iter()
            .zip(1..)
            .map(|(&(address, latency_ms), hop)| Hop {
                hop,
                address: address.into(),
                latency_ms,
            })
            .collect(),
    }
}

/// Mock route traces.
pub fn mock_routes() -> Vec<RouteTest> {
    use RouteStatus::{Failed, Success, Warning};
    vec![
        route(
            1,
            "app-server-01",
            "2024-03-15 10:30:45",
            Success,
            &[
                ("192.168.1.1", 0.5),
                ("10.0.0.1", 1.2),
                ("172.16.0.1", 2.8),
                ("app-server-01", 3.5),
            ],
        ),
        route(
            2,
            "db-server-01",
            "2024-03-15 10:31:00",
            Warning,
            &[("192.168.1.1", 0.6), ("10.0.0.1", 15.7), ("db-server-01", 16.9)],
        ),
        route(
            3,
            "cache-server-01",
            "2024-03-15 10:31:15",
            Failed,
            &[("192.168.1.1", 0.5), ("10.0.0.1", 1.8), ("*", 0.0), ("*", 0.0)],
        ),
        route(
            4,
            "app-server-02",
            "2024-03-15 10:31:30",
            Success,
            &[
                ("192.168.1.1", 0.4),
                ("10.0.0.1", 1.1),
                ("172.16.0.2", 2.5),
                ("app-server-02", 3.2),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_routes() {
        let routes = mock_routes();
        assert_eq!(routes.len(), 4);
        assert_eq!(routes[0].hops.len(), 4);
        assert_eq!(routes[0].hops[3].hop, 4);
        assert!(routes[2].is_incomplete());
        assert!(!routes[1].is_incomplete());
    }

    #[test]
    fn test_latency_label() {
        let routes = mock_routes();
        assert_eq!(routes[0].hops[0].latency_label(), "0.5ms");
        assert_eq!(routes[1].hops[1].latency_label(), "15.7ms");
        assert_eq!(routes[2].hops[2].latency_label(), "-");
    }
}
