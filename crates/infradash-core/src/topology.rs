//! Static infrastructure topology.
//!
//! Node positions are fixed coordinates on a 600x600 plane; nothing is laid
//! out at runtime.

use crate::insights::{mock_topology_issues, Insight};
use crate::inventory::HealthStatus;
use serde::{Deserialize, Serialize};

/// Width and height of the coordinate plane node positions live on.
pub const PLANE_SIZE: f64 = 600.0;

/// What a node is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Server,
    Database,
    Cloud,
}

/// Resource utilisation in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeMetrics {
    pub cpu: u8,
    pub memory: u8,
    pub disk: u8,
}

/// A node on the topology map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub id: String,
    pub kind: NodeKind,
    pub status: HealthStatus,
    pub applications: Vec<String>,
    pub metrics: NodeMetrics,
    /// Position on the plane, origin top-left.
    pub position: (f64, f64),
}

/// Relationship an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Data,
    Dependency,
    Replica,
    Failover,
}

/// Directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
}

/// Nodes, edges and the issues attached to them.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    pub nodes: Vec<TopologyNode>,
    pub edges: Vec<TopologyEdge>,
    pub issues: Vec<Insight>,
}

impl Topology {
    pub fn node(&self, id: &str) -> Option<&TopologyNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Issues whose affected hosts include `node_id`.
    pub fn issues_for(&self, node_id: &str) -> Vec<&Insight> {
        self.issues.iter().filter(|i| i.affects(node_id)).collect()
    }

    /// Edges with both endpoints present, resolved to node positions.
    pub fn edge_segments(&self) -> impl Iterator<Item = (&TopologyEdge, (f64, f64), (f64, f64))> + '_ {
        self.edges.iter().filter_map(|edge| {
            let from = self.node(&edge.source)?.position;
            let to = self.node(&edge.target)?.position;
            Some((edge, from, to))
        })
    }

    /// The mock topology.
    pub fn mock() -> Self {
        use HealthStatus::{Healthy, Warning};
        use NodeKind::{Cloud, Database, Server};

        let nodes = vec![
            node("app-server-01", Server, Healthy, &["Web Server", "API Gateway"], (45, 60, 30), (100.0, 100.0)),
            node("app-server-02", Server, Warning, &["Web Server", "Cache Service"], (75, 80, 45), (100.0, 300.0)),
            node("db-primary", Database, Healthy, &["PostgreSQL Primary"], (40, 70, 65), (300.0, 200.0)),
            node("db-replica-01", Database, Healthy, &["PostgreSQL Replica"], (35, 65, 60), (500.0, 200.0)),
            node("cache-01", Server, Healthy, &["Redis Cache"], (30, 50, 20), (300.0, 100.0)),
            node("cdn-01", Cloud, Healthy, &["CDN Edge"], (25, 40, 30), (300.0, 300.0)),
            node("app-server-03", Server, Healthy, &["Web Server", "API Gateway"], (45, 60, 30), (100.0, 500.0)),
            node("db-server-03", Database, Healthy, &["PostgreSQL Primary"], (40, 70, 65), (500.0, 500.0)),
            node("cache-server-03", Server, Healthy, &["Redis Cache"], (30, 50, 20), (500.0, 100.0)),
        ];

        use EdgeKind::{Data, Dependency, Failover, Replica};
        let edges = [
            ("app-server-01", "db-primary", Data),
            ("db-primary", "app-server-01", Data),
            ("app-server-02", "db-primary", Data),
            ("db-primary", "app-server-02", Data),
            ("db-primary", "db-replica-01", Replica),
            ("db-replica-01", "db-primary", Failover),
            ("app-server-01", "cache-01", Dependency),
            ("app-server-02", "cache-01", Dependency),
            ("app-server-01", "cdn-01", Data),
            ("app-server-02", "cdn-01", Data),
            ("app-server-03", "db-server-03", Data),
            ("db-server-03", "app-server-03", Data),
            ("app-server-03", "cache-server-03", Dependency),
            ("cache-server-03", "app-server-03", Dependency),
        ]
        .into_iter()
        .map(|(source, target, kind)| TopologyEdge {
            source: source.into(),
            target: target.into(),
            kind,
        })
        .collect();

        Self {
            nodes,
            edges,
            issues: mock_topology_issues(),
        }
    }
}

fn node(
    id: &str,
    kind: NodeKind,
    status: HealthStatus,
    applications: &[&str],
    (cpu, memory, disk): (u8, u8, u8),
    position: (f64, f64),
) -> TopologyNode {
    TopologyNode {
        id: id.into(),
        kind,
        status,
        applications: applications.iter().map(|a| (*a).to_string()).collect(),
        metrics: NodeMetrics { cpu, memory, disk },
        position,
    }
}
