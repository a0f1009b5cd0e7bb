//! infradash-core: Headless model for the infradash monitoring dashboard
//!
//! This crate provides everything that does not touch a terminal:
//! - Mock inventory, insight, route-trace, topology and timeline data
//! - The timeline auto-scroll state machine and its timer ownership
//! - Hover state for tooltips
//! - Dashboard configuration
//! - The action dispatch stub

pub mod actions;
pub mod autoscroll;
pub mod config;
pub mod hover;
pub mod insights;
pub mod inventory;
pub mod marker;
pub mod routes;
pub mod topology;

// Re-export commonly used types
pub use actions::{ActionExecutor, DashboardAction, LoggingExecutor};
pub use autoscroll::{
    AutoScrollConfig, AutoScrollState, AutoScroller, ManualTimers, ScrollDirection,
    ScrollMetrics, ScrollViewport, TimerGuard, TimerId, TimerSource,
};
pub use config::{ConfigError, DashboardConfig, IconStyle, ThemeName};
pub use hover::HoverState;
pub use insights::{mock_insights, Insight, InsightKind, Severity};
pub use inventory::{mock_servers, HealthStatus, ServerNode};
pub use marker::{EventCategory, FeedError, Marker, MarkerFeed, MarkerId, Timeline};
pub use routes::{mock_routes, Hop, RouteStatus, RouteTest};
pub use topology::{EdgeKind, NodeKind, Topology, TopologyEdge, TopologyNode, PLANE_SIZE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
