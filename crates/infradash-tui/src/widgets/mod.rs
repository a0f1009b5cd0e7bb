//! UI widgets for the dashboard panels.
//!
//! This module provides:
//! - [`Pane`] - Bordered pane with scrollable lines
//! - [`ServerList`], [`InsightsPanel`], [`RouteTests`] - List panels
//! - [`TopologyMap`] - Canvas-drawn node map with issue tooltips
//! - [`ActionPanel`] - Operator action buttons
//! - [`StatusBar`] - Bottom status line

mod action_panel;
mod insights;
mod pane;
mod route_tests;
mod server_list;
mod status_bar;
mod topology;

pub use action_panel::{action_at, ActionPanel};
pub use insights::InsightsPanel;
pub use pane::{max_scroll, Pane};
pub use route_tests::{trace_lines, RouteTests};
pub use server_list::ServerList;
pub use status_bar::{StatusBar, StatusBarContent};
pub use topology::{node_at, TopologyMap};
#[cfg(test)]
pub use topology::label_area;
