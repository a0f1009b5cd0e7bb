//! Horizontally scrolling incident timeline.
//!
//! This module provides:
//! - [`TimelineStrip`] - Marker sequence, scroll metrics, hover and auto-scroll
//! - [`TimelineWidget`] - Widget for rendering the strip and its tooltip

mod state;
mod widget;

pub use state::{TimelineStrip, SCROLL_SPEED};
pub use widget::TimelineWidget;
