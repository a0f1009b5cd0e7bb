//! The dashboard screen.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::Screen;
use crate::app::{App, FocusedPane};
use crate::layout::{self, MIN_HEIGHT, MIN_WIDTH};
use crate::timeline::TimelineWidget;
use crate::widgets::{
    ActionPanel, InsightsPanel, RouteTests, ServerList, StatusBar, StatusBarContent, TopologyMap,
};

/// All panels, the timeline strip and the status bar.
pub struct DashboardScreen;

impl Screen for DashboardScreen {
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer) {
        if !layout::fits(area) {
            render_too_small(app, area, buf);
            return;
        }

        let regions = app.regions();
        let (theme, icons, borders) = (&app.theme, &app.icons, &app.borders);
        let focused = |pane: FocusedPane| app.focus == pane;

        InsightsPanel::new(&app.insights, theme, icons, borders)
            .focused(focused(FocusedPane::Insights))
            .scroll(app.insights_scroll())
            .render(regions.insights, buf);

        ActionPanel::new(app.selected_action, theme, icons, borders)
            .focused(focused(FocusedPane::Actions))
            .render(regions.actions, buf);

        ServerList::new(&app.servers, theme, icons, borders)
            .focused(focused(FocusedPane::Servers))
            .scroll(app.servers_scroll())
            .render(regions.servers, buf);

        RouteTests::new(&app.routes, theme, icons, borders)
            .focused(focused(FocusedPane::Routes))
            .scroll(app.routes_scroll())
            .render(regions.routes, buf);

        TimelineWidget::new(&app.timeline, theme, icons, borders)
            .focused(focused(FocusedPane::Timeline))
            .render(regions.timeline, buf);

        // Drawn last so the issues tooltip can overlap neighbouring panes
        TopologyMap::new(&app.topology, theme, icons, borders)
            .focused(focused(FocusedPane::Topology))
            .hovered(app.topology_hover.hovered().copied())
            .render(regions.topology, buf);

        let content = StatusBarContent {
            focus: app.focus.name().to_string(),
            autoscroll: app.timeline.autoscroll_state(),
            last_action: app.notification.clone().or_else(|| app.last_action_message()),
            clock: app.clock.clone(),
        };
        StatusBar::new(&content, theme).render(regions.status, buf);
    }
}

fn render_too_small(app: &App, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled("Terminal too small", Style::default().fg(app.theme.warning))),
        Line::from(Span::styled(
            format!("Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}"),
            Style::default().fg(app.theme.subtext),
        )),
    ];
    let y = area.y + area.height.saturating_sub(2) / 2;
    Paragraph::new(lines)
        .centered()
        .render(Rect::new(area.x, y, area.width, 2.min(area.height)), buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Action;
    use crate::test_utils::{create_test_app, render_app_to_string};

    #[test]
    fn test_dashboard_renders_all_panels() {
        let mut app = create_test_app();
        let out = render_app_to_string(&mut app, 120, 40);

        assert!(out.contains("AI Insights"));
        assert!(out.contains("Actions"));
        assert!(out.contains("Topology"));
        assert!(out.contains("Servers (9)"));
        assert!(out.contains("Route Tests"));
        assert!(out.contains("Timeline"));
        assert!(out.contains("auto: idle"));
    }

    #[test]
    fn test_hovered_marker_tooltip_on_dashboard() {
        let mut app = create_test_app();
        app.sync_layout(Rect::new(0, 0, 120, 40));
        app.handle_action(Action::Right);
        app.handle_action(Action::Right);
        let out = render_app_to_string(&mut app, 120, 40);

        assert!(out.contains("Patching"));
        assert!(!out.contains("INCXXXXXX"));
    }

    #[test]
    fn test_last_action_in_status_bar() {
        let mut app = create_test_app();
        app.dispatch(infradash_core::DashboardAction::RestartServer);
        let out = render_app_to_string(&mut app, 120, 40);
        assert!(out.contains("Executing action: restart-server"));
    }

    #[test]
    fn test_too_small() {
        let mut app = create_test_app();
        let out = render_app_to_string(&mut app, 40, 10);
        assert!(out.contains("Terminal too small"));
    }
}
