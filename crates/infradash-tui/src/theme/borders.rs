//! Line art for dashboard panes and the marker/node tooltips.
//!
//! Focus is shown by the border weight alone, so it survives `NO_COLOR`.

use ratatui::symbols::border;

use super::icons::IconMode;

/// Borders for the current icon mode.
#[derive(Debug, Clone)]
pub struct BorderSet {
    mode: IconMode,
}

impl Default for BorderSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl BorderSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Border of a dashboard pane. The focused pane gets a heavier line.
    pub fn pane(&self, focused: bool) -> border::Set {
        match (self.mode, focused) {
            (IconMode::Ascii, false) => border::PLAIN,
            (IconMode::Ascii, true) => border::DOUBLE,
            (IconMode::Nerd | IconMode::Unicode, false) => border::ROUNDED,
            (IconMode::Nerd | IconMode::Unicode, true) => border::THICK,
        }
    }

    /// Border of a timeline or topology tooltip. Never the same as a focused
    /// pane, since tooltips float over the focused timeline.
    pub fn tooltip(&self) -> border::Set {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => border::DOUBLE,
            IconMode::Ascii => border::PLAIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_differs_from_focused_pane() {
        for mode in [IconMode::Nerd, IconMode::Unicode, IconMode::Ascii] {
            let borders = BorderSet::new(mode);
            assert_ne!(borders.tooltip().top_left, borders.pane(true).top_left, "{mode:?}");
            assert_ne!(borders.pane(false).top_left, borders.pane(true).top_left, "{mode:?}");
        }
    }

    #[test]
    fn test_ascii_panes() {
        let borders = BorderSet::new(IconMode::Ascii);
        assert_eq!(borders.pane(false).top_left, "┌");
        assert_eq!(borders.pane(true).top_left, "╔");
    }

    #[test]
    fn test_unicode_tooltip() {
        assert_eq!(BorderSet::new(IconMode::Unicode).tooltip().top_left, "╔");
    }
}
