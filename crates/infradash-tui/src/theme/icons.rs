//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.

use infradash_core::{
    DashboardAction, EventCategory, HealthStatus, IconStyle, InsightKind, NodeKind,
};

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl IconMode {
    /// Mode for a configured style. `NO_COLOR` forces ASCII.
    pub fn resolve(style: IconStyle, no_color: bool) -> Self {
        if no_color {
            return Self::Ascii;
        }
        match style {
            IconStyle::Nerd => Self::Nerd,
            IconStyle::Unicode => Self::Unicode,
            IconStyle::Ascii => Self::Ascii,
        }
    }

    /// Mode for a configured style, honouring the `NO_COLOR` environment
    /// variable.
    pub fn from_env(style: IconStyle) -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Self::resolve(style, no_color)
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    fn pick(&self, nerd: &'static str, unicode: &'static str, ascii: &'static str) -> &'static str {
        match self.mode {
            IconMode::Nerd => nerd,
            IconMode::Unicode => unicode,
            IconMode::Ascii => ascii,
        }
    }

    // === Timeline ===

    /// Marker icon. Unknown categories get a plain circle.
    pub fn marker(&self, category: EventCategory) -> &'static str {
        match category {
            EventCategory::Incident => self.pick("\u{f071}", "⚠", "!"),
            EventCategory::Patch => self.pick("\u{f0ad}", "✎", "P"),
            EventCategory::Config => self.pick("\u{f013}", "⚙", "C"),
            EventCategory::Change => self.pick("\u{f126}", "⑂", "Y"),
            EventCategory::Failover => self.pick("\u{f0ec}", "⇄", "X"),
            EventCategory::Maintenance => self.pick("\u{f017}", "◷", "M"),
            EventCategory::Optimization => self.pick("\u{f0e7}", "ϟ", "Z"),
            EventCategory::Network => self.pick("\u{f0e8}", "⊞", "N"),
            EventCategory::Security => self.pick("\u{f132}", "◆", "S"),
            EventCategory::Deployment => self.pick("\u{f233}", "▣", "D"),
            EventCategory::Monitoring => self.pick("\u{f2db}", "∿", "W"),
            EventCategory::Backup => self.pick("\u{f1c0}", "≣", "B"),
            EventCategory::Log | EventCategory::Access => self.pick("\u{f058}", "✔", "V"),
            EventCategory::Unknown => self.pick("\u{f111}", "●", "o"),
        }
    }

    /// Horizontal connector between timeline markers.
    pub fn connector(&self) -> &'static str {
        self.pick("─", "─", "-")
    }

    // === Status ===

    pub fn health(&self, status: HealthStatus) -> &'static str {
        match status {
            HealthStatus::Healthy => self.pick("\u{f058}", "✓", "[ok]"),
            HealthStatus::Warning | HealthStatus::Critical => self.pick("\u{f071}", "⚠", "[!]"),
            HealthStatus::Unknown => self.pick("\u{f233}", "▣", "[?]"),
        }
    }

    pub fn insight(&self, kind: InsightKind) -> &'static str {
        match kind {
            InsightKind::Alert => self.pick("\u{f071}", "⚠", "!"),
            InsightKind::Backup => self.pick("\u{f1c0}", "≣", "B"),
            InsightKind::Performance => self.pick("\u{f0e7}", "ϟ", "Z"),
            InsightKind::Config => self.pick("\u{f013}", "⚙", "C"),
            InsightKind::Security => self.pick("\u{f132}", "◆", "S"),
        }
    }

    pub fn node(&self, kind: NodeKind) -> &'static str {
        match kind {
            NodeKind::Server => self.pick("\u{f233}", "▣", "#"),
            NodeKind::Database => self.pick("\u{f1c0}", "≣", "D"),
            NodeKind::Cloud => self.pick("\u{f0c2}", "☁", "@"),
        }
    }

    pub fn action(&self, action: DashboardAction) -> &'static str {
        match action {
            DashboardAction::RestartProcess => self.pick("\u{f021}", "↻", "~"),
            DashboardAction::RestartServer => self.pick("\u{f011}", "⏻", "O"),
            DashboardAction::StartBackup => self.pick("\u{f04b}", "▶", ">"),
            DashboardAction::ClearAlerts => self.pick("\u{f28d}", "⊘", "x"),
        }
    }

    // === Misc ===

    pub fn network(&self) -> &'static str {
        self.pick("\u{f0e8}", "⇢", "->")
    }

    pub fn clock(&self) -> &'static str {
        self.pick("\u{f017}", "◷", "@")
    }

    pub fn server(&self) -> &'static str {
        self.pick("\u{f233}", "▣", "#")
    }

    /// Selection indicator.
    pub fn selected(&self) -> &'static str {
        self.pick("\u{f054}", "▸", ">")
    }
}
