//! Catppuccin colour palettes and dashboard colour mappings.

use infradash_core::{
    EdgeKind, EventCategory, HealthStatus, NodeKind, RouteStatus, Severity, ThemeName,
};
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,
    pub overlay: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,
    pub secondary: Color,

    // Semantic
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    // Palette
    pub red: Color,
    pub peach: Color,
    pub yellow: Color,
    pub green: Color,
    pub teal: Color,
    pub sky: Color,
    pub sapphire: Color,
    pub blue: Color,
    pub lavender: Color,
    pub mauve: Color,
    pub pink: Color,
    pub flamingo: Color,

    // Borders
    pub border: Color,
    pub border_focused: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Theme for a configured name.
    pub fn from_name(name: ThemeName) -> Self {
        match name {
            ThemeName::Mocha => Self::mocha(),
            ThemeName::Latte => Self::latte(),
            ThemeName::HighContrast => Self::high_contrast(),
        }
    }

    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            base: Color::Rgb(30, 30, 46),       // #1e1e2e
            surface: Color::Rgb(49, 50, 68),    // #313244
            overlay: Color::Rgb(69, 71, 90),    // #45475a

            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            primary: Color::Rgb(180, 190, 254),   // #b4befe
            secondary: Color::Rgb(148, 226, 213), // #94e2d5

            success: Color::Rgb(166, 227, 161), // #a6e3a1
            warning: Color::Rgb(249, 226, 175), // #f9e2af
            error: Color::Rgb(243, 139, 168),   // #f38ba8
            info: Color::Rgb(137, 180, 250),    // #89b4fa

            red: Color::Rgb(243, 139, 168),      // #f38ba8
            peach: Color::Rgb(250, 179, 135),    // #fab387
            yellow: Color::Rgb(249, 226, 175),   // #f9e2af
            green: Color::Rgb(166, 227, 161),    // #a6e3a1
            teal: Color::Rgb(148, 226, 213),     // #94e2d5
            sky: Color::Rgb(137, 220, 235),      // #89dceb
            sapphire: Color::Rgb(116, 199, 236), // #74c7ec
            blue: Color::Rgb(137, 180, 250),     // #89b4fa
            lavender: Color::Rgb(180, 190, 254), // #b4befe
            mauve: Color::Rgb(203, 166, 247),    // #cba6f7
            pink: Color::Rgb(245, 194, 231),     // #f5c2e7
            flamingo: Color::Rgb(242, 205, 205), // #f2cdcd

            border: Color::Rgb(69, 71, 90),            // #45475a
            border_focused: Color::Rgb(180, 190, 254), // #b4befe
        }
    }

    /// Catppuccin Latte theme (light theme).
    pub fn latte() -> Self {
        Self {
            base: Color::Rgb(239, 241, 245),    // #eff1f5
            surface: Color::Rgb(230, 233, 239), // #e6e9ef
            overlay: Color::Rgb(220, 224, 232), // #dce0e8

            text: Color::Rgb(76, 79, 105),    // #4c4f69
            subtext: Color::Rgb(92, 95, 119), // #5c5f77
            muted: Color::Rgb(140, 143, 161), // #8c8fa1

            primary: Color::Rgb(114, 135, 253),  // #7287fd
            secondary: Color::Rgb(23, 146, 153), // #179299

            success: Color::Rgb(64, 160, 43),  // #40a02b
            warning: Color::Rgb(223, 142, 29), // #df8e1d
            error: Color::Rgb(210, 15, 57),    // #d20f39
            info: Color::Rgb(30, 102, 245),    // #1e66f5

            red: Color::Rgb(210, 15, 57),        // #d20f39
            peach: Color::Rgb(254, 100, 11),     // #fe640b
            yellow: Color::Rgb(223, 142, 29),    // #df8e1d
            green: Color::Rgb(64, 160, 43),      // #40a02b
            teal: Color::Rgb(23, 146, 153),      // #179299
            sky: Color::Rgb(4, 165, 229),        // #04a5e5
            sapphire: Color::Rgb(32, 159, 181),  // #209fb5
            blue: Color::Rgb(30, 102, 245),      // #1e66f5
            lavender: Color::Rgb(114, 135, 253), // #7287fd
            mauve: Color::Rgb(136, 57, 239),     // #8839ef
            pink: Color::Rgb(234, 118, 203),     // #ea76cb
            flamingo: Color::Rgb(221, 120, 120), // #dd7878

            border: Color::Rgb(188, 192, 204),         // #bcc0cc
            border_focused: Color::Rgb(114, 135, 253), // #7287fd
        }
    }

    /// High contrast theme for accessibility.
    pub fn high_contrast() -> Self {
        Self {
            base: Color::Black,
            surface: Color::Rgb(20, 20, 20),
            overlay: Color::Rgb(40, 40, 40),

            text: Color::White,
            subtext: Color::Rgb(200, 200, 200),
            muted: Color::Rgb(150, 150, 150),

            primary: Color::Cyan,
            secondary: Color::Magenta,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,

            red: Color::Red,
            peach: Color::LightRed,
            yellow: Color::Yellow,
            green: Color::Green,
            teal: Color::Cyan,
            sky: Color::LightCyan,
            sapphire: Color::LightBlue,
            blue: Color::Blue,
            lavender: Color::LightMagenta,
            mauve: Color::Magenta,
            pink: Color::LightMagenta,
            flamingo: Color::LightYellow,

            border: Color::White,
            border_focused: Color::Cyan,
        }
    }

    /// Colour of a timeline marker icon. Unknown categories get the neutral
    /// muted colour.
    pub fn marker_color(&self, category: EventCategory) -> Color {
        match category {
            EventCategory::Incident => self.red,
            EventCategory::Patch => self.blue,
            EventCategory::Config => self.yellow,
            EventCategory::Change => self.mauve,
            EventCategory::Failover => self.peach,
            EventCategory::Maintenance | EventCategory::Unknown => self.muted,
            EventCategory::Optimization => self.green,
            EventCategory::Network => self.lavender,
            EventCategory::Security => self.teal,
            EventCategory::Deployment => self.pink,
            EventCategory::Monitoring => self.flamingo,
            EventCategory::Backup => self.sky,
            EventCategory::Log | EventCategory::Access => self.sapphire,
        }
    }

    pub fn health_color(&self, status: HealthStatus) -> Color {
        match status {
            HealthStatus::Healthy => self.success,
            HealthStatus::Warning => self.warning,
            HealthStatus::Critical => self.error,
            HealthStatus::Unknown => self.muted,
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::High => self.error,
            Severity::Medium => self.warning,
            Severity::Low => self.info,
        }
    }

    pub fn route_color(&self, status: RouteStatus) -> Color {
        match status {
            RouteStatus::Success => self.success,
            RouteStatus::Warning => self.warning,
            RouteStatus::Failed => self.error,
        }
    }

    pub fn edge_color(&self, kind: EdgeKind) -> Color {
        match kind {
            EdgeKind::Data => self.blue,
            EdgeKind::Dependency => self.mauve,
            EdgeKind::Replica => self.green,
            EdgeKind::Failover => self.red,
        }
    }

    /// Node colour: databases are blue while healthy, cloud nodes are always
    /// mauve, everything else follows health.
    pub fn node_color(&self, kind: NodeKind, status: HealthStatus) -> Color {
        match (kind, status) {
            (NodeKind::Cloud, _) => self.mauve,
            (NodeKind::Database, HealthStatus::Healthy) => self.blue,
            (_, status) => self.health_color(status),
        }
    }
}
