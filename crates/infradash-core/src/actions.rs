//! Dashboard action buttons.
//!
//! Actions are dispatched to an [`ActionExecutor`]. The only executor shipped
//! is [`LoggingExecutor`], which logs the request and does nothing else.

use serde::{Deserialize, Serialize};

/// An operator action offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardAction {
    RestartProcess,
    RestartServer,
    StartBackup,
    ClearAlerts,
}

impl DashboardAction {
    /// Button order.
    pub const ALL: [DashboardAction; 4] = [
        Self::RestartProcess,
        Self::RestartServer,
        Self::StartBackup,
        Self::ClearAlerts,
    ];

    /// Stable action id.
    pub fn id(self) -> &'static str {
        match self {
            Self::RestartProcess => "restart-process",
            Self::RestartServer => "restart-server",
            Self::StartBackup => "start-backup",
            Self::ClearAlerts => "clear-alerts",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Self::RestartProcess => "Restart Process",
            Self::RestartServer => "Restart Server",
            Self::StartBackup => "Start Backup",
            Self::ClearAlerts => "Clear Alerts",
        }
    }
}

impl std::fmt::Display for DashboardAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

/// Receives dispatched actions.
pub trait ActionExecutor: Send {
    fn execute(&mut self, action: DashboardAction);
}

/// Executor that only logs. Remembers the most recent request.
#[derive(Debug, Default)]
pub struct LoggingExecutor {
    last: Option<DashboardAction>,
}

impl LoggingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<DashboardAction> {
        self.last
    }
}

impl ActionExecutor for LoggingExecutor {
    fn execute(&mut self, action: DashboardAction) {
        tracing::info!(action = action.id(), "Executing action: {action}");
        self.last = Some(action);
    }
}
