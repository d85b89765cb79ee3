//! # Rollcall
//!
//! Business logic for a multi-tenant attendance dashboard.
//!
//! Rollcall turns a tenant's roster and whatever attendance has been recorded
//! for a day into a complete present/absent picture, and resolves the
//! occupation-specific terminology ("Staff Member", "Employee", "Student", ...)
//! the dashboard shows to that tenant.
//!
//! ## Architecture
//!
//! - **Roster**: reconcile a roster against partial records, toggle, mark all
//! - **Theme**: built-in occupation presets and per-tenant label overrides
//! - **Settings**: stored tenant settings and the fallback preset policy
//! - **History / Stats**: the dashboard's read-only views
//! - **Directory**: department grouping and confirmed removal
//!
//! Every operation is a pure function over in-memory data. Fetching members,
//! storing records and persisting settings belong to the host application.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod directory;
pub mod error;
pub mod history;
pub mod model;
pub mod roster;
pub mod settings;
pub mod stats;
pub mod theme;

// Re-export main types
pub use config::RollcallConfig;
pub use directory::{group_by_department, remove_member};
pub use error::{Result, RollcallError};
pub use history::{export_csv, group_by_date, history_rows, DateGroup, HistoryRow};
pub use model::{AttendanceRecord, AttendanceStatus, Member, MemberId};
pub use roster::{mark_all, reconcile, summarize, to_records, toggle, RosterStatusMap, Summary};
pub use settings::TenantSettings;
pub use stats::{dashboard_stats, weekly_trend, DailyTally, DashboardStats};
pub use theme::{
    list_presets, preset_defaults, resolve_theme, DisplayMeta, EffectiveTheme, LabelField,
    LabelOverrides, LabelSet, PresetCatalog, ThemePreset,
};

/// Rollcall version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
