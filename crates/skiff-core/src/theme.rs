//! Theme color types.

use serde::{Deserialize, Serialize};

/// Toolbar colors persisted into process-wide state.
///
/// Captured once per bootstrap so the next cold start can paint a matching
/// toolbar before the store has hydrated, avoiding a visible flash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarTheme {
    /// Toolbar background color.
    pub background: String,
    /// Toolbar text color.
    pub text: String,
    /// Toolbar center-element color.
    pub center: String,
}

/// Header colors of the currently active theme, as read from the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    /// Header background color.
    pub header_background: String,
    /// Header text color.
    pub header_text: String,
    /// Header center-element color.
    pub header_center: String,
}
