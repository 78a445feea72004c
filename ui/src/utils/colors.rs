//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for a set flag.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for an unset flag and destructive actions.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Muted fill behind avatar initials.
pub const COLOR_AVATAR_BG: Color32 = Color32::from_rgb(200, 200, 200);
