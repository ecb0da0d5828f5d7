//! Move hints visualization
//!
//! Highlights legal target squares for the held selection and for the hover
//! preview when `show_hints` is enabled.

use crate::core::DisplaySettings;
use crate::game::resources::{Selection, Target};

/// Hints for the held selection
pub fn move_hints(selection: &Selection, settings: &DisplaySettings) -> Vec<Target> {
    if !settings.show_hints {
        return Vec::new();
    }
    selection.possible_moves().to_vec()
}

/// Hints for the hover preview, skipped when it duplicates the held selection
pub fn hover_hints(selection: &Selection, settings: &DisplaySettings) -> Vec<Target> {
    if !settings.show_hints {
        return Vec::new();
    }
    match selection.hover() {
        Some(preview) if Some(preview.origin) != selection.selected_square() => {
            preview.targets.clone()
        }
        _ => Vec::new(),
    }
}
