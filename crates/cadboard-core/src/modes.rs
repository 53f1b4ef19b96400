//! Drawing modes and the mode-dependent interaction policy.

use crate::scene::{CanvasScene, CursorHint};
use serde::{Deserialize, Serialize};

/// The active tool determining what pointer gestures create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingMode {
    #[default]
    Select,
    Rectangle,
    Circle,
    Line,
    Text,
}

impl DrawingMode {
    /// Parse a wire name. Unrecognized names fall back to `Select`, which
    /// has no creation capability.
    pub fn from_name(name: &str) -> Self {
        match name {
            "rectangle" => DrawingMode::Rectangle,
            "circle" => DrawingMode::Circle,
            "line" => DrawingMode::Line,
            "text" => DrawingMode::Text,
            _ => DrawingMode::Select,
        }
    }

    /// The lowercase wire name.
    pub fn name(&self) -> &'static str {
        match self {
            DrawingMode::Select => "select",
            DrawingMode::Rectangle => "rectangle",
            DrawingMode::Circle => "circle",
            DrawingMode::Line => "line",
            DrawingMode::Text => "text",
        }
    }

    /// Modes that track a pointer drag between down and up.
    pub fn is_drag_mode(&self) -> bool {
        matches!(
            self,
            DrawingMode::Rectangle | DrawingMode::Circle | DrawingMode::Line
        )
    }
}

/// Holds the current drawing mode and applies its interaction policy to the
/// scene: select mode enables object selection with default/move cursors,
/// every creation mode disables selection and shows a crosshair.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    current: DrawingMode,
}

impl ModeController {
    /// Create a controller starting in select mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mode. Read this fresh on every event dispatch.
    pub fn current(&self) -> DrawingMode {
        self.current
    }

    /// Update the current mode. Any of the modes is always valid.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        if self.current != mode {
            log::debug!("drawing mode: {} -> {}", self.current.name(), mode.name());
        }
        self.current = mode;
    }

    /// Apply the current mode's interaction policy to the scene.
    pub fn apply(&self, scene: &mut CanvasScene) {
        if self.current == DrawingMode::Select {
            scene.set_selection_enabled(true);
            scene.set_cursor_hints(CursorHint::Default, CursorHint::Move);
        } else {
            scene.set_selection_enabled(false);
            scene.set_cursor_hints(CursorHint::Crosshair, CursorHint::Crosshair);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::CursorHints;

    #[test]
    fn test_from_name() {
        assert_eq!(DrawingMode::from_name("rectangle"), DrawingMode::Rectangle);
        assert_eq!(DrawingMode::from_name("text"), DrawingMode::Text);
        // Safe default for anything unrecognized
        assert_eq!(DrawingMode::from_name("polygon"), DrawingMode::Select);
        assert_eq!(DrawingMode::from_name(""), DrawingMode::Select);
    }

    #[test]
    fn test_drag_modes() {
        assert!(DrawingMode::Rectangle.is_drag_mode());
        assert!(DrawingMode::Circle.is_drag_mode());
        assert!(DrawingMode::Line.is_drag_mode());
        assert!(!DrawingMode::Select.is_drag_mode());
        assert!(!DrawingMode::Text.is_drag_mode());
    }

    #[test]
    fn test_select_policy() {
        let mut modes = ModeController::new();
        let mut scene = CanvasScene::new();

        modes.set_mode(DrawingMode::Select);
        modes.apply(&mut scene);
        assert!(scene.selection_enabled());
        assert_eq!(
            scene.cursor_hints(),
            CursorHints::new(CursorHint::Default, CursorHint::Move)
        );
    }

    #[test]
    fn test_creation_policy() {
        let mut modes = ModeController::new();
        let mut scene = CanvasScene::new();

        for mode in [
            DrawingMode::Rectangle,
            DrawingMode::Circle,
            DrawingMode::Line,
            DrawingMode::Text,
        ] {
            modes.set_mode(mode);
            modes.apply(&mut scene);
            assert!(!scene.selection_enabled());
            assert_eq!(
                scene.cursor_hints(),
                CursorHints::new(CursorHint::Crosshair, CursorHint::Crosshair)
            );
        }
    }
}
