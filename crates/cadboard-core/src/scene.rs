//! Retained scene: the ordered object collection and its selection services.
//!
//! This is the object-store half of the scene graph. Rasterization is the
//! host renderer's job; it consumes [`crate::shapes::Shape::to_path`] and the
//! style accessors, plus the cursor hints and background color kept here.

use crate::shapes::{SerializableColor, Shape, ShapeId};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Hit-test tolerance for pointer selection, in canvas units.
pub const SELECT_TOLERANCE: f64 = 4.0;

/// Cursor hint the host surface should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CursorHint {
    /// Platform default arrow.
    #[default]
    Default,
    /// Move/grab cursor over selectable objects.
    Move,
    /// Crosshair for drawing modes.
    Crosshair,
    /// Text caret.
    Text,
}

/// The idle and hover cursor hints, set per drawing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorHints {
    /// Hint when the pointer is over empty canvas.
    pub idle: CursorHint,
    /// Hint when the pointer is over an object.
    pub hover: CursorHint,
}

impl CursorHints {
    pub fn new(idle: CursorHint, hover: CursorHint) -> Self {
        Self { idle, hover }
    }
}

/// Scene operation errors.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("no object with id {0}")]
    UnknownObject(ShapeId),
    #[error("object {0} is not editable text")]
    NotText(ShapeId),
}

/// Result type for fallible scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// The retained object collection behind the drawing surface.
///
/// Objects are kept in insertion order (back to front). Selection is a
/// separate, insertion-ordered subset; whether pointer-driven selection is
/// honored at all is a mode-dependent flag.
#[derive(Debug, Clone)]
pub struct CanvasScene {
    /// All objects, keyed by ID.
    shapes: HashMap<ShapeId, Shape>,
    /// Z-order of objects (back to front).
    z_order: Vec<ShapeId>,
    /// Currently selected object IDs.
    selection: Vec<ShapeId>,
    /// Whether pointer-driven selection is honored.
    selection_enabled: bool,
    /// Cursor hints for the host surface.
    cursor: CursorHints,
    /// Background color.
    background: SerializableColor,
    /// Object with text-edit focus.
    editing: Option<ShapeId>,
}

impl Default for CanvasScene {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasScene {
    /// Create a new empty scene with a white background.
    pub fn new() -> Self {
        Self {
            shapes: HashMap::new(),
            z_order: Vec::new(),
            selection: Vec::new(),
            selection_enabled: true,
            cursor: CursorHints::default(),
            background: SerializableColor::white(),
            editing: None,
        }
    }

    /// Add an object on top of the z-order. Returns its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.z_order.push(id);
        self.shapes.insert(id, shape);
        id
    }

    /// Remove an object. Drops it from the selection and the edit focus too.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        self.z_order.retain(|&shape_id| shape_id != id);
        self.selection.retain(|&shape_id| shape_id != id);
        if self.editing == Some(id) {
            self.editing = None;
        }
        self.shapes.remove(&id)
    }

    /// Remove every object, the selection, and the edit focus.
    pub fn remove_all(&mut self) {
        self.shapes.clear();
        self.z_order.clear();
        self.selection.clear();
        self.editing = None;
    }

    /// Get an object by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    /// Get a mutable reference to an object by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.get_mut(&id)
    }

    /// Objects in z-order (back to front).
    pub fn shapes_ordered(&self) -> impl Iterator<Item = &Shape> {
        self.z_order.iter().filter_map(|id| self.shapes.get(id))
    }

    /// Number of objects in the scene.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Topmost object hit by a point, front-to-back priority.
    pub fn object_at(&self, point: Point) -> Option<ShapeId> {
        self.z_order
            .iter()
            .rev()
            .find(|&&id| {
                self.shapes
                    .get(&id)
                    .is_some_and(|s| s.hit_test(point, SELECT_TOLERANCE))
            })
            .copied()
    }

    /// Pointer-driven selection: select the topmost object under the point,
    /// or clear the selection on a miss. Honored only while selection is
    /// enabled.
    pub fn select_at(&mut self, point: Point) -> Option<ShapeId> {
        if !self.selection_enabled {
            return None;
        }
        match self.object_at(point) {
            Some(id) => {
                self.selection = vec![id];
                Some(id)
            }
            None => {
                self.selection.clear();
                None
            }
        }
    }

    /// Programmatic selection; not gated by the selection-enabled flag.
    /// Unknown ids are dropped.
    pub fn set_selection(&mut self, ids: Vec<ShapeId>) {
        self.selection = ids
            .into_iter()
            .filter(|id| self.shapes.contains_key(id))
            .collect();
    }

    /// Currently selected object IDs, in selection order.
    pub fn active_selection(&self) -> &[ShapeId] {
        &self.selection
    }

    /// Clear the active selection.
    pub fn clear_active_selection(&mut self) {
        self.selection.clear();
    }

    /// Enable or disable pointer-driven selection. Disabling drops the
    /// current selection.
    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
        if !enabled {
            self.selection.clear();
        }
    }

    /// Whether pointer-driven selection is honored.
    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Move every selected object by a delta.
    pub fn translate_selected(&mut self, delta: Vec2) {
        for id in &self.selection {
            if let Some(shape) = self.shapes.get_mut(id) {
                shape.translate(delta);
            }
        }
    }

    /// Set the cursor hints the host surface should display.
    pub fn set_cursor_hints(&mut self, idle: CursorHint, hover: CursorHint) {
        self.cursor = CursorHints::new(idle, hover);
    }

    /// Current cursor hints.
    pub fn cursor_hints(&self) -> CursorHints {
        self.cursor
    }

    /// Set the background color.
    pub fn set_background(&mut self, color: SerializableColor) {
        self.background = color;
    }

    /// Current background color.
    pub fn background(&self) -> SerializableColor {
        self.background
    }

    /// Give an object text-edit focus. Errors on unknown ids and on objects
    /// that are not text.
    pub fn enter_text_edit(&mut self, id: ShapeId) -> SceneResult<()> {
        let shape = self
            .shapes
            .get(&id)
            .ok_or(SceneError::UnknownObject(id))?;
        if !shape.is_text() {
            return Err(SceneError::NotText(id));
        }
        self.editing = Some(id);
        Ok(())
    }

    /// Drop text-edit focus.
    pub fn exit_text_edit(&mut self) {
        self.editing = None;
    }

    /// Object currently holding text-edit focus.
    pub fn editing(&self) -> Option<ShapeId> {
        self.editing
    }

    /// Replace the content of a committed text object in place.
    pub fn edit_text(&mut self, id: ShapeId, content: &str) -> SceneResult<()> {
        let shape = self
            .shapes
            .get_mut(&id)
            .ok_or(SceneError::UnknownObject(id))?;
        let text = shape.as_text_mut().ok_or(SceneError::NotText(id))?;
        text.set_content(content.to_string());
        Ok(())
    }
}
