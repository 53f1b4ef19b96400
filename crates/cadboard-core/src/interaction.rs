//! The drawing-interaction state machine.
//!
//! Consumes pointer events while a creation mode is active: tracks the
//! in-progress drag, maintains the single live preview object, and commits
//! or discards the finalized shape on release.

use crate::factory;
use crate::modes::DrawingMode;
use crate::scene::CanvasScene;
use crate::shapes::{Shape, ShapeId, ShapeStyle};
use kurbo::Point;

/// The transient record of an in-progress drag. Exists only between a
/// pointer-down and the matching pointer-up; at most one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingStroke {
    /// Mode captured at pointer-down; the drag completes or aborts under it.
    pub mode: DrawingMode,
    /// Drag anchor in canvas coordinates.
    pub start: Point,
}

/// Tracks one drag at a time and the preview object it owns.
///
/// Idle (no pending stroke) and Dragging (one pending stroke) are the only
/// states; the machine is long-lived and cycles between them. The preview is
/// an explicit id rather than a marker on the scene object, so the scene
/// never holds more than one and never has to be scanned for it.
#[derive(Debug, Clone, Default)]
pub struct DrawingInteraction {
    /// The in-progress drag, if any.
    pending: Option<PendingStroke>,
    /// Id of the live preview object in the scene, if any.
    preview: Option<ShapeId>,
}

impl DrawingInteraction {
    /// Create an idle state machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a drag is being tracked.
    pub fn is_dragging(&self) -> bool {
        self.pending.is_some()
    }

    /// The in-progress drag, if any.
    pub fn pending(&self) -> Option<&PendingStroke> {
        self.pending.as_ref()
    }

    /// Id of the live preview object, if any.
    pub fn preview_id(&self) -> Option<ShapeId> {
        self.preview
    }

    /// Pointer-down in a creation mode. Text commits immediately at the
    /// pointer location; the drag modes arm the pending stroke. Select-mode
    /// pointer handling belongs to the scene and is not routed here.
    ///
    /// Returns the committed object id (text mode only).
    pub fn pointer_down(
        &mut self,
        scene: &mut CanvasScene,
        mode: DrawingMode,
        point: Point,
    ) -> Option<ShapeId> {
        match mode {
            DrawingMode::Select => None,
            DrawingMode::Text => Some(self.commit_text(scene, point)),
            _ => {
                self.pending = Some(PendingStroke { mode, start: point });
                None
            }
        }
    }

    /// Pointer-move while dragging: replace the preview object with one
    /// rebuilt for the current pointer. No-op when idle.
    pub fn pointer_move(&mut self, scene: &mut CanvasScene, point: Point) {
        let Some(stroke) = self.pending else {
            return;
        };
        self.remove_preview(scene);
        if let Some(mut shape) = factory::shape_from_drag(stroke.mode, stroke.start, point) {
            *shape.style_mut() = ShapeStyle::preview();
            self.preview = Some(scene.add(shape));
        }
    }

    /// Pointer-up: remove the preview, then commit the finalized shape if the
    /// drag clears the minimum-size policy, or silently discard it. Always
    /// returns to idle. A pointer-up with no pending stroke is a no-op.
    ///
    /// Returns the committed object id, if any.
    pub fn pointer_up(&mut self, scene: &mut CanvasScene, point: Point) -> Option<ShapeId> {
        self.remove_preview(scene);
        let stroke = self.pending.take()?;
        if !factory::meets_minimum_size(stroke.mode, stroke.start, point) {
            log::debug!("discarded {} drag below minimum size", stroke.mode.name());
            return None;
        }
        let shape = factory::shape_from_drag(stroke.mode, stroke.start, point)?;
        let id = scene.add(shape);
        log::debug!("committed {} {id}", stroke.mode.name());
        Some(id)
    }

    /// Drop the pending stroke and any live preview without committing.
    /// Used when the mode changes mid-drag.
    pub fn abort(&mut self, scene: &mut CanvasScene) {
        if self.pending.take().is_some() {
            log::debug!("aborted in-progress drag");
        }
        self.remove_preview(scene);
    }

    /// Forget interaction state without touching the scene, for when the
    /// scene contents were dropped wholesale and the preview id is stale.
    pub(crate) fn reset(&mut self) {
        self.pending = None;
        self.preview = None;
    }

    fn commit_text(&mut self, scene: &mut CanvasScene, point: Point) -> ShapeId {
        let id = scene.add(Shape::Text(factory::text_at(point)));
        scene.set_selection(vec![id]);
        if let Err(err) = scene.enter_text_edit(id) {
            log::warn!("text edit focus failed: {err}");
        }
        id
    }

    fn remove_preview(&mut self, scene: &mut CanvasScene) {
        if let Some(id) = self.preview.take() {
            scene.remove(id);
        }
    }
}
