//! The drawing surface editor: scene handle lifecycle, pointer-event entry
//! points, and the command surface exposed to the toolbar.

use crate::interaction::DrawingInteraction;
use crate::modes::{DrawingMode, ModeController};
use crate::scene::CanvasScene;
use crate::shapes::{SerializableColor, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Pointer event in canvas-local coordinates, as delivered by the host
/// surface.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up(Point),
}

/// Ties the pieces together: the owned scene handle, the mode controller,
/// and the drawing state machine, plus the select-mode move behavior.
///
/// The scene handle is constructed once the host surface is available
/// ([`Editor::mount`]) and released deterministically ([`Editor::unmount`]);
/// every operation in between guards on it and degrades to a no-op when the
/// surface is absent.
#[derive(Debug, Default)]
pub struct Editor {
    /// Scene handle; `None` until the surface is mounted.
    scene: Option<CanvasScene>,
    /// Current drawing mode.
    modes: ModeController,
    /// Drag tracking and preview ownership.
    interaction: DrawingInteraction,
    /// Last pointer position of an active select-mode move drag.
    select_drag: Option<Point>,
}

impl Editor {
    /// Create an unmounted editor in select mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct the scene handle and apply the current mode's policy.
    pub fn mount(&mut self) {
        let mut scene = CanvasScene::new();
        self.modes.apply(&mut scene);
        self.scene = Some(scene);
        log::info!("drawing surface mounted");
    }

    /// Release the scene handle and forget interaction state.
    pub fn unmount(&mut self) {
        self.interaction.reset();
        self.select_drag = None;
        self.scene = None;
        log::info!("drawing surface unmounted");
    }

    /// Check if the surface is mounted.
    pub fn is_mounted(&self) -> bool {
        self.scene.is_some()
    }

    /// The scene, if mounted.
    pub fn scene(&self) -> Option<&CanvasScene> {
        self.scene.as_ref()
    }

    /// The mutable scene, if mounted.
    pub fn scene_mut(&mut self) -> Option<&mut CanvasScene> {
        self.scene.as_mut()
    }

    /// The current drawing mode.
    pub fn mode(&self) -> DrawingMode {
        self.modes.current()
    }

    /// Check if a creation drag is in progress.
    pub fn is_drawing(&self) -> bool {
        self.interaction.is_dragging()
    }

    /// Mode-change command from the toolbar. An active drag is aborted and
    /// its preview discarded before the policy switch, so the scene never
    /// carries a preview across mode boundaries.
    pub fn on_mode_change(&mut self, mode: DrawingMode) {
        if let Some(scene) = self.scene.as_mut() {
            self.interaction.abort(scene);
        }
        self.select_drag = None;
        self.modes.set_mode(mode);
        if let Some(scene) = self.scene.as_mut() {
            self.modes.apply(scene);
        }
    }

    /// Dispatch a pointer event to the matching handler.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<ShapeId> {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point),
            PointerEvent::Move(point) => {
                self.pointer_move(point);
                None
            }
            PointerEvent::Up(point) => self.pointer_up(point),
        }
    }

    /// Pointer-down. In select mode the scene's own selection behavior runs
    /// (topmost hit becomes the selection and arms a move drag); in creation
    /// modes the drawing state machine takes over.
    ///
    /// Returns the committed object id (text mode only).
    pub fn pointer_down(&mut self, point: Point) -> Option<ShapeId> {
        let mode = self.modes.current();
        let scene = self.scene.as_mut()?;
        if mode == DrawingMode::Select {
            if scene.select_at(point).is_some() {
                self.select_drag = Some(point);
            }
            return None;
        }
        self.interaction.pointer_down(scene, mode, point)
    }

    /// Pointer-move. Moves the selection while a select-mode drag is active,
    /// otherwise feeds the drawing state machine.
    pub fn pointer_move(&mut self, point: Point) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        if let Some(last) = self.select_drag {
            scene.translate_selected(point - last);
            self.select_drag = Some(point);
            return;
        }
        self.interaction.pointer_move(scene, point);
    }

    /// Pointer-up. Ends a select-mode move drag, or finalizes the drawing
    /// drag (commit or discard).
    ///
    /// Returns the committed object id, if any.
    pub fn pointer_up(&mut self, point: Point) -> Option<ShapeId> {
        let scene = self.scene.as_mut()?;
        if self.select_drag.take().is_some() {
            return None;
        }
        self.interaction.pointer_up(scene, point)
    }

    /// Remove every object and reset the background to white. Interaction
    /// state is reset along with it; the objects a preview id pointed at are
    /// gone with the rest.
    pub fn clear(&mut self) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        self.interaction.reset();
        self.select_drag = None;
        scene.remove_all();
        scene.set_background(SerializableColor::white());
        log::info!("scene cleared");
    }

    /// Remove every selected object, then clear the active selection.
    /// No-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let ids: Vec<ShapeId> = scene.active_selection().to_vec();
        if ids.is_empty() {
            return;
        }
        for id in &ids {
            scene.remove(*id);
        }
        scene.clear_active_selection();
        log::debug!("deleted {} selected object(s)", ids.len());
    }
}
