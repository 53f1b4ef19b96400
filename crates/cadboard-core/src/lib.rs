//! cadboard Core Library
//!
//! Platform-agnostic drawing-interaction core for the cadboard 2D editor:
//! the retained scene, the mode controller, the shape factory, and the
//! pointer drag state machine that previews and commits shapes.

pub mod editor;
pub mod factory;
pub mod interaction;
pub mod modes;
pub mod scene;
pub mod shapes;

pub use editor::{Editor, PointerEvent};
pub use interaction::{DrawingInteraction, PendingStroke};
pub use modes::{DrawingMode, ModeController};
pub use scene::{CanvasScene, CursorHint, CursorHints, SceneError, SELECT_TOLERANCE};
pub use shapes::{Shape, ShapeId, ShapeStyle, ShapeTrait};
