//! Pointer-driven card reordering.
//!
//! A gesture runs `DragSession::begin` on pointer-down, `DragSession::track` on
//! every pointer-move and `DragSession::commit` on pointer-up. The
//! [`HoverTracker`] owns the marker placement policy.

pub mod hover;
pub mod marker;
pub mod pointer;
pub mod session;

pub use hover::{HoverOutcome, HoverTracker};
pub use marker::{create_marker, Marker};
pub use pointer::{HitTarget, Point, PointerEvent, Rect};
pub use session::{DragSession, DragState, DragView, DropOutcome};
