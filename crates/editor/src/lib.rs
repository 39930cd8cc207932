//! Multi-line script editor widget for kort.
//!
//! The widget is unit-agnostic: layout happens in `f32` units through
//! [`EditorMetrics`] and a [`TextMeasure`](kort_buffer::TextMeasure)
//! implementation, and drawing goes through the [`Canvas`] trait. The terminal
//! front end uses cells as units and [`TerminalCanvas`] as the canvas.

pub mod geometry;
pub mod keyboard;
pub mod metrics;
pub mod pointer;
pub mod render;
pub mod scroll;
pub mod session;

pub use geometry::Rect;
pub use hit_test::{hit_test, TextLayout};
pub use keyboard::EditorCommand;
pub use metrics::EditorMetrics;
pub use pointer::{PointerEvent, PointerKind};
pub use render::{Canvas, Paint, TerminalCanvas};
pub use scroll::{ScrollController, ScrollMode, ScrollbarDrag};
pub use session::{EditorOptions, EditorSession, FrameInput, FrameOutcome};
