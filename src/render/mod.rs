/// Rendering layer: figure layout, panels, export.
///
/// ```text
///   CombinedDataset ──► figure ──► layout (5×3 grid)
///                         │           ├─ rows 0–1  theta vs t, With Force
///                         │           ├─ rows 2–3  theta vs t, No Force
///                         │           └─ row 4     omega vs theta per method
///                         ▼
///                      export  (tight crop → PNG)
/// ```
use plotters::coord::Shift;
use plotters::prelude::{BitMapBackend, DrawingArea};

pub mod export;
pub mod figure;
pub mod layout;
pub mod panel;
pub mod text;

pub use figure::{draw_figure, render_figure};

/// A drawing region on the in-memory RGB canvas.
pub type Area<'b> = DrawingArea<BitMapBackend<'b>, Shift>;
