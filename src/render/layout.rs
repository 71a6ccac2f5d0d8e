use super::Area;

/// The fixed 5-row × 3-column figure grid.
///
/// Rows 0–1 and 2–3 each hold one full-width time-series panel; row 4 holds
/// one phase portrait per column.
pub struct FigureGrid<'b> {
    pub forced: Area<'b>,
    pub unforced: Area<'b>,
    pub phase: Vec<Area<'b>>,
}

impl<'b> FigureGrid<'b> {
    pub const ROWS: u32 = 5;
    pub const COLS: usize = 3;

    pub fn split(body: &Area<'b>) -> Self {
        let (_, height) = body.dim_in_pixel();
        let row = height / Self::ROWS;

        let (forced, rest) = body.split_vertically(2 * row);
        let (unforced, bottom) = rest.split_vertically(2 * row);
        let phase = bottom.split_evenly((1, Self::COLS));

        FigureGrid {
            forced,
            unforced,
            phase,
        }
    }
}
