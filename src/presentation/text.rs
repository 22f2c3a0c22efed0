//! Text rendering for terminals and logs.
//!
//! [`TextPresenter`] rasterises draw calls onto a character grid. Each card
//! is stamped as a short label (`[QH]`, `[XX]` face-down, `[  ]` for an
//! empty pile) at the cell under its top-left corner. Overlaps read the way
//! they look on the table: a cascade shows one row per card edge, and a
//! waste fan shows the newest card whole.

use std::fmt;

use super::presenter::Presenter;
use crate::cards::{Card, CardImage};
use crate::core::{PileId, Point, TableConfig};

/// Board pixels per character column.
pub const CELL_WIDTH: f32 = 5.0;

/// Board pixels per text row. Matches the face-down tableau step, so every
/// buried card gets its own row.
pub const CELL_HEIGHT: f32 = 12.0;

const FACE_DOWN: &str = "[XX]";
const OUTLINE: &str = "[  ]";

/// Draws the table as lines of text.
///
/// ```
/// use rust_klondike::core::TableConfig;
/// use rust_klondike::presentation::{Table, TextPresenter};
///
/// let config = TableConfig::default();
/// let table = Table::new(config.clone(), TextPresenter::new(&config));
/// assert!(table.presenter().to_string().contains("[XX]"));
/// ```
#[derive(Clone, Debug)]
pub struct TextPresenter {
    card_width: f32,
    card_height: f32,
    grid: Vec<Vec<char>>,
    wins: u32,
}

impl TextPresenter {
    /// A blank grid sized to the table.
    #[must_use]
    pub fn new(config: &TableConfig) -> Self {
        let columns = (config.table_width() / CELL_WIDTH).ceil() as usize;
        let rows = (config.table_height() / CELL_HEIGHT).ceil() as usize;
        Self {
            card_width: config.card_width,
            card_height: config.card_height,
            grid: vec![vec![' '; columns]; rows],
            wins: 0,
        }
    }

    /// Rendered rows, right-trimmed.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.grid
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
    }

    /// How many wins have been announced to this presenter.
    #[must_use]
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Grid cell under the top-left corner of a card centred on `at`.
    fn cell(&self, at: Point) -> Option<(usize, usize)> {
        let col = ((at.x - self.card_width / 2.0) / CELL_WIDTH).round();
        let row = ((at.y - self.card_height / 2.0) / CELL_HEIGHT).round();
        if col < 0.0 || row < 0.0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        (row < self.grid.len()).then_some((col, row))
    }

    /// Write `label` into the grid, clipped at the right edge.
    fn stamp(&mut self, at: Point, label: &str) {
        let Some((col, row)) = self.cell(at) else {
            return;
        };
        for (slot, ch) in self.grid[row].iter_mut().skip(col).zip(label.chars()) {
            *slot = ch;
        }
    }
}

impl Presenter for TextPresenter {
    fn begin_frame(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    fn render_pile_outline(&mut self, _pile: PileId, anchor: Point, visible: bool) {
        if visible {
            self.stamp(anchor, OUTLINE);
        }
    }

    fn render_card(&mut self, card: &Card, at: Point, visible: bool) {
        if !visible {
            return;
        }
        match card.image() {
            CardImage::Face(face) => self.stamp(at, &format!("[{face}]")),
            CardImage::Back => self.stamp(at, FACE_DOWN),
        }
    }

    fn notify_win(&mut self) {
        self.wins += 1;
    }
}

impl fmt::Display for TextPresenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.lines().collect();
        let used = lines.iter().rposition(|line| !line.is_empty()).map_or(0, |i| i + 1);
        for line in &lines[..used] {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
