//! Table configuration types.
//!
//! - `PileId`: Which pile on the table (stock, waste, foundations, tableau)
//! - `TableConfig`: Card size, spacing and RNG seed
//!
//! Pile anchors are derived from `TableConfig`, so changing the card size or
//! gaps re-flows the whole table.

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// Number of foundation piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;

/// Total number of piles on the table.
pub const PILE_COUNT: usize = 2 + FOUNDATION_COUNT + TABLEAU_COUNT;

/// Pile identifier.
///
/// Cards refer back to their pile through this key, never through a pointer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PileId {
    Stock,
    Waste,
    /// Foundation `0..4`.
    Foundation(u8),
    /// Tableau column `0..7`, left to right.
    Tableau(u8),
}

impl PileId {
    /// Dense index `0..PILE_COUNT`, in paint order.
    ///
    /// Only meaningful for foundations below `FOUNDATION_COUNT` and columns
    /// below `TABLEAU_COUNT`; anything else is caught in debug builds.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PileId::Stock => 0,
            PileId::Waste => 1,
            PileId::Foundation(i) => {
                debug_assert!((i as usize) < FOUNDATION_COUNT);
                2 + i as usize
            }
            PileId::Tableau(i) => {
                debug_assert!((i as usize) < TABLEAU_COUNT);
                2 + FOUNDATION_COUNT + i as usize
            }
        }
    }

    /// Inverse of [`PileId::index`].
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PileId::Stock),
            1 => Some(PileId::Waste),
            i if i < 2 + FOUNDATION_COUNT => Some(PileId::Foundation((i - 2) as u8)),
            i if i < PILE_COUNT => Some(PileId::Tableau((i - 2 - FOUNDATION_COUNT) as u8)),
            _ => None,
        }
    }

    /// All piles in paint order: stock, waste, foundations, tableau.
    pub fn all() -> impl Iterator<Item = PileId> {
        (0..PILE_COUNT).filter_map(PileId::from_index)
    }

    /// The four foundations, in the order drops and auto-moves try them.
    pub fn foundations() -> impl Iterator<Item = PileId> {
        (0..FOUNDATION_COUNT as u8).map(PileId::Foundation)
    }

    /// The seven tableau columns, left to right.
    pub fn tableau() -> impl Iterator<Item = PileId> {
        (0..TABLEAU_COUNT as u8).map(PileId::Tableau)
    }

    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, PileId::Foundation(_))
    }

    #[must_use]
    pub const fn is_tableau(self) -> bool {
        matches!(self, PileId::Tableau(_))
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PileId::Stock => write!(f, "Stock"),
            PileId::Waste => write!(f, "Waste"),
            PileId::Foundation(i) => write!(f, "Foundation({})", i),
            PileId::Tableau(i) => write!(f, "Tableau({})", i),
        }
    }
}

/// Table layout and dealing parameters.
///
/// Defaults reproduce the classic 90x130 card table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Card image width.
    pub card_width: f32,

    /// Card image height.
    pub card_height: f32,

    /// Margin between the table edge and the outer piles (horizontal).
    pub padding_x: f32,

    /// Margin between the table edge and the top row (vertical).
    pub padding_y: f32,

    /// Horizontal gap between neighbouring piles.
    pub gap_x: f32,

    /// Vertical step below a face-up tableau card.
    pub tableau_gap_face_up: f32,

    /// Vertical step below a face-down tableau card.
    pub tableau_gap_face_down: f32,

    /// Horizontal step between fanned waste cards.
    pub waste_gap_x: f32,

    /// Extra space between the top row and the tableau row.
    pub tableau_row_gap: f32,

    /// How many waste cards are fanned out face-up.
    pub waste_fan: usize,

    /// Seed for the shuffle RNG.
    /// Same seed produces the same sequence of deals.
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            card_width: 90.0,
            card_height: 130.0,
            padding_x: 20.0,
            padding_y: 20.0,
            gap_x: 24.0,
            tableau_gap_face_up: 28.0,
            tableau_gap_face_down: 12.0,
            waste_gap_x: 20.0,
            tableau_row_gap: 40.0,
            waste_fan: 3,
            seed: 42,
        }
    }
}

impl TableConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom card size.
    #[must_use]
    pub fn with_card_size(mut self, width: f32, height: f32) -> Self {
        self.card_width = width;
        self.card_height = height;
        self
    }

    /// Create a new config with custom tableau gaps.
    #[must_use]
    pub fn with_tableau_gaps(mut self, face_up: f32, face_down: f32) -> Self {
        self.tableau_gap_face_up = face_up;
        self.tableau_gap_face_down = face_down;
        self
    }

    /// Create a new config with a custom waste fan width.
    #[must_use]
    pub fn with_waste_fan(mut self, fan: usize) -> Self {
        self.waste_fan = fan.max(1);
        self
    }

    /// Width of the whole table.
    #[must_use]
    pub fn table_width(&self) -> f32 {
        let cols = TABLEAU_COUNT as f32;
        self.padding_x * 2.0 + cols * self.card_width + (cols - 1.0) * self.gap_x
    }

    /// Height of the whole table, with room for the longest possible
    /// column: six face-down cards under a full King-to-Ace run.
    #[must_use]
    pub fn table_height(&self) -> f32 {
        let deepest = (TABLEAU_COUNT - 1) as f32 * self.tableau_gap_face_down
            + 12.0 * self.tableau_gap_face_up;
        self.pile_anchor(PileId::Tableau(0)).y + self.card_height / 2.0 + deepest + self.padding_y
    }

    /// Vertical step below a tableau card.
    #[must_use]
    pub fn tableau_gap(&self, face_up: bool) -> f32 {
        if face_up {
            self.tableau_gap_face_up
        } else {
            self.tableau_gap_face_down
        }
    }

    /// Anchor (card centre) of a pile.
    ///
    /// Stock and waste sit top-left, the foundations are right-aligned on
    /// the same row, and the tableau row runs below them.
    #[must_use]
    pub fn pile_anchor(&self, pile: PileId) -> Point {
        let top_y = self.padding_y + self.card_height / 2.0;
        let left_x = self.padding_x + self.card_width / 2.0;
        let column = self.card_width + self.gap_x;

        match pile {
            PileId::Stock => Point::new(left_x, top_y),
            PileId::Waste => Point::new(left_x + column, top_y),
            PileId::Foundation(i) => {
                let row_width = FOUNDATION_COUNT as f32 * self.card_width
                    + (FOUNDATION_COUNT as f32 - 1.0) * self.gap_x;
                let x0 = self.table_width() - self.padding_x - row_width + self.card_width / 2.0;
                Point::new(x0 + f32::from(i) * column, top_y)
            }
            PileId::Tableau(i) => {
                let y = top_y + self.card_height + self.tableau_row_gap;
                Point::new(left_x + f32::from(i) * column, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pile_index_roundtrip() {
        let all: Vec<_> = PileId::all().collect();
        assert_eq!(all.len(), PILE_COUNT);
        for (i, pile) in all.iter().enumerate() {
            assert_eq!(pile.index(), i);
            assert_eq!(PileId::from_index(i), Some(*pile));
        }
        assert_eq!(PileId::from_index(PILE_COUNT), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_out_of_range_foundation_index_panics() {
        let _ = PileId::Foundation(FOUNDATION_COUNT as u8).index();
    }

    #[test]
    fn test_paint_order() {
        let all: Vec<_> = PileId::all().collect();
        assert_eq!(all[0], PileId::Stock);
        assert_eq!(all[1], PileId::Waste);
        assert_eq!(all[2], PileId::Foundation(0));
        assert_eq!(all[6], PileId::Tableau(0));
        assert_eq!(all[12], PileId::Tableau(6));
    }

    #[test]
    fn test_pile_display() {
        assert_eq!(format!("{}", PileId::Tableau(3)), "Tableau(3)");
        assert_eq!(format!("{}", PileId::Stock), "Stock");
    }

    #[test]
    fn test_default_anchors() {
        let config = TableConfig::default();
        assert_eq!(config.table_width(), 814.0);
        assert_eq!(config.table_height(), 748.0);
        assert_eq!(config.pile_anchor(PileId::Stock), Point::new(65.0, 85.0));
        assert_eq!(config.pile_anchor(PileId::Waste), Point::new(179.0, 85.0));
        assert_eq!(config.pile_anchor(PileId::Foundation(0)), Point::new(407.0, 85.0));
        assert_eq!(config.pile_anchor(PileId::Foundation(3)), Point::new(749.0, 85.0));
        assert_eq!(config.pile_anchor(PileId::Tableau(0)), Point::new(65.0, 255.0));
        assert_eq!(config.pile_anchor(PileId::Tableau(6)), Point::new(749.0, 255.0));
    }

    #[test]
    fn test_builder_pattern() {
        let config = TableConfig::default()
            .with_seed(7)
            .with_card_size(60.0, 80.0)
            .with_tableau_gaps(20.0, 8.0)
            .with_waste_fan(0);

        assert_eq!(config.seed, 7);
        assert_eq!(config.card_width, 60.0);
        assert_eq!(config.tableau_gap(true), 20.0);
        assert_eq!(config.tableau_gap(false), 8.0);
        assert_eq!(config.waste_fan, 1);
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
