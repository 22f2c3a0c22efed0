//! A playable table: board, controller and presenter wired together.

use tracing::{debug, info};

use super::presenter::{present, Presenter};
use crate::core::{InputEvent, TableConfig};
use crate::games::klondike::Board;
use crate::interaction::{DragState, Outcome, Transition};

/// Owns one board, its drag state and the presenter that shows it.
///
/// Every handled event redraws the table. The win notification fires once
/// per game, on the move that completes the last foundation.
#[derive(Debug)]
pub struct Table<P> {
    board: Board,
    state: DragState,
    presenter: P,
    win_announced: bool,
}

impl<P: Presenter> Table<P> {
    /// Deal a new board and draw it.
    pub fn new(config: TableConfig, presenter: P) -> Self {
        Self::with_board(Board::new(config), presenter)
    }

    /// Take over an existing board and draw it.
    pub fn with_board(board: Board, presenter: P) -> Self {
        let mut table = Self {
            board,
            state: DragState::Idle,
            presenter,
            win_announced: false,
        };
        table.present();
        table
    }

    /// Feed one input event through the controller.
    pub fn handle(&mut self, event: InputEvent) -> Outcome {
        let Transition { next, outcome } = std::mem::take(&mut self.state).on_event(event, &mut self.board);
        self.state = next;

        if outcome == Outcome::NewGame {
            self.win_announced = false;
        }
        self.present();

        if let Outcome::Moved { won: true, .. } = outcome {
            if self.win_announced {
                debug!("win already announced");
            } else {
                self.win_announced = true;
                info!(game = self.board.games_dealt(), "game won");
                self.presenter.notify_win();
            }
        }
        outcome
    }

    /// Redraw everything.
    pub fn present(&mut self) {
        present(&self.board, &self.state, &mut self.presenter);
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Has the win for the current game been announced?
    #[must_use]
    pub fn win_announced(&self) -> bool {
        self.win_announced
    }
}
