//! Klondike demo
//!
//! Deals a game and prints the table as text. With `--autoplay` a greedy
//! player drives the table through the same input events a front end would
//! send, and the final table is printed.

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use rust_klondike::{
    CardId, DealOutcome, InputEvent, Outcome, PileId, Point, Table, TableConfig, TextPresenter,
};

/// Headless Klondike table
#[derive(Parser, Debug)]
#[command(name = "klondike")]
#[command(about = "Deal and optionally autoplay a game of Klondike", long_about = None)]
#[command(version)]
struct Cli {
    /// Seed for the shuffle
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Let a greedy player make moves
    #[arg(short, long)]
    autoplay: bool,

    /// Passes through the stock before the autoplayer gives up
    #[arg(short, long, default_value = "3")]
    rounds: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = TableConfig::default().with_seed(cli.seed);
    let mut table = Table::new(config.clone(), TextPresenter::new(&config));

    println!("Seed {}", cli.seed);
    print!("{}", table.presenter());

    if !cli.autoplay {
        return;
    }

    let moves = autoplay(&mut table, cli.rounds);
    println!();
    print!("{}", table.presenter());
    if table.presenter().wins() > 0 {
        println!("Won in {moves} moves.");
    } else {
        println!("Stuck after {moves} moves.");
    }
}

/// Greedy play: foundation moves first, then tableau moves that uncover a
/// card, then the waste onto the tableau, otherwise deal.
///
/// Returns the number of moves made.
fn autoplay(table: &mut Table<TextPresenter>, rounds: usize) -> usize {
    let mut moves = 0;
    let mut recycles = 0;

    while !table.board().is_won() {
        let step = to_foundation(table)
            .or_else(|| tableau_to_tableau(table))
            .or_else(|| waste_to_tableau(table));

        if step.is_some() {
            moves += 1;
            continue;
        }

        match table.handle(InputEvent::DealRequested) {
            Outcome::Dealt(DealOutcome::Recycled(n)) => {
                recycles += 1;
                debug!(cards = n, recycles, "recycled waste");
                if recycles > rounds {
                    break;
                }
            }
            Outcome::Dealt(DealOutcome::Nothing) => break,
            _ => {}
        }
    }

    info!(moves, won = table.board().is_won(), "autoplay finished");
    moves
}

/// Double-click every pile top until one goes home.
fn to_foundation(table: &mut Table<TextPresenter>) -> Option<Outcome> {
    let tops: Vec<Point> = std::iter::once(PileId::Waste)
        .chain(PileId::tableau())
        .filter_map(|pile| table.board().pile(pile).top())
        .map(|card| table.board().card(card).position)
        .collect();

    tops.into_iter()
        .map(|at| table.handle(InputEvent::DoubleClick(at)))
        .find(Outcome::is_move)
}

/// Move a column's whole face-up run when that uncovers something.
fn tableau_to_tableau(table: &mut Table<TextPresenter>) -> Option<Outcome> {
    for from in PileId::tableau() {
        let pile = table.board().pile(from);
        let Some(index) = pile.cards().iter().position(|&c| table.board().card(c).face_up) else {
            continue;
        };
        if index == 0 {
            continue;
        }
        let grab = top_strip(table, pile.cards()[index]);
        if let Some(outcome) = drag_to_tableau(table, grab, from) {
            return Some(outcome);
        }
    }
    None
}

fn waste_to_tableau(table: &mut Table<TextPresenter>) -> Option<Outcome> {
    let top = table.board().pile(PileId::Waste).top()?;
    let grab = top_strip(table, top);
    drag_to_tableau(table, grab, PileId::Waste)
}

/// Try dropping the run under `grab` on each other column in turn.
fn drag_to_tableau(table: &mut Table<TextPresenter>, grab: Point, from: PileId) -> Option<Outcome> {
    for to in PileId::tableau().filter(|&to| to != from) {
        let target = table.board().pile(to);
        let drop = match target.top() {
            Some(card) => table.board().card(card).position,
            None => target.anchor(),
        };

        if !matches!(table.handle(InputEvent::PointerDown(grab)), Outcome::PickedUp { .. }) {
            return None;
        }
        table.handle(InputEvent::PointerMove(drop));
        let outcome = table.handle(InputEvent::PointerUp(drop));
        if outcome.is_move() {
            return Some(outcome);
        }
    }
    None
}

/// A point on the card's exposed top edge.
fn top_strip(table: &Table<TextPresenter>, card: CardId) -> Point {
    let half = table.board().config().card_height / 2.0;
    table.board().card(card).position.offset(0.0, 4.0 - half)
}
