//! The fixed-point solve loop.
//!
//! Each round rebuilds the [`SudokuContext`] snapshot, then runs the
//! techniques in priority order and stops at the first one that reports a
//! change, mirroring how a person works through a grid: the cheap certain
//! deductions are retried before anything exotic. A round that changes
//! nothing means the engine has converged; a round cap guarantees
//! termination on boards that are beyond the technique library.

use log::debug;

use crate::board::Board;
use crate::consts::DEFAULT_ROUND_LIMIT;
use crate::errors::SolveError;
use crate::techniques::{self, Technique};

mod context;
mod result;

pub(crate) use self::context::{build_context, SudokuContext};
pub(crate) use self::result::RoundResult;

pub use self::result::{LedgerEntry, SolveLedger};

/// How a solve ended. All three are valid terminal states; what "stuck"
/// means is up to the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every cell holds a digit.
    Solved,
    /// A full pass over the technique library changed nothing.
    Converged,
    /// The round cap was hit with open cells remaining.
    RoundLimitReached,
}

/// The result of a solve: terminal state, rounds used and the per-round
/// ledger of techniques and change counts.
#[derive(Clone, Debug)]
pub struct SolveReport {
    /// Terminal state of the loop.
    pub outcome: Outcome,
    /// Rounds run, including the final unproductive one on convergence.
    pub rounds: u32,
    ledger: SolveLedger,
}

impl SolveReport {
    /// Whether the board ended fully solved.
    pub fn is_solved(&self) -> bool {
        self.outcome == Outcome::Solved
    }

    /// The ordered record of which technique fired in each productive round.
    pub fn ledger(&self) -> &SolveLedger {
        &self.ledger
    }
}

/// Applies the technique library to a board until it is solved or stuck.
///
/// All state lives in the board and the per-call ledger, so independent
/// boards can be solved concurrently without any sharing.
#[derive(Copy, Clone, Debug)]
pub struct Solver {
    round_limit: u32,
}

impl Default for Solver {
    fn default() -> Self {
        Solver {
            round_limit: DEFAULT_ROUND_LIMIT,
        }
    }
}

impl Solver {
    /// A solver with the default round cap of 1000.
    pub fn new() -> Self {
        Solver::default()
    }

    /// A solver with a custom round cap.
    pub fn with_round_limit(round_limit: u32) -> Self {
        Solver { round_limit }
    }

    /// Runs deduction rounds on `board` until it is solved, no technique
    /// makes progress, or the round cap is hit.
    ///
    /// The board is left in its most-deduced state either way. The only
    /// error is [`SolveError::Contradiction`] for a board with no solution;
    /// an unsolvable-by-these-techniques board is the `Converged` outcome,
    /// not an error.
    pub fn solve(&self, board: &mut Board) -> Result<SolveReport, SolveError> {
        let mut result = RoundResult::new();

        // initialization: derive every open cell's candidates from the
        // solved cells of its units (this subsumes one naive elimination)
        {
            let mut ctx = build_context(board, &mut result)?;
            techniques::naive::fill_candidates(&mut ctx);
        }

        let mut ledger = SolveLedger::default();
        let mut rounds = 0;

        let outcome = loop {
            if board.is_fully_solved() {
                break Outcome::Solved;
            }
            if rounds == self.round_limit {
                break Outcome::RoundLimitReached;
            }

            result.reset();
            let progress = {
                let mut ctx = build_context(board, &mut result)?;
                Technique::ALL
                    .iter()
                    .find(|technique| technique.apply(&mut ctx))
                    .copied()
            };
            rounds += 1;

            match progress {
                Some(technique) => {
                    // the technique tagged the result on entry
                    debug_assert_eq!(result.technique(), Some(technique));
                    let cells_changed = result.len() as u32;
                    debug!(
                        "round {}: {} changed {} cells",
                        rounds,
                        technique.name(),
                        cells_changed
                    );
                    ledger.push(LedgerEntry {
                        round: rounds,
                        technique,
                        cells_changed,
                    });
                }
                None => break Outcome::Converged,
            }
        };

        debug!(
            "finished after {} rounds: {:?}, {} cells solved",
            rounds,
            outcome,
            board.n_solved()
        );
        Ok(SolveReport {
            outcome,
            rounds,
            ledger,
        })
    }
}
