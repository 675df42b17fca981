//! Exhaustive minimax search with alpha-beta pruning
//!
//! The engine scores positions from the computer's point of view: `+10` when
//! the computer completes a line, `-10` when the opponent does and `0` for a
//! full board. Scores only originate at terminal positions and are propagated
//! upward; depth plays no part in scoring, so a win found late is worth the
//! same as a win found early.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::tictactoe::{Board, Mark, Position, lines};

/// Value of a position from the computer's perspective
pub type Score = i32;

pub const WIN_SCORE: Score = 10;
pub const LOSS_SCORE: Score = -10;
pub const DRAW_SCORE: Score = 0;

/// Whether the search may skip provably irrelevant subtrees.
///
/// Both modes choose the same move on every board; `Disabled` exists to
/// verify that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Pruning {
    #[default]
    AlphaBeta,
    Disabled,
}

/// Diagnostic counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions scored, terminal or not
    pub nodes: u64,
    /// Times a node stopped exploring children because `beta <= alpha`
    pub cutoffs: u64,
    /// Deepest ply reached below the searched board
    pub max_depth: usize,
}

/// Result of [`SearchEngine::search`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub best_move: Option<Position>,
    /// Score of `best_move`, absent when there is no move
    pub score: Option<Score>,
    pub stats: SearchStats,
}

/// Move selection for the computer-controlled seat.
///
/// The engine holds configuration only; every call is a fresh search rooted
/// at the board passed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchEngine {
    computer: Mark,
    opponent: Mark,
    pruning: Pruning,
}

impl SearchEngine {
    /// Create an alpha-beta engine playing `computer`
    pub fn new(computer: Mark) -> Self {
        SearchEngine {
            computer,
            opponent: computer.opponent(),
            pruning: Pruning::default(),
        }
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }

    pub fn computer(&self) -> Mark {
        self.computer
    }

    pub fn opponent(&self) -> Mark {
        self.opponent
    }

    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Recommend a move for the computer, or `None` when no cell is empty.
    ///
    /// Candidates are tried in row-major order and only a strictly greater
    /// score replaces the current pick, so ties go to the top-left-most cell.
    /// The board is not modified.
    pub fn best_move(&self, board: &Board) -> Option<Position> {
        self.search(board).best_move
    }

    /// [`SearchEngine::best_move`] together with its score and statistics
    #[instrument(level = "debug", skip(self, board), fields(computer = %self.computer, pruning = ?self.pruning))]
    pub fn search(&self, board: &Board) -> SearchReport {
        let mut scratch = *board;
        let mut stats = SearchStats::default();
        let mut best: Option<(Position, Score)> = None;

        for (pos, score) in self.score_candidates(&mut scratch, &mut stats) {
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }
        debug_assert_eq!(scratch, *board, "search leaked a mutation");

        debug!(
            best_move = ?best.map(|(pos, _)| pos),
            score = ?best.map(|(_, score)| score),
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "search finished"
        );

        SearchReport {
            best_move: best.map(|(pos, _)| pos),
            score: best.map(|(_, score)| score),
            stats,
        }
    }

    /// Score every empty cell as a computer move, in row-major order
    pub fn evaluate_moves(&self, board: &Board) -> Vec<(Position, Score)> {
        let mut scratch = *board;
        let mut stats = SearchStats::default();
        self.score_candidates(&mut scratch, &mut stats)
    }

    /// Score `board` with the computer to move when `maximizing`, the
    /// opponent otherwise
    pub fn minimax(&self, board: &Board, maximizing: bool) -> Score {
        self.minimax_with_stats(board, maximizing).0
    }

    pub fn minimax_with_stats(&self, board: &Board, maximizing: bool) -> (Score, SearchStats) {
        let mut scratch = *board;
        let mut stats = SearchStats::default();
        let score = self.alphabeta(
            &mut scratch,
            maximizing,
            Score::MIN,
            Score::MAX,
            0,
            &mut stats,
        );
        (score, stats)
    }

    /// Fixed score of a won or full board, `None` while play continues
    pub fn terminal_score(&self, board: &Board) -> Option<Score> {
        match lines::line_winner(board) {
            Some(mark) if mark == self.computer => Some(WIN_SCORE),
            Some(_) => Some(LOSS_SCORE),
            None if lines::is_full(board) => Some(DRAW_SCORE),
            None => None,
        }
    }

    /// Root level: each candidate gets its own full window so the returned
    /// scores are exact
    fn score_candidates(&self, board: &mut Board, stats: &mut SearchStats) -> Vec<(Position, Score)> {
        let mut scored = Vec::new();
        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let score = probe(board, pos, self.computer, |board| {
                self.alphabeta(board, false, Score::MIN, Score::MAX, 1, stats)
            });
            scored.push((pos, score));
        }
        scored
    }

    fn alphabeta(
        &self,
        board: &mut Board,
        maximizing: bool,
        mut alpha: Score,
        mut beta: Score,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Score {
        stats.nodes += 1;
        stats.max_depth = stats.max_depth.max(depth);

        if let Some(score) = self.terminal_score(board) {
            return score;
        }

        let mark = if maximizing {
            self.computer
        } else {
            self.opponent
        };
        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for pos in Position::ALL {
            if !board.is_empty(pos) {
                continue;
            }
            let score = probe(board, pos, mark, |board| {
                self.alphabeta(board, !maximizing, alpha, beta, depth + 1, stats)
            });

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if self.pruning == Pruning::AlphaBeta && beta <= alpha {
                stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}

/// Place `mark`, run `f`, retract. Every tentative move in the search goes
/// through here, so a cutoff can never leave a mark behind.
fn probe<R>(board: &mut Board, pos: Position, mark: Mark, f: impl FnOnce(&mut Board) -> R) -> R {
    board.place(pos, mark);
    let result = f(board);
    board.clear(pos);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let b = board("OO. XX. ...");
        assert_eq!(SearchEngine::new(Mark::O).best_move(&b), Some(pos(0, 2)));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let b = board("XX. O.. .O.");
        assert_eq!(SearchEngine::new(Mark::O).best_move(&b), Some(pos(0, 2)));
    }

    #[test]
    fn test_wins_are_not_discounted_by_depth() {
        // (2,0) wins at once, but blocking at (1,2) also forces a win through
        // a double threat and comes first in row-major order
        let b = board("O.. XX. .OO");
        let engine = SearchEngine::new(Mark::O);
        let report = engine.search(&b);
        assert_eq!(report.best_move, Some(pos(1, 2)));
        assert_eq!(report.score, Some(WIN_SCORE));
        assert!(engine.evaluate_moves(&b).contains(&(pos(2, 0), WIN_SCORE)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOX XOO OXX");
        let report = SearchEngine::new(Mark::X).search(&b);
        assert_eq!(report.best_move, None);
        assert_eq!(report.score, None);
        assert_eq!(report.stats.nodes, 0);
    }

    #[test]
    fn test_empty_board_ties_break_to_top_left() {
        let report = SearchEngine::new(Mark::X).search(&Board::new());
        assert_eq!(report.best_move, Some(pos(0, 0)));
        assert_eq!(report.score, Some(DRAW_SCORE));
    }

    #[test]
    fn test_terminal_scores_without_recursion() {
        let engine = SearchEngine::new(Mark::X);
        for (s, expected) in [
            ("XXX OO. ...", WIN_SCORE),
            ("OOO XX. X..", LOSS_SCORE),
            ("XOX XOO OXX", DRAW_SCORE),
        ] {
            for maximizing in [true, false] {
                let (score, stats) = engine.minimax_with_stats(&board(s), maximizing);
                assert_eq!(score, expected, "board {s}");
                assert_eq!(stats.nodes, 1);
                assert_eq!(stats.max_depth, 0);
            }
        }
    }

    #[test]
    fn test_board_is_left_unchanged() {
        let b = board("X.. .O. ..X");
        let before = b;
        let engine = SearchEngine::new(Mark::O);
        engine.best_move(&b);
        engine.evaluate_moves(&b);
        engine.minimax(&b, true);
        assert_eq!(b, before);
    }

    #[test]
    fn test_pruning_visits_fewer_nodes() {
        let pruned = SearchEngine::new(Mark::X).search(&Board::new());
        let full = SearchEngine::new(Mark::X)
            .with_pruning(Pruning::Disabled)
            .search(&Board::new());

        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(full.stats.cutoffs, 0);
        // every node of the game tree below the empty board
        assert_eq!(full.stats.nodes, 549_945);
        assert!(pruned.stats.cutoffs > 0);
        assert!(pruned.stats.nodes < full.stats.nodes);
        assert_eq!(full.stats.max_depth, 9);
    }

    #[test]
    fn test_evaluate_moves_lists_every_empty_cell() {
        let b = board("OO. XX. ...");
        let scores = SearchEngine::new(Mark::O).evaluate_moves(&b);
        assert_eq!(scores.len(), 5);
        assert_eq!(scores[0], (pos(0, 2), WIN_SCORE));
        // leaving (1,2) open lets X complete the middle row
        assert!(scores.iter().any(|&(p, s)| p == pos(2, 0) && s == LOSS_SCORE));
    }

    #[test]
    fn test_opponent_is_complement() {
        assert_eq!(SearchEngine::new(Mark::X).opponent(), Mark::O);
        assert_eq!(SearchEngine::new(Mark::O).opponent(), Mark::X);
    }
}
