//! Enumeration of every board reachable by legal play

use std::collections::HashSet;

use super::{
    board::{Board, Mark},
    lines,
};

/// A reachable board together with the mark to move on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReachableBoard {
    pub board: Board,
    pub to_move: Mark,
}

impl ReachableBoard {
    pub fn is_terminal(&self) -> bool {
        lines::outcome(&self.board).is_terminal()
    }
}

/// Every distinct board reachable from the empty board when `first` opens,
/// terminal boards included.
///
/// The walk is depth-first in row-major move order, so the result order is
/// deterministic.
pub fn reachable_boards(first: Mark) -> Vec<ReachableBoard> {
    let mut seen = HashSet::new();
    let mut ordered = Vec::new();
    let mut to_explore = vec![ReachableBoard {
        board: Board::new(),
        to_move: first,
    }];

    while let Some(node) = to_explore.pop() {
        if !seen.insert(node.board) {
            continue;
        }
        ordered.push(node);

        if node.is_terminal() {
            continue;
        }

        // reversed so the stack pops the top-left move first
        for pos in node.board.empty_positions().into_iter().rev() {
            let mut next = node.board;
            next.place(pos, node.to_move);
            to_explore.push(ReachableBoard {
                board: next,
                to_move: node.to_move.opponent(),
            });
        }
    }

    ordered
}

/// Reachable boards on which a move still has to be chosen
pub fn decision_boards(first: Mark) -> Vec<ReachableBoard> {
    reachable_boards(first)
        .into_iter()
        .filter(|node| !node.is_terminal())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_count_matches_known_total() {
        // 5,478 legal positions with X opening
        assert_eq!(reachable_boards(Mark::X).len(), 5478);
    }

    #[test]
    fn test_decision_boards_exclude_terminals() {
        let all = reachable_boards(Mark::X);
        let decisions = decision_boards(Mark::X);
        assert!(decisions.len() < all.len());
        assert!(decisions.iter().all(|node| !node.is_terminal()));
        assert_eq!(decisions[0].board, Board::new());
    }

    #[test]
    fn test_mark_counts_follow_opening_player() {
        for node in reachable_boards(Mark::O) {
            let o = node.board.count(Mark::O);
            let x = node.board.count(Mark::X);
            assert!(o == x || o == x + 1);
        }
    }
}
