use crate::{error::CircleError, table::Circle};
use rayon::prelude::*;

impl Circle {
    /// Plays exactly `moves` rounds against the circle, mutating it in
    /// place, and returns the final current cup.
    ///
    /// The loop has no early exit; a round count of zero leaves the circle
    /// untouched. Fails with [`CircleError::InsufficientLabels`] on circles
    /// of fewer than four cups, where no move is well defined.
    pub fn run_moves(&mut self, moves: u64) -> Result<u32, CircleError> {
        if self.len() < 4 {
            return Err(CircleError::InsufficientLabels(self.len()));
        }

        for _ in 0..moves {
            self.step();
        }

        Ok(self.current())
    }

    /// One round: lift the three cups clockwise of the current cup, count
    /// down from the current label (wrapping to the highest) until landing
    /// on a cup still in the circle, splice the lifted run back in after
    /// it, then advance to the cup now clockwise of current.
    fn step(&mut self) {
        let current = self.current();
        let a = self.succ(current);
        let b = self.succ(a);
        let c = self.succ(b);
        let after = self.succ(c);

        let mut dest = self.wrap_down(current);
        while dest == a || dest == b || dest == c {
            // at most 3 skips, only the lifted cups are excluded
            dest = self.wrap_down(dest);
        }

        self.splice(current, a, c, dest);
        self.set_current(after);
    }

    #[inline]
    fn wrap_down(&self, label: u32) -> u32 {
        if label > 1 {
            label - 1
        } else {
            self.len()
        }
    }
}

/// Builds a circle from `seq` padded to `total` cups, plays `moves` rounds
/// and hands the mutated circle back for extraction.
pub fn play(seq: &[u32], total: u32, moves: u64) -> Result<Circle, CircleError> {
    let mut circle = Circle::new(seq, total)?;
    circle.run_moves(moves)?;
    Ok(circle)
}

/// Plays several independent games in parallel. Each game is internally
/// sequential, every round depends on the one before it, but separate
/// games share nothing and fan out cleanly across threads.
pub fn play_all(games: &[(Vec<u32>, u32, u64)]) -> Vec<Result<Circle, CircleError>> {
    games
        .par_iter()
        .map(|(seq, total, moves)| play(seq, *total, *moves))
        .collect()
}
