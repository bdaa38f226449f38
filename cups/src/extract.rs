use crate::{error::CircleError, table::Circle};
use itertools::Itertools;
use std::iter;

impl Circle {
    /// Collects up to `count` cups by walking clockwise from `start`,
    /// stopping early if the walk comes back around to `start`.
    pub fn sequence_after(
        &self,
        start: u32,
        count: usize,
    ) -> Result<Vec<u32>, CircleError> {
        let mut cup = self.successor(start)?;
        let mut out = Vec::with_capacity(count.min(self.len() as usize - 1));

        while cup != start && out.len() < count {
            out.push(cup);
            cup = self.succ(cup);
        }

        Ok(out)
    }

    /// Every cup clockwise of cup 1, excluding cup 1 itself, concatenated
    /// as digits. Only meaningful while every label is a single digit.
    #[must_use]
    pub fn order_after_one(&self) -> String {
        iter::successors(Some(self.succ(1)), |&cup| Some(self.succ(cup)))
            .take_while(|&cup| cup != 1)
            .join("")
    }

    /// Product of the two cups immediately clockwise of cup 1, widened to
    /// 64 bits since each factor can approach a million.
    #[must_use]
    pub fn pair_product(&self) -> u64 {
        let first = self.succ(1);
        let second = self.succ(first);
        u64::from(first) * u64::from(second)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sequence_stops_before_revisiting_start() {
        let circle = Circle::new(&[1, 2, 3, 4, 5], 5).unwrap();
        assert_eq!(circle.sequence_after(1, 10).unwrap(), [2, 3, 4, 5]);
        assert_eq!(circle.sequence_after(3, 2).unwrap(), [4, 5]);
        assert!(circle.sequence_after(5, 0).unwrap().is_empty());
    }

    #[test]
    fn sequence_rejects_unknown_start() {
        let circle = Circle::new(&[1, 2, 3], 3).unwrap();
        assert_eq!(
            circle.sequence_after(7, 1),
            Err(CircleError::OutOfRange { label: 7, max: 3 })
        );
    }

    #[test]
    fn order_reads_clockwise_of_cup_one() {
        let circle = Circle::new(&[3, 8, 9, 1, 2, 5, 4, 6, 7], 9).unwrap();
        assert_eq!(circle.order_after_one(), "25467389");
    }

    #[test]
    fn pair_product_of_fresh_build() {
        let circle = Circle::new(&[3, 8, 9, 1, 2, 5, 4, 6, 7], 9).unwrap();
        assert_eq!(circle.pair_product(), 10);
    }
}
