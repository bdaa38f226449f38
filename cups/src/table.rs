use crate::{error::CircleError, HashSet};
use itertools::Itertools;

/// Array-backed successor table for a single cycle of cups labelled
/// `1..=len`.
///
/// `next[label]` is the cup immediately clockwise of `label`; slot 0 is
/// unused so labels index directly. Cups are never moved or reallocated
/// after build, only re-linked, which keeps neighbor lookup, extraction
/// and reinsertion O(1) at any circle size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Circle {
    next: Vec<u32>,
    current: u32,
}

impl Circle {
    /// Links `seq` in clockwise order, pads with ascending labels up to
    /// `total`, then closes the cycle back to the first cup.
    ///
    /// `seq` must be a permutation of `1..=seq.len()` and
    /// `total >= seq.len()`. The current pointer starts on `seq[0]`.
    pub fn new(seq: &[u32], total: u32) -> Result<Self, CircleError> {
        validate(seq, total)?;

        let len = seq.len() as u32;
        let mut next = vec![0_u32; total as usize + 1];

        for (&cup, &clockwise) in seq.iter().tuple_windows() {
            next[cup as usize] = clockwise;
        }

        let first = seq[0];
        let last = seq[seq.len() - 1];

        if total > len {
            next[last as usize] = len + 1;
            for label in len + 1..total {
                next[label as usize] = label + 1;
            }
            next[total as usize] = first;
        } else {
            next[last as usize] = first;
        }

        Ok(Self {
            next,
            current: first,
        })
    }

    /// The cup immediately clockwise of `label`.
    pub fn successor(&self, label: u32) -> Result<u32, CircleError> {
        self.check(label)?;
        Ok(self.next[label as usize])
    }

    /// Detaches the run `head..=tail`, currently sitting after `pred`, and
    /// reinserts it immediately clockwise of `dest`. O(1), never allocates.
    ///
    /// The caller supplies the run's predecessor; the table never searches
    /// for one. `dest` must not be inside the run.
    pub fn splice(&mut self, pred: u32, head: u32, tail: u32, dest: u32) {
        // detach before reading next[dest], so dest == pred stays sound
        self.next[pred as usize] = self.next[tail as usize];
        self.next[tail as usize] = self.next[dest as usize];
        self.next[dest as usize] = head;
    }

    #[inline]
    pub(crate) fn succ(&self, label: u32) -> u32 {
        self.next[label as usize]
    }

    #[inline]
    fn check(&self, label: u32) -> Result<(), CircleError> {
        if label == 0 || label > self.len() {
            return Err(CircleError::OutOfRange {
                label,
                max: self.len(),
            });
        }
        Ok(())
    }

    /// Number of cups in the circle.
    #[must_use]
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    pub fn len(&self) -> u32 {
        (self.next.len() - 1) as u32
    }

    /// The cup the next move is played relative to.
    #[must_use]
    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub(crate) fn set_current(&mut self, label: u32) {
        self.current = label;
    }
}

fn validate(seq: &[u32], total: u32) -> Result<(), CircleError> {
    if seq.is_empty() {
        return Err(CircleError::InvalidInput(
            "no cup labels supplied".to_owned(),
        ));
    }
    if (total as usize) < seq.len() {
        return Err(CircleError::InvalidInput(format!(
            "total of {} cups is smaller than the {} supplied labels",
            total,
            seq.len()
        )));
    }

    let mut seen = HashSet::default();
    for &cup in seq {
        if cup == 0 {
            return Err(CircleError::InvalidInput(
                "cup labels start at 1".to_owned(),
            ));
        }
        if cup as usize > seq.len() {
            return Err(CircleError::InvalidInput(format!(
                "cup {} leaves a gap below it, labels must run 1..={}",
                cup,
                seq.len()
            )));
        }
        if !seen.insert(cup) {
            return Err(CircleError::InvalidInput(format!(
                "cup {} appears twice",
                cup
            )));
        }
    }

    Ok(())
}
