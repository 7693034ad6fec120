/// Lazily enumerates every subset of a slice exactly once.
///
/// Subsets are produced in binary counting order: element `i` of the input
/// plays the role of bit `i`, so the empty set comes first, then `{items[0]}`,
/// then `{items[1]}`, then `{items[0], items[1]}`, and so on. Each yielded
/// subset keeps the input order. The iterator is `Clone`, so a fresh copy
/// restarts the enumeration.
#[derive(Clone, Debug)]
pub struct Powerset<'a, T> {
    items: &'a [T],
    counter: Vec<bool>,
    exhausted: bool,
}

impl<'a, T> Powerset<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Powerset {
            items,
            counter: vec![false; items.len()],
            exhausted: false,
        }
    }

    /// Number of subsets, saturating at `usize::MAX`.
    pub fn subset_count(&self) -> usize {
        u32::try_from(self.items.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
            .unwrap_or(usize::MAX)
    }

    fn advance(&mut self) {
        for bit in self.counter.iter_mut() {
            if *bit {
                *bit = false;
            } else {
                *bit = true;
                return;
            }
        }
        self.exhausted = true;
    }
}

impl<'a, T> Iterator for Powerset<'a, T> {
    type Item = Vec<&'a T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let subset = self
            .items
            .iter()
            .zip(self.counter.iter())
            .filter(|(_, included)| **included)
            .map(|(item, _)| item)
            .collect();
        self.advance();
        Some(subset)
    }
}

/// Shorthand for [`Powerset::new`].
pub fn powerset<T>(items: &[T]) -> Powerset<'_, T> {
    Powerset::new(items)
}
