//! "Two sum": find two elements of a sequence adding up to a target.
//!
//! Every variant reports the found [Pair] in sequence order -- the element appearing first
//! in the input comes first -- so they may be compared to each other.

use std::collections::{HashMap, HashSet};
use crate::error::{ShowdownError, ShowdownResult};

/// Two values of the input sequence, in the order they appear there
pub type Pair = (i64, i64);

/// Slots of the value-indexed table used by [two_sum_value_table()]: only values in `0..VALUE_TABLE_CAPACITY` are accepted
pub const VALUE_TABLE_CAPACITY: usize = 1000;

/// Longest sequence [two_sum_memoized_table()] accepts: its table has a slot for each of the `n²` windows
pub const MAX_WINDOW_TABLE_LEN: usize = 1024;


/// `first + second == target`, without overflowing
fn sums_to(first: i64, second: i64, target: i64) -> bool {
    first.checked_add(second) == Some(target)
}


/// Tries every `(i, j)` with `i < j`, in lexicographic order, returning the first match
pub fn two_sum_brute_force(sequence: &[i64], target: i64) -> Option<Pair> {
    sequence.iter().enumerate()
        .flat_map(|(i, &first)| sequence[i + 1..].iter().map(move |&second| (first, second)))
        .find(|&(first, second)| sums_to(first, second, target))
}

/// `find(start, end)` checks the outermost pair, then shrinks the window from the left
/// and, failing that, from the right. Exponential, for the same windows are visited over and over.\
/// Recursion goes as deep as the sequence is long: very long sequences overflow the stack.
pub fn two_sum_recursive(sequence: &[i64], target: i64) -> Option<Pair> {
    fn find(sequence: &[i64], target: i64, start: usize, end: usize) -> Option<Pair> {
        if start >= end {
            return None;
        }
        if sums_to(sequence[start], sequence[end], target) {
            return Some((sequence[start], sequence[end]));
        }
        find(sequence, target, start + 1, end)
            .or_else(|| find(sequence, target, start, end - 1))
    }
    if sequence.len() < 2 {
        return None;
    }
    find(sequence, target, 0, sequence.len() - 1)
}

/// The recursion of [two_sum_recursive()], remembering the outcome of each `(start, end)` window in a [HashMap].\
/// As deep as [two_sum_recursive()]: very long sequences overflow the stack.
pub fn two_sum_memoized(sequence: &[i64], target: i64) -> Option<Pair> {
    fn find(sequence: &[i64], target: i64, start: usize, end: usize, memo: &mut HashMap<(usize, usize), Option<Pair>>) -> Option<Pair> {
        if start >= end {
            return None;
        }
        if let Some(&known) = memo.get(&(start, end)) {
            return known;
        }
        let result = if sums_to(sequence[start], sequence[end], target) {
            Some((sequence[start], sequence[end]))
        } else {
            find(sequence, target, start + 1, end, memo)
                .or_else(|| find(sequence, target, start, end - 1, memo))
        };
        memo.insert((start, end), result);
        result
    }
    if sequence.len() < 2 {
        return None;
    }
    let mut memo = HashMap::new();
    find(sequence, target, 0, sequence.len() - 1, &mut memo)
}

/// Dense, bounds-checked `n × n` memoization table for [two_sum_memoized_table()].\
/// `None` means "not computed yet"; `Some(None)` means "computed: no pair in this window".
struct WindowTable {
    n:     usize,
    slots: Vec<Option<Option<Pair>>>,
}

impl WindowTable {

    fn new(n: usize) -> Self {
        Self { n, slots: vec![None; n * n] }
    }

    fn get(&self, start: usize, end: usize) -> Option<Option<Pair>> {
        self.slots.get(start * self.n + end).copied().flatten()
    }

    fn set(&mut self, start: usize, end: usize, result: Option<Pair>) {
        if let Some(slot) = self.slots.get_mut(start * self.n + end) {
            *slot = Some(result);
        }
    }
}

/// The recursion of [two_sum_recursive()], remembering the outcome of each `(start, end)` window in a dense table.\
/// Sequences longer than [MAX_WINDOW_TABLE_LEN] fail with [ShowdownError::InputTooLarge].
pub fn two_sum_memoized_table(sequence: &[i64], target: i64) -> ShowdownResult<Option<Pair>> {
    fn find(sequence: &[i64], target: i64, start: usize, end: usize, memo: &mut WindowTable) -> Option<Pair> {
        if start >= end {
            return None;
        }
        if let Some(known) = memo.get(start, end) {
            return known;
        }
        let result = if sums_to(sequence[start], sequence[end], target) {
            Some((sequence[start], sequence[end]))
        } else {
            find(sequence, target, start + 1, end, memo)
                .or_else(|| find(sequence, target, start, end - 1, memo))
        };
        memo.set(start, end, result);
        result
    }
    if sequence.len() > MAX_WINDOW_TABLE_LEN {
        return Err(ShowdownError::InputTooLarge { len: sequence.len(), max: MAX_WINDOW_TABLE_LEN });
    }
    if sequence.len() < 2 {
        return Ok(None);
    }
    let mut memo = WindowTable::new(sequence.len());
    Ok(find(sequence, target, 0, sequence.len() - 1, &mut memo))
}

/// Single pass remembering every seen value: the first element whose complement was already seen closes the pair
pub fn two_sum_tabulated(sequence: &[i64], target: i64) -> Option<Pair> {
    let mut seen = HashSet::with_capacity(sequence.len());
    for &element in sequence {
        if let Some(complement) = target.checked_sub(element) {
            if seen.contains(&complement) {
                return Some((complement, element));
            }
        }
        seen.insert(element);
    }
    None
}

/// Same as [two_sum_tabulated()], over a fixed, value-indexed table living on the stack.\
/// Elements must be in `0..VALUE_TABLE_CAPACITY`; complements outside of it can't be in the table and are skipped.
pub fn two_sum_value_table(sequence: &[i64], target: i64) -> ShowdownResult<Option<Pair>> {
    let mut seen = [false; VALUE_TABLE_CAPACITY];
    let slot_of = |value: i64| usize::try_from(value).ok().filter(|&slot| slot < VALUE_TABLE_CAPACITY);
    for &element in sequence {
        let element_slot = slot_of(element)
            .ok_or(ShowdownError::ValueOutOfRange { value: element, capacity: VALUE_TABLE_CAPACITY })?;
        if let Some(complement) = target.checked_sub(element) {
            if slot_of(complement).is_some_and(|complement_slot| seen[complement_slot]) {
                return Ok(Some((complement, element)));
            }
        }
        seen[element_slot] = true;
    }
    Ok(None)
}


#[cfg(test)]
mod tests {

    //! Unit tests for [two_sum](super) module

    use super::*;

    const SEQUENCE: [i64; 6] = [8, 10, 2, 9, 7, 5];

    fn all_variants(sequence: &[i64], target: i64) -> [(&'static str, Option<Pair>); 6] {
        [
            ("brute force",    two_sum_brute_force(sequence, target)),
            ("recursive",      two_sum_recursive(sequence, target)),
            ("memoized",       two_sum_memoized(sequence, target)),
            ("memoized table", two_sum_memoized_table(sequence, target).expect("short sequence")),
            ("tabulated",      two_sum_tabulated(sequence, target)),
            ("value table",    two_sum_value_table(sequence, target).expect("values fit the table")),
        ]
    }

    #[test]
    fn textbook_example() {
        for (variant, result) in all_variants(&SEQUENCE, 11) {
            assert_eq!(result, Some((2, 9)), "{variant} variant");
        }
    }

    #[test]
    fn no_pair() {
        for (variant, result) in all_variants(&SEQUENCE, 100) {
            assert_eq!(result, None, "{variant} variant");
        }
    }

    #[test]
    fn too_short_sequences() {
        for sequence in [&[][..], &[11][..]] {
            for (variant, result) in all_variants(sequence, 11) {
                assert_eq!(result, None, "{variant} variant on {sequence:?}");
            }
        }
    }

    #[test]
    fn same_value_twice() {
        for (variant, result) in all_variants(&[3, 1, 3], 6) {
            assert_eq!(result, Some((3, 3)), "{variant} variant");
        }
        // a single element is never paired with itself
        for (variant, result) in all_variants(&[3, 1, 4], 6) {
            assert_eq!(result, None, "{variant} variant");
        }
    }

    #[test]
    fn extreme_values_do_not_overflow() {
        let sequence = [i64::MAX, 1, i64::MIN];
        assert_eq!(two_sum_brute_force(&sequence, -1),    Some((i64::MAX, i64::MIN)));
        assert_eq!(two_sum_recursive(&sequence, -1),      Some((i64::MAX, i64::MIN)));
        assert_eq!(two_sum_memoized(&sequence, -1),       Some((i64::MAX, i64::MIN)));
        assert_eq!(two_sum_memoized_table(&sequence, -1), Ok(Some((i64::MAX, i64::MIN))));
        assert_eq!(two_sum_tabulated(&sequence, -1),      Some((i64::MAX, i64::MIN)));
    }

    #[test]
    fn value_table_bounds() {
        assert_eq!(two_sum_value_table(&[1, 1000], 1001),
                   Err(ShowdownError::ValueOutOfRange { value: 1000, capacity: VALUE_TABLE_CAPACITY }));
        assert_eq!(two_sum_value_table(&[-1, 5], 4),
                   Err(ShowdownError::ValueOutOfRange { value: -1, capacity: VALUE_TABLE_CAPACITY }));
        // complements out of the table are simply not found
        assert_eq!(two_sum_value_table(&[1, 2], -5), Ok(None));
        assert_eq!(two_sum_value_table(&[999, 998], 1997), Ok(Some((999, 998))));
    }

    #[test]
    fn window_table_bounds() {
        // the pair sits at both ends: found on the very first window, but the table is refused beforehand
        let mut sequence = vec![0; MAX_WINDOW_TABLE_LEN + 1];
        sequence[0] = 5;
        sequence[MAX_WINDOW_TABLE_LEN] = 6;
        assert_eq!(two_sum_brute_force(&sequence, 11), Some((5, 6)));
        assert_eq!(two_sum_tabulated(&sequence, 11),   Some((5, 6)));
        assert_eq!(two_sum_memoized_table(&sequence, 11),
                   Err(ShowdownError::InputTooLarge { len: MAX_WINDOW_TABLE_LEN + 1, max: MAX_WINDOW_TABLE_LEN }));
        // the longest accepted sequence still works
        sequence.pop();
        sequence[MAX_WINDOW_TABLE_LEN - 1] = 6;
        assert_eq!(two_sum_memoized_table(&sequence, 11), Ok(Some((5, 6))));
    }
}
