//! Length of the longest strictly increasing subsequence (LIS) of a sequence.\
//! Equal elements never extend a subsequence; an empty sequence has a LIS of 0.

use crate::error::{ShowdownError, ShowdownResult};

/// Longest sequence [lis_brute_force()] accepts: it visits all `2ⁿ - 1` subsequences
pub const MAX_BRUTE_FORCE_LEN: usize = 25;


fn is_strictly_increasing(subsequence: &[i64]) -> bool {
    subsequence.windows(2).all(|pair| pair[0] < pair[1])
}

/// Enumerates every non-empty subsequence through a bitmask -- bit `i` set meaning `sequence[i]`
/// is taken -- keeping the length of the longest strictly increasing one
pub fn lis_brute_force(sequence: &[i64]) -> ShowdownResult<usize> {
    let n = sequence.len();
    if n > MAX_BRUTE_FORCE_LEN {
        return Err(ShowdownError::InputTooLarge { len: n, max: MAX_BRUTE_FORCE_LEN });
    }
    let mut max_len = 0;
    let mut subsequence = Vec::with_capacity(n);
    for mask in 1u32..(1u32 << n) {
        subsequence.clear();
        subsequence.extend(sequence.iter()
            .enumerate()
            .filter(|&(i, _)| mask & (1 << i) != 0)
            .map(|(_, &element)| element));
        if subsequence.len() > max_len && is_strictly_increasing(&subsequence) {
            max_len = subsequence.len();
        }
    }
    Ok(max_len)
}

/// `lis_ending_at(i) = 1 + max(lis_ending_at(j))` for every `j < i` where `sequence[j] < sequence[i]`,
/// computed top-down & cached per index
pub fn lis_memoized(sequence: &[i64]) -> usize {
    fn lis_ending_at(i: usize, sequence: &[i64], memo: &mut [Option<usize>]) -> usize {
        if let Some(known) = memo[i] {
            return known;
        }
        let mut max_len = 1;
        for j in 0..i {
            if sequence[j] < sequence[i] {
                max_len = max_len.max(lis_ending_at(j, sequence, memo) + 1);
            }
        }
        memo[i] = Some(max_len);
        max_len
    }
    let mut memo = vec![None; sequence.len()];
    (0..sequence.len())
        .map(|i| lis_ending_at(i, sequence, &mut memo))
        .max()
        .unwrap_or(0)
}

/// Bottom-up version of [lis_memoized()]: `O(n²)` time, `O(n)` space
pub fn lis_tabulated(sequence: &[i64]) -> usize {
    let mut dp = vec![1usize; sequence.len()];
    for i in 1..sequence.len() {
        for j in 0..i {
            if sequence[j] < sequence[i] {
                dp[i] = dp[i].max(dp[j] + 1);
            }
        }
    }
    dp.into_iter().max().unwrap_or(0)
}
