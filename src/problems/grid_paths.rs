//! Counting every path from the top-left to the bottom-right cell of a `rows × cols` grid,
//! moving only right or down. The answer is `C(rows+cols-2, rows-1)`.

use crate::error::{ShowdownError, ShowdownResult};

/// Largest `rows + cols` [count_paths_memoized()] accepts: its recursion goes that deep
pub const MAX_MEMOIZED_DEPTH: usize = 4096;


fn ensure_valid(rows: usize, cols: usize) -> ShowdownResult<()> {
    if rows == 0 || cols == 0 {
        Err(ShowdownError::InvalidGrid { rows, cols })
    } else {
        Ok(())
    }
}

/// Walks every path with an explicit stack, counting the arrivals at the bottom-right cell.\
/// Exponential: each path is visited one cell at a time.
pub fn count_paths_brute_force(rows: usize, cols: usize) -> ShowdownResult<u64> {
    ensure_valid(rows, cols)?;
    let mut stack = vec![(0usize, 0usize)];
    let mut total_paths = 0u64;
    while let Some((row, col)) = stack.pop() {
        if row == rows - 1 && col == cols - 1 {
            total_paths = total_paths.checked_add(1)
                .ok_or(ShowdownError::PathCountOverflow { rows, cols })?;
            continue;
        }
        if col + 1 < cols {
            stack.push((row, col + 1));
        }
        if row + 1 < rows {
            stack.push((row + 1, col));
        }
    }
    Ok(total_paths)
}

/// `paths(r, c) = paths(r-1, c) + paths(r, c-1)`, with `paths(1, _) = paths(_, 1) = 1`,
/// caching each `(r, c)` in a `rows × cols` table.\
/// Grids with `rows + cols` above [MAX_MEMOIZED_DEPTH] fail with [ShowdownError::InputTooLarge].
pub fn count_paths_memoized(rows: usize, cols: usize) -> ShowdownResult<u64> {
    fn paths(rows: usize, cols: usize, memo: &mut [Vec<Option<u64>>]) -> Option<u64> {
        if rows == 1 || cols == 1 {
            return Some(1);
        }
        if let Some(known) = memo[rows - 1][cols - 1] {
            return Some(known);
        }
        let count = paths(rows - 1, cols, memo)?.checked_add(paths(rows, cols - 1, memo)?)?;
        memo[rows - 1][cols - 1] = Some(count);
        Some(count)
    }
    ensure_valid(rows, cols)?;
    let depth = rows.saturating_add(cols);
    if depth > MAX_MEMOIZED_DEPTH {
        return Err(ShowdownError::InputTooLarge { len: depth, max: MAX_MEMOIZED_DEPTH });
    }
    let mut memo = vec![vec![None; cols]; rows];
    paths(rows, cols, &mut memo)
        .ok_or(ShowdownError::PathCountOverflow { rows, cols })
}

/// Fills the whole grid row by row: the first row & column have a single path each,
/// any other cell is reached from the one above or the one to the left
pub fn count_paths_tabulated(rows: usize, cols: usize) -> ShowdownResult<u64> {
    ensure_valid(rows, cols)?;
    let mut dp = vec![vec![0u64; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            dp[i][j] = if i == 0 || j == 0 {
                1
            } else {
                dp[i - 1][j].checked_add(dp[i][j - 1])
                    .ok_or(ShowdownError::PathCountOverflow { rows, cols })?
            };
        }
    }
    Ok(dp[rows - 1][cols - 1])
}


#[cfg(test)]
mod tests {

    //! Unit tests for [grid_paths](super) module

    use super::*;

    #[test]
    fn three_by_three_has_six_paths() {
        assert_eq!(count_paths_brute_force(3, 3), Ok(6));
        assert_eq!(count_paths_memoized(3, 3),    Ok(6));
        assert_eq!(count_paths_tabulated(3, 3),   Ok(6));
    }

    #[test]
    fn single_row_or_column_has_a_single_path() {
        for n in 1..6 {
            for (rows, cols) in [(1, n), (n, 1)] {
                assert_eq!(count_paths_brute_force(rows, cols), Ok(1), "{rows}x{cols}");
                assert_eq!(count_paths_memoized(rows, cols),    Ok(1), "{rows}x{cols}");
                assert_eq!(count_paths_tabulated(rows, cols),   Ok(1), "{rows}x{cols}");
            }
        }
    }

    #[test]
    fn non_square_grids() {
        // C(3+7-2, 3-1) = C(8, 2)
        assert_eq!(count_paths_brute_force(3, 7), Ok(28));
        assert_eq!(count_paths_memoized(3, 7),    Ok(28));
        assert_eq!(count_paths_tabulated(7, 3),   Ok(28));
    }

    #[test]
    fn empty_grid_is_rejected() {
        assert_eq!(count_paths_brute_force(0, 3), Err(ShowdownError::InvalidGrid { rows: 0, cols: 3 }));
        assert_eq!(count_paths_memoized(3, 0),    Err(ShowdownError::InvalidGrid { rows: 3, cols: 0 }));
        assert_eq!(count_paths_tabulated(0, 0),   Err(ShowdownError::InvalidGrid { rows: 0, cols: 0 }));
    }

    #[test]
    fn overflow_is_detected() {
        // C(68, 34) is about 2.8e19 -- just above u64::MAX
        assert_eq!(count_paths_tabulated(35, 35), Err(ShowdownError::PathCountOverflow { rows: 35, cols: 35 }));
        assert_eq!(count_paths_memoized(35, 35),  Err(ShowdownError::PathCountOverflow { rows: 35, cols: 35 }));
        // C(66, 33) is about 7.2e18 -- still fits
        assert_eq!(count_paths_tabulated(34, 34), Ok(7_219_428_434_016_265_740));
    }

    #[test]
    fn thin_grids_are_too_deep_for_memoization() {
        assert_eq!(count_paths_memoized(1_000_000, 2),
                   Err(ShowdownError::InputTooLarge { len: 1_000_002, max: MAX_MEMOIZED_DEPTH }));
        assert_eq!(count_paths_tabulated(1_000_000, 2), Ok(1_000_000));
        // the deepest accepted grid still recurses fine
        assert_eq!(count_paths_memoized(MAX_MEMOIZED_DEPTH - 2, 2), Ok((MAX_MEMOIZED_DEPTH - 2) as u64));
    }
}
