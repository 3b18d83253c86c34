//! Fibonacci numbers: `fib(0) = 0`, `fib(1) = 1`, `fib(n) = fib(n-1) + fib(n-2)`.
//!
//! Variants:
//!   - [fibonacci_recursive()]: the textbook, exponential recursion;
//!   - [fibonacci_memoized()]: top-down, caching on a [HashMap];
//!   - [fibonacci_memoized_table()]: top-down, caching on a dense [FibonacciTable];
//!   - [fibonacci_tabulated()]: bottom-up, on a `Vec` sized for `n`;
//!   - [fibonacci_array_tabulated()]: bottom-up, on a fixed stack array.

use std::collections::HashMap;
use crate::error::{ShowdownError, ShowdownResult};

/// Biggest `n` for which `fib(n)` fits in a `u64`
pub const MAX_FIBONACCI_N: u32 = 93;

/// Slots in the stack array used by [fibonacci_array_tabulated()] -- enough for [MAX_FIBONACCI_N]
pub const FIBONACCI_ARRAY_CAPACITY: usize = MAX_FIBONACCI_N as usize + 1;


fn ensure_representable(n: u32) -> ShowdownResult<()> {
    if n > MAX_FIBONACCI_N {
        Err(ShowdownError::FibonacciOverflow { n })
    } else {
        Ok(())
    }
}

/// Naive recursion: `O(φⁿ)` time, `O(n)` stack
pub fn fibonacci_recursive(n: u32) -> ShowdownResult<u64> {
    fn fib(n: u32) -> u64 {
        if n <= 1 {
            n as u64
        } else {
            fib(n - 1) + fib(n - 2)
        }
    }
    ensure_representable(n)?;
    Ok(fib(n))
}

/// Top-down recursion caching every computed value in `memo`.\
/// `memo` is owned by the caller and may be reused across calls -- in which case,
/// any already computed `n` is answered in `O(1)`.
pub fn fibonacci_memoized(n: u32, memo: &mut HashMap<u32, u64>) -> ShowdownResult<u64> {
    fn fib(n: u32, memo: &mut HashMap<u32, u64>) -> u64 {
        if let Some(&known) = memo.get(&n) {
            return known;
        }
        if n <= 1 {
            return n as u64;
        }
        let value = fib(n - 1, memo) + fib(n - 2, memo);
        memo.insert(n, value);
        value
    }
    ensure_representable(n)?;
    Ok(fib(n, memo))
}

/// Dense memoization table for [fibonacci_memoized_table()]: slot `i` holds `fib(i)` once computed.\
/// Grows on demand, so any `n` up to [MAX_FIBONACCI_N] may be asked for.
#[derive(Debug, Default, Clone)]
pub struct FibonacciTable {
    slots: Vec<Option<u64>>,
}

impl FibonacciTable {

    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the table to hold values up to `fib(n)`
    pub fn with_capacity_for(n: u32) -> Self {
        Self { slots: vec![None; n as usize + 1] }
    }

    pub fn get(&self, n: u32) -> Option<u64> {
        self.slots.get(n as usize).copied().flatten()
    }

    pub fn set(&mut self, n: u32, value: u64) {
        let index = n as usize;
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        self.slots[index] = Some(value);
    }

    /// How many values are already known
    pub fn known(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Same as [fibonacci_memoized()], with the cache kept in a [FibonacciTable]
pub fn fibonacci_memoized_table(n: u32, table: &mut FibonacciTable) -> ShowdownResult<u64> {
    fn fib(n: u32, table: &mut FibonacciTable) -> u64 {
        if let Some(known) = table.get(n) {
            return known;
        }
        if n <= 1 {
            return n as u64;
        }
        let value = fib(n - 1, table) + fib(n - 2, table);
        table.set(n, value);
        value
    }
    ensure_representable(n)?;
    Ok(fib(n, table))
}

/// Bottom-up: `O(n)` time & space
pub fn fibonacci_tabulated(n: u32) -> ShowdownResult<u64> {
    ensure_representable(n)?;
    if n <= 1 {
        return Ok(n as u64);
    }
    let n = n as usize;
    let mut dp = vec![0u64; n + 1];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
    }
    Ok(dp[n])
}

/// Bottom-up on a fixed `[u64; FIBONACCI_ARRAY_CAPACITY]` living on the stack -- no heap allocations
pub fn fibonacci_array_tabulated(n: u32) -> ShowdownResult<u64> {
    ensure_representable(n)?;
    if n <= 1 {
        return Ok(n as u64);
    }
    let n = n as usize;
    let mut dp = [0u64; FIBONACCI_ARRAY_CAPACITY];
    dp[1] = 1;
    for i in 2..=n {
        dp[i] = dp[i - 1] + dp[i - 2];
    }
    Ok(dp[n])
}
