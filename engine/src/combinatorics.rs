//! Binomial coefficients and permutation weights.

/// n choose k, or 0 when `k > n`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        // result == C(n, i) here, so the division is exact
        result = result * (n - i) as u64 / (i + 1) as u64;
    }
    result
}

/// n! as a float.
pub fn factorial(n: usize) -> f64 {
    (1..=n).map(|k| k as f64).product()
}

/// Share of the `players!` orderings in which a fixed player joins right
/// after a fixed coalition of `size` other players:
/// `size! * (players - size - 1)! / players!`.
///
/// Computed as `1 / (players * C(players - 1, size))` to avoid forming the
/// factorials.
pub fn ordering_weight(players: usize, size: usize) -> f64 {
    assert!(size < players, "coalition must leave room for the joining player");
    1.0 / (players as f64 * binomial(players - 1, size) as f64)
}
