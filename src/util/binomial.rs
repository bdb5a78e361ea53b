//! Checked binomial coefficients
//!
//! Counts are exact or absent: every routine here returns `None` instead of
//! wrapping once a value no longer fits in `usize`.

/// `C(n, k)`, or `None` if the result overflows `usize`.
///
/// Uses the multiplicative form with the smaller of `k` and `n - k`, dividing
/// at each step so intermediates stay exact.
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut acc: usize = 1;
    for i in 0..k {
        // acc * (n - i) is divisible by (i + 1) because acc = C(n, i).
        let numerator = n - i;
        let divisor = i + 1;
        let g = gcd(acc, divisor);
        let reduced_acc = acc / g;
        let reduced_div = divisor / g;
        acc = reduced_acc.checked_mul(numerator / reduced_div)?;
    }
    Some(acc)
}

/// Number of selections that follow `positions` in lexicographic order over
/// a source of length `len`.
///
/// Combinatorial number system: `Σ C(len - 1 - p_i, r - i)`.
pub fn selections_after(positions: &[usize], len: usize) -> Option<usize> {
    let size = positions.len();
    positions
        .iter()
        .enumerate()
        .try_fold(0usize, |total, (i, &position)| {
            let tail = len.checked_sub(position + 1)?;
            total.checked_add(binomial(tail, size - i)?)
        })
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}
