/// Smallest `r` with `r * r >= n`.
///
/// Used to size the baby-step table of baby-step-giant-step.
pub fn ceil_sqrt_u64(n: u64) -> u64 {
    let n = u128::from(n);
    let mut r = (n as f64).sqrt() as u128;
    while r * r > n {
        r -= 1;
    }
    while r * r < n {
        r += 1;
    }
    r as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceil_sqrt_exact_squares() {
        assert_eq!(ceil_sqrt_u64(0), 0);
        assert_eq!(ceil_sqrt_u64(1), 1);
        assert_eq!(ceil_sqrt_u64(144), 12);
        assert_eq!(ceil_sqrt_u64(1 << 62), 1 << 31);
    }

    #[test]
    fn ceil_sqrt_rounds_up() {
        assert_eq!(ceil_sqrt_u64(2), 2);
        assert_eq!(ceil_sqrt_u64(5), 3);
        assert_eq!(ceil_sqrt_u64(149), 13);
        assert_eq!(ceil_sqrt_u64(310), 18);
        assert_eq!(ceil_sqrt_u64(u64::MAX), 1 << 32);
    }
}
