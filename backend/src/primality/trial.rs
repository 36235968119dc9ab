/// Exact primality by trial division over the 6k ± 1 wheel.
///
/// Cheap baseline for cross-checking the probabilistic testers on small
/// inputs.
pub fn is_prime_trivial(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }

    let mut i = 5u64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}
