use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use super::PrimalityError;

/// Jacobi symbol `(a / n)` for odd positive `n`.
///
/// Returns `-1`, `0` or `1`. Zero means `gcd(a, n) != 1`.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// use randprime_core::primality::jacobi;
///
/// assert_eq!(jacobi(&BigUint::from(5u32), &BigUint::from(21u32)).unwrap(), 1);
/// assert_eq!(jacobi(&BigUint::from(7u32), &BigUint::from(21u32)).unwrap(), 0);
/// ```
pub fn jacobi(a: &BigUint, n: &BigUint) -> Result<i8, PrimalityError> {
    if n.is_zero() || n.is_even() {
        return Err(PrimalityError::InvalidJacobiModulus(n.clone()));
    }

    let mut a = a % n;
    let mut n = n.clone();
    let mut t: i8 = 1;

    while !a.is_zero() {
        while a.is_even() {
            a >>= 1u32;
            let r = residue_mod8(&n);
            if r == 3 || r == 5 {
                t = -t;
            }
        }
        std::mem::swap(&mut a, &mut n);
        if residue_mod4(&a) == 3 && residue_mod4(&n) == 3 {
            t = -t;
        }
        a %= &n;
    }

    Ok(if n.is_one() { t } else { 0 })
}

fn residue_mod8(x: &BigUint) -> u8 {
    residue_mod4(x) | (u8::from(x.bit(2)) << 2)
}

fn residue_mod4(x: &BigUint) -> u8 {
    u8::from(x.bit(0)) | (u8::from(x.bit(1)) << 1)
}
