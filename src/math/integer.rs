//! Integer predicates used to interpret flat grids as matrices

/// Whether `n` has no divisor other than 1 and itself
///
/// Only values of 2 and above can be prime. Used as the guard that rejects
/// lengths with no rectangular decomposition besides a single row.
pub const fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Side length of a square holding exactly `n` cells, if one exists
pub const fn exact_square_root(n: usize) -> Option<usize> {
    let root = n.isqrt();
    if root * root == n { Some(root) } else { None }
}
