use super::stoich_errors::StoichError;

/// Greatest common divisor of |a| and |b|. gcd(0, 0) == 0, callers that divide by it floor at 1.
pub fn gcd(a: i64, b: i64) -> i64 {
    let mut a = a.unsigned_abs();
    let mut b = b.unsigned_abs();
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a as i64
}

/// Least common multiple of |a| and |b|, 0 if any of them is 0. None on overflow.
pub fn lcm(a: i64, b: i64) -> Option<i64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let a = a.checked_abs()?;
    let b = b.checked_abs()?;
    (a / gcd(a, b)).checked_mul(b)
}

/// gcd of a whole slice
pub fn gcd_of_slice(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, &x| gcd(acc, x))
}

/// Approximates x by a fraction p/q using continued fractions.
///
/// The expansion stops as soon as the convergent is within `eps` of x, the remaining
/// fractional part drops below `eps`, or the denominator exceeds `max_den`.
/// Values with |x| < eps are returned as 0/1.
pub fn to_fraction(x: f64, max_den: i64, eps: f64) -> Result<(i64, i64), StoichError> {
    if !x.is_finite() {
        return Err(StoichError::NonFinite(x));
    }
    if x.abs() < eps {
        return Ok((0, 1));
    }
    let sign: i64 = if x < 0.0 { -1 } else { 1 };
    let x = x.abs();

    let mut a = x.floor();
    let (mut h1, mut k1) = (1.0_f64, 0.0_f64);
    let (mut h, mut k) = (a, 1.0_f64);
    let mut frac = x - a;
    while k <= max_den as f64 && (h / k - x).abs() > eps && frac > eps {
        frac = 1.0 / frac;
        a = frac.floor();
        let (h2, k2) = (h1, k1);
        h1 = h;
        k1 = k;
        h = a * h1 + h2;
        k = a * k1 + k2;
        frac -= a;
    }
    if h > i64::MAX as f64 || k > i64::MAX as f64 {
        return Err(StoichError::Overflow);
    }
    Ok((sign * h as i64, k as i64))
}
