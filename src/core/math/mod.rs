//! Pure mathematical operations
//!
//! All functions are stateless, synchronous, and safe to call concurrently.
//! Domain violations surface as [`GatewayError::InvalidRequest`].


use crate::utils::error::{GatewayError, Result};

/// Generate the Fibonacci series with exactly `n` terms.
///
/// Returns an empty series for `n = 0` and `[0]` for `n = 1`. Inputs that
/// would push a term past the signed 64-bit range are rejected rather than
/// silently wrapped.
pub fn fibonacci(n: i64) -> Result<Vec<i64>> {
    if n < 0 {
        return Err(GatewayError::InvalidRequest(format!(
            "Fibonacci input must be a non-negative integer, got: {}",
            n
        )));
    }
    let n = n as usize;
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut series: Vec<i64> = Vec::with_capacity(n);
    series.push(0);
    if n >= 2 {
        series.push(1);
    }
    for i in 2..n {
        let next = series[i - 1]
            .checked_add(series[i - 2])
            .ok_or_else(|| {
                GatewayError::InvalidRequest(format!(
                    "Fibonacci series exceeds the 64-bit integer range at {} terms",
                    i + 1
                ))
            })?;
        series.push(next);
    }
    Ok(series)
}

/// Filter the input down to its prime elements, preserving order.
pub fn filter_primes(values: &[i64]) -> Result<Vec<i64>> {
    if values.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "Prime input must be a non-empty array of integers".to_string(),
        ));
    }
    Ok(values.iter().copied().filter(|&v| is_prime(v)).collect())
}

/// Compute the least common multiple of all values.
///
/// All values must be positive. Overflow past the 64-bit range is rejected.
pub fn compute_lcm(values: &[i64]) -> Result<i64> {
    if values.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "LCM input must be a non-empty array of integers".to_string(),
        ));
    }
    values.iter().try_fold(1i64, |acc, &v| {
        if v <= 0 {
            return Err(GatewayError::InvalidRequest(format!(
                "LCM values must be positive integers, got: {}",
                v
            )));
        }
        lcm(acc, v)
    })
}

/// Compute the highest common factor (GCD) of all values.
///
/// All values must be positive.
pub fn compute_hcf(values: &[i64]) -> Result<i64> {
    if values.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "HCF input must be a non-empty array of integers".to_string(),
        ));
    }
    values.iter().try_fold(0i64, |acc, &v| {
        if v <= 0 {
            return Err(GatewayError::InvalidRequest(format!(
                "HCF values must be positive integers, got: {}",
                v
            )));
        }
        Ok(gcd(acc, v))
    })
}

/// Trial division up to sqrt(n) on the 6k ± 1 wheel.
fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 || n == 3 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    // `i <= n / i` avoids overflowing `i * i` for candidates near i64::MAX
    let mut i = 5i64;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn lcm(a: i64, b: i64) -> Result<i64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    (a / gcd(a, b)).checked_mul(b).map(i64::abs).ok_or_else(|| {
        GatewayError::InvalidRequest("LCM result exceeds the 64-bit integer range".to_string())
    })
}
