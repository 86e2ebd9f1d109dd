//! Warm-up exercises

/// The larger of `a` and `b`; `a` when they are equal
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// `"FizzBuzz"` for multiples of 15, `"Fizz"` for 3, `"Buzz"` for 5,
/// otherwise the number itself
pub fn fizz_buzz(n: i64) -> String {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => "FizzBuzz".to_string(),
        (true, false) => "Fizz".to_string(),
        (false, true) => "Buzz".to_string(),
        (false, false) => n.to_string(),
    }
}

/// Arithmetic mean, or `None` for an empty slice
pub fn calculate_average(numbers: &[f64]) -> Option<f64> {
    if numbers.is_empty() {
        return None;
    }
    Some(numbers.iter().sum::<f64>() / numbers.len() as f64)
}

/// `n!`, or `None` for negative `n` or when the result overflows `u64`
pub fn factorial(n: i64) -> Option<u64> {
    if n < 0 {
        return None;
    }
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}
