use num_bigint::BigUint;
use num_traits::One;

/// `n!` as a descending product. `factorial(0) == factorial(1) == 1`.
pub fn factorial(mut n: u64) -> BigUint {
    let mut result = BigUint::one();

    while n > 1 {
        result *= BigUint::from(n);
        n -= 1;
    }

    result
}

/// Binomial coefficient `n! / (k! * (n - k)!)`.
///
/// Any `k >= n` yields 1, including `k > n`.
pub fn nchoosek(n: u64, k: u64) -> BigUint {
    if k >= n {
        return BigUint::one();
    }

    factorial(n) / (factorial(k) * factorial(n - k))
}

////////////////////////////////////////////////////
/// Precomputed factorials for building many coefficients at once

pub struct Factorials {
    table: Vec<BigUint>,
}

impl Factorials {
    /// Factorials `0!..=n!`, each one product away from the previous.
    pub fn up_to(n: usize) -> Self {
        let mut table = Vec::with_capacity(n + 1);
        let mut result = BigUint::one();
        table.push(result.clone());

        for index in 1..=n {
            result *= BigUint::from(index);
            table.push(result.clone());
        }

        Self { table }
    }

    /// Same contract as [`nchoosek`]. Panics if `n` is beyond the table.
    pub fn nchoosek(&self, n: usize, k: usize) -> BigUint {
        if k >= n {
            return BigUint::one();
        }

        &self.table[n] / (&self.table[k] * &self.table[n - k])
    }
}
