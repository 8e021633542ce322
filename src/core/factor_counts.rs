// src/core/factor_counts.rs

use num::{BigInt, One};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Ordered prime -> exponent map describing a factorization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorCounts(BTreeMap<BigInt, u32>);

impl FactorCounts {
    pub fn new() -> Self {
        FactorCounts(BTreeMap::new())
    }

    /// Collapse a factor list (with multiplicity) into exponent form.
    pub fn from_factors(factors: &[BigInt]) -> Self {
        let mut counts = FactorCounts::new();
        for factor in factors {
            counts.add(factor);
        }
        counts
    }

    pub fn add(&mut self, prime: &BigInt) {
        self.add_count(prime, 1);
    }

    fn add_count(&mut self, prime: &BigInt, count: u32) {
        let entry = self.0.entry(prime.clone()).or_insert(0);
        *entry += count;
    }

    pub fn combine(&mut self, other: &FactorCounts) {
        for (prime, count) in &other.0 {
            self.add_count(prime, *count);
        }
    }

    /// Expand back to an ascending factor list with multiplicity.
    pub fn to_vec(&self) -> Vec<BigInt> {
        let mut result = Vec::new();
        for (prime, count) in &self.0 {
            for _ in 0..*count {
                result.push(prime.clone());
            }
        }
        result
    }

    pub fn product(&self) -> BigInt {
        let mut acc = BigInt::one();
        for (prime, count) in &self.0 {
            for _ in 0..*count {
                acc *= prime;
            }
        }
        acc
    }

    pub fn to_dict(&self) -> BTreeMap<BigInt, u32> {
        self.0.clone()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for FactorCounts {
    fn default() -> Self {
        FactorCounts::new()
    }
}

impl fmt::Display for FactorCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(prime, count)| {
                if *count == 1 {
                    prime.to_string()
                } else {
                    format!("{}^{}", prime, count)
                }
            })
            .collect();
        write!(f, "{}", parts.join(" * "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_factors_groups_multiplicity() {
        let factors = vec![
            BigInt::from(2),
            BigInt::from(2),
            BigInt::from(2),
            BigInt::from(3),
            BigInt::from(3),
            BigInt::from(5),
        ];
        let counts = FactorCounts::from_factors(&factors);
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.product(), BigInt::from(360));
        assert_eq!(counts.to_vec(), factors);
    }

    #[test]
    fn test_display_uses_exponent_form() {
        let counts = FactorCounts::from_factors(&[
            BigInt::from(2),
            BigInt::from(2),
            BigInt::from(7),
        ]);
        assert_eq!(counts.to_string(), "2^2 * 7");
    }

    #[test]
    fn test_combine_adds_counts() {
        let mut left = FactorCounts::from_factors(&[BigInt::from(2), BigInt::from(3)]);
        let right = FactorCounts::from_factors(&[BigInt::from(2)]);
        left.combine(&right);
        assert_eq!(left.product(), BigInt::from(12));
    }

    #[test]
    fn test_empty_counts() {
        let counts = FactorCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.product(), BigInt::one());
        assert_eq!(counts.to_string(), "");
    }
}
