//! Constants for small-argument fast paths and process exit codes.

/// Default computation ceiling on `n` (0 = unlimited).
pub const DEFAULT_MAX_N: u64 = 0;

/// Largest `n` whose factorial fits in a `u64`.
/// 20! = 2432902008176640000
pub const MAX_FACTORIAL_U64: usize = 20;

/// Precomputed factorials for n = 0..=20 (fast path).
///
/// 21! = 51,090,942,171,709,440,000 overflows `u64::MAX`
/// (18,446,744,073,709,551,615).
pub const FACTORIAL_TABLE: [u64; 21] = {
    let mut table = [1u64; 21];
    let mut i = 1;
    while i < 21 {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
};

/// Process exit codes used by the `combcalc` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Evaluator results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Argument outside the function's domain or above the ceiling.
    pub const ERROR_INVALID_ARGUMENT: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factorial_table_first_values() {
        assert_eq!(FACTORIAL_TABLE[0], 1);
        assert_eq!(FACTORIAL_TABLE[1], 1);
        assert_eq!(FACTORIAL_TABLE[5], 120);
        assert_eq!(FACTORIAL_TABLE[10], 3_628_800);
    }

    #[test]
    fn factorial_table_last_value() {
        assert_eq!(
            FACTORIAL_TABLE[MAX_FACTORIAL_U64],
            2_432_902_008_176_640_000
        );
    }

    #[test]
    fn factorial_table_consistency() {
        for i in 1..=MAX_FACTORIAL_U64 {
            assert_eq!(FACTORIAL_TABLE[i], FACTORIAL_TABLE[i - 1] * i as u64);
        }
    }
}
