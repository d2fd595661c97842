//! Error handling and exit codes.

use combcalc_core::constants::exit_codes;
use combcalc_core::CombError;

/// Map an evaluation error to its process exit code.
pub fn handle_error(err: &CombError) -> i32 {
    match err {
        CombError::InvalidArgument(_) | CombError::LimitExceeded { .. } => {
            exit_codes::ERROR_INVALID_ARGUMENT
        }
        CombError::Config(_) => exit_codes::ERROR_CONFIG,
        CombError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for any application error; non-evaluation failures (I/O,
/// serialization) are generic.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<CombError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&CombError::Mismatch), 3);
        assert_eq!(handle_error(&CombError::Config("bad".into())), 4);
        assert_eq!(handle_error(&CombError::InvalidArgument("k > n".into())), 5);
        assert_eq!(
            handle_error(&CombError::LimitExceeded { n: 10, limit: 5 }),
            5
        );
    }

    #[test]
    fn anyhow_errors_map_through_downcast() {
        let err = anyhow::Error::from(CombError::Mismatch);
        assert_eq!(exit_code(&err), exit_codes::ERROR_MISMATCH);

        let err = anyhow::Error::from(CombError::Config("x".into())).context("while running");
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);

        let err = anyhow::anyhow!("disk full");
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
    }
}
