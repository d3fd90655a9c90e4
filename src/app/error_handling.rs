//! Error handling utilities

use tracing::error;

/// Handle fatal errors and exit with appropriate status code
///
/// A `RecprepError` anywhere in the chain decides the exit code. With
/// `verbose >= 1` the full error chain is printed.
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    use crate::error::RecprepError;

    error!("Fatal error: {}", error);
    eprintln!("Error: {error:#}");

    if verbose >= 1 {
        eprintln!("\nError chain:");
        for (i, cause) in error.chain().enumerate() {
            eprintln!("  {}: {}", i, cause);
        }
    }

    let exit_code = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<RecprepError>())
        .map(RecprepError::exit_code)
        .unwrap_or(1);

    std::process::exit(exit_code)
}
