//! Error handling and exit codes.

use vitrine_core::carousel::CarouselError;
use vitrine_core::constants::exit_codes;
use vitrine_core::review::DataError;

use crate::config::ConfigError;

/// Map an application error to the process exit code.
///
/// The first recognised error in the cause chain decides.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    for cause in err.chain() {
        if cause.is::<ConfigError>() {
            return exit_codes::ERROR_CONFIG;
        }
        if cause.is::<DataError>() {
            return exit_codes::ERROR_DATA;
        }
        if cause.is::<CarouselError>() {
            return exit_codes::ERROR_NAVIGATION;
        }
    }
    exit_codes::ERROR_GENERIC
}
