//! Error types for `rolo-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// A required field was empty (after whitespace trimming).
  #[error("{field} must not be empty")]
  Validation { field: &'static str },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
