//! User-facing notices — one per mutation attempt, success or failure.
//!
//! Purely observational: the core never reads a notice back.

/// Severity of a notice; drives status-bar styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Info,
  Success,
  Error,
}

/// A one-shot message shown in the status bar after a mutation attempt.
#[derive(Debug, Clone)]
pub struct Notice {
  pub title:       String,
  pub description: String,
  pub severity:    Severity,
}

impl Notice {
  pub fn info(
    title: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      title:       title.into(),
      description: description.into(),
      severity:    Severity::Info,
    }
  }

  pub fn success(
    title: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      title:       title.into(),
      description: description.into(),
      severity:    Severity::Success,
    }
  }

  pub fn error(
    title: impl Into<String>,
    description: impl Into<String>,
  ) -> Self {
    Self {
      title:       title.into(),
      description: description.into(),
      severity:    Severity::Error,
    }
  }
}
