//! Field checks shared by every record kind.

use crate::error::{InventoryError, InventoryResult};

/// Collects every failed check so the user sees them all at once.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Violations(Vec<String>);

impl Violations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `"<label> is required."` when `value` is blank.
    pub fn require(&mut self, label: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.0.push(format!("{label} is required."));
        }
        self
    }

    /// `"<label> is required."` when `value` is absent.
    pub fn require_some<T>(&mut self, label: &str, value: Option<&T>) -> &mut Self {
        if value.is_none() {
            self.0.push(format!("{label} is required."));
        }
        self
    }

    /// Records `message` when `ok` is false.
    pub fn check(&mut self, ok: bool, message: impl Into<String>) -> &mut Self {
        if !ok {
            self.0.push(message.into());
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// `Ok(())` if nothing failed, otherwise [`InventoryError::Validation`].
    pub fn into_result(self) -> InventoryResult<()> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(self.0))
        }
    }
}
