pub mod cashier;
pub mod film;
pub mod payment;
pub mod schedule;
pub mod ticket;

use serde::Deserialize;

use crate::utils::error::AppError;

/// Body carrying only the acting admin, as sent to delete and purge endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct AdminRequest {
    pub admin_id: Option<i32>,
}

impl AdminRequest {
    pub fn admin_id(&self) -> Result<i32, AppError> {
        given(self.admin_id)
            .ok_or_else(|| AppError::ValidationError("admin_id harus diisi".to_string()))
    }
}

/// Trimmed, non-empty text, or `None`.
///
/// Required text fields count as missing when blank.
pub(crate) fn filled(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A non-zero identifier, or `None`.
///
/// Ids start at 1, so `0` counts as missing.
pub(crate) fn given(id: Option<i32>) -> Option<i32> {
    id.filter(|id| *id != 0)
}
