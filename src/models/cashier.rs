use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::filled;
use crate::utils::de::empty_string_as_none;
use crate::utils::error::AppError;

/// Cashier or admin account; the password column is never selected.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cashier {
    pub kasir_id: i32,
    pub nama: String,
    pub username: String,
    pub no_telepon: Option<String>,
    pub tanggal_bergabung: Option<NaiveDate>,
    pub level_akses: String,
}

/// Discriminant row returned by `login_user`.
#[derive(Debug, Clone, Default, Deserialize, FromRow)]
pub struct LoginOutcome {
    pub status: String,
    pub message: Option<String>,
    pub kasir_id: Option<i32>,
    pub nama: Option<String>,
    pub level_akses: Option<String>,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoggedIn {
    pub kasir_id: Option<i32>,
    pub nama: Option<String>,
    pub level_akses: Option<String>,
}

impl From<LoginOutcome> for LoggedIn {
    fn from(outcome: LoginOutcome) -> Self {
        LoggedIn {
            kasir_id: outcome.kasir_id,
            nama: outcome.nama,
            level_akses: outcome.level_akses,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl TryFrom<LoginRequest> for Credentials {
    type Error = AppError;

    fn try_from(req: LoginRequest) -> Result<Self, Self::Error> {
        // Passwords are compared verbatim, only emptiness is checked.
        let password = req.password.filter(|p| !p.is_empty());
        match (filled(req.username), password) {
            (Some(username), Some(password)) => Ok(Credentials { username, password }),
            _ => Err(AppError::ValidationError(
                "Username dan password harus diisi".to_string(),
            )),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub kasir_id: Option<i32>,
}
