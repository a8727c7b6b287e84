use std::fmt;
use thiserror::Error;

/// SQLSTATE codes raised by the ticketing procedures.
pub mod sqlstate {
    pub const SCHEDULE_OVERLAP: &str = "BK001";
    pub const FILM_NOT_SHOWING: &str = "BK002";
    pub const SEAT_OCCUPIED: &str = "BK003";
    pub const STUDIO_FULL: &str = "BK004";

    pub const UNIQUE_VIOLATION: &str = "23505";
    pub const EXCLUSION_VIOLATION: &str = "23P01";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictReason {
    ScheduleOverlap,
    SeatOccupied,
    StudioFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    FilmNotShowing,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConflictReason::ScheduleOverlap => "schedule overlaps another in the same studio",
            ConflictReason::SeatOccupied => "seat already occupied",
            ConflictReason::StudioFull => "studio at capacity",
        })
    }
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InvalidInput::FilmNotShowing => "film is not showing",
        })
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("conflict: {0}")]
    Conflict(ConflictReason),

    #[error("validation failed: {0}")]
    ValidationFailed(InvalidInput),

    #[error(transparent)]
    Unknown(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        let classified = match &err {
            sqlx::Error::Database(db_err) => classify(
                db_err.code().as_deref(),
                db_err.constraint(),
                db_err.message(),
            ),
            _ => None,
        };

        match classified {
            Some(store_err) => {
                tracing::debug!(error = %err, classified = %store_err, "Procedure rejected call");
                store_err
            }
            None => StoreError::Unknown(err),
        }
    }
}

/// Maps a database error to a business-rule rejection.
///
/// Dedicated SQLSTATE codes win; constraint violations and the legacy
/// `RAISE EXCEPTION` wording are recognised for procedures that predate them.
pub(crate) fn classify(
    code: Option<&str>,
    constraint: Option<&str>,
    message: &str,
) -> Option<StoreError> {
    match code {
        Some(sqlstate::SCHEDULE_OVERLAP) | Some(sqlstate::EXCLUSION_VIOLATION) => {
            return Some(StoreError::Conflict(ConflictReason::ScheduleOverlap))
        }
        Some(sqlstate::FILM_NOT_SHOWING) => {
            return Some(StoreError::ValidationFailed(InvalidInput::FilmNotShowing))
        }
        Some(sqlstate::SEAT_OCCUPIED) => {
            return Some(StoreError::Conflict(ConflictReason::SeatOccupied))
        }
        Some(sqlstate::STUDIO_FULL) => return Some(StoreError::Conflict(ConflictReason::StudioFull)),
        Some(sqlstate::UNIQUE_VIOLATION)
            if constraint.is_some_and(|name| name.contains("kursi")) =>
        {
            return Some(StoreError::Conflict(ConflictReason::SeatOccupied))
        }
        _ => {}
    }

    if message.contains("bentrok") {
        Some(StoreError::Conflict(ConflictReason::ScheduleOverlap))
    } else if message.contains("tidak dalam status tayang") {
        Some(StoreError::ValidationFailed(InvalidInput::FilmNotShowing))
    } else if message.contains("Kursi sudah terisi") {
        Some(StoreError::Conflict(ConflictReason::SeatOccupied))
    } else if message.contains("Kapasitas studio sudah penuh") {
        Some(StoreError::Conflict(ConflictReason::StudioFull))
    } else {
        None
    }
}
