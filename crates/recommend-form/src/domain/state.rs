//! UI state and the pure transitions that fold action outcomes into it.

use recommend_domain::recommendation::Recommendation;

use crate::domain::field::FormFields;
use crate::error::FormError;

pub const SUCCESS_MESSAGE: &str = "Success";
pub const DELETED_MESSAGE: &str = "Recommendation successfully deleted!";
pub const RESET_MESSAGE: &str = "All recommendations removed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashLevel {
    Success,
    Error,
}

/// Status line shown after an action completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of running one action against the service.
#[derive(Debug, Clone)]
pub enum Outcome {
    Created(Result<Recommendation, FormError>),
    Updated(Result<Recommendation, FormError>),
    Retrieved(Result<Recommendation, FormError>),
    Deleted(Result<(), FormError>),
    Searched(Result<Vec<Recommendation>, FormError>),
    Liked(Result<Recommendation, FormError>),
    Cleared,
    Reset(Result<(), FormError>),
}

impl Outcome {
    pub fn error(&self) -> Option<&FormError> {
        match self {
            Self::Created(Err(e))
            | Self::Updated(Err(e))
            | Self::Retrieved(Err(e))
            | Self::Liked(Err(e))
            | Self::Deleted(Err(e))
            | Self::Searched(Err(e))
            | Self::Reset(Err(e)) => Some(e),
            _ => None,
        }
    }
}

/// Everything the page shows.
///
/// `fields` mirrors at most one record (`current`); `results` is the last
/// rendered search, `None` until a search succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub fields: FormFields,
    pub current: Option<Recommendation>,
    pub results: Option<Vec<Recommendation>>,
    pub flash: Option<Flash>,
}

impl FormState {
    /// Fold one outcome into the state.
    pub fn apply(mut self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::Created(Ok(record))
            | Outcome::Updated(Ok(record))
            | Outcome::Liked(Ok(record)) => {
                self.populate(record);
                self.flash = Some(Flash::success(SUCCESS_MESSAGE));
            }
            Outcome::Retrieved(Ok(record)) => {
                let message = format!("Success. Recommendation retrieved: {}", record.id);
                self.populate(record);
                self.flash = Some(Flash::success(message));
            }
            Outcome::Retrieved(Err(e)) => {
                self.clear_form();
                self.fail(&e);
            }
            Outcome::Deleted(Ok(())) => {
                self.clear_form();
                self.flash = Some(Flash::success(DELETED_MESSAGE));
            }
            Outcome::Searched(Ok(rows)) => {
                self.results = Some(rows);
                self.flash = Some(Flash::success(SUCCESS_MESSAGE));
            }
            Outcome::Cleared => self.clear_form(),
            Outcome::Reset(Ok(())) => {
                self.clear_form();
                self.results = None;
                self.flash = Some(Flash::success(RESET_MESSAGE));
            }
            Outcome::Created(Err(e))
            | Outcome::Updated(Err(e))
            | Outcome::Liked(Err(e))
            | Outcome::Deleted(Err(e))
            | Outcome::Searched(Err(e))
            | Outcome::Reset(Err(e)) => self.fail(&e),
        }
        self
    }

    pub fn has_error(&self) -> bool {
        self.flash
            .as_ref()
            .is_some_and(|f| f.level == FlashLevel::Error)
    }

    fn populate(&mut self, record: Recommendation) {
        self.fields = FormFields::from_record(&record);
        self.current = Some(record);
    }

    fn clear_form(&mut self) {
        self.fields.clear();
        self.current = None;
    }

    fn fail(&mut self, error: &FormError) {
        self.flash = Some(Flash::error(error.flash_message()));
    }
}
