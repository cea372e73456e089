//! The form controller: one named handler per user action.

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::domain::field::{Field, FormFields};
use crate::domain::port::RecommendationApi;
use crate::domain::state::{FormState, Outcome};
use crate::usecase::record::{
    CreateRecommendationUseCase, DeleteRecommendationUseCase, LikeRecommendationUseCase,
    RetrieveRecommendationUseCase, UpdateRecommendationUseCase,
};
use crate::usecase::reset::ResetRecommendationsUseCase;
use crate::usecase::search::SearchRecommendationsUseCase;

/// A user action on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Create,
    Update,
    Retrieve,
    Delete,
    Search,
    Like,
    Clear,
    Reset,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Create,
        Action::Update,
        Action::Retrieve,
        Action::Delete,
        Action::Search,
        Action::Like,
        Action::Clear,
        Action::Reset,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Retrieve => "retrieve",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::Like => "like",
            Self::Clear => "clear",
            Self::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}

/// Owns the form state and the API client.
///
/// [`execute`](Self::execute) borrows only the client and a snapshot of the
/// fields, so several actions may be in flight at once; outcomes are folded
/// in with [`apply`](Self::apply) in the order they complete.
pub struct FormController<A: RecommendationApi> {
    api: A,
    state: FormState,
}

impl<A: RecommendationApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: FormState::default(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Type into one input. Read-only fields ignore typing.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if field.is_editable() {
            self.state.fields.set(field, value);
        }
    }

    /// Run `action` against `fields` without touching the state.
    pub async fn execute(&self, action: Action, fields: &FormFields) -> Outcome {
        let api = &self.api;
        let outcome = match action {
            Action::Create => {
                Outcome::Created(CreateRecommendationUseCase { api }.execute(fields).await)
            }
            Action::Update => {
                Outcome::Updated(UpdateRecommendationUseCase { api }.execute(fields).await)
            }
            Action::Retrieve => {
                Outcome::Retrieved(RetrieveRecommendationUseCase { api }.execute(fields).await)
            }
            Action::Delete => {
                Outcome::Deleted(DeleteRecommendationUseCase { api }.execute(fields).await)
            }
            Action::Search => {
                Outcome::Searched(SearchRecommendationsUseCase { api }.execute(fields).await)
            }
            Action::Like => Outcome::Liked(LikeRecommendationUseCase { api }.execute(fields).await),
            Action::Clear => Outcome::Cleared,
            Action::Reset => Outcome::Reset(ResetRecommendationsUseCase { api }.execute().await),
        };
        match outcome.error() {
            Some(e) => info!(%action, kind = e.kind(), error = %e, "action failed"),
            None => info!(%action, "action succeeded"),
        }
        outcome
    }

    pub fn apply(&mut self, outcome: Outcome) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(outcome);
    }

    /// Run `action` on the current fields and fold the result into the state.
    pub async fn dispatch(&mut self, action: Action) -> &FormState {
        let fields = self.state.fields.clone();
        let outcome = self.execute(action, &fields).await;
        self.apply(outcome);
        &self.state
    }
}
