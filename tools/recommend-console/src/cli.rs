//! Command-line arguments.
//!
//! Numeric flags are taken as text so the form's own validation applies,
//! exactly as if the values had been typed into the page.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use recommend_domain::recommendation::KNOWN_TYPES;
use recommend_form::controller::Action;
use recommend_form::domain::field::{Field, FormFields};

#[derive(Parser, Debug)]
#[command(about = "Drive the recommendations form from a terminal")]
pub struct Args {
    /// Base URL of the recommendations service (e.g. http://localhost:8888).
    /// Overrides RECOMMENDATIONS_BASE_URL.
    #[arg(long)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

fn type_help() -> String {
    format!("Recommendation type, e.g. {}", KNOWN_TYPES.join(", "))
}

/// Record inputs shared by create, update and search.
#[derive(clap::Args, Debug, Default)]
pub struct RecordArgs {
    #[arg(long)]
    pub product_id: Option<String>,

    #[arg(long)]
    pub recommended_product_id: Option<String>,

    #[arg(long = "type", help = type_help())]
    pub recommendation_type: Option<String>,

    #[arg(long)]
    pub likes: Option<String>,
}

impl RecordArgs {
    fn fill(&self, fields: &mut FormFields) {
        let pairs = [
            (Field::ProductId, &self.product_id),
            (Field::RecommendedProductId, &self.recommended_product_id),
            (Field::RecommendationType, &self.recommendation_type),
            (Field::Likes, &self.likes),
        ];
        for (field, value) in pairs {
            if let Some(v) = value {
                fields.set(field, v.as_str());
            }
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a recommendation
    Create(RecordArgs),
    /// Update the recommendation with the given id
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        record: RecordArgs,
    },
    /// Show one recommendation
    Retrieve {
        #[arg(long)]
        id: String,
    },
    /// Delete one recommendation
    Delete {
        #[arg(long)]
        id: String,
    },
    /// Like one recommendation
    Like {
        #[arg(long)]
        id: String,
    },
    /// List recommendations matching every given filter
    Search(RecordArgs),
    /// Remove every recommendation
    Reset,
    /// Reset, then create every row of a JSON file
    Seed {
        #[arg(long)]
        file: PathBuf,
    },
    /// Interactive session keeping the form between actions
    Shell,
}

impl Command {
    /// The form action and the inputs it runs on, for one-shot commands.
    pub fn form_request(&self) -> Option<(Action, FormFields)> {
        let mut fields = FormFields::default();
        let action = match self {
            Self::Create(record) => {
                record.fill(&mut fields);
                Action::Create
            }
            Self::Update { id, record } => {
                fields.set(Field::RecommendationId, id.as_str());
                record.fill(&mut fields);
                Action::Update
            }
            Self::Retrieve { id } => {
                fields.set(Field::RecommendationId, id.as_str());
                Action::Retrieve
            }
            Self::Delete { id } => {
                fields.set(Field::RecommendationId, id.as_str());
                Action::Delete
            }
            Self::Like { id } => {
                fields.set(Field::RecommendationId, id.as_str());
                Action::Like
            }
            Self::Search(record) => {
                record.fill(&mut fields);
                Action::Search
            }
            Self::Reset => Action::Reset,
            Self::Seed { .. } | Self::Shell => return None,
        };
        Some((action, fields))
    }
}
