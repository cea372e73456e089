//! Formats form state for the terminal.

use recommend_form::controller::Action;
use recommend_form::domain::state::{Flash, FlashLevel, FormState};
use recommend_form::render::{form_text, results_table_text};

fn flash_line(flash: &Flash) -> String {
    match flash.level {
        FlashLevel::Success => format!("OK     {}", flash.message),
        FlashLevel::Error => format!("ERROR  {}", flash.message),
    }
}

/// Output after `action` ran: the flash, then whatever the action changed.
pub fn render(action: Action, state: &FormState) -> String {
    let mut out = String::new();
    if let Some(flash) = &state.flash {
        out.push_str(&flash_line(flash));
        out.push('\n');
    }
    if state.has_error() {
        return out;
    }
    match action {
        Action::Create | Action::Update | Action::Retrieve | Action::Like => {
            out.push_str(&form_text(&state.fields));
            out.push('\n');
        }
        Action::Search => {
            if let Some(rows) = &state.results {
                out.push_str(&results_table_text(rows));
                out.push('\n');
            }
        }
        Action::Delete | Action::Clear | Action::Reset => {}
    }
    out
}

/// The whole page: flash, form, and the last results table if any.
pub fn render_state(state: &FormState) -> String {
    let mut out = String::new();
    if let Some(flash) = &state.flash {
        out.push_str(&flash_line(flash));
        out.push('\n');
    }
    out.push_str(&form_text(&state.fields));
    out.push('\n');
    if let Some(rows) = &state.results {
        out.push('\n');
        out.push_str(&results_table_text(rows));
        out.push('\n');
    }
    out
}
