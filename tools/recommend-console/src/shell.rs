//! Interactive session: one form kept across actions, the way the page keeps
//! its inputs between button clicks.

use std::io::Write;

use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use recommend_domain::recommendation::KNOWN_TYPES;
use recommend_form::controller::{Action, FormController, UnknownAction};
use recommend_form::domain::field::{Field, UnknownField};
use recommend_form::domain::port::RecommendationApi;

use crate::reporter;

const HELP: &str = "\
commands:
  set <field> <value>   type into a field (value is the rest of the line)
  unset <field>         empty a field
  show                  print the form and last results
  create | update | retrieve | delete | search | like | clear | reset
  help                  this text
  quit                  leave
fields: recommendation_id product_id recommended_product_id recommendation_type likes";

fn help_text() -> String {
    format!("{HELP}\ntypes: {}", KNOWN_TYPES.join(" "))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Set(Field, String),
    Unset(Field),
    Show,
    Run(Action),
    Help,
    Quit,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown command: {0} (try `help`)")]
    UnknownCommand(String),
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error("{0} is read-only")]
    ReadOnly(Field),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
}

fn parse_field(word: Option<&str>, command: &'static str) -> Result<Field, ParseError> {
    let field: Field = word.ok_or(ParseError::MissingArgument(command))?.parse()?;
    if !field.is_editable() {
        return Err(ParseError::ReadOnly(field));
    }
    Ok(field)
}

pub fn parse_line(line: &str) -> Result<ShellCommand, ParseError> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim_start();
    match word {
        "" => Ok(ShellCommand::Empty),
        "set" => {
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let name = (!name.is_empty()).then_some(name);
            let field = parse_field(name, "set")?;
            Ok(ShellCommand::Set(field, value.trim_start().to_owned()))
        }
        "unset" => {
            let name = (!rest.is_empty()).then_some(rest);
            Ok(ShellCommand::Unset(parse_field(name, "unset")?))
        }
        "show" => Ok(ShellCommand::Show),
        "help" | "?" => Ok(ShellCommand::Help),
        "quit" | "exit" => Ok(ShellCommand::Quit),
        other => other
            .parse::<Action>()
            .map(ShellCommand::Run)
            .map_err(|UnknownAction(name)| ParseError::UnknownCommand(name)),
    }
}

/// Read commands from `input` until `quit` or end of input.
pub async fn run<A, R, W>(controller: &mut FormController<A>, input: R, out: &mut W) -> Result<()>
where
    A: RecommendationApi,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    write!(out, "> ")?;
    out.flush()?;
    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(ShellCommand::Quit) => break,
            Ok(ShellCommand::Empty) => {}
            Ok(ShellCommand::Help) => writeln!(out, "{}", help_text())?,
            Ok(ShellCommand::Show) => write!(out, "{}", reporter::render_state(controller.state()))?,
            Ok(ShellCommand::Set(field, value)) => controller.set_field(field, value),
            Ok(ShellCommand::Unset(field)) => controller.set_field(field, ""),
            Ok(ShellCommand::Run(action)) => {
                let state = controller.dispatch(action).await;
                write!(out, "{}", reporter::render(action, state))?;
            }
            Err(e) => writeln!(out, "{e}")?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}
