use calc_expr::{BuilderConfig, ExprBuilder};
use calc_lexer::{Lexer, LogosClassifier};
use log::info;

use crate::error::CliError;

/// How a session renders the expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    #[default]
    Text,
    Json,
}

const HELP: &str = "commands: :help, :quit, :undo, :clear, :set <expression>, :show";

/// One expression being typed
#[derive(Debug, Clone)]
pub struct Session {
    builder: ExprBuilder,
    mode: OutputMode,
}

impl Session {
    pub fn new(config: BuilderConfig, mode: OutputMode) -> Self {
        Self {
            builder: ExprBuilder::with_config(config),
            mode,
        }
    }

    pub fn builder(&self) -> &ExprBuilder {
        &self.builder
    }

    /// Type every word of `input` as a keystroke. Returns one note per
    /// ignored keystroke.
    pub fn feed(&mut self, input: &str) -> Vec<String> {
        let mut notes = Vec::new();
        for word in Lexer::new(input) {
            let accepted = match word.classify(&LogosClassifier) {
                Some(token) => self.builder.push_token(token),
                None => false,
            };
            if !accepted {
                info!("keystroke {:?} at {} ignored", word.lexeme, word.location);
                notes.push(format!("ignored '{}' at {}", word.lexeme, word.location));
            }
        }
        notes
    }

    /// Render the live and finalized expression
    pub fn render(&self) -> Result<String, CliError> {
        match self.mode {
            OutputMode::Text => Ok(format!(
                "expression: {}\nfinalized:  {}",
                self.builder,
                self.builder.to_finalized_string()
            )),
            OutputMode::Json => Ok(serde_json::to_string_pretty(&self.builder.snapshot())?),
        }
    }

    /// Ctrl-C drops only the line being typed; the expression is kept and
    /// shown again.
    pub fn interrupt(&self) -> Vec<String> {
        match self.render() {
            Ok(text) => text.lines().map(str::to_string).collect(),
            Err(e) => vec![format!("error: {e}")],
        }
    }

    /// Handle one line of interactive input. Returns the lines to print and
    /// whether the session should end.
    pub fn handle_line(&mut self, line: &str) -> (Vec<String>, bool) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return (Vec::new(), false);
        }

        let mut out = Vec::new();
        if let Some(command) = trimmed.strip_prefix(':') {
            let (name, rest) = command
                .split_once(char::is_whitespace)
                .unwrap_or((command, ""));
            match name {
                "help" => return (vec![HELP.to_string()], false),
                "q" | "quit" | "exit" => return (Vec::new(), true),
                "undo" => self.builder.remove_last(),
                "clear" => self.builder.clear(),
                "set" => self.builder.set(Some(rest)),
                "show" => {}
                _ => return (vec![format!("error: unknown command '{trimmed}'")], false),
            }
        } else {
            out.extend(self.feed(trimmed));
        }

        match self.render() {
            Ok(text) => out.extend(text.lines().map(str::to_string)),
            Err(e) => out.push(format!("error: {e}")),
        }
        (out, false)
    }
}
