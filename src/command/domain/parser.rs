//! Command-line tokenizer and request parser.

use serde::{Deserialize, Serialize};

use super::{AssignArguments, ChangeAction, CommandError, DependArguments, KanbotCommand};

/// A parsed command line: `<signal> <keyword> <args...>`.
///
/// Parsing never checks argument counts; the typed accessors do, so a
/// command with missing arguments is reported instead of indexed blindly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbotRequest {
    command: KanbotCommand,
    args: Vec<String>,
}

impl KanbotRequest {
    /// Builds a request from already tokenized input.
    ///
    /// Token 0 is the signal and is ignored, token 1 selects the command
    /// (missing or unknown keywords select [`KanbotCommand::Help`]), and the
    /// remaining tokens become positional arguments.
    #[must_use]
    pub fn parse(tokens: &[String]) -> Self {
        let command = tokens
            .get(1)
            .map_or(KanbotCommand::Help, |keyword| {
                KanbotCommand::from_keyword(keyword)
            });
        let args = tokens.iter().skip(2).cloned().collect();
        Self { command, args }
    }

    /// Tokenizes and parses a raw command line.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::EmptyInput`] for blank input or
    /// [`CommandError::UnterminatedQuotedValue`] for an unclosed quote.
    pub fn parse_line(raw_input: &str) -> Result<Self, CommandError> {
        let tokens = tokenize(raw_input)?;
        if tokens.is_empty() {
            return Err(CommandError::EmptyInput);
        }
        Ok(Self::parse(&tokens))
    }

    /// Returns the requested command.
    #[must_use]
    pub const fn command(&self) -> KanbotCommand {
        self.command
    }

    /// Returns the positional arguments.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns the single task name taken by `add`, `remove`, `start` and
    /// `complete`.
    ///
    /// Several unquoted words are joined with single spaces.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedCommand`] when no argument was given.
    pub fn task_name(&self) -> Result<String, CommandError> {
        if self.args.is_empty() {
            return Err(self.malformed(1));
        }
        Ok(self.args.join(" "))
    }

    /// Returns the arguments of `assign <task> add|remove <assignee>`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedCommand`] unless exactly three
    /// arguments were given, or [`CommandError::UnrecognizedArgument`] when
    /// the second one is neither `add` nor `remove`.
    pub fn assign_arguments(&self) -> Result<AssignArguments, CommandError> {
        let [task, action, assignee] = self.exactly_three()?;
        Ok(AssignArguments {
            action: ChangeAction::parse(action, self.command, 2)?,
            task: task.clone(),
            assignee: assignee.clone(),
        })
    }

    /// Returns the arguments of `depend add|remove <child> <parent>`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::MalformedCommand`] unless exactly three
    /// arguments were given, or [`CommandError::UnrecognizedArgument`] when
    /// the first one is neither `add` nor `remove`.
    pub fn depend_arguments(&self) -> Result<DependArguments, CommandError> {
        let [action, child, parent] = self.exactly_three()?;
        Ok(DependArguments {
            action: ChangeAction::parse(action, self.command, 1)?,
            child: child.clone(),
            parent: parent.clone(),
        })
    }

    fn exactly_three(&self) -> Result<&[String; 3], CommandError> {
        <&[String; 3]>::try_from(self.args.as_slice()).map_err(|_| self.malformed(3))
    }

    const fn malformed(&self, expected: usize) -> CommandError {
        CommandError::MalformedCommand {
            command: self.command,
            expected,
            found: self.args.len(),
        }
    }
}

/// Splits a command line into whitespace-separated tokens.
///
/// A single or double quote at the start of a token groups words up to the
/// matching quote, and a backslash inside quotes escapes the next character.
/// Quotes inside a word (`don't`) and backslashes outside quotes are kept
/// literally. An empty quoted value (`""`) is kept as an empty token.
///
/// # Errors
///
/// Returns [`CommandError::UnterminatedQuotedValue`] when a quote is left
/// open.
pub fn tokenize(input: &str) -> Result<Vec<String>, CommandError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes: Option<char> = None;
    let mut escaped = false;
    let mut quoted = false;

    for character in input.chars() {
        if let Some(quote_char) = in_quotes {
            if escaped {
                current.push(character);
                escaped = false;
                continue;
            }

            match character {
                '\\' => escaped = true,
                _ if character == quote_char => in_quotes = None,
                _ => current.push(character),
            }
            continue;
        }

        match character {
            '"' | '\'' if current.is_empty() => {
                in_quotes = Some(character);
                quoted = true;
            }
            _ if character.is_whitespace() => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            _ => current.push(character),
        }
    }

    if in_quotes.is_some() || escaped {
        return Err(CommandError::UnterminatedQuotedValue);
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }

    Ok(tokens)
}
