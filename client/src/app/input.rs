//! Terminal input parser
//!
//! Each line read from the terminal is text typed into the draft followed
//! by a key press. A plain line is the commit key: the text is added and
//! the draft is sent. A line ending in `\` is the commit key with the
//! modifier held: the text and a line break are added, nothing is sent.
//! Lines starting with `/` are commands; `//` escapes a leading slash.
//!
//! Commands that act on an entry take either its display position (`2`)
//! or its share id as shown in the feed (`#7`). Positions move whenever
//! the feed refreshes; ids do not.

use std::path::PathBuf;

use crate::domain::entities::ShareId;
use crate::error::ParseError;

/// How a command names a feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRef {
    /// 1-based position in the displayed feed
    Position(usize),
    /// Server id, written `#id`
    Id(ShareId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Typed text followed by the commit key (text may be empty)
    Commit(String),
    /// Typed text followed by modifier + commit key
    LineBreak(String),
    Send,
    SelectFile(PathBuf),
    ClearFile,
    ClearText,
    ShowDraft,
    Copy(EntryRef),
    Delete(EntryRef),
    Save(EntryRef, PathBuf),
    Refresh,
    Help,
    Quit,
}

pub fn parse_input(line: &str) -> Result<InputEvent, ParseError> {
    let line = line.trim_end_matches(['\n', '\r']);

    if let Some(escaped) = line.strip_prefix("//") {
        return Ok(typed(format!("/{}", escaped)));
    }

    match line.strip_prefix('/') {
        Some(command) => parse_command(command),
        None => Ok(typed(line.to_string())),
    }
}

fn typed(text: String) -> InputEvent {
    match text.strip_suffix('\\') {
        Some(text) => InputEvent::LineBreak(text.to_string()),
        None => InputEvent::Commit(text),
    }
}

fn parse_command(command: &str) -> Result<InputEvent, ParseError> {
    let command = command.trim();
    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command, ""),
    };

    match name.to_lowercase().as_str() {
        "send" => Ok(InputEvent::Send),
        "file" => Ok(InputEvent::SelectFile(PathBuf::from(required(name, rest)?))),
        "unfile" => Ok(InputEvent::ClearFile),
        "cleartext" => Ok(InputEvent::ClearText),
        "draft" => Ok(InputEvent::ShowDraft),
        "copy" => Ok(InputEvent::Copy(parse_entry(required(name, rest)?)?)),
        "delete" | "rm" => Ok(InputEvent::Delete(parse_entry(required(name, rest)?)?)),
        "save" => {
            let (entry, path) = required(name, rest)?
                .split_once(char::is_whitespace)
                .ok_or_else(|| ParseError::MissingArgument("save <path>".to_string()))?;
            Ok(InputEvent::Save(
                parse_entry(entry)?,
                PathBuf::from(path.trim()),
            ))
        }
        "refresh" => Ok(InputEvent::Refresh),
        "help" | "?" => Ok(InputEvent::Help),
        "quit" | "exit" | "q" => Ok(InputEvent::Quit),
        _ => Err(ParseError::UnknownCommand(name.to_string())),
    }
}

fn required<'a>(command: &str, rest: &'a str) -> Result<&'a str, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(command.to_string()))
    } else {
        Ok(rest)
    }
}

fn parse_entry(raw: &str) -> Result<EntryRef, ParseError> {
    let raw = raw.trim();
    let invalid = || ParseError::InvalidIndex(raw.to_string());

    match raw.strip_prefix('#') {
        Some(id) => id
            .parse::<i64>()
            .map(|id| EntryRef::Id(ShareId(id)))
            .map_err(|_| invalid()),
        None => match raw.parse::<usize>() {
            Ok(n) if n >= 1 => Ok(EntryRef::Position(n)),
            _ => Err(invalid()),
        },
    }
}
