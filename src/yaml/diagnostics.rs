//! YAML error diagnostics for car documents

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::entities::PartType;

/// YAML syntax or shape error with source location
#[derive(Debug, Error, Diagnostic)]
#[error("invalid car document: {message}")]
#[diagnostic(code(partcheck::yaml::syntax))]
pub struct YamlSyntaxError {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    #[help]
    help: Option<String>,

    message: String,
}

impl YamlSyntaxError {
    /// Build a diagnostic from a serde_yml error against the source it came from
    pub fn from_serde_error(err: &serde_yml::Error, source: &str, filename: &str) -> Self {
        let reported = err
            .location()
            .map(|loc| line_col_to_offset(source, loc.line(), loc.column()));

        let message = err.to_string();
        let offset = quoted_token(&message)
            .and_then(|token| find_token(source, token, reported.unwrap_or(0)))
            .or(reported)
            .unwrap_or(0);

        let help = generate_help(&message);
        Self::at(message, source, filename, offset, help)
    }

    fn at(message: String, source: &str, filename: &str, offset: usize, help: Option<String>) -> Self {
        Self {
            src: NamedSource::new(filename, source.to_string()),
            span: SourceSpan::from(offset..offset.saturating_add(1).min(source.len().max(1))),
            help,
            message,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// Byte offset of a 1-based line/column, clamped to the source
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();

    let line_text = source[line_start..].split('\n').next().unwrap_or("");
    let column_offset = line_text
        .char_indices()
        .nth(column.saturating_sub(1))
        .map(|(i, _)| i)
        .unwrap_or(line_text.len());

    (line_start + column_offset).min(source.len())
}

/// First backtick-quoted value in a serde message, e.g. `NOPE` in
/// "unknown variant `NOPE`, expected one of ..."
fn quoted_token(message: &str) -> Option<&str> {
    let start = message.find('`')? + 1;
    let len = message[start..].find('`')?;
    Some(&message[start..start + len]).filter(|t| !t.is_empty())
}

/// Offset of `token` as a whole word, preferring occurrences at or after `from`
fn find_token(source: &str, token: &str, from: usize) -> Option<usize> {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let matches_at = |i: usize| {
        let before = source[..i].chars().next_back().map_or(true, |c| !is_word(c));
        let after = source[i + token.len()..].chars().next().map_or(true, |c| !is_word(c));
        before && after
    };

    let occurrences: Vec<usize> = source
        .match_indices(token)
        .map(|(i, _)| i)
        .filter(|&i| matches_at(i))
        .collect();

    occurrences
        .iter()
        .copied()
        .find(|&i| i >= from)
        .or_else(|| occurrences.first().copied())
}

/// Suggest a fix for common mistakes in car documents
fn generate_help(message: &str) -> Option<String> {
    let msg_lower = message.to_lowercase();

    if msg_lower.contains("unknown variant") {
        let types: Vec<&str> = PartType::ALL.iter().map(|t| t.as_str()).collect();
        return Some(format!(
            "Part types are {}. Conditions are NEW, GOOD, WORN, USED, DAMAGED, BROKEN, SALVAGE.",
            types.join(", ")
        ));
    }

    if msg_lower.contains("missing field `type`") {
        return Some("Every entry under `parts` needs a `type`, e.g. `- type: TIRE`".to_string());
    }

    if msg_lower.contains("tab") {
        return Some("YAML requires spaces for indentation, not tabs.".to_string());
    }

    if msg_lower.contains("duplicate") {
        return Some("Each key can only appear once per mapping.".to_string());
    }

    if msg_lower.contains("invalid type: map") || msg_lower.contains("expected a sequence") {
        return Some("`parts` must be a list: start each part with `- `".to_string());
    }

    None
}
