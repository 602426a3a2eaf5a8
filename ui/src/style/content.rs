//! Content globs telling the utility-class scanner which files to read.
//!
//! Supported syntax matches what the storefront config uses: `*` within a
//! path segment, `?` for one character, `**` for any number of segments and
//! one level of `{a,b}` alternatives. A leading `./` is ignored on both the
//! pattern and the candidate path.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentPattern {
    raw: String,
    alternatives: Vec<Vec<String>>,
}

impl ContentPattern {
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let alternatives = expand_braces(&raw)
            .map_err(|reason| Error::InvalidPattern {
                pattern: raw.clone(),
                reason,
            })?
            .iter()
            .map(|p| segments(p).map(str::to_string).collect())
            .collect();
        Ok(Self { raw, alternatives })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether a `/`-separated path relative to the config file is scanned.
    pub fn matches(&self, path: &str) -> bool {
        let path: Vec<&str> = segments(path).collect();
        self.alternatives.iter().any(|pattern| {
            let pattern: Vec<&str> = pattern.iter().map(String::as_str).collect();
            match_segments(&pattern, &path)
        })
    }
}

impl fmt::Display for ContentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl TryFrom<String> for ContentPattern {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(value)
    }
}

impl From<ContentPattern> for String {
    fn from(pattern: ContentPattern) -> Self {
        pattern.raw
    }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.trim_start_matches("./")
        .split('/')
        .filter(|s| !s.is_empty() && *s != ".")
}

fn expand_braces(raw: &str) -> std::result::Result<Vec<String>, &'static str> {
    if raw.trim().is_empty() {
        return Err("pattern is empty");
    }
    let Some(open) = raw.find('{') else {
        if raw.contains('}') {
            return Err("unmatched '}'");
        }
        return Ok(vec![raw.to_string()]);
    };
    let close = raw[open..]
        .find('}')
        .map(|i| open + i)
        .ok_or("unmatched '{'")?;
    let (head, group, tail) = (&raw[..open], &raw[open + 1..close], &raw[close + 1..]);
    if group.contains('{') {
        return Err("nested '{' groups are not supported");
    }
    if tail.contains('{') || tail.contains('}') {
        return Err("only one '{...}' group is supported");
    }
    let options: Vec<&str> = group.split(',').collect();
    if options.iter().any(|o| o.is_empty()) {
        return Err("empty alternative in '{...}' group");
    }
    Ok(options
        .into_iter()
        .map(|option| format!("{head}{option}{tail}"))
        .collect())
}

fn match_segments(pattern: &[&str], path: &[&str]) -> bool {
    match pattern.split_first() {
        None => path.is_empty(),
        Some((&"**", rest)) => (0..=path.len()).any(|skip| match_segments(rest, &path[skip..])),
        Some((segment, rest)) => match path.split_first() {
            Some((candidate, path_rest)) => {
                let segment: Vec<char> = segment.chars().collect();
                let candidate: Vec<char> = candidate.chars().collect();
                match_wildcards(&segment, &candidate) && match_segments(rest, path_rest)
            }
            None => false,
        },
    }
}

/// Wildcards work on `char`s so `?` consumes one character, not one byte.
fn match_wildcards(pattern: &[char], text: &[char]) -> bool {
    match pattern.split_first() {
        None => text.is_empty(),
        Some(('*', rest)) => (0..=text.len()).any(|skip| match_wildcards(rest, &text[skip..])),
        Some(('?', rest)) => !text.is_empty() && match_wildcards(rest, &text[1..]),
        Some((c, rest)) => text.first() == Some(c) && match_wildcards(rest, &text[1..]),
    }
}
