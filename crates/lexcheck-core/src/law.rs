//! Static law corpus and keyword matching.
//!
//! The corpus is reference data: loaded once at startup (from the bundled
//! `data/laws.json` or a file supplied by configuration) and never mutated.
//! Matching is a linear scan: a law matches a proposal when it belongs to the
//! requested jurisdiction and its content contains at least one of the
//! proposal's word tokens as a case-insensitive substring. Tokens follow the
//! ASCII word-character rule, so leading or trailing punctuation yields an
//! empty token, and an empty token matches every law of the jurisdiction.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const BUNDLED_LAWS: &str = include_str!("../data/laws.json");

/// Legal context used to filter the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// European Union.
    #[serde(rename = "EU")]
    Eu,
    /// Belgium.
    #[serde(rename = "BE")]
    Be,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 2] = [Jurisdiction::Eu, Jurisdiction::Be];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Eu => "EU",
            Self::Be => "BE",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown jurisdiction {0:?} (expected EU or BE)")]
pub struct UnknownJurisdiction(pub String);

impl FromStr for Jurisdiction {
    type Err = UnknownJurisdiction;

    /// Exact, case-sensitive match on the two supported codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EU" => Ok(Self::Eu),
            "BE" => Ok(Self::Be),
            other => Err(UnknownJurisdiction(other.to_string())),
        }
    }
}

/// A single law record from the corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Law {
    pub id: String,
    pub jurisdiction: Jurisdiction,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("failed to read law corpus {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid law corpus JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// In-memory, read-only collection of law records.
#[derive(Debug)]
pub struct LawCorpus {
    laws: Vec<Law>,
    /// Lowercased `content` of each law, index-aligned with `laws`.
    folded: Vec<String>,
}

impl LawCorpus {
    pub fn new(laws: Vec<Law>) -> Self {
        let folded = laws.iter().map(|law| law.content.to_lowercase()).collect();
        Self { laws, folded }
    }

    /// The corpus compiled into the binary.
    pub fn bundled() -> Result<Self, CorpusError> {
        Self::from_json(BUNDLED_LAWS)
    }

    /// Parse a corpus from a JSON array of law records.
    pub fn from_json(json: &str) -> Result<Self, CorpusError> {
        let laws: Vec<Law> = serde_json::from_str(json)?;
        Ok(Self::new(laws))
    }

    /// Load a corpus file with the same shape as the bundled one.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let json = std::fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let corpus = Self::from_json(&json)?;
        debug!(path = %path.display(), laws = corpus.len(), "loaded law corpus");
        Ok(corpus)
    }

    pub fn len(&self) -> usize {
        self.laws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laws.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Law> {
        self.laws.iter()
    }

    /// Every law of `jurisdiction` whose content contains any token of `text`.
    ///
    /// Results keep corpus order. No ranking and no stemming: short common
    /// tokens such as "a" or "of" match most records, and the empty token
    /// from surrounding punctuation matches all of them.
    pub fn search(&self, text: &str, jurisdiction: Jurisdiction) -> Vec<&Law> {
        let tokens = tokenize(text);
        self.laws
            .iter()
            .zip(&self.folded)
            .filter(|(law, content)| {
                law.jurisdiction == jurisdiction
                    && tokens.iter().any(|token| content.contains(token.as_str()))
            })
            .map(|(law, _)| law)
            .collect()
    }
}

/// Split text into lowercase word tokens.
///
/// Any run of characters outside `[A-Za-z0-9_]` separates tokens, so
/// accented letters split a word ("données" gives "donn" and "es"). Empty
/// tokens at either end are kept: "Ban cameras." gives `["ban", "cameras", ""]`.
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = vec![String::new()];
    let mut in_separator = false;
    for c in text.to_lowercase().chars() {
        if !is_word_char(c) {
            in_separator = true;
            continue;
        }
        if in_separator {
            tokens.push(String::new());
            in_separator = false;
        }
        if let Some(token) = tokens.last_mut() {
            token.push(c);
        }
    }
    if in_separator {
        tokens.push(String::new());
    }
    tokens
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
