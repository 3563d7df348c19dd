use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::{
    error::LexResult,
    tokenizer::keyword::{Keyword, KeywordSet},
};

/// Settings for the highlighting lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,

    #[serde(default = "default_emit_whitespace")]
    pub emit_whitespace: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            emit_whitespace: default_emit_whitespace(),
        }
    }
}

impl LexerConfig {
    pub fn from_json(s: &str) -> LexResult<Self> {
        let config = serde_json::from_str(s)?;
        Ok(config)
    }

    pub fn keyword_set(&self) -> KeywordSet {
        KeywordSet::new(&self.keywords)
    }
}

fn default_keywords() -> Vec<String> {
    Keyword::iter().map(|k| k.to_string()).collect()
}

fn default_emit_whitespace() -> bool {
    true
}
