use thiserror::Error;

use crate::tokenizer::token::Failure;

#[derive(Error, Debug)]
pub enum LexError {
    #[error("Tokenize error: {failure} (stopped at {stopped_at})")]
    Tokenize { failure: Failure, stopped_at: usize },
    // configuration
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

pub type LexResult<T> = Result<T, LexError>;
