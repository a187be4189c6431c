//! Lexical analysis module for the cwscript front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, type names, literals, and operators
//! - Doc comments (`///` lines and `/** */` blocks), kept in the stream
//! - Token position tracking (offset and line) for error reporting
//! - Plain comments and whitespace
//!
//! Lexing is error-recovering: bad input produces an error and a resumed
//! scan, never an aborted one.

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
