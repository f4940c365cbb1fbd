//! Lexical front end for Vole source files.
//!
//! Two independent analyses over one file:
//!
//! - [`classify`]: reduce a [`vole_tokenizer::TokenStream`] into a flat,
//!   ordered sequence of semantically tagged [`Lexeme`]s. No tree, no
//!   validation -- a best-effort re-tagging of the linear token stream.
//! - [`detect`]: infer the file's indentation style (tabs or spaces, and
//!   for spaces the most likely width) from raw source lines with
//!   comments stripped.

mod classifier;
mod indent;
mod lexeme;

pub use classifier::classify;
pub use indent::{detect, Indentation};
pub use lexeme::{Lexeme, LexemeKind};
