//! Translates SQLCMD scripts into plain SQL.
//!
//! `:setvar` lines define variables, `$(name)` tokens in the following lines
//! are replaced by their values, and every other `:` directive is dropped.

pub mod directive;
pub mod translator;

pub use translator::{translate_file, Summary, TranslateError, Translator, Variables};
