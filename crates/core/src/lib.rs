//! Domain logic for the trivia service.
//!
//! This crate has no I/O: it owns the error taxonomy, pagination, quiz
//! question selection, search-term handling, question validation, and the
//! [`filter::QuestionFilter`] specification that the persistence layer
//! renders into SQL.

pub mod error;
pub mod filter;
pub mod lenient;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod search;
pub mod types;
