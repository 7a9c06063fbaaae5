//! Domain model structs and DTOs.
//!
//! - `category`: the `Category` row.
//! - `question`: the `Question` row, the validated `CreateQuestion` insert
//!   input, and the `Deserialize` bodies of the create and search requests.
//! - `quiz`: the `Deserialize` body of a quiz round request; it has no row.

pub mod category;
pub mod question;
pub mod quiz;
