//! Domain logic for the atelier portfolio site.
//!
//! Pure, I/O-free building blocks shared by the database and API crates:
//! common type aliases, the domain error type, project category
//! classification, and upload naming.

pub mod category;
pub mod error;
pub mod types;
pub mod upload;
