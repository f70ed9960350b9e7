//! Domain entities exposed by the contacts service layer.

pub mod contact;
pub mod types;
