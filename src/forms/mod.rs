//! Request bodies accepted by the write endpoints.

pub mod contact;
