//! DTOs that bridge services with the JSON API.

pub mod contacts;
