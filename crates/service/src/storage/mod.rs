//! Storage abstractions for service layer
//!
//! Contains the reusable JSON file-backed map store used by the file guest
//! repository.

pub mod json_map_store;
