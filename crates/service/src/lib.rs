//! Service layer for the guest registry.
//! - Separates business rules from storage.
//! - Reuses the domain types and row conversions from the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod guests;
