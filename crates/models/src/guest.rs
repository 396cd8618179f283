//! Guest list domain types.
//!
//! Field names follow the public JSON contract (`conjuge`, `dependentes`) so
//! the same types serve the HTTP payloads, the JSON snapshot file and the
//! conversions to the `convidados` table.
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::ModelError;

/// Someone attending under a guest entry. Only the name and RSVP flag are tracked.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub confirmed: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, confirmed: bool) -> Self {
        Self { name: name.into(), confirmed }
    }
}

/// Root record of the guest list, addressed by its caller-supplied `code`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestEntry {
    pub code: String,
    pub host: Person,
    #[serde(default)]
    pub conjuge: Option<Person>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dependentes: Vec<Person>,
}

impl GuestEntry {
    pub fn new(code: impl Into<String>, host: Person) -> Self {
        Self { code: code.into(), host, conjuge: None, dependentes: Vec::new() }
    }

    pub fn with_conjuge(mut self, conjuge: Person) -> Self {
        self.conjuge = Some(conjuge);
        self
    }

    pub fn with_dependentes(mut self, dependentes: Vec<Person>) -> Self {
        self.dependentes = dependentes;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.code.trim().is_empty() {
            return Err(ModelError::Validation("code must not be empty".into()));
        }
        Ok(())
    }
}

// `"dependentes": null` is accepted and treated like an omitted field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Person>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Person>>::deserialize(deserializer)?.unwrap_or_default())
}
