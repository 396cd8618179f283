use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::guest::{GuestEntry, Person};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "convidados")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub host_name: String,
    pub host_confirmed: bool,
    pub conjuge_name: Option<String>,
    pub conjuge_confirmed: Option<bool>,
    #[sea_orm(column_type = "JsonBinary")]
    pub dependentes: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

fn person_json(p: &Person) -> Json {
    serde_json::json!({ "name": p.name, "confirmed": p.confirmed })
}

impl From<&GuestEntry> for ActiveModel {
    fn from(entry: &GuestEntry) -> Self {
        ActiveModel {
            code: Set(entry.code.clone()),
            host_name: Set(entry.host.name.clone()),
            host_confirmed: Set(entry.host.confirmed),
            conjuge_name: Set(entry.conjuge.as_ref().map(|p| p.name.clone())),
            conjuge_confirmed: Set(entry.conjuge.as_ref().map(|p| p.confirmed)),
            dependentes: Set(Json::Array(entry.dependentes.iter().map(person_json).collect())),
        }
    }
}

impl TryFrom<Model> for GuestEntry {
    type Error = ModelError;

    fn try_from(row: Model) -> Result<Self, Self::Error> {
        // spouse columns are written together; a null confirmation reads as false
        let conjuge = row
            .conjuge_name
            .map(|name| Person { name, confirmed: row.conjuge_confirmed.unwrap_or(false) });
        let dependentes = serde_json::from_value::<Option<Vec<Person>>>(row.dependentes)
            .map_err(|e| ModelError::Decode(format!("convidados.dependentes for '{}': {e}", row.code)))?
            .unwrap_or_default();
        Ok(GuestEntry {
            code: row.code,
            host: Person { name: row.host_name, confirmed: row.host_confirmed },
            conjuge,
            dependentes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn row_of(am: ActiveModel) -> Model {
        fn take<T: Into<sea_orm::Value>>(v: ActiveValue<T>) -> T {
            match v {
                ActiveValue::Set(x) | ActiveValue::Unchanged(x) => x,
                ActiveValue::NotSet => panic!("column not set"),
            }
        }
        Model {
            code: take(am.code),
            host_name: take(am.host_name),
            host_confirmed: take(am.host_confirmed),
            conjuge_name: take(am.conjuge_name),
            conjuge_confirmed: take(am.conjuge_confirmed),
            dependentes: take(am.dependentes),
        }
    }

    #[test]
    fn row_round_trip_full_entry() {
        let entry = GuestEntry::new("A1", Person::new("Ana", true))
            .with_conjuge(Person::new("Bob", false))
            .with_dependentes(vec![Person::new("Cris", true)]);
        let row = row_of(ActiveModel::from(&entry));
        assert_eq!(row.conjuge_name.as_deref(), Some("Bob"));
        assert_eq!(row.dependentes, serde_json::json!([{"name": "Cris", "confirmed": true}]));
        assert_eq!(GuestEntry::try_from(row).unwrap(), entry);
    }

    #[test]
    fn row_round_trip_without_spouse_or_dependents() {
        let entry = GuestEntry::new("A2", Person::new("Ana", false));
        let row = row_of(ActiveModel::from(&entry));
        assert!(row.conjuge_name.is_none());
        assert!(row.conjuge_confirmed.is_none());
        assert_eq!(row.dependentes, serde_json::json!([]));
        assert_eq!(GuestEntry::try_from(row).unwrap(), entry);
    }

    #[test]
    fn null_dependents_column_reads_as_empty() {
        let row = Model {
            code: "A3".into(),
            host_name: "Ana".into(),
            host_confirmed: false,
            conjuge_name: None,
            conjuge_confirmed: None,
            dependentes: Json::Null,
        };
        assert!(GuestEntry::try_from(row).unwrap().dependentes.is_empty());
    }

    #[test]
    fn malformed_dependents_column_is_a_decode_error() {
        let row = Model {
            code: "A4".into(),
            host_name: "Ana".into(),
            host_confirmed: false,
            conjuge_name: None,
            conjuge_confirmed: None,
            dependentes: serde_json::json!({"not": "a list"}),
        };
        assert!(matches!(GuestEntry::try_from(row), Err(ModelError::Decode(_))));
    }
}
