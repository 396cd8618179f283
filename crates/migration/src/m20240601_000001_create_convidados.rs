//! Create `convidados` table.
//!
//! One row per guest entry, keyed by the caller-supplied code. Spouse columns
//! are nullable together; dependents are kept as a JSON array.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Convidados::Table)
                    .if_not_exists()
                    .col(string(Convidados::Code).primary_key())
                    .col(string(Convidados::HostName).not_null())
                    .col(boolean(Convidados::HostConfirmed).not_null().default(false))
                    .col(string_null(Convidados::ConjugeName))
                    .col(boolean_null(Convidados::ConjugeConfirmed))
                    .col(json_binary(Convidados::Dependentes).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Convidados::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Convidados {
    Table,
    Code,
    HostName,
    HostConfirmed,
    ConjugeName,
    ConjugeConfirmed,
    Dependentes,
}
