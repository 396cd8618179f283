use async_trait::async_trait;
use models::{convidado, GuestEntry};
use sea_orm::{
    sea_query::OnConflict, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::debug;

use crate::errors::ServiceError;
use crate::guests::repository::GuestRepository;

/// SeaORM-backed repository over the `convidados` table.
pub struct SeaOrmGuestRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmGuestRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_entry(row: convidado::Model) -> Result<GuestEntry, ServiceError> {
    GuestEntry::try_from(row).map_err(ServiceError::from)
}

#[async_trait]
impl GuestRepository for SeaOrmGuestRepository {
    async fn create(&self, entry: GuestEntry) -> Result<(), ServiceError> {
        // ON CONFLICT DO NOTHING folds the duplicate check into the insert
        let am = convidado::ActiveModel::from(&entry);
        let inserted = convidado::Entity::insert(am)
            .on_conflict(OnConflict::column(convidado::Column::Code).do_nothing().to_owned())
            .exec_without_returning(&self.db)
            .await?;
        if inserted == 0 {
            return Err(ServiceError::conflict());
        }
        debug!(code = %entry.code, "guest row inserted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<GuestEntry>, ServiceError> {
        let rows = convidado::Entity::find()
            .order_by_asc(convidado::Column::Code)
            .all(&self.db)
            .await?;
        rows.into_iter().map(to_entry).collect()
    }

    async fn get(&self, code: &str) -> Result<Option<GuestEntry>, ServiceError> {
        let row = convidado::Entity::find_by_id(code.to_string()).one(&self.db).await?;
        row.map(to_entry).transpose()
    }

    async fn update(&self, entry: GuestEntry) -> Result<(), ServiceError> {
        let mut am = convidado::ActiveModel::from(&entry);
        am.code = NotSet;
        let res = convidado::Entity::update_many()
            .set(am)
            .filter(convidado::Column::Code.eq(entry.code.as_str()))
            .exec(&self.db)
            .await?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found());
        }
        debug!(code = %entry.code, "guest row updated");
        Ok(())
    }
}
