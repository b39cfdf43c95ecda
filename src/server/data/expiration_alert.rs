use chrono::NaiveDate;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::ingredient::ExpirationAlert;

pub struct ExpirationAlertRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ExpirationAlertRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Unread alerts of the user whose alert date is on or before `today`.
    pub async fn get_due_unread(
        &self,
        user_id: i32,
        today: NaiveDate,
    ) -> Result<Vec<ExpirationAlert>, DbErr> {
        let rows = entity::prelude::ExpirationAlert::find()
            .filter(entity::expiration_alert::Column::UserId.eq(user_id))
            .filter(entity::expiration_alert::Column::IsRead.eq(false))
            .filter(entity::expiration_alert::Column::AlertDate.lte(today))
            .find_also_related(entity::prelude::Ingredient)
            .order_by_asc(entity::expiration_alert::Column::AlertDate)
            .order_by_asc(entity::expiration_alert::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(alert, ingredient)| ExpirationAlert::from_entity(alert, ingredient))
            .collect())
    }

    /// Marks one of the user's alerts as read.
    ///
    /// # Returns
    /// - `Ok(true)` - Alert updated
    /// - `Ok(false)` - No such alert for this user
    pub async fn mark_read(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ExpirationAlert::update_many()
            .col_expr(entity::expiration_alert::Column::IsRead, Expr::value(true))
            .filter(entity::expiration_alert::Column::Id.eq(id))
            .filter(entity::expiration_alert::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
