use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::recipe::FoodRank;

pub struct FoodRankingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FoodRankingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds one to the dish's counter, creating the row on first use.
    pub async fn increment(&self, food_name: &str) -> Result<FoodRank, DbErr> {
        let now = chrono::Utc::now();
        let txn = self.db.begin().await?;

        let existing = entity::prelude::FoodRanking::find()
            .filter(entity::food_ranking::Column::FoodName.eq(food_name))
            .one(&txn)
            .await?;

        let rank = match existing {
            Some(rank) => {
                let count = rank.count + 1;
                let mut active: entity::food_ranking::ActiveModel = rank.into();
                active.count = ActiveValue::Set(count);
                active.updated_at = ActiveValue::Set(now);
                active.update(&txn).await?
            }
            None => {
                entity::food_ranking::ActiveModel {
                    food_name: ActiveValue::Set(food_name.to_string()),
                    count: ActiveValue::Set(1),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(&txn)
                .await?
            }
        };

        txn.commit().await?;

        Ok(FoodRank::from_entity(rank))
    }

    /// Most requested dishes, highest count first.
    pub async fn top(&self, limit: u64) -> Result<Vec<FoodRank>, DbErr> {
        let rows = entity::prelude::FoodRanking::find()
            .order_by_desc(entity::food_ranking::Column::Count)
            .order_by_asc(entity::food_ranking::Column::FoodName)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(FoodRank::from_entity).collect())
    }
}
