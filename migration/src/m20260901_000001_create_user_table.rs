use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_len_uniq(User::Email, 128))
                    .col(string(User::Password))
                    .col(string_len(User::Name, 20))
                    .col(string_len_uniq(User::Nickname, 40))
                    .col(date(User::Birth))
                    .col(string_len_null(User::Gender, 16))
                    .col(string_len_null(User::PhoneNum, 64).unique_key())
                    .col(string_len(User::SocialAuth, 16).default("none"))
                    .col(string_null(User::SocialId))
                    .col(string_len(User::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_users_social")
                    .table(User::Table)
                    .col(User::SocialAuth)
                    .col(User::SocialId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Email,
    Password,
    Name,
    Nickname,
    Birth,
    Gender,
    PhoneNum,
    SocialAuth,
    SocialId,
    Status,
    CreatedAt,
}
