// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(App::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(App::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(App::Name).string_len(50).not_null())
                    .col(ColumnDef::new(App::Source).string())
                    .col(ColumnDef::new(App::Version).integer())
                    .col(ColumnDef::new(App::UserAppId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_app_user_app_id")
                            .from(App::Table, App::UserAppId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_app_user_app_id")
                    .table(App::Table)
                    .col(App::UserAppId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(App::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum App {
    Table,
    Id,
    Name,
    Source,
    Version,
    UserAppId,
}
