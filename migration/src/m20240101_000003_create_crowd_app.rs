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
                    .table(CrowdApp::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CrowdApp::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CrowdApp::Name).string_len(50).not_null())
                    .col(ColumnDef::new(CrowdApp::Version).integer())
                    // source code of the app, unbounded
                    .col(ColumnDef::new(CrowdApp::Source).text())
                    .col(ColumnDef::new(CrowdApp::UserId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_crowd_app_user_id")
                            .from(CrowdApp::Table, CrowdApp::UserId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_crowd_app_user_id")
                    .table(CrowdApp::Table)
                    .col(CrowdApp::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CrowdApp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CrowdApp {
    Table,
    Id,
    Name,
    Version,
    Source,
    UserId,
}
