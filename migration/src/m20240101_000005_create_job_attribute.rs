// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use super::m20240101_000004_create_job::Job;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobAttribute::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobAttribute::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobAttribute::Name).string().not_null())
                    .col(ColumnDef::new(JobAttribute::Value).string())
                    .col(ColumnDef::new(JobAttribute::JobId).big_integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_attribute_job_id")
                            .from(JobAttribute::Table, JobAttribute::JobId)
                            .to(Job::Table, Job::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobAttribute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobAttribute {
    Table,
    Id,
    Name,
    Value,
    JobId,
}
