// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users;
mod m20240101_000002_create_app;
mod m20240101_000003_create_crowd_app;
mod m20240101_000004_create_job;
mod m20240101_000005_create_job_attribute;
mod m20240101_000006_create_task;
mod m20240101_000007_create_payment;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表，按依赖顺序排列（外键目标表在前）
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users::Migration),
            Box::new(m20240101_000002_create_app::Migration),
            Box::new(m20240101_000003_create_crowd_app::Migration),
            Box::new(m20240101_000004_create_job::Migration),
            Box::new(m20240101_000005_create_job_attribute::Migration),
            Box::new(m20240101_000006_create_task::Migration),
            Box::new(m20240101_000007_create_payment::Migration),
        ]
    }
}
