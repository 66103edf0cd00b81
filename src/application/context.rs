// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SearchSettings;
use crate::domain::models::app::App;
use crate::domain::models::crowd_app::CrowdApp;
use crate::domain::models::job::Job;
use crate::domain::models::job_attribute::JobAttribute;
use crate::domain::models::payment::Payment;
use crate::domain::models::task::Task;
use crate::domain::models::DomainEntity;
use crate::domain::repositories::entity_repository::EntityRepository;
use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::search::index::SearchError;
use crate::domain::services::entity_service::{EntityService, ServiceError};
use crate::infrastructure::repositories::app_repo_impl::AppRepoImpl;
use crate::infrastructure::repositories::crowd_app_repo_impl::CrowdAppRepoImpl;
use crate::infrastructure::repositories::job_attribute_repo_impl::JobAttributeRepoImpl;
use crate::infrastructure::repositories::job_repo_impl::JobRepoImpl;
use crate::infrastructure::repositories::payment_repo_impl::PaymentRepoImpl;
use crate::infrastructure::repositories::task_repo_impl::TaskRepoImpl;
use crate::infrastructure::repositories::user_repo_impl::UserRepoImpl;
use crate::infrastructure::search::factory::SearchRepositoryFactory;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::info;

/// 应用上下文
///
/// 持有数据库连接、用户仓库和六个实体服务，由 `main` 和集成测试共同使用。
#[derive(Clone)]
pub struct AppContext {
    pub db: Arc<DatabaseConnection>,
    pub users: Arc<dyn UserRepository>,
    pub apps: Arc<EntityService<App>>,
    pub crowd_apps: Arc<EntityService<CrowdApp>>,
    pub jobs: Arc<EntityService<Job>>,
    pub job_attributes: Arc<EntityService<JobAttribute>>,
    pub tasks: Arc<EntityService<Task>>,
    pub payments: Arc<EntityService<Payment>>,
}

impl AppContext {
    /// 按搜索配置装配所有服务
    pub fn new(db: Arc<DatabaseConnection>, search: &SearchSettings) -> Result<Self, SearchError> {
        let factory = SearchRepositoryFactory::new(search)?;

        Ok(Self {
            users: Arc::new(UserRepoImpl::new(db.clone())),
            apps: service::<App>(Arc::new(AppRepoImpl::new(db.clone())), &factory)?,
            crowd_apps: service::<CrowdApp>(
                Arc::new(CrowdAppRepoImpl::new(db.clone())),
                &factory,
            )?,
            jobs: service::<Job>(Arc::new(JobRepoImpl::new(db.clone())), &factory)?,
            job_attributes: service::<JobAttribute>(
                Arc::new(JobAttributeRepoImpl::new(db.clone())),
                &factory,
            )?,
            tasks: service::<Task>(Arc::new(TaskRepoImpl::new(db.clone())), &factory)?,
            payments: service::<Payment>(
                Arc::new(PaymentRepoImpl::new(db.clone())),
                &factory,
            )?,
            db,
        })
    }

    /// 确保所有实体的索引存在
    pub async fn ensure_indices(&self) -> Result<(), ServiceError> {
        self.apps.ensure_index().await?;
        self.crowd_apps.ensure_index().await?;
        self.jobs.ensure_index().await?;
        self.job_attributes.ensure_index().await?;
        self.tasks.ensure_index().await?;
        self.payments.ensure_index().await?;
        info!("Search indices ready");
        Ok(())
    }
}

fn service<E: DomainEntity>(
    repository: Arc<dyn EntityRepository<E>>,
    factory: &SearchRepositoryFactory,
) -> Result<Arc<EntityService<E>>, SearchError> {
    Ok(Arc::new(EntityService::new(repository, factory.create::<E>()?)))
}
