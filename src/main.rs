// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crowdware::application::context::AppContext;
use crowdware::config::settings::Settings;
use crowdware::infrastructure::database::connection;
use crowdware::presentation::routes;
use crowdware::utils::telemetry;
use migration::{Migrator, MigratorTrait};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!("Starting crowdware...");
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    let metrics = if settings.metrics.enabled {
        Some(crowdware::infrastructure::metrics::init_metrics()?)
    } else {
        None
    };

    // 3. Connect to database
    let db = connection::create_pool(&settings.database).await?;
    let db = Arc::new(db);
    info!("Database connection established");

    // Run database migrations
    if settings.database.run_migrations {
        info!("Running database migrations...");
        Migrator::up(db.as_ref(), None).await?;
        info!("Database migrations applied");
    }

    // 4. Wire services and search indices
    let context = AppContext::new(db, &settings.search)?;
    if let Err(e) = context.ensure_indices().await {
        // 索引不可用时仍然启动，搜索与写入请求会返回 5xx
        warn!("Search indices not ready: {}", e);
    }

    // 5. Start HTTP server
    let app = routes::routes(&context, settings.pagination, metrics);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
