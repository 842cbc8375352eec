use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use gemval_core::{
    catalog::{CatalogService, CatalogServiceTrait},
    details::{RecordDetailService, RecordDetailServiceTrait},
    receipts::{ReceiptService, ReceiptServiceTrait},
    records::{RecordRepositoryTrait, RecordService, RecordServiceTrait},
    users::{UserService, UserServiceTrait},
};
use gemval_storage_sqlite::{
    catalog::CatalogRepository, db, receipts::ReceiptRepository, records::RecordRepository,
    users::UserRepository,
};

pub struct AppState {
    pub record_service: Arc<dyn RecordServiceTrait>,
    pub detail_service: Arc<dyn RecordDetailServiceTrait>,
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub receipt_service: Arc<dyn ReceiptServiceTrait>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let pool = db::create_pool(&config.db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let receipt_repository = Arc::new(ReceiptRepository::new(pool.clone()));
    let receipt_service: Arc<dyn ReceiptServiceTrait> =
        Arc::new(ReceiptService::new(receipt_repository));

    let catalog_repository = Arc::new(CatalogRepository::new(pool.clone()));
    let catalog_service: Arc<dyn CatalogServiceTrait> =
        Arc::new(CatalogService::new(catalog_repository));

    let user_repository = Arc::new(UserRepository::new(pool.clone()));
    let user_service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(user_repository));

    let record_repository: Arc<dyn RecordRepositoryTrait> =
        Arc::new(RecordRepository::new(pool.clone(), writer.clone()));
    let record_service: Arc<dyn RecordServiceTrait> = Arc::new(RecordService::new(
        record_repository.clone(),
        receipt_service.clone(),
    ));

    let detail_service: Arc<dyn RecordDetailServiceTrait> = Arc::new(RecordDetailService::new(
        record_repository,
        catalog_service.clone(),
        user_service.clone(),
        receipt_service.clone(),
    ));

    Ok(Arc::new(AppState {
        record_service,
        detail_service,
        catalog_service,
        user_service,
        receipt_service,
    }))
}
