use crate::{config::Config, domain::oferta::repository::OfertaRepository};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub oferta_repo: Arc<dyn OfertaRepository>,
}
