use super::entity::OfertaViagem;
use super::errors::DomainError;
use super::value_objects::{Periodo, Rota};
use crate::domain::shared::pagination::PageWindow;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OfertaRepository: Send + Sync {
    /// Persists a new offer, allocating its identifier, and returns the stored entity.
    async fn create(
        &self,
        preco: f64,
        rota: Rota,
        periodo: Periodo,
    ) -> Result<OfertaViagem, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<OfertaViagem>, DomainError>;

    /// Returns the offers inside `window`, ordered by id ascending.
    async fn find_page(&self, window: PageWindow) -> Result<Vec<OfertaViagem>, DomainError>;

    async fn count(&self) -> Result<i64, DomainError>;

    /// Replaces the mutable fields of an existing offer. `NotFound` if the id is unknown.
    async fn update(&self, oferta: &OfertaViagem) -> Result<(), DomainError>;

    /// Removes an offer. `NotFound` if the id is unknown.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
