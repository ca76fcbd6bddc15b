use crate::domain::oferta::{
    entity::OfertaViagem, errors::DomainError, repository::OfertaRepository,
};
use crate::domain::shared::pagination::PageRequest;
use std::sync::Arc;

/// Paginated offer listing: resolves the 1-based page request into a row
/// window and hands it to the repository. Invalid pages never reach the store.
pub struct ListOfertasUseCase {
    repository: Arc<dyn OfertaRepository>,
}

impl ListOfertasUseCase {
    pub fn new(repository: Arc<dyn OfertaRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: PageRequest) -> Result<Vec<OfertaViagem>, DomainError> {
        let window = request.window()?;
        self.repository.find_page(window).await
    }
}
