use crate::domain::oferta::{
    entity::OfertaViagem,
    errors::DomainError,
    repository::OfertaRepository,
    value_objects::{Periodo, Rota},
};
use crate::domain::shared::pagination::PageWindow;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error, info, instrument};

#[derive(FromRow)]
struct OfertaRow {
    id: i64,
    preco: f64,
    origem: String,
    destino: String,
    ida: NaiveDate,
    volta: NaiveDate,
}

impl From<OfertaRow> for OfertaViagem {
    fn from(r: OfertaRow) -> Self {
        OfertaViagem {
            id: r.id,
            preco: r.preco,
            rota: Rota {
                origem: r.origem,
                destino: r.destino,
            },
            periodo: Periodo {
                ida: r.ida,
                volta: r.volta,
            },
        }
    }
}

pub struct SqlxOfertaRepository {
    pub pool: PgPool,
}

impl SqlxOfertaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Allocates the next offer identifier from the dedicated sequence.
    ///
    /// Id allocation is an explicit repository step rather than a side effect
    /// of the insert, so the caller gets the identity before the row exists.
    async fn next_id(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT nextval('ofertas_viagem_id_seq')")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to allocate offer id: {}", e);
                DomainError::InfrastructureError(format!("Failed to allocate offer id: {}", e))
            })
    }
}

#[async_trait]
impl OfertaRepository for SqlxOfertaRepository {
    #[instrument(skip(self, rota, periodo), fields(origem = %rota.origem, destino = %rota.destino))]
    async fn create(
        &self,
        preco: f64,
        rota: Rota,
        periodo: Periodo,
    ) -> Result<OfertaViagem, DomainError> {
        let id = self.next_id().await?;

        sqlx::query(
            r#"INSERT INTO ofertas_viagem (id, preco, origem, destino, ida, volta)
               VALUES ($1, $2, $3, $4, $5, $6)"#,
        )
        .bind(id)
        .bind(preco)
        .bind(&rota.origem)
        .bind(&rota.destino)
        .bind(periodo.ida)
        .bind(periodo.volta)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to create offer {}: {}", id, e);
            DomainError::InfrastructureError(format!("Failed to create offer: {}", e))
        })?;

        info!("Created offer {} ({} -> {})", id, rota.origem, rota.destino);
        Ok(OfertaViagem {
            id,
            preco,
            rota,
            periodo,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OfertaViagem>, DomainError> {
        let row = sqlx::query_as::<_, OfertaRow>(
            "SELECT id, preco, origem, destino, ida, volta FROM ofertas_viagem WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;
        Ok(row.map(OfertaViagem::from))
    }

    /// Fetches one page of offers ordered by id, which matches insertion
    /// order, so repeated calls without intervening writes see the same rows.
    #[instrument(skip(self))]
    async fn find_page(&self, window: PageWindow) -> Result<Vec<OfertaViagem>, DomainError> {
        let rows = sqlx::query_as::<_, OfertaRow>(
            r#"SELECT id, preco, origem, destino, ida, volta
               FROM ofertas_viagem
               ORDER BY id ASC
               LIMIT $1 OFFSET $2"#,
        )
        .bind(window.limit)
        .bind(window.offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(
                "Failed to fetch offers with limit {} offset {}: {}",
                window.limit, window.offset, e
            );
            DomainError::InfrastructureError(format!("Failed to retrieve offers: {}", e))
        })?;

        debug!("Retrieved {} offers", rows.len());
        Ok(rows.into_iter().map(OfertaViagem::from).collect())
    }

    async fn count(&self) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ofertas_viagem")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::InfrastructureError(e.to_string()))
    }

    async fn update(&self, oferta: &OfertaViagem) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"UPDATE ofertas_viagem
               SET preco = $2,
                   origem = $3,
                   destino = $4,
                   ida = $5,
                   volta = $6,
                   updated_at = NOW()
               WHERE id = $1"#,
        )
        .bind(oferta.id)
        .bind(oferta.preco)
        .bind(&oferta.rota.origem)
        .bind(&oferta.rota.destino)
        .bind(oferta.periodo.ida)
        .bind(oferta.periodo.volta)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::InfrastructureError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!(
                "Offer {} not found",
                oferta.id
            )));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM ofertas_viagem WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!("Failed to delete offer {}: {}", id, e);
                DomainError::InfrastructureError(format!("Failed to delete offer: {}", e))
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("Offer {} not found", id)));
        }
        info!("Deleted offer {}", id);
        Ok(())
    }
}
