use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::{
    application::list_ofertas::use_case::ListOfertasUseCase,
    domain::oferta::{
        entity::OfertaViagem,
        value_objects::{Periodo, Rota},
    },
    domain::shared::pagination::PageRequest,
    presentation::http::{
        errors::AppError, middleware::user::decode_required_user_claims, state::AppState,
    },
};

/// Offer payload as submitted on create; the identifier is never client-chosen.
#[derive(Debug, Deserialize)]
pub struct CreateOfertaRequest {
    pub preco: f64,
    pub rota: Rota,
    pub periodo: Periodo,
}

impl CreateOfertaRequest {
    /// Consumes the payload into validated parts, rebuilding the value
    /// objects through their constructors so route legs come out trimmed.
    fn em_partes(self) -> Result<(f64, Rota, Periodo), AppError> {
        if !self.preco.is_finite() || self.preco < 0.0 {
            return Err(AppError::ValidationError(
                "preco must be non-negative".to_string(),
            ));
        }
        let rota = Rota::new(self.rota.origem, self.rota.destino)?;
        let periodo = Periodo::new(self.periodo.ida, self.periodo.volta)?;
        Ok((self.preco, rota, periodo))
    }
}

pub async fn get_oferta(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<OfertaViagem>, AppError> {
    let oferta = state
        .oferta_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Offer {} not found", id)))?;

    Ok(Json(oferta))
}

/// Paginated listing: `?pagina=&tamanhoPorPagina=`, 1-based. A page past the
/// end answers 200 with an empty array; page zero or negative answers 400.
#[instrument(skip(state), fields(pagina = params.pagina, tamanho = params.tamanho_por_pagina))]
pub async fn list_ofertas(
    State(state): State<AppState>,
    Query(params): Query<PageRequest>,
) -> Result<Json<Vec<OfertaViagem>>, AppError> {
    let ofertas = ListOfertasUseCase::new(state.oferta_repo.clone())
        .execute(params)
        .await?;

    debug!("Listed {} offers", ofertas.len());
    Ok(Json(ofertas))
}

pub async fn create_oferta(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<CreateOfertaRequest>,
) -> Result<Json<OfertaViagem>, AppError> {
    let claims = decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let (preco, rota, periodo) = body.em_partes()?;

    let oferta = state.oferta_repo.create(preco, rota, periodo).await?;

    info!(oferta_id = oferta.id, user = %claims.email, "Offer created");
    Ok(Json(oferta))
}

pub async fn update_oferta(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<OfertaViagem>,
) -> Result<StatusCode, AppError> {
    decode_required_user_claims(&headers, &state.config.jwt_secret)?;
    let oferta = body.normalizada()?;

    state.oferta_repo.update(&oferta).await?;

    info!(oferta_id = oferta.id, "Offer updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_oferta(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    decode_required_user_claims(&headers, &state.config.jwt_secret)?;

    state.oferta_repo.delete(id).await?;

    info!(oferta_id = id, "Offer deleted");
    Ok(StatusCode::NO_CONTENT)
}
