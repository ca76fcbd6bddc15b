//! Page-number pagination over an ordered data source.
//!
//! The public API speaks 1-based pages (`pagina`, `tamanhoPorPagina`); the
//! storage layer speaks row windows (`LIMIT`/`OFFSET`). `PageRequest::window`
//! is the single place where one is translated into the other, so boundary
//! rules (first page is 1, page beyond the data is empty but valid, page zero
//! or negative is rejected) live here and nowhere else.

use crate::domain::oferta::errors::DomainError;
use serde::Deserialize;

/// Page size applied when the client does not send `tamanhoPorPagina`.
pub const DEFAULT_TAMANHO_POR_PAGINA: i64 = 25;

/// Maximum allowed page size to prevent resource exhaustion.
pub const MAX_TAMANHO_POR_PAGINA: i64 = 100;

/// 1-based page request as received on the query string.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageRequest {
    #[serde(default = "default_pagina")]
    pub pagina: i64,

    #[serde(default = "default_tamanho", rename = "tamanhoPorPagina")]
    pub tamanho_por_pagina: i64,
}

fn default_pagina() -> i64 {
    1
}

fn default_tamanho() -> i64 {
    DEFAULT_TAMANHO_POR_PAGINA
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            pagina: default_pagina(),
            tamanho_por_pagina: default_tamanho(),
        }
    }
}

impl PageRequest {
    /// Resolves the request into a concrete row window.
    ///
    /// # Errors
    ///
    /// `DomainError::ValidationError` when `pagina` or `tamanhoPorPagina` is
    /// below 1. A page past the end of the data is not an error; it resolves
    /// to a window the store answers with zero rows.
    pub fn window(&self) -> Result<PageWindow, DomainError> {
        if self.pagina < 1 {
            return Err(DomainError::ValidationError(format!(
                "pagina must be at least 1, got {}",
                self.pagina
            )));
        }
        if self.tamanho_por_pagina < 1 {
            return Err(DomainError::ValidationError(format!(
                "tamanhoPorPagina must be at least 1, got {}",
                self.tamanho_por_pagina
            )));
        }

        let limit = self.tamanho_por_pagina.min(MAX_TAMANHO_POR_PAGINA);
        // pagina is at least 1 here, so the subtraction cannot wrap; the
        // multiplication can for absurdly large pages and is checked.
        let offset = (self.pagina - 1).checked_mul(limit).ok_or_else(|| {
            DomainError::ValidationError(format!("pagina {} is out of range", self.pagina))
        })?;
        Ok(PageWindow { offset, limit })
    }
}

/// Concrete row window: skip `offset` rows, take `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// In-memory equivalent of `LIMIT {limit} OFFSET {offset}` over an
    /// already-ordered slice. An offset past the end yields an empty slice.
    pub fn apply<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        let start = (self.offset.max(0) as usize).min(rows.len());
        let end = start.saturating_add(self.limit.max(0) as usize).min(rows.len());
        &rows[start..end]
    }
}
