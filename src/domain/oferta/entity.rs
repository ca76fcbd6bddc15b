use serde::{Deserialize, Serialize};

use super::errors::DomainError;
use super::value_objects::{Periodo, Rota};
use validator::Validate;

/// Core domain entity representing a travel offer.
///
/// An offer advertises a route for a travel period at a given price. The
/// identifier is allocated by the repository on insert; clients never choose it.
///
/// # Invariants
/// - `preco` is non-negative
/// - `rota` and `periodo` satisfy their own construction rules
/// - the offer exclusively owns its `Rota` and `Periodo` (composition)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfertaViagem {
    /// Repository-assigned identifier
    pub id: i64,

    /// Advertised price, non-negative
    pub preco: f64,

    /// Origin/destination pair
    pub rota: Rota,

    /// Departure and return dates
    pub periodo: Periodo,
}

impl OfertaViagem {
    /// Checks every entity invariant, including the owned value objects.
    pub fn validar(&self) -> Result<(), DomainError> {
        if !self.preco.is_finite() || self.preco < 0.0 {
            return Err(DomainError::ValidationError(
                "preco must be non-negative".to_string(),
            ));
        }
        self.rota
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        self.periodo
            .validate()
            .map_err(|e| DomainError::ValidationError(e.to_string()))?;
        Ok(())
    }

    /// Rebuilds the owned value objects through their constructors, trimming
    /// route legs and re-running every invariant. Deserialized payloads pass
    /// through here before they are persisted.
    pub fn normalizada(self) -> Result<Self, DomainError> {
        let oferta = Self {
            id: self.id,
            preco: self.preco,
            rota: Rota::new(self.rota.origem, self.rota.destino)
                .map_err(|e| DomainError::ValidationError(e.to_string()))?,
            periodo: Periodo::new(self.periodo.ida, self.periodo.volta)
                .map_err(|e| DomainError::ValidationError(e.to_string()))?,
        };
        oferta.validar()?;
        Ok(oferta)
    }
}
