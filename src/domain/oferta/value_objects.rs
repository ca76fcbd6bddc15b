use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Route between two places, as advertised on an offer.
///
/// Immutable value object: both legs are checked at construction and there are
/// no setters. Replacing a route means building a new `Rota`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Rota {
    #[validate(custom(function = campo_preenchido, message = "origem is required"))]
    pub origem: String,

    #[validate(custom(function = campo_preenchido, message = "destino is required"))]
    pub destino: String,
}

impl Rota {
    pub fn new(origem: String, destino: String) -> Result<Self, validator::ValidationErrors> {
        let rota = Self {
            origem: origem.trim().to_string(),
            destino: destino.trim().to_string(),
        };
        rota.validate()?;
        Ok(rota)
    }
}

/// Travel period: departure (`ida`) and return (`volta`) dates.
///
/// `volta` must be strictly after `ida`; a same-day round trip is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[validate(schema(function = periodo_cronologico))]
pub struct Periodo {
    pub ida: NaiveDate,
    pub volta: NaiveDate,
}

impl Periodo {
    pub fn new(ida: NaiveDate, volta: NaiveDate) -> Result<Self, validator::ValidationErrors> {
        let periodo = Self { ida, volta };
        periodo.validate()?;
        Ok(periodo)
    }

    /// Trip length in nights.
    pub fn noites(&self) -> i64 {
        (self.volta - self.ida).num_days()
    }
}

// Rejects blank-after-trim legs, so a `Rota` deserialized from a payload
// fails validation the same way `Rota::new` does.
fn campo_preenchido(valor: &str) -> Result<(), ValidationError> {
    if valor.trim().is_empty() {
        return Err(ValidationError::new("campo_vazio"));
    }
    Ok(())
}

fn periodo_cronologico(periodo: &Periodo) -> Result<(), ValidationError> {
    if periodo.volta <= periodo.ida {
        let mut err = ValidationError::new("periodo");
        err.message = Some("volta must be after ida".into());
        return Err(err);
    }
    Ok(())
}
