use chrono::NaiveDate;
use jornada_milhas_api::domain::{
    oferta::entity::OfertaViagem,
    oferta::value_objects::{Periodo, Rota},
    shared::pagination::{PageRequest, PageWindow},
};

fn date(s: &str) -> NaiveDate {
    s.parse().expect("invalid test date")
}

#[test]
fn rota_requires_both_legs() {
    assert!(Rota::new("Origem".into(), "Destino".into()).is_ok());
    assert!(Rota::new("".into(), "Destino".into()).is_err());
    assert!(Rota::new("Origem".into(), "".into()).is_err());
    assert!(Rota::new("   ".into(), "Destino".into()).is_err());
}

#[test]
fn rota_trims_surrounding_whitespace() {
    let rota = Rota::new("  Origem  ".into(), " Destino ".into()).unwrap();
    assert_eq!(rota.origem, "Origem");
    assert_eq!(rota.destino, "Destino");
}

// A route arriving through a payload skips `Rota::new`, so validation itself
// must reject blank-after-trim legs.
#[test]
fn rota_desserializada_com_espacos_e_invalida() {
    use validator::Validate;

    let rota: Rota = serde_json::from_str(r#"{"origem":"   ","destino":"Destino"}"#)
        .expect("payload should deserialize");
    assert!(rota.validate().is_err());

    let rota: Rota = serde_json::from_str(r#"{"origem":"Origem","destino":"   "}"#)
        .expect("payload should deserialize");
    assert!(rota.validate().is_err());
}

#[test]
fn periodo_requires_volta_after_ida() {
    assert!(Periodo::new(date("2024-03-03"), date("2024-03-06")).is_ok());
    assert!(Periodo::new(date("2024-03-06"), date("2024-03-03")).is_err());
    // same-day round trip is rejected: ordering is strict
    assert!(Periodo::new(date("2024-03-03"), date("2024-03-03")).is_err());
}

#[test]
fn periodo_counts_nights() {
    let periodo = Periodo::new(date("2024-03-03"), date("2024-03-06")).unwrap();
    assert_eq!(periodo.noites(), 3);
}

#[test]
fn oferta_rejects_negative_price() {
    let oferta = OfertaViagem {
        id: 1,
        preco: -10.0,
        rota: Rota::new("Origem".into(), "Destino".into()).unwrap(),
        periodo: Periodo::new(date("2024-03-03"), date("2024-03-06")).unwrap(),
    };
    assert!(oferta.validar().is_err());
}

#[test]
fn oferta_normalizada_apara_as_pernas_da_rota() {
    let oferta = OfertaViagem {
        id: 1,
        preco: 100.0,
        rota: Rota {
            origem: "  Origem  ".into(),
            destino: " Destino ".into(),
        },
        periodo: Periodo::new(date("2024-03-03"), date("2024-03-06")).unwrap(),
    };
    let normalizada = oferta.normalizada().unwrap();
    assert_eq!(normalizada.rota.origem, "Origem");
    assert_eq!(normalizada.rota.destino, "Destino");

    let em_branco = OfertaViagem {
        id: 1,
        preco: 100.0,
        rota: Rota {
            origem: "   ".into(),
            destino: "Destino".into(),
        },
        periodo: Periodo::new(date("2024-03-03"), date("2024-03-06")).unwrap(),
    };
    assert!(em_branco.normalizada().is_err());
}

#[test]
fn oferta_with_valid_parts_passes_validation() {
    let oferta = OfertaViagem {
        id: 1,
        preco: 100.0,
        rota: Rota::new("Origem".into(), "Destino".into()).unwrap(),
        periodo: Periodo::new(date("2024-03-03"), date("2024-03-06")).unwrap(),
    };
    assert!(oferta.validar().is_ok());
}

#[test]
fn pagination_defaults_are_safe_and_stable() {
    let p = PageRequest::default();
    assert_eq!(p.pagina, 1);
    assert_eq!(p.tamanho_por_pagina, 25);
}

#[test]
fn pagination_window_matches_skip_take_formula() {
    let window = PageRequest {
        pagina: 3,
        tamanho_por_pagina: 10,
    }
    .window()
    .unwrap();
    assert_eq!(window, PageWindow { offset: 20, limit: 10 });
}
