pub mod oferta;
pub mod shared;
