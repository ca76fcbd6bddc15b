pub mod list_ofertas;
