pub mod sqlx_oferta_repository;
