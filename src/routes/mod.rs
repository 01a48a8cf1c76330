use axum_extra::routing::TypedPath;
use serde::Deserialize;

pub mod pruebas;

#[derive(TypedPath, Deserialize)]
#[typed_path("/pruebas")]
pub struct PruebasPath;
