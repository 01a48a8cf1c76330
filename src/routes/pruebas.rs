use axum::response::IntoResponse;

pub const PRUEBA_RESPONSE: &str = "PRUEBA DE CONTROLADOR";

/// `GET /pruebas`. Always answers 200 with a fixed `text/plain` body.
pub async fn pruebas_handler(_: super::PruebasPath) -> impl IntoResponse {
    PRUEBA_RESPONSE
}
