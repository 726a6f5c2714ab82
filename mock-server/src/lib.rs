use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NotaTarea {
    pub id: u64,
    pub titulo: String,
    pub contenido: Option<String>,
    pub estatus: Option<i32>,
    pub tipo: i32,
    pub fecha: String,
    #[serde(rename = "fechaModi")]
    pub fecha_modi: String,
    #[serde(rename = "fechaCum")]
    pub fecha_cum: Option<String>,
}

pub type Db = Arc<RwLock<Vec<NotaTarea>>>;

/// Records served by `app()`.
pub fn seed() -> Vec<NotaTarea> {
    vec![
        NotaTarea {
            id: 1,
            titulo: "Comprar material".to_string(),
            contenido: Some("Cuadernos y plumas".to_string()),
            estatus: Some(0),
            tipo: 0,
            fecha: "2024-01-10".to_string(),
            fecha_modi: "2024-01-10".to_string(),
            fecha_cum: None,
        },
        NotaTarea {
            id: 2,
            titulo: "Entregar proyecto".to_string(),
            contenido: None,
            estatus: Some(1),
            tipo: 1,
            fecha: "2024-01-12".to_string(),
            fecha_modi: "2024-01-15".to_string(),
            fecha_cum: Some("2024-01-20".to_string()),
        },
        NotaTarea {
            id: 3,
            titulo: "Ideas".to_string(),
            contenido: Some("Sin fecha limite".to_string()),
            estatus: None,
            tipo: 0,
            fecha: "2024-01-13".to_string(),
            fecha_modi: "2024-01-13".to_string(),
            fecha_cum: None,
        },
    ]
}

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(notas: Vec<NotaTarea>) -> Router {
    let db: Db = Arc::new(RwLock::new(notas));
    Router::new()
        .route("/api/NotasTareas", get(list_notas))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, router).await
}

async fn list_notas(State(db): State<Db>) -> Json<Vec<NotaTarea>> {
    let notas = db.read().await;
    tracing::debug!(count = notas.len(), "serving notas");
    Json(notas.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nota_serializes_wire_names() {
        let json = serde_json::to_value(&seed()[1]).unwrap();
        assert_eq!(json["id"], 2);
        assert_eq!(json["fechaModi"], "2024-01-15");
        assert_eq!(json["fechaCum"], "2024-01-20");
        assert!(json["contenido"].is_null());
    }

    #[test]
    fn nullable_fields_serialize_as_null() {
        let json = serde_json::to_value(&seed()[2]).unwrap();
        assert!(json["estatus"].is_null());
        assert!(json["fechaCum"].is_null());
    }

    #[test]
    fn seed_ids_are_unique() {
        let mut ids: Vec<u64> = seed().iter().map(|n| n.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), seed().len());
    }
}
