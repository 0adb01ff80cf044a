//! services/sheet_service.rs
//! Lee el archivo local de envíos del formulario de contacto y lo
//! reformatea como matriz de tabla: `[fila_cabecera, ...filas_de_datos]`.
//! Dataset independiente del spreadsheet inbuilt; solo lectura.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf, sync::Arc};

use crate::models::sheet_model::SheetDocument;

const SHEET_HEADERS: [&str; 5] = ["Name", "Email", "Company", "Message", "Submitted At"];

#[derive(Clone)]
pub struct SheetService {
    path: Arc<PathBuf>,
}

impl SheetService {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
        }
    }

    /// Devuelve la cabecera seguida de una fila por envío. A diferencia del
    /// spreadsheet inbuilt, aquí un archivo ilegible sí es un error.
    pub async fn sheet_values(&self) -> Result<Vec<Vec<String>>> {
        let bytes = fs::read(&*self.path)
            .with_context(|| format!("No se pudo leer {:?}", self.path))?;
        let doc: SheetDocument = serde_json::from_slice(&bytes)
            .with_context(|| format!("Documento inválido en {:?}", self.path))?;

        let mut rows: Vec<Vec<String>> =
            vec![SHEET_HEADERS.iter().map(|h| h.to_string()).collect()];
        for sub in doc.submissions {
            rows.push(vec![
                sub.name,
                sub.email,
                sub.company.unwrap_or_default(),
                sub.message.unwrap_or_default(),
                sub.submitted_at.unwrap_or_default(),
            ]);
        }
        Ok(rows)
    }
}
