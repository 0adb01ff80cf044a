use anyhow::{Context, Result};
use chrono::Utc;
use std::{
    collections::BTreeMap,
    fs,
    path::PathBuf,
    sync::{Arc, Mutex as StdMutex},
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::lead_model::{LeadInput, LeadRecord, StoreDocument, TaskStatus};

/// Canales por defecto cuando el POST no trae ninguno
pub const DEFAULT_CHANNELS: [&str; 2] = ["whatsapp", "email"];

/// Almacenamiento del spreadsheet inbuilt. `load` nunca falla por archivo
/// ausente o corrupto (se lee como vacío); `save` sí propaga errores.
pub trait LeadRepository: Send + Sync {
    fn load(&self) -> Result<Vec<LeadRecord>>;
    fn save(&self, leads: &[LeadRecord]) -> Result<()>;
}

// --------------------------------------------------------------------------------
// Implementación sobre un único documento JSON en disco
// --------------------------------------------------------------------------------
pub struct FileLeadRepository {
    path: PathBuf,
}

impl FileLeadRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl LeadRepository for FileLeadRepository {
    fn load(&self) -> Result<Vec<LeadRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    log::warn!("No se pudo leer {:?}: {}. Se lee como vacío.", self.path, e);
                }
                return Ok(Vec::new());
            }
        };

        match serde_json::from_slice::<StoreDocument>(&bytes) {
            Ok(doc) => Ok(doc.leads),
            Err(e) => {
                log::warn!(
                    "Documento corrupto en {:?}: {}. Se lee como vacío.",
                    self.path,
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, leads: &[LeadRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("No se pudo crear el directorio {:?}", parent))?;
        }
        let doc = StoreDocument {
            leads: leads.to_vec(),
        };
        let data = serde_json::to_vec_pretty(&doc).context("Fallo serializando el documento")?;
        fs::write(&self.path, data)
            .with_context(|| format!("No se pudo escribir {:?}", self.path))?;
        Ok(())
    }
}

/// Variante en memoria, para tests y modo demo sin disco.
#[derive(Default)]
pub struct InMemoryLeadRepository {
    leads: StdMutex<Vec<LeadRecord>>,
}

impl LeadRepository for InMemoryLeadRepository {
    fn load(&self) -> Result<Vec<LeadRecord>> {
        Ok(self.leads.lock().unwrap().clone())
    }

    fn save(&self, leads: &[LeadRecord]) -> Result<()> {
        *self.leads.lock().unwrap() = leads.to_vec();
        Ok(())
    }
}

// --------------------------------------------------------------------------------
// Servicio
// --------------------------------------------------------------------------------
#[derive(Clone)]
pub struct LeadStoreService {
    repo: Arc<dyn LeadRepository>,
    // Serializa cada ciclo leer-modificar-escribir; sin esto dos POST
    // simultáneos pisarían la escritura del otro.
    write_lock: Arc<Mutex<()>>,
}

impl LeadStoreService {
    pub fn new(repo: Arc<dyn LeadRepository>) -> Self {
        Self {
            repo,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Lista completa en orden de inserción.
    pub async fn list_leads(&self) -> Result<Vec<LeadRecord>> {
        self.repo.load()
    }

    /// Crea todos los leads del request y los persiste en una sola escritura.
    /// Devuelve solo los recién creados.
    pub async fn create_leads(&self, inputs: Vec<LeadInput>) -> Result<Vec<LeadRecord>> {
        let _guard = self.write_lock.lock().await;

        let mut leads = self.repo.load()?;
        let now = Utc::now().to_rfc3339();

        let mut added = Vec::with_capacity(inputs.len());
        for input in inputs {
            let channels = normalized_channels(&input.channels);
            let mut tasks = BTreeMap::new();
            for ch in &channels {
                tasks.insert(
                    ch.clone(),
                    TaskStatus {
                        done: false,
                        timestamp: None,
                    },
                );
            }
            added.push(LeadRecord {
                id: Uuid::new_v4().to_string(),
                name: input.name,
                company: input.company,
                email: input.email,
                phone: input.phone,
                niche: input.niche,
                channels,
                tasks,
                created_at: now.clone(),
                updated_at: now.clone(),
            });
        }

        leads.extend(added.iter().cloned());
        self.repo.save(&leads)?;

        log::info!("Se agregaron {} leads al spreadsheet inbuilt", added.len());
        Ok(added)
    }

    /// Marca/desmarca la tarea de un canal. Si el canal aún no estaba
    /// trackeado en el lead, se inicializa y se agrega a `channels`.
    /// Devuelve `None` si no existe lead con ese id (y no toca el store).
    pub async fn update_task(
        &self,
        id: &str,
        task: &str,
        done: bool,
    ) -> Result<Option<LeadRecord>> {
        let _guard = self.write_lock.lock().await;

        let mut leads = self.repo.load()?;
        let lead = match leads.iter_mut().find(|l| l.id == id) {
            Some(l) => l,
            None => return Ok(None),
        };

        let now = Utc::now().to_rfc3339();

        // Canal nuevo: se agrega al tracking antes de aplicar el update
        if !lead.tasks.contains_key(task) && !lead.channels.iter().any(|c| c == task) {
            lead.channels.push(task.to_string());
        }

        let entry = lead.tasks.entry(task.to_string()).or_insert(TaskStatus {
            done: false,
            timestamp: None,
        });
        entry.done = done;
        entry.timestamp = if done { Some(now.clone()) } else { None };
        lead.updated_at = now;

        let updated = lead.clone();
        self.repo.save(&leads)?;
        Ok(Some(updated))
    }

    /// Vacía el spreadsheet por completo. Irreversible.
    pub async fn clear(&self) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        self.repo.save(&[])?;
        log::info!("Spreadsheet inbuilt vaciado");
        Ok(())
    }
}

/// Limpia la lista de canales del request: quita vacíos y duplicados
/// conservando el orden; si no queda ninguno aplica el default documentado.
fn normalized_channels(requested: &[String]) -> Vec<String> {
    let mut channels: Vec<String> = Vec::new();
    for ch in requested {
        let ch = ch.trim();
        if ch.is_empty() {
            continue;
        }
        if !channels.iter().any(|c| c == ch) {
            channels.push(ch.to_string());
        }
    }
    if channels.is_empty() {
        channels = DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect();
    }
    channels
}
