// src/storage.rs

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{AttemptLedger, TestResult};

/// Contrato del almacén persistente: un clave-valor de cadenas sin ninguna
/// garantía transaccional. La ausencia de una clave significa "nunca
/// intentado".
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// Almacén en memoria, para tests y ejecuciones efímeras.
#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }
    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Almacén respaldado por un único fichero JSON junto al binario.
/// Un fichero ausente o ilegible se trata como almacén vacío, nunca
/// como error fatal.
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(map) => map,
                Err(e) => {
                    log::warn!("Fichero de progreso ilegible, se ignora: {e}");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self { path, entries }
    }

    fn flush(&self) {
        match serde_json::to_string(&self.entries) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&self.path, json) {
                    log::warn!("No se pudo guardar el progreso: {e}");
                }
            }
            Err(e) => log::warn!("No se pudo serializar el progreso: {e}"),
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
        self.flush();
    }
    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
        self.flush();
    }
}

/// Persistencia de {libro de intentos, resultado} por id de test, con las
/// consultas de completitud que usan la tabla y el motor de corrección.
pub struct ResultStore {
    storage: Box<dyn Storage>,
}

impl ResultStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self { storage }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    // Claves deterministas por id de test
    fn result_key(test_id: u32) -> String {
        format!("testResult_{test_id}")
    }

    fn attempts_key(test_id: u32) -> String {
        format!("testAttempts_{test_id}")
    }

    pub fn get_result(&self, test_id: u32) -> Option<TestResult> {
        decode(self.storage.get(&Self::result_key(test_id))?)
    }

    pub fn put_result(&mut self, test_id: u32, result: &TestResult) {
        self.put(&Self::result_key(test_id), result);
    }

    pub fn get_ledger(&self, test_id: u32) -> Option<AttemptLedger> {
        decode(self.storage.get(&Self::attempts_key(test_id))?)
    }

    pub fn put_ledger(&mut self, test_id: u32, ledger: &AttemptLedger) {
        self.put(&Self::attempts_key(test_id), ledger);
    }

    /// Reinicio completo: borra resultado y libro de intentos.
    pub fn clear(&mut self, test_id: u32) {
        self.storage.remove(&Self::result_key(test_id));
        self.storage.remove(&Self::attempts_key(test_id));
        log::info!("Progreso del test {test_id} borrado");
    }

    /// Hay intentos guardados pero todavía ningún resultado completo.
    pub fn is_partially_complete(&self, test_id: u32) -> bool {
        self.get_ledger(test_id).is_some()
            && self.get_result(test_id).is_none_or(|r| !r.is_complete)
    }

    /// Hay resultado y no está marcado incompleto. Los resultados antiguos
    /// sin la bandera cuentan como completos.
    pub fn is_fully_complete(&self, test_id: u32) -> bool {
        self.get_result(test_id).is_some_and(|r| r.is_complete)
    }

    pub fn is_untouched(&self, test_id: u32) -> bool {
        self.get_ledger(test_id).is_none() && self.get_result(test_id).is_none()
    }

    fn put<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.storage.set(key, json),
            Err(e) => log::warn!("No se pudo serializar el registro {key}: {e}"),
        }
    }
}

/// Un registro guardado que no se puede decodificar se trata como ausente.
fn decode<T: DeserializeOwned>(raw: String) -> Option<T> {
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Registro guardado ilegible, se trata como ausente: {e}");
            None
        }
    }
}
