//! Session credential and the key-value store that holds it.
//!
//! # Design
//! The store is a plain key → JSON string map so it can be backed by whatever
//! the host has (browser-like storage, a file, memory). The gateway only reads
//! the credential and removes it on a 401; creating it belongs to the login
//! flow.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

/// Storage key the credential lives under.
pub const SESSION_KEY: &str = "petadopt_user";

/// Authenticated identity persisted between runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    /// Bearer token, if the credential carries a usable one.
    pub fn bearer(&self) -> Option<&str> {
        let token = self.token.trim();
        (!token.is_empty()).then_some(token)
    }
}

/// Durable key → JSON string store.
pub trait SessionStore: Send + Sync + Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// Read and decode the credential stored under `key`.
pub fn load(store: &dyn SessionStore, key: &str) -> Result<Option<Session>, serde_json::Error> {
    match store.get(key) {
        Some(raw) => serde_json::from_str(&raw).map(Some),
        None => Ok(None),
    }
}

/// Encode and store `session` under `key`.
pub fn save(store: &dyn SessionStore, key: &str, session: &Session) -> io::Result<()> {
    let raw = serde_json::to_string(session)?;
    store.set(key, raw)
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) -> io::Result<()> {
        self.entries().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Store persisted as a single JSON object in a file.
///
/// A missing file reads as empty. Every write rewrites the whole file.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> io::Result<HashMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(HashMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(io::Error::from),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e),
        }
    }

    /// Replace the file atomically: write a sibling temp file, then rename.
    fn write_all(&self, entries: &HashMap<String, String>) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;
        let mut file = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut file, entries)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        self.read_all().ok()?.remove(key)
    }

    fn set(&self, key: &str, value: String) -> io::Result<()> {
        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value);
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let _guard = self.guard.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session {
            token: "abc".to_string(),
            user_id: "u1".to_string(),
            is_admin: true,
            name: Some("Ada".to_string()),
            email: None,
        }
    }

    #[test]
    fn session_uses_camel_case_keys() {
        let json = serde_json::to_value(session()).unwrap();
        assert_eq!(json["token"], "abc");
        assert_eq!(json["userId"], "u1");
        assert_eq!(json["isAdmin"], true);
        assert!(json.get("email").is_none());
    }

    #[test]
    fn session_only_requires_token() {
        let s: Session = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(s.bearer(), Some("t"));
        assert!(!s.is_admin);
    }

    #[test]
    fn blank_token_is_not_a_bearer() {
        let s: Session = serde_json::from_str(r#"{"token":"  "}"#).unwrap();
        assert_eq!(s.bearer(), None);
    }

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemorySessionStore::new();
        assert!(store.get(SESSION_KEY).is_none());
        save(&store, SESSION_KEY, &session()).unwrap();
        assert_eq!(load(&store, SESSION_KEY).unwrap(), Some(session()));
        store.remove(SESSION_KEY).unwrap();
        assert!(store.get(SESSION_KEY).is_none());
    }

    #[test]
    fn load_reports_garbage() {
        let store = MemorySessionStore::new();
        store.set(SESSION_KEY, "not json".to_string()).unwrap();
        assert!(load(&store, SESSION_KEY).is_err());
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        let store = FileSessionStore::new(&path);
        save(&store, SESSION_KEY, &session()).unwrap();
        store.set("other", "1".to_string()).unwrap();

        let reopened = FileSessionStore::new(&path);
        assert_eq!(load(&reopened, SESSION_KEY).unwrap(), Some(session()));

        reopened.remove(SESSION_KEY).unwrap();
        assert!(FileSessionStore::new(&path).get(SESSION_KEY).is_none());
        assert_eq!(FileSessionStore::new(&path).get("other").as_deref(), Some("1"));
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("absent.json"));
        assert!(store.get(SESSION_KEY).is_none());
        store.remove(SESSION_KEY).unwrap();
    }

    #[test]
    fn file_store_rewrites_leave_one_complete_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, r#"{"stale":"x"}"#).unwrap();

        let store = FileSessionStore::new(&path);
        for n in 0..5 {
            store.set("counter", n.to_string()).unwrap();
        }

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("session.json")]);
        let raw: HashMap<String, String> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw.get("counter").map(String::as_str), Some("4"));
        assert_eq!(raw.get("stale").map(String::as_str), Some("x"));
    }
}
