use crate::{HandBackend, ReplayBackend};
use std::collections::HashMap;
use std::sync::Arc;

pub struct BackendRegistry {
    backends: HashMap<String, Arc<dyn HandBackend>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self {
            backends: HashMap::new(),
        }
    }

    /// Register under the backend's own name, replacing any previous entry.
    pub fn register(&mut self, backend: Arc<dyn HandBackend>) {
        let name = backend.name().to_string();
        self.backends.insert(name, backend);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn HandBackend>> {
        self.backends.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.backends.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Registry with every backend built into this crate.
pub fn create_registry() -> BackendRegistry {
    let mut registry = BackendRegistry::new();
    registry.register(Arc::new(ReplayBackend::empty()));
    registry
}
