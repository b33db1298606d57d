//! Algorithm registry
use std::sync::{Arc, OnceLock};

use linked_hash_map::LinkedHashMap;
use log::{debug, warn};

use crate::alg::{self, Algorithm, JwsAlgorithm, NONE};
use crate::JoseError;

#[derive(Debug)]
pub struct RegistryBuilder {
    algorithms: Vec<Algorithm>,
    custom: Vec<Arc<dyn JwsAlgorithm>>,
    allow_none: bool,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            algorithms: vec![],
            custom: vec![],
            allow_none: true,
        }
    }
}

impl RegistryBuilder {
    pub fn add_algorithm(&mut self, name: Algorithm) -> &mut Self {
        self.algorithms.push(name);
        self
    }

    pub fn add_custom(&mut self, alg: Arc<dyn JwsAlgorithm>) -> &mut Self {
        self.custom.push(alg);
        self
    }

    /// Register the unsecured `none` algorithm. Enabled by default.
    pub fn allow_none(&mut self, allow: bool) -> &mut Self {
        self.allow_none = allow;
        self
    }

    pub fn build(&self) -> Result<Registry, JoseError> {
        let algorithms = if self.algorithms.is_empty() {
            Algorithm::defaults()
        } else {
            self.algorithms.clone()
        };

        let mut registry = Registry::new();
        for name in algorithms {
            if name == Algorithm::None && !self.allow_none {
                continue;
            }
            registry.register(Arc::from(alg::builtin(name)?));
        }
        for alg in &self.custom {
            if alg.name() == NONE && !self.allow_none {
                continue;
            }
            registry.register(Arc::clone(alg));
        }
        Ok(registry)
    }
}

/// Algorithms by name, in registration order.
#[derive(Debug)]
pub struct Registry {
    algorithms: LinkedHashMap<String, Arc<dyn JwsAlgorithm>>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            algorithms: LinkedHashMap::new(),
        }
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Process-wide registry holding the default algorithms.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Self::default)
    }

    /// Register `alg` under its name. An existing entry with the same name
    /// is replaced and returned.
    pub fn register(&mut self, alg: Arc<dyn JwsAlgorithm>) -> Option<Arc<dyn JwsAlgorithm>> {
        let name = alg.name();
        if name == NONE {
            warn!("registering {:?}: signatures are not checked", name);
        }
        let old = self.algorithms.insert(name.to_string(), alg);
        if old.is_some() {
            debug!("replaced algorithm {}", name);
        } else {
            debug!("registered algorithm {}", name);
        }
        old
    }

    pub fn lookup(&self, name: &str) -> Option<Arc<dyn JwsAlgorithm>> {
        self.algorithms.get(name).cloned()
    }

    pub fn get(&self, name: &str) -> Result<Arc<dyn JwsAlgorithm>, JoseError> {
        self.lookup(name)
            .ok_or_else(|| JoseError::UnknownAlgorithm(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.algorithms.contains_key(name)
    }

    pub fn names(&self) -> Vec<String> {
        self.algorithms.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        let mut registry = Self::new();
        for name in Algorithm::defaults() {
            // defaults are all implemented
            if let Ok(alg) = alg::builtin(name) {
                registry.register(Arc::from(alg));
            }
        }
        registry
    }
}
