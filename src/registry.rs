use crate::policy::CorsPolicy;
use crate::provider::PolicyProvider;
use tracing::debug;

/// Ordered set of path mappings; the first pattern matching a path wins.
#[derive(Debug, Clone, Default)]
pub struct CorsRegistry {
    providers: Vec<PolicyProvider>,
}

impl CorsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, provider: PolicyProvider) -> &mut Self {
        debug!(
            path = %provider.policy().path_pattern,
            position = self.providers.len(),
            "registered CORS mapping"
        );
        self.providers.push(provider);
        self
    }

    pub fn find(&self, path: &str) -> Option<&CorsPolicy> {
        self.providers
            .iter()
            .map(PolicyProvider::policy)
            .find(|policy| policy.path_pattern.matches(path))
    }

    pub fn policies(&self) -> impl Iterator<Item = &CorsPolicy> {
        self.providers.iter().map(PolicyProvider::policy)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl From<PolicyProvider> for CorsRegistry {
    fn from(provider: PolicyProvider) -> Self {
        let mut registry = Self::new();
        registry.register(provider);
        registry
    }
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;
