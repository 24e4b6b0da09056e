//! Connection-level settings shared by all calls through one client.

use std::collections::BTreeMap;

use secrecy::SecretString;

/// Connection-level configuration for a provider client.
///
/// Runtime-only: never serialized, so the API key cannot leak into logs or
/// persisted state (`SecretString` also redacts it from `Debug` output).
/// Same resolver contract as the per-call configs: every field optional,
/// builder setters last-write-wins, [`ClientConfig::merge`] prefers fields
/// set in `other`.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Credential presented to the provider.
    pub api_key: Option<SecretString>,
    /// Base URL override for self-hosted or proxied deployments.
    pub base_url: Option<String>,
    /// Provider API version override (e.g. Azure's `api-version`).
    pub api_version: Option<String>,
    /// Escape hatch: raw request options passed through to the adapter.
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ClientConfig {
    /// Start building a configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Combine two snapshots: fields set in `other` win; `extra` entries from
    /// `other` override same-keyed entries.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.api_version.is_some() {
            self.api_version = other.api_version;
        }
        self.extra.extend(other.extra);
        self
    }
}

/// Builder for [`ClientConfig`].
#[derive(Debug, Clone, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(SecretString::from(key.into()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set the API version override.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.api_version = Some(version.into());
        self
    }

    /// Add one raw request option.
    pub fn extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.config.extra.insert(key.into(), value);
        self
    }

    /// Produce the immutable snapshot.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
