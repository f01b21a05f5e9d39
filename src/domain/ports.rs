use crate::domain::model::RegistryReply;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait RegistrySettings: Send + Sync {
    fn registry_endpoint(&self) -> &str;
    fn taxpayer_kind(&self) -> &str;
    fn registry_timeout(&self) -> Duration;
}

/// One lookup against the external registry.
///
/// Any failure is returned as an error and turned into a per-identifier outcome by
/// the caller; implementations never abort a batch on their own.
#[async_trait]
pub trait RegistryClient: Send + Sync {
    async fn lookup(&self, inn: &str) -> Result<RegistryReply>;
}
