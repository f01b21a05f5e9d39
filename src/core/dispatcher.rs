use crate::core::{LookupOutcome, RegistryClient};
use std::sync::Arc;

/// Looks identifiers up one at a time, in request order.
///
/// Every identifier yields exactly one outcome; a failed lookup never stops the loop.
#[derive(Clone)]
pub struct LookupDispatcher {
    registry: Arc<dyn RegistryClient>,
}

impl LookupDispatcher {
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self { registry }
    }

    pub async fn dispatch(&self, inns: &[String]) -> Vec<LookupOutcome> {
        let mut outcomes = Vec::with_capacity(inns.len());

        for (index, inn) in inns.iter().enumerate() {
            tracing::debug!(inn = %inn, "lookup {}/{}", index + 1, inns.len());
            outcomes.push(self.lookup_one(inn).await);
        }

        outcomes
    }

    async fn lookup_one(&self, inn: &str) -> LookupOutcome {
        match self.registry.lookup(inn).await {
            Ok(reply) => match reply.first_error() {
                Some(message) => {
                    tracing::debug!(inn, error = message, "registry reported an error");
                    LookupOutcome::RegistryError {
                        inn: inn.to_string(),
                        message: message.to_string(),
                    }
                }
                None => LookupOutcome::Success {
                    inn: inn.to_string(),
                    date: reply.date,
                },
            },
            Err(e) => {
                tracing::error!(inn, error = %e, "registry lookup failed");
                LookupOutcome::TransportError {
                    inn: inn.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }
}
