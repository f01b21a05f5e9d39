use crate::core::decoder::decode_request;
use crate::core::dispatcher::LookupDispatcher;
use crate::core::validator::RequestValidator;
use crate::core::{BatchResponse, LookupOutcome, RegistryClient};
use std::sync::Arc;

/// Runs one batch check: decode, validate, look up, aggregate.
///
/// Decode and validation failures produce an `Error` response and no registry
/// calls. Past validation the response status is always `Ok`.
#[derive(Clone)]
pub struct InnChecker {
    validator: RequestValidator,
    dispatcher: LookupDispatcher,
}

impl InnChecker {
    pub fn new(registry: Arc<dyn RegistryClient>) -> Self {
        Self {
            validator: RequestValidator::new(),
            dispatcher: LookupDispatcher::new(registry),
        }
    }

    pub async fn check(&self, body: &[u8]) -> BatchResponse {
        let request = match decode_request(body) {
            Ok(request) => request,
            Err(e) => {
                tracing::error!(error = %e, "failed to decode request body");
                return BatchResponse::error(e.client_message());
            }
        };

        tracing::info!(request = ?request, "request body decoded");

        let inns = match self.validator.validate(&request) {
            Ok(inns) => inns,
            Err(e) => {
                tracing::error!(error = %e, "invalid request");
                return BatchResponse::error(e.client_message());
            }
        };

        let outcomes = self.dispatcher.dispatch(inns).await;
        aggregate(outcomes)
    }
}

fn aggregate(outcomes: Vec<LookupOutcome>) -> BatchResponse {
    let (mut inactive, mut registry_errors, mut transport_errors) = (0, 0, 0);
    for outcome in &outcomes {
        match outcome {
            LookupOutcome::Success { .. } if outcome.is_not_active() => inactive += 1,
            LookupOutcome::Success { .. } => {}
            LookupOutcome::RegistryError { .. } => registry_errors += 1,
            LookupOutcome::TransportError { .. } => transport_errors += 1,
        }
    }

    tracing::info!(
        total = outcomes.len(),
        inactive,
        registry_errors,
        transport_errors,
        "batch checked"
    );

    BatchResponse::ok(outcomes)
}
