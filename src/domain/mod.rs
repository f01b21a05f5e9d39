pub mod model;
pub mod ports;

pub use model::{BatchRequest, BatchResponse, CheckResult, LookupOutcome, RegistryReply, Status};
pub use ports::{RegistryClient, RegistrySettings};
