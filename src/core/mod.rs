pub mod checker;
pub mod decoder;
pub mod dispatcher;
pub mod registry;
pub mod validator;

pub use crate::domain::model::{
    BatchRequest, BatchResponse, CheckResult, LookupOutcome, RegistryReply, Status,
};
pub use crate::domain::ports::{RegistryClient, RegistrySettings};
pub use crate::utils::error::Result;
