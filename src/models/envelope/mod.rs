pub mod envelope;

pub use envelope::{FailureEnvelope, GatewayResponse};
