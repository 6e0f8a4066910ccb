//! Send one GET request carrying query parameters and a JSON body, and
//! decode the JSON reply.
//!
//! The binary in `main.rs` wires these pieces to the command line; the
//! library surface exists so integration tests can drive the invoker
//! against a mock server.

pub mod cli_args;
pub mod config;
pub mod environment;
pub mod error;
pub mod invoker;
pub mod printer;
pub mod request;
pub mod response;

pub use config::{InvocationPlan, load_get_args, resolve_plan};
pub use error::ProbeError;
pub use invoker::{RequestInvoker, invoke};
pub use request::{Endpoint, QueryParameters, RequestBody};
pub use response::Response;
