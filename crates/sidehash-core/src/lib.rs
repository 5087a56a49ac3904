pub mod config;
pub mod logging;

pub mod batch;
pub mod digest;
pub mod error;
pub mod input;
pub mod processor;
pub mod sidecar;
pub mod source;

pub use batch::{run_batch, BatchSummary};
pub use digest::{compute_digest, Algorithm, HashAccumulator};
pub use error::ProcessError;
pub use processor::{ProcessedFile, Processor};
