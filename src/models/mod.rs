// Wire shapes delivered by the dashboard transport

mod message;
mod metrics;
mod process;
mod snapshot;

pub use message::{Envelope, MessageKind};
pub use metrics::MetricsPayload;
pub use process::ProcessStatus;
pub use snapshot::{DiskSnapshot, HostSnapshot, ProcessSnapshot};
