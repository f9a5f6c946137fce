// Observable record tree for one monitored host

mod disk;
mod host;
mod process;

pub use disk::{DiskChange, DiskState};
pub use host::{HostChange, HostState};
pub use process::{ProcessChange, ProcessState};

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    /// Content did not have the shape required by the message kind. The
    /// `lastPing` update has already happened when this is returned.
    #[error("malformed {kind} content: {source}")]
    MalformedContent {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Drops the oldest entries so `series` keeps at most `cap` entries.
/// `None` leaves the series unbounded.
pub(crate) fn trim_oldest(series: &mut Vec<Value>, cap: Option<usize>) {
    if let Some(cap) = cap
        && series.len() > cap
    {
        let excess = series.len() - cap;
        series.drain(..excess);
    }
}
