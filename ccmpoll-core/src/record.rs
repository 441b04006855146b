//! Normalized status records and the sink they stream into

use crate::error::Result;
use crate::states;
use serde::Serialize;

/// Job state reported when a query succeeds with zero rows
pub const NO_UPDATES_STATE: &str = "Empty";

/// Name reported when a query succeeds with zero rows
pub const NO_UPDATES_NAME: &str = "No updates found";

/// Name reported when both protocols fail for a host
pub const UNREACHABLE_NAME: &str = "No connection to client";

/// One normalized record: a pending update, an empty-result marker, or a
/// host-unreachable marker (`job_state` of `None`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    #[serde(rename = "ComputerName")]
    pub computer_name: String,
    #[serde(rename = "JobState")]
    pub job_state: Option<String>,
    #[serde(rename = "Name")]
    pub name: String,
}

impl StatusRecord {
    /// Record for one discovered pending update
    pub fn update(host: &str, evaluation_state: i32, name: &str) -> Self {
        Self {
            computer_name: host.to_string(),
            job_state: Some(states::translate(evaluation_state)),
            name: name.to_string(),
        }
    }

    /// Record for a host whose query succeeded with zero rows
    pub fn no_updates(host: &str) -> Self {
        Self {
            computer_name: host.to_string(),
            job_state: Some(NO_UPDATES_STATE.to_string()),
            name: NO_UPDATES_NAME.to_string(),
        }
    }

    /// Record for a host that failed both protocols
    pub fn unreachable(host: &str) -> Self {
        Self {
            computer_name: host.to_string(),
            job_state: None,
            name: UNREACHABLE_NAME.to_string(),
        }
    }

    pub fn is_unreachable(&self) -> bool {
        self.job_state.is_none()
    }
}

/// Destination for records as they are produced
///
/// Records are emitted one at a time in host order, then row order within a
/// host; implementations must not reorder or buffer across hosts.
pub trait RecordSink {
    fn emit(&mut self, record: StatusRecord) -> Result<()>;
}

impl RecordSink for Vec<StatusRecord> {
    fn emit(&mut self, record: StatusRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }
}
