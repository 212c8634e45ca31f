//! Wheel Service
//!
//! Orchestrates the pure domain functions with an injected start index source.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::adapters::RandomStartIndex;
use crate::domain::{self, ConditionType, DecodedMessage, EncodedReport, MAX_START_INDEX};
use crate::error::WheelError;
use crate::ports::{StartIndexSource, WheelCodecApi};

/// Wheel service implementation
///
/// Implements the `WheelCodecApi` port using an injected start index source.
pub struct WheelService<S: StartIndexSource> {
    /// Start index provider (driven port)
    start_source: Arc<S>,
}

impl WheelService<RandomStartIndex> {
    /// Service that spins the wheel randomly for every report
    pub fn random() -> Self {
        Self::new(Arc::new(RandomStartIndex::new()))
    }
}

impl<S: StartIndexSource> WheelService<S> {
    /// Create a new service with the given start index source
    pub fn new(start_source: Arc<S>) -> Self {
        Self { start_source }
    }
}

impl<S: StartIndexSource> WheelCodecApi for WheelService<S> {
    fn encode_report(
        &self,
        day_of_month: u32,
        condition: ConditionType,
        case_count: u32,
    ) -> Result<EncodedReport, WheelError> {
        let start_index = self.start_source.next_start_index(MAX_START_INDEX);

        let message = domain::encode(day_of_month, condition, case_count, start_index)
            .inspect_err(|e| warn!(error = %e, "Rejected report"))?;

        debug!(start_index, code = %message, "Encoded report");

        Ok(EncodedReport {
            message,
            start_index,
            day_of_month,
            condition,
            case_count,
        })
    }

    fn decode(&self, message: &str) -> Option<DecodedMessage> {
        let decoded = domain::decode(message);
        match &decoded {
            Some(report) => debug!(
                day_of_month = report.day_of_month,
                condition = %report.condition,
                case_count = report.case_count,
                "Decoded report"
            ),
            None => debug!(length = message.len(), "Message is not a valid report"),
        }
        decoded
    }
}
