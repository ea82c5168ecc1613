//! Dump the clock records to CSV or JSON, numbered the way `-d` shows them.

pub mod logic;

pub use logic::ExportLogic;

use crate::models::event::ClockEvent;
use clap::ValueEnum;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported line. Field order is the CSV column order.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RecordExport {
    pub position: usize,
    pub id: String,
    pub activity: &'static str,
    pub action: &'static str,
    pub timestamp: String,
}

impl RecordExport {
    /// Number `events` from 1 in the order given.
    pub fn numbered(events: &[ClockEvent]) -> Vec<Self> {
        events
            .iter()
            .zip(1..)
            .map(|(ev, position)| Self {
                position,
                id: ev.id.clone(),
                activity: ev.activity.name(),
                action: ev.action.name(),
                timestamp: ev.timestamp_str(),
            })
            .collect()
    }
}
