//! Core types for the vigil monitoring-plugin library.
//!
//! This crate provides the data-transformation half of the check-plugin
//! contract, with no I/O or process control:
//! - Threshold ranges: [`Range`]
//! - Units of measure: [`Unit`]
//! - Performance-data serialization: [`PerfData`], [`PerfDataBuffer`]

mod perfdata;
mod range;
mod unit;

pub use perfdata::{PerfData, PerfDataBuffer, PerfDataError};
pub use range::{Range, RangeError};
pub use unit::{Unit, UnitError};
