//! Support library for writing monitoring check plugins.
//!
//! A plugin parses its thresholds, measures something, classifies the
//! measurement, and emits one status line the supervisor understands:
//!
//! ```
//! use vigil::{PerfData, PerfDataBuffer, Range, Status, Unit};
//!
//! let warn: Range = "80".parse()?;
//! let crit: Range = "90".parse()?;
//!
//! let usage = 72.5;
//! let status = Status::classify(usage, Some(&warn), Some(&crit));
//!
//! let mut perfdata = PerfDataBuffer::new();
//! perfdata.add(
//!     &PerfData::new("usage", usage)
//!         .with_unit(Unit::Percent)
//!         .with_warn(warn)
//!         .with_crit(crit),
//! )?;
//!
//! let line = vigil::render(status, "disk usage within bounds", &perfdata);
//! assert_eq!(line, "OK: disk usage within bounds|usage=72.5%;80;90");
//! // A real plugin ends with `vigil::emit(status, message, &perfdata)`,
//! // which prints the line and exits with the status code.
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod report;
mod status;

pub use report::{emit, render};
pub use status::Status;

pub use vigil_core::{PerfData, PerfDataBuffer, PerfDataError, Range, RangeError, Unit, UnitError};
