//! Generic threshold-check plugin.
//!
//! Classifies a measured value against warning/critical ranges and
//! emits a conventional plugin status line:
//!
//! ```text
//! $ vigil --label load --value 1.5 --warning 5 --critical 10
//! OK: load is 1.5|load=1.5;5;10
//! ```

use clap::error::ErrorKind;
use clap::Parser;
use vigil::{emit, PerfData, PerfDataBuffer, Range, Status, Unit};

#[derive(Debug, Parser)]
#[command(name = "vigil")]
#[command(about = "Evaluate a measured value against warning/critical thresholds")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Measured value to classify
    #[arg(short, long)]
    value: f64,

    /// Perfdata label for the measurement
    #[arg(short, long, default_value = "value")]
    label: String,

    /// Unit of measure (s, us, ms, %, B, kB, MB, GB, TB, c)
    #[arg(short, long, default_value = "")]
    unit: Unit,

    /// Warning range, e.g. "10", "5:10", "@5:10", "~:0"
    #[arg(short, long)]
    warning: Option<Range>,

    /// Critical range, same format as --warning
    #[arg(short, long)]
    critical: Option<Range>,

    /// Minimum possible value, for graph scaling
    #[arg(long)]
    min: Option<f64>,

    /// Maximum possible value, for graph scaling
    #[arg(long)]
    max: Option<f64>,

    /// Message for the status line (default: "<label> is <value><unit>")
    #[arg(short, long)]
    message: Option<String>,
}

fn main() {
    // A plugin that cannot parse its own arguments must exit UNKNOWN,
    // not clap's default code 2, which the supervisor reads as CRITICAL.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            let _ = err.print();
            std::process::exit(Status::Unknown.exit_code());
        }
    };

    let status = Status::classify(cli.value, cli.warning.as_ref(), cli.critical.as_ref());

    let message = cli
        .message
        .unwrap_or_else(|| format!("{} is {}{}", cli.label, cli.value, cli.unit));

    let mut record = PerfData::new(cli.label, cli.value).with_unit(cli.unit);
    if let Some(warn) = cli.warning {
        record = record.with_warn(warn);
    }
    if let Some(crit) = cli.critical {
        record = record.with_crit(crit);
    }
    if let Some(min) = cli.min {
        record = record.with_min(min);
    }
    if let Some(max) = cli.max {
        record = record.with_max(max);
    }

    let mut perfdata = PerfDataBuffer::new();
    if let Err(err) = perfdata.add(&record) {
        emit(Status::Unknown, &err.to_string(), &perfdata);
    }

    emit(status, &message, &perfdata);
}
