use std::io::{self, Write};

use crate::error::InputError;
use crate::format::{write_report, OutputFormat};
use crate::mask::{build, TriggerMask};
use crate::pattern::{validate, TriggerPattern};
use crate::templates::split;

/// Validates `input`, computes its trigger mask and writes the report to
/// `out`.
///
/// A rejected configuration is reported as a single diagnostic line and
/// yields `None`. Only write failures are returned as errors.
#[tracing::instrument(skip(out))]
pub fn run_trigger_config<W: Write>(
    input: &str,
    out: &mut W,
    format: OutputFormat,
) -> io::Result<Option<TriggerMask>> {
    let pattern = match validate(input) {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::warn!(?err, "Rejected trigger configuration");
            report_error(out, &err)?;
            return Ok(None);
        }
    };

    let mask = compute(&pattern);
    write_report(out, &pattern, mask, format)?;

    Ok(Some(mask))
}

pub fn compute(pattern: &TriggerPattern) -> TriggerMask {
    let (positive, forbidden) = split(pattern);
    tracing::debug!(?positive, ?forbidden, "Split trigger pattern");

    let mask = build(positive, forbidden);
    tracing::debug!(?mask, matches = mask.count(), "Built trigger mask");

    mask
}

pub fn report_error<W: Write>(
    out: &mut W,
    err: &InputError,
) -> io::Result<()> {
    writeln!(out, "{err}")
}
