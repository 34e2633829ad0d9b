use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::mask::TriggerMask;
use crate::pattern::TriggerPattern;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// The mask as the two 32-bit words the trigger hardware is programmed
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskHalves {
    pub low: u32,
    pub high: u32,
}

impl MaskHalves {
    pub fn join(&self) -> TriggerMask {
        TriggerMask(u64::from(self.high) << 32 | u64::from(self.low))
    }
}

impl From<TriggerMask> for MaskHalves {
    fn from(mask: TriggerMask) -> Self {
        Self {
            low: (mask.0 & 0x0000_0000_FFFF_FFFF) as u32,
            high: (mask.0 >> 32) as u32,
        }
    }
}

#[derive(Debug, Serialize)]
struct MaskReport<'a> {
    config: &'a TriggerPattern,
    low: String,
    high: String,
    mask: String,
    candidates: Vec<u64>,
}

pub fn write_report<W: Write>(
    out: &mut W,
    pattern: &TriggerPattern,
    mask: TriggerMask,
    format: OutputFormat,
) -> io::Result<()> {
    let halves = MaskHalves::from(mask);

    match format {
        OutputFormat::Text => {
            writeln!(out, "Trigger Config: {pattern}")?;
            writeln!(out)?;
            writeln!(out, "Trigger Masks:")?;
            writeln!(out, "Low : {:08X}", halves.low)?;
            writeln!(out, "High: {:08X}", halves.high)?;
        }
        OutputFormat::Json => {
            let report = MaskReport {
                config: pattern,
                low: format!("{:08X}", halves.low),
                high: format!("{:08X}", halves.high),
                mask: format!("{:016X}", mask.0),
                candidates: mask.candidates().collect(),
            };

            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }

    Ok(())
}
