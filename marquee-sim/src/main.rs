//! Native runner for the marquee controller model
//!
//! Steps the cycle-accurate model for a configurable number of reference
//! ticks, decodes the multiplexed bus back into viewer-visible text, and
//! optionally records a binary waveform trace for external comparison.

mod config;
mod decode;
mod trace;

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use marquee_core::{ControlInputs, MarqueeController};

use crate::decode::ScanDecoder;
use crate::trace::{TraceSample, TraceWriter};

#[derive(Debug, Parser)]
#[command(about = "Cycle-accurate host runner for the marquee display controller")]
struct Args {
    /// TOML configuration file ([message] / [timing] sections).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Message override, up to 19 seven-segment glyphs.
    #[arg(long)]
    message: Option<String>,

    /// Divider terminal override; the scroll advances every terminal + 1 ticks.
    #[arg(long)]
    tick_terminal: Option<u32>,

    /// Number of reference ticks to simulate.
    #[arg(long, default_value_t = 1_048_576)]
    ticks: u64,

    /// Write postcard-encoded samples of the output bus to this file.
    #[arg(long)]
    trace: Option<PathBuf>,

    /// Record every Nth tick into the trace.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    trace_stride: u64,
}

fn main() -> Result<()> {
    run(Args::parse())
}

fn run(args: Args) -> Result<()> {
    let file = args.config.as_deref().map(config::load_file).transpose()?;
    let resolved = config::resolve(file, args.message.as_deref(), args.tick_terminal)?;
    let mut controller = MarqueeController::from_config(&resolved)
        .map_err(|err| anyhow!("invalid message {:?}: {err:?}", resolved.message.as_str()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(
        out,
        "message {:?}, scroll every {} ticks, running {} ticks",
        resolved.message.as_str(),
        u64::from(resolved.tick_terminal) + 1,
        args.ticks
    )?;

    let mut writer = args.trace.as_deref().map(TraceWriter::create).transpose()?;
    let mut decoder = ScanDecoder::new();
    let mut last_text: Option<String> = None;

    for tick in 0..args.ticks {
        let frame = controller.step(ControlInputs::default());

        if let Some(writer) = writer.as_mut() {
            if tick % args.trace_stride == 0 {
                writer.record(&TraceSample {
                    tick,
                    segments: frame.segments,
                    anodes: frame.anodes,
                    position: controller.position(),
                })?;
            }
        }

        if let Some(digits) = decoder.sample(frame) {
            let text = decode::frame_text(&digits);
            if last_text.as_deref() != Some(text.as_str()) {
                writeln!(
                    out,
                    "[tick {tick:>10}] position {:>2} |{text}|",
                    controller.position()
                )?;
                last_text = Some(text);
            }
        }
    }

    if let Some(writer) = writer {
        let written = writer.finish()?;
        writeln!(out, "wrote {written} trace samples")?;
    }
    out.flush()?;
    Ok(())
}
