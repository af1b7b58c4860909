//! Binary run traces
//!
//! One postcard-encoded record per sampled tick, concatenated. Readers
//! decode with `postcard::take_from_bytes` until the buffer is empty,
//! which keeps the format usable from other tools without a schema file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// One sampled reference tick of the observable outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceSample {
    /// Reference tick index.
    pub tick: u64,
    /// Shared segment bus.
    pub segments: u8,
    /// Active-low one-hot anode select.
    pub anodes: u8,
    /// Scroll position at sample time.
    pub position: u8,
}

/// Streams samples to a file.
pub struct TraceWriter {
    out: BufWriter<File>,
    written: u64,
}

impl TraceWriter {
    /// Create or truncate the trace file.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("create trace {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
            written: 0,
        })
    }

    /// Append one sample.
    pub fn record(&mut self, sample: &TraceSample) -> Result<()> {
        let bytes = postcard::to_allocvec(sample)
            .map_err(|err| anyhow!("encode trace sample: {err}"))?;
        self.out.write_all(&bytes).context("write trace sample")?;
        self.written += 1;
        Ok(())
    }

    /// Flush and return the number of samples written.
    pub fn finish(mut self) -> Result<u64> {
        self.out.flush().context("flush trace")?;
        Ok(self.written)
    }
}
