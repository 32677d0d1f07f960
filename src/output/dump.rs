//! LAMMPS-style dump-file sink
//!
//! Serializes one frame per flush: a header reporting the timestep, atom
//! count and instantaneous box bounds, then one line per grain with
//! `id x y vz radius`. The x/y columns are synthetic — x is the grain index
//! printed as a coordinate so dump viewers spread the column out — and only
//! `y` carries the true vertical position.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::simulation::plate::Plate;
use crate::simulation::states::Ensemble;

/// Dump filename derived from the oscillation amplitude and gap height,
/// the naming downstream analysis scripts key on.
pub fn default_filename(amp: f64, h: f64) -> String {
    format!("phi_0.2freq_53T_{:.6}h_{:.6}.dumpL", amp, h)
}

/// Writes per-frame text records to any `io::Write` destination.
pub struct DumpWriter<W: Write> {
    out: W,
}

impl DumpWriter<BufWriter<File>> {
    /// Create (truncate) a dump file at `path` with a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> DumpWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Append one frame for the current ensemble state.
    ///
    /// The box-bounds block reports the instantaneous floor and ceiling on
    /// its second row; the first row spans the synthetic x axis from
    /// `-2 * radius` to the grain count.
    pub fn write_frame(&mut self, sys: &Ensemble, plate: &Plate) -> io::Result<()> {
        let t = sys.t;
        let n = sys.len();
        let r = sys.particles.first().map(|p| p.radius).unwrap_or(0.0);

        writeln!(self.out, "ITEM: TIMESTEP")?;
        writeln!(self.out, "{:.6}", t)?;
        writeln!(self.out, "ITEM: NUMBER OF ATOMS")?;
        writeln!(self.out, "{}", n)?;
        writeln!(self.out, "ITEM: BOX BOUNDS xy xz yz")?;
        writeln!(self.out, " {:.6} {:.6} 0", -2.0 * r, n as f64)?;
        writeln!(self.out, " {:.6} {:.6} 0", plate.floor_pos(t), plate.ceil_pos(t))?;
        writeln!(self.out, "0 2 0")?;
        writeln!(self.out, "ITEM: ATOMS id x y vz radius")?;

        for (i, p) in sys.particles.iter().enumerate() {
            writeln!(
                self.out,
                "{} {:.2} {:.6} {:.6} {:.6}",
                i, i as f64, p.z, p.v, p.radius
            )?;
        }

        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consume the writer and hand back the destination (used by tests to
    /// inspect in-memory frames).
    pub fn into_inner(self) -> W {
        self.out
    }
}
