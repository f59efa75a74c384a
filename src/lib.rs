// shuffle: randomly shuffle lines of text from an input file (library)
// by Ian Kluft
// one of multiple programming language implementations of shuffle (C++, Go, Perl, Python and Rust)
// See https://github.com/ikluft/ikluft-tools/tree/master/shuffle
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

pub mod cli;
pub mod error;
pub mod loader;
pub mod logging;
pub mod shuffler;
pub mod writer;

pub use error::{Result, ShuffleError};

use rand::Rng;
use std::{
    ffi::OsString,
    io,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::debug;

// read a file, shuffle its lines with rng, write them to out, return the line count
// nothing is written when loading fails
pub fn shuffle_file<R, W>(infile_path: &Path, rng: &mut R, out: &mut W) -> Result<usize>
where
    R: Rng + ?Sized,
    W: Write + ?Sized,
{
    // read input file to vector
    let mut lines = loader::read_file_lines(infile_path)?;

    // shuffle vector
    shuffler::shuffle_lines(&mut lines, rng);
    debug!(count = lines.len(), "shuffled lines");

    // print vector
    writer::write_lines(out, &lines).map_err(|source| ShuffleError::Output { source })?;
    debug!("output complete");
    Ok(lines.len())
}

// run: library side of command line called from main()
pub fn run<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // get file path from command line
    let cli = cli::process_cli(args)?;
    logging::init_logging(cli.verbosity);

    // shuffle to standard output, seeded fresh from OS entropy
    let mut rng = shuffler::entropy_rng();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    shuffle_file(&cli.infile, &mut rng, &mut out)?;

    // done
    Ok(())
}
