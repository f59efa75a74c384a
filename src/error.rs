// shuffle: randomly shuffle lines of text from an input file (error types)
// by Ian Kluft
// one of multiple programming language implementations of shuffle (C++, Go, Perl, Python and Rust)
// See https://github.com/ikluft/ikluft-tools/tree/master/shuffle
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal conditions which end a shuffle run. None of them are retried.
#[derive(Error, Debug)]
pub enum ShuffleError {
    /// missing or extra command line arguments
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("failed to open input file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("path is a directory, not a file: {}", path.display())]
    IsDirectory { path: PathBuf },

    #[error("failed to read input file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl ShuffleError {
    /// process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // clap uses 0 for --help and --version, which travel through the error path
            ShuffleError::Usage(e) if !e.use_stderr() => 0,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShuffleError>;
