// shuffle: randomly shuffle lines of text from an input file (diagnostic logging)
// by Ian Kluft
// one of multiple programming language implementations of shuffle (C++, Go, Perl, Python and Rust)
// See https://github.com/ikluft/ikluft-tools/tree/master/shuffle
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use std::io;
use tracing::Level;

// map count of -v flags to a log level
pub fn level_for_verbosity(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

// install a stderr log subscriber; standard output is reserved for the shuffled lines
// calling this again after a subscriber is installed does nothing
pub fn init_logging(verbosity: u8) {
    let result = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level_for_verbosity(verbosity))
        .with_target(false)
        .without_time()
        .try_init();
    if result.is_err() {
        tracing::trace!("log subscriber already installed");
    }
}
