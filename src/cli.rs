// shuffle: randomly shuffle lines of text from an input file (command line)
// by Ian Kluft
// one of multiple programming language implementations of shuffle (C++, Go, Perl, Python and Rust)
// See https://github.com/ikluft/ikluft-tools/tree/master/shuffle
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html
//
// usage: shuffle input.txt > output.txt

use crate::error::Result;
use clap::{crate_version, error::ErrorKind, value_parser, Arg, ArgAction, Command};
use std::{ffi::OsString, path::PathBuf};

// constants
const PROGRAM_NAME: &str = "shuffle";
const INFILE_PARAM: &str = "infile";
const VERBOSE_PARAM: &str = "verbose";

// command line data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOpts {
    pub infile: PathBuf,
    pub verbosity: u8,
}

// command-line interface
fn command() -> Command {
    Command::new(PROGRAM_NAME)
        .version(crate_version!())
        .about("Shuffle randomly reorders the lines of a text file and prints them")
        .arg(
            Arg::new(INFILE_PARAM)
                .value_name("infile")
                .help("input text file")
                .required(true)
                .num_args(1)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new(VERBOSE_PARAM)
                .short('v')
                .long(VERBOSE_PARAM)
                .help("log progress to standard error (repeat for more detail)")
                .action(ArgAction::Count),
        )
}

// parse the command line, program name first; exactly one input file is required
// --help and --version also come back as usage errors, with exit code 0
pub fn process_cli<I, T>(args: I) -> Result<CliOpts>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // check for errors
    let mut matches = command().try_get_matches_from(args)?;

    // extract values
    // unreachable while infile is required(true); clap rejects a missing file first
    let Some(infile) = matches.remove_one::<PathBuf>(INFILE_PARAM) else {
        return Err(command()
            .error(ErrorKind::MissingRequiredArgument, "file name parameter missing")
            .into());
    };
    Ok(CliOpts {
        infile,
        verbosity: matches.get_count(VERBOSE_PARAM),
    })
}
