// shuffle: randomly shuffle lines of text from an input file (output writer)
// by Ian Kluft
// one of multiple programming language implementations of shuffle (C++, Go, Perl, Python and Rust)
// See https://github.com/ikluft/ikluft-tools/tree/master/shuffle
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use std::io::{self, Write};

// write each line followed by a newline, then flush
// nothing else goes to the output: no header, no summary
pub fn write_lines<W, S>(out: &mut W, lines: &[S]) -> io::Result<()>
where
    W: Write + ?Sized,
    S: AsRef<[u8]>,
{
    for line in lines {
        out.write_all(line.as_ref())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}
