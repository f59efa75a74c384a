// shuffle: randomly shuffle lines of text from an input file (line loader)
// by Ian Kluft
// one of multiple programming language implementations of shuffle (C++, Go, Perl, Python and Rust)
// See https://github.com/ikluft/ikluft-tools/tree/master/shuffle
//
// Open Source licensing under terms of GNU General Public License version 3
// SPDX identifier: GPL-3.0-only
// https://opensource.org/licenses/GPL-3.0
// https://www.gnu.org/licenses/gpl-3.0.en.html

use crate::error::{Result, ShuffleError};
use std::{
    fs::File,
    io,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::{debug, info};

// read all lines from a buffered reader, split on '\n' only
// the '\n' is stripped, any other byte (including '\r') stays part of the line
// a trailing line without a terminator still counts as a line
pub fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<Vec<u8>>> {
    reader.split(b'\n').collect::<io::Result<Vec<Vec<u8>>>>()
}

// drain a reader opened from infile_path, naming the path on failure
fn read_named_lines<R: BufRead>(reader: R, infile_path: &Path) -> Result<Vec<Vec<u8>>> {
    read_lines(reader).map_err(|source| ShuffleError::Read {
        path: infile_path.to_path_buf(),
        source,
    })
}

// read a file into a vector of lines, closing it before returning
pub fn read_file_lines(infile_path: &Path) -> Result<Vec<Vec<u8>>> {
    debug!(path = %infile_path.display(), "opening input file");
    let infile = File::open(infile_path).map_err(|source| ShuffleError::Open {
        path: infile_path.to_path_buf(),
        source,
    })?;

    // opening a directory succeeds on Unix, reading it does not
    let infile_metadata = infile.metadata().map_err(|source| ShuffleError::Open {
        path: infile_path.to_path_buf(),
        source,
    })?;
    if infile_metadata.is_dir() {
        return Err(ShuffleError::IsDirectory {
            path: infile_path.to_path_buf(),
        });
    }

    let lines = read_named_lines(BufReader::new(infile), infile_path)?;
    info!(path = %infile_path.display(), count = lines.len(), "loaded input lines");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        fs,
        io::{Cursor, Read},
    };
    use tempfile::tempdir;

    // reader which fails partway through, like a disk error mid-file
    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "Input/output error"));
            }
            self.served = true;
            let chunk = b"first\nsec";
            buf[..chunk.len()].copy_from_slice(chunk);
            Ok(chunk.len())
        }
    }

    fn to_bytes(lines: &[&str]) -> Vec<Vec<u8>> {
        lines.iter().map(|line| line.as_bytes().to_vec()).collect()
    }

    #[test]
    fn strips_newline_and_keeps_order() {
        let lines = read_lines(Cursor::new("one\ntwo\r\nthree\n")).unwrap();
        assert_eq!(lines, to_bytes(&["one", "two\r", "three"]));
    }

    #[test]
    fn trailing_partial_line_counts() {
        let lines = read_lines(Cursor::new("alpha\nbeta")).unwrap();
        assert_eq!(lines, to_bytes(&["alpha", "beta"]));
    }

    #[test]
    fn blank_lines_are_kept() {
        let lines = read_lines(Cursor::new("\n\nx\n\n")).unwrap();
        assert_eq!(lines, to_bytes(&["", "", "x", ""]));
    }

    #[test]
    fn empty_input_is_not_an_error() {
        assert!(read_lines(Cursor::new("")).unwrap().is_empty());
    }

    #[test]
    fn non_utf8_bytes_pass_through() {
        let bytes: &[u8] = b"caf\xe9\n\xff\xfe\nok\n";
        let lines = read_lines(Cursor::new(bytes)).unwrap();
        assert_eq!(
            lines,
            vec![b"caf\xe9".to_vec(), b"\xff\xfe".to_vec(), b"ok".to_vec()]
        );
    }

    #[test]
    fn read_failure_names_path() {
        let path = Path::new("/data/broken.txt");
        let reader = BufReader::new(FailingReader { served: false });
        let err = read_named_lines(reader, path).unwrap_err();
        assert!(matches!(err, ShuffleError::Read { .. }));
        assert!(err.to_string().contains("/data/broken.txt"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.txt");
        fs::write(&path, "a\nb\nc\nd\n").unwrap();
        assert_eq!(read_file_lines(&path).unwrap(), to_bytes(&["a", "b", "c", "d"]));
    }

    #[test]
    fn latin1_file_loads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        fs::write(&path, b"caf\xe9\nna\xefve\nplain\n").unwrap();
        let lines = read_file_lines(&path).unwrap();
        assert_eq!(
            lines,
            vec![b"caf\xe9".to_vec(), b"na\xefve".to_vec(), b"plain".to_vec()]
        );
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = read_file_lines(&path).unwrap_err();
        assert!(matches!(err, ShuffleError::Open { .. }));
        assert!(err.to_string().contains("absent.txt"));
    }

    #[test]
    fn directory_is_rejected() {
        let dir = tempdir().unwrap();
        let err = read_file_lines(dir.path()).unwrap_err();
        // Windows refuses to open a directory at all
        assert!(matches!(
            err,
            ShuffleError::IsDirectory { .. } | ShuffleError::Open { .. }
        ));
        assert_eq!(err.exit_code(), 1);
    }
}
