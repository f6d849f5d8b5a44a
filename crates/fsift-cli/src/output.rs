//! Result list output.

use std::io::{self, BufWriter, Write};

/// Write each path followed by `terminator`, flushing once at the end.
///
/// Paths are written untouched: no quoting, no normalization.
pub(crate) fn write_paths<W: Write>(out: W, paths: &[String], terminator: u8) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for path in paths {
        out.write_all(path.as_bytes())?;
        out.write_all(&[terminator])?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newline_terminated() {
        let mut buf = Vec::new();
        let paths = vec!["a.txt".to_string(), "sub/b log.txt".to_string()];
        write_paths(&mut buf, &paths, b'\n').unwrap();
        assert_eq!(buf, b"a.txt\nsub/b log.txt\n");
    }

    #[test]
    fn test_nul_terminated() {
        let mut buf = Vec::new();
        let paths = vec!["a\nb".to_string(), "c".to_string()];
        write_paths(&mut buf, &paths, b'\0').unwrap();
        assert_eq!(buf, b"a\nb\0c\0");
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let mut buf = Vec::new();
        write_paths(&mut buf, &[], b'\n').unwrap();
        assert!(buf.is_empty());
    }
}
