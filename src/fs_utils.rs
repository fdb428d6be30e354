use std::fs;
use std::io;
use std::path::Path;

/// True when `path` names an existing regular file.
pub fn exists(path: &Path) -> bool {
    path.is_file()
}

/// Read a file the way the source loader expects it: every line
/// contributes its `\n` and one synthetic line terminator lands past the
/// raw content, so loaded text is always `raw + "\n"`. The char counter
/// subtracts one to compensate.
pub fn read_to_source(path: &Path) -> io::Result<String> {
    let mut source = fs::read_to_string(path)?;
    source.push('\n');
    Ok(source)
}

/// Overwrite `path` with the full report text.
pub fn write_report(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)
}

/// Byte size of the file at `path`.
pub fn size_of(path: &Path) -> io::Result<u64> {
    Ok(fs::metadata(path)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_appends_one_synthetic_newline() {
        let tmp = tempfile::tempdir().expect("tmp dir");

        let unterminated = tmp.path().join("plain.txt");
        fs::write(&unterminated, "abc").expect("write plain.txt");
        assert_eq!(read_to_source(&unterminated).expect("read"), "abc\n");

        let terminated = tmp.path().join("newline.txt");
        fs::write(&terminated, "abc\n").expect("write newline.txt");
        assert_eq!(read_to_source(&terminated).expect("read"), "abc\n\n");

        let empty = tmp.path().join("empty.txt");
        fs::write(&empty, "").expect("write empty.txt");
        assert_eq!(read_to_source(&empty).expect("read"), "\n");
    }

    #[test]
    fn write_report_truncates_previous_content() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let path = tmp.path().join("report.txt");

        fs::write(&path, "old report that was much longer").expect("seed file");
        write_report(&path, "new").expect("write report");

        assert_eq!(fs::read_to_string(&path).expect("read back"), "new");
    }

    #[test]
    fn size_and_existence() {
        let tmp = tempfile::tempdir().expect("tmp dir");
        let path = tmp.path().join("sized.txt");
        fs::write(&path, "12345").expect("write sized.txt");

        assert!(exists(&path));
        assert!(!exists(&tmp.path().join("missing.txt")));
        assert_eq!(size_of(&path).expect("size"), 5);
    }
}
