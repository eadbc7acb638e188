use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Copies `src` byte for byte to `dst`, creating the parent directories of `dst` first.
pub fn copy_file_creating_parents(src: &Path, dst: &Path) -> io::Result<u64> {
    if let Some(parent) = dst.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    fs::copy(src, dst)
}

/// Reads `path` as raw lines. No decoding happens, so bytes that are not
/// UTF-8 survive a read/write cycle unchanged.
pub fn read_lines(path: &Path) -> io::Result<Vec<Vec<u8>>> {
    Ok(split_lines(&fs::read(path)?))
}

/// Splits on `\n`, `\r\n` or a lone `\r`. A trailing terminator does not start
/// an extra empty line.
pub fn split_lines(content: &[u8]) -> Vec<Vec<u8>> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(content[start..i].to_vec());
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(content[start..i].to_vec());
                i += 1;
                if content.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < content.len() {
        lines.push(content[start..].to_vec());
    }
    lines
}

/// Replaces the content of `path` with `lines`, each terminated by `\n`.
///
/// The lines go to a sibling `<name>.tmp` file first, which is then renamed over
/// `path`. A failed write leaves the previous content in place.
pub fn write_lines<L: AsRef<[u8]>>(path: &Path, lines: &[L]) -> io::Result<()> {
    let tmp = sibling_tmp_path(path)?;
    if let Err(e) = write_and_replace(&tmp, path, lines) {
        if tmp.is_file() {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                warn!("Failed to remove {}: {}", tmp.display(), cleanup);
            }
        }
        return Err(e);
    }
    Ok(())
}

fn write_and_replace<L: AsRef<[u8]>>(tmp: &Path, path: &Path, lines: &[L]) -> io::Result<()> {
    let mut writer = BufWriter::new(fs::File::create(tmp)?);
    for line in lines {
        writer.write_all(line.as_ref())?;
        writer.write_all(b"\n")?;
    }
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;
    if let Ok(meta) = fs::metadata(path) {
        fs::set_permissions(tmp, meta.permissions())?;
    }
    debug!("Replacing {} with {}", path.display(), tmp.display());
    fs::rename(tmp, path)
}

fn sibling_tmp_path(path: &Path) -> io::Result<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not name a file", path.display()),
        )
    })?;
    let mut tmp_name = name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("template.conf");
        fs::write(&src, b"a=1\nb=2\n").unwrap();
        let dst = dir.path().join("user").join("etc").join("copy.conf");

        let copied = copy_file_creating_parents(&src, &dst).unwrap();

        assert_eq!(copied, 8);
        assert_eq!(fs::read(&dst).unwrap(), b"a=1\nb=2\n");
    }

    #[test]
    fn read_lines_strips_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("crlf.conf");
        fs::write(&path, "one\r\ntwo\nthree").unwrap();

        assert_eq!(
            read_lines(&path).unwrap(),
            vec![b"one".to_vec(), b"two".to_vec(), b"three".to_vec()]
        );
    }

    #[test]
    fn lone_carriage_return_ends_a_line() {
        assert_eq!(
            split_lines(b"a\rb\r\rc\r"),
            vec![b"a".to_vec(), b"b".to_vec(), Vec::new(), b"c".to_vec()]
        );
        assert!(split_lines(b"").is_empty());
        assert_eq!(split_lines(b"\n"), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn read_lines_keeps_non_utf8_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.conf");
        fs::write(&path, b"# caf\xe9\nx=1\n").unwrap();

        assert_eq!(
            read_lines(&path).unwrap(),
            vec![b"# caf\xe9".to_vec(), b"x=1".to_vec()]
        );
    }

    #[test]
    fn write_lines_terminates_every_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.conf");
        fs::write(&path, "stale content that is longer than the new one\n").unwrap();

        write_lines(&path, &["x", "", "y"]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "x\n\ny\n");
        assert!(!dir.path().join("out.conf.tmp").exists());
    }

    #[test]
    fn failed_write_keeps_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.conf");
        fs::write(&path, "old\n").unwrap();
        // A directory in the way of the temporary file makes creating it fail.
        fs::create_dir(dir.path().join("out.conf.tmp")).unwrap();

        assert!(write_lines(&path, &["new"]).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
        assert!(dir.path().join("out.conf.tmp").is_dir());
    }
}
