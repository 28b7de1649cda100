//! Atomic file writes: write to a sibling temp file, then rename over `dest`.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn atomic_write(dest: impl AsRef<Path>, bytes: impl AsRef<[u8]>) -> io::Result<()> {
    let dest = dest.as_ref();
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes.as_ref())?;
    tmp.as_file().sync_all()?;
    tmp.persist(dest).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("nested").join("out.txt");
        atomic_write(&p, "first").unwrap();
        atomic_write(&p, "second").unwrap();
        assert_eq!(fs::read_to_string(&p).unwrap(), "second");
    }
}
