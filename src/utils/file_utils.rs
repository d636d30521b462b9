use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

/// Filesystem operations needed to publish a config file.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigFs {
    fn is_file(&self, path: &Path) -> bool;

    /// Replace `to` with the bytes of `from`, returning the number of bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;
}

pub struct LocalFs;

impl ConfigFs for LocalFs {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    // Stage next to the destination and rename over it, so `to` is either
    // the old file or the complete new one.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let mut source = fs::File::open(from)?;
        let mut staged = NamedTempFile::new_in(parent_dir(to))?;

        let bytes = io::copy(&mut source, staged.as_file_mut())?;
        staged.as_file().sync_all()?;

        // Permissions are best-effort
        if let Ok(metadata) = source.metadata() {
            let _ = fs::set_permissions(staged.path(), metadata.permissions());
        }

        staged.persist(to).map_err(|err| err.error)?;
        Ok(bytes)
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_copy_overwrites_with_exact_bytes() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("netlify_dev.toml");
        let to = dir.path().join("netlify.toml");

        let content: Vec<u8> = vec![0x00, 0xff, b'\n', 0xc3, 0x28, b'x', b'\r', b'\n'];
        fs::write(&from, &content).unwrap();
        fs::write(&to, "stale content that is much longer than the new one").unwrap();

        let bytes = LocalFs.copy(&from, &to).unwrap();

        assert_eq!(bytes, content.len() as u64);
        assert_eq!(fs::read(&to).unwrap(), content);
        // Source is left alone
        assert_eq!(fs::read(&from).unwrap(), content);
    }

    #[test]
    fn test_copy_leaves_no_staging_files() {
        let dir = tempdir().unwrap();
        let public = dir.path().join("public");
        fs::create_dir(&public).unwrap();
        let from = dir.path().join("netlify_prod.toml");
        fs::write(&from, "env = \"production\"\n").unwrap();

        LocalFs.copy(&from, &public.join("netlify.toml")).unwrap();

        let entries: Vec<_> = fs::read_dir(&public)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("netlify.toml")]);
    }

    #[test]
    fn test_copy_missing_source_keeps_destination() {
        let dir = tempdir().unwrap();
        let to = dir.path().join("netlify.toml");
        fs::write(&to, "previous").unwrap();

        let result = LocalFs.copy(&dir.path().join("missing.toml"), &to);

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
        assert_eq!(fs::read_to_string(&to).unwrap(), "previous");
    }

    #[test]
    fn test_copy_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("netlify_dev.toml");
        fs::write(&from, "env = \"development\"").unwrap();
        let to = dir.path().join("public").join("netlify.toml");

        assert!(LocalFs.copy(&from, &to).is_err());
        assert!(!dir.path().join("public").exists());
    }

    #[test]
    fn test_is_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("netlify_dev.toml");
        fs::write(&file, "").unwrap();

        assert!(LocalFs.is_file(&file));
        assert!(!LocalFs.is_file(dir.path()));
        assert!(!LocalFs.is_file(&dir.path().join("netlify_prod.toml")));
    }
}
