use crate::domain::errors::ProcessError;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupOutcome {
    pub bytes: u64,
    pub sha256: String,
}

/// Copies `src` byte-for-byte to `dst` and syncs `dst` to disk.
///
/// The source is opened before the destination is created, so a missing
/// source leaves no `.bak` behind. An existing `dst` is truncated.
pub fn create_backup(src: &Path, dst: &Path) -> Result<BackupOutcome, ProcessError> {
    copy_synced(src, dst).map_err(ProcessError::Backup)
}

fn copy_synced(src: &Path, dst: &Path) -> io::Result<BackupOutcome> {
    let mut source = File::open(src)?;
    let dest = File::create(dst)?;
    let mut writer = HashingWriter::new(dest);
    let bytes = io::copy(&mut source, &mut writer)?;
    let (dest, digest) = writer.finish();
    dest.sync_all()?;
    Ok(BackupOutcome {
        bytes,
        sha256: hex::encode(digest),
    })
}

struct HashingWriter<W> {
    inner: W,
    hasher: Sha256,
}

impl<W: Write> HashingWriter<W> {
    fn new(inner: W) -> Self {
        Self {
            inner,
            hasher: Sha256::new(),
        }
    }

    fn finish(self) -> (W, Vec<u8>) {
        (self.inner, self.hasher.finalize().to_vec())
    }
}

impl<W: Write> Write for HashingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.hasher.update(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
