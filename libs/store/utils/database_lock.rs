use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::{instrument, trace};

/// Advisory lock scoped to one database directory. Mutating operations take
/// it for their whole duration, which serializes concurrent writers across
/// processes; the underlying lock is released when the value is dropped.
pub struct DatabaseLock {
    name: String,
    file: File,
}

impl std::fmt::Debug for DatabaseLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DatabaseLock[\"{}\"]", self.name)
    }
}

impl DatabaseLock {
    // Open the lock file inside the database directory, without taking the lock.
    pub fn try_new(directory: &Path, lock_name: &str) -> io::Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(directory.join(format!("{lock_name}.lock")))?;

        Ok(Self {
            name: lock_name.to_owned(),
            file,
        })
    }

    // Block until the exclusive lock is acquired.
    #[instrument]
    pub fn lock_exclusive(&self) -> io::Result<()> {
        trace!("Attempting locking...");
        self.file.lock_exclusive()?;
        trace!("Lock successfully acquired");
        Ok(())
    }

    // Release the lock.
    #[instrument]
    pub fn unlock(&self) -> io::Result<()> {
        trace!("Attempting unlocking...");
        self.file.unlock()?;
        trace!("Lock released");
        Ok(())
    }
}

impl Drop for DatabaseLock {
    #[inline]
    fn drop(&mut self) {
        let _ = self.unlock();
    }
}
