use crate::models::StoredImageFile;
use anyhow::Result;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::RwLock;

/// Storage port for the uploads directory. Both the upload and listing
/// handlers go through this seam, so tests can substitute an in-memory
/// store for the filesystem.
pub trait UploadStore: Send + Sync {
    /// Persist `data` under `file_name`, creating the backing storage if
    /// it does not exist yet. The caller is responsible for choosing a
    /// collision-free name.
    fn put(&self, file_name: &str, data: &[u8]) -> Result<()>;

    /// Enumerate every stored file. An absent backing directory is not an
    /// error; it is created and an empty list is returned.
    fn list(&self) -> Result<Vec<StoredImageFile>>;

    /// Read back the bytes of a stored file, or `None` if no such file
    /// exists.
    fn read(&self, file_name: &str) -> Result<Option<Vec<u8>>>;
}

/// Production store: a single flat directory on disk. The directory
/// listing is the source of truth; there is no manifest or index.
pub struct FsUploadStore {
    root: PathBuf,
}

impl FsUploadStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl UploadStore for FsUploadStore {
    fn put(&self, file_name: &str, data: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.root.join(file_name), data)?;
        Ok(())
    }

    fn list(&self) -> Result<Vec<StoredImageFile>> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root)?;
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            // Skip names that are not valid UTF-8; we never generate them
            let Some(file_name) = entry.file_name().to_str().map(String::from) else {
                continue;
            };
            let size_bytes = entry.metadata()?.len();
            files.push(StoredImageFile {
                file_name,
                size_bytes,
            });
        }
        Ok(files)
    }

    fn read(&self, file_name: &str) -> Result<Option<Vec<u8>>> {
        match std::fs::read(self.root.join(file_name)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory fake used by tests. Preserves insertion order, which stands
/// in for directory-enumeration order.
#[derive(Default)]
pub struct MemoryUploadStore {
    files: RwLock<Vec<(String, Vec<u8>)>>,
}

impl MemoryUploadStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UploadStore for MemoryUploadStore {
    fn put(&self, file_name: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.write().unwrap();
        if let Some(existing) = files.iter_mut().find(|(name, _)| name == file_name) {
            existing.1 = data.to_vec();
        } else {
            files.push((file_name.to_string(), data.to_vec()));
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<StoredImageFile>> {
        let files = self.files.read().unwrap();
        Ok(files
            .iter()
            .map(|(name, data)| StoredImageFile {
                file_name: name.clone(),
                size_bytes: data.len() as u64,
            })
            .collect())
    }

    fn read(&self, file_name: &str) -> Result<Option<Vec<u8>>> {
        let files = self.files.read().unwrap();
        Ok(files
            .iter()
            .find(|(name, _)| name == file_name)
            .map(|(_, data)| data.clone()))
    }
}
