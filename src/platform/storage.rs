//! Whole-blob storage backends
//!
//! Every backend stores a single text document. Writes replace the whole
//! document and must leave the previous one intact when they fail.

use std::cell::{Cell, RefCell};
use std::io;

/// A single text document that can be read and replaced
pub trait Storage {
    /// Read the stored document. `Ok(None)` means nothing was ever stored.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored document.
    fn write(&self, contents: &str) -> io::Result<()>;

    /// Human readable location, for logs and errors
    fn location(&self) -> String;
}

impl<S: Storage + ?Sized> Storage for &S {
    fn read(&self) -> io::Result<Option<String>> {
        (**self).read()
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        (**self).write(contents)
    }

    fn location(&self) -> String {
        (**self).location()
    }
}

/// In-process storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: RefCell<Option<String>>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `contents`
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.into())),
            fail_writes: Cell::new(false),
        }
    }

    /// Current document, if any
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    /// Make subsequent writes fail (contents stay untouched)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> io::Result<()> {
        if self.fail_writes.get() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "memory storage is read-only",
            ));
        }
        *self.contents.borrow_mut() = Some(contents.to_owned());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::ffi::OsString;
    use std::fs::{self, File};
    use std::io::{self, Write};
    use std::path::{Path, PathBuf};

    use super::Storage;

    /// A file on disk, replaced atomically through a sibling temp file
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        path: PathBuf,
    }

    impl FileStorage {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `<data dir>/<app_dir>/<file_name>`, `None` if the host has no data directory
        pub fn in_data_dir(app_dir: &str, file_name: &str) -> Option<Self> {
            let mut path = dirs::data_dir()?;
            path.push(app_dir);
            path.push(file_name);
            Some(Self { path })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn temp_path(&self) -> PathBuf {
            let mut name = self
                .path
                .file_name()
                .map(OsString::from)
                .unwrap_or_default();
            name.push(".tmp");
            self.path.with_file_name(name)
        }
    }

    fn write_synced(path: &Path, contents: &str) -> io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(contents.as_bytes())?;
        file.sync_all()
    }

    impl Storage for FileStorage {
        fn read(&self) -> io::Result<Option<String>> {
            match fs::read_to_string(&self.path) {
                Ok(contents) => Ok(Some(contents)),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(err) => Err(err),
            }
        }

        fn write(&self, contents: &str) -> io::Result<()> {
            if let Some(parent) = self.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }

            let temp = self.temp_path();
            let result =
                write_synced(&temp, contents).and_then(|()| fs::rename(&temp, &self.path));
            if result.is_err() {
                let _ = fs::remove_file(&temp);
            }
            result
        }

        fn location(&self) -> String {
            self.path.display().to_string()
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

#[cfg(target_arch = "wasm32")]
mod web {
    use std::io;

    use super::Storage;

    /// A browser LocalStorage key
    #[derive(Debug, Clone)]
    pub struct LocalStorage {
        key: String,
    }

    impl LocalStorage {
        pub fn new(key: impl Into<String>) -> Self {
            Self { key: key.into() }
        }

        fn backend() -> io::Result<web_sys::Storage> {
            web_sys::window()
                .and_then(|w| w.local_storage().ok())
                .flatten()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "localStorage unavailable"))
        }
    }

    fn js_error(err: wasm_bindgen::JsValue) -> io::Error {
        io::Error::other(format!("{err:?}"))
    }

    impl Storage for LocalStorage {
        fn read(&self) -> io::Result<Option<String>> {
            Self::backend()?.get_item(&self.key).map_err(js_error)
        }

        // A single set_item either lands or leaves the old value.
        fn write(&self, contents: &str) -> io::Result<()> {
            Self::backend()?
                .set_item(&self.key, contents)
                .map_err(js_error)
        }

        fn location(&self) -> String {
            format!("localStorage[{}]", self.key)
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorage;
