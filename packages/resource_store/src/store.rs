//! Resource stores: the narrow host capability resolving names to bytes.

use crate::name::ResourceName;
use std::{
    collections::HashMap,
    path::PathBuf,
    fs,
};
use anyhow::{
    Result,
    Context,
    bail,
};


/// Default root directory for the filesystem store.
pub const DEFAULT_ASSETS_DIR: &'static str = "assets";


/// Host capability for resolving a resource name to the complete contents
/// of the underlying byte stream.
///
/// Each read is a single synchronous, blocking attempt. No caching happens
/// at this layer; every call may hit the backing storage again.
pub trait ResourceStore: Send + Sync {
    fn read(&self, name: ResourceName<&str>) -> Result<Vec<u8>>;
}

/// Filesystem-backed store. Resolves `ns:rel/path` to `<root>/<ns>/<rel/path>`.
#[derive(Debug, Clone)]
pub struct DirStore(pub PathBuf);

impl DirStore {
    /// Store rooted at the conventional assets directory.
    pub fn new() -> Self {
        DirStore(PathBuf::from(DEFAULT_ASSETS_DIR))
    }

    pub fn rooted<P: Into<PathBuf>>(root: P) -> Self {
        DirStore(root.into())
    }
}

impl ResourceStore for DirStore {
    fn read(&self, name: ResourceName<&str>) -> Result<Vec<u8>> {
        let path = self.0.join(name.to_path());
        trace!(%name, ?path, "reading resource");
        fs::read(&path)
            .with_context(|| format!("unable to read resource {}", name))
    }
}

/// In-memory store, for embedded resources and tests.
#[derive(Debug, Clone)]
pub struct MemStore(HashMap<String, Vec<u8>>);

impl MemStore {
    pub fn new() -> Self {
        MemStore(HashMap::new())
    }

    pub fn insert(&mut self, name: ResourceName<&str>, bytes: Vec<u8>) {
        self.0.insert(name.to_string(), bytes);
    }
}

impl ResourceStore for MemStore {
    fn read(&self, name: ResourceName<&str>) -> Result<Vec<u8>> {
        match self.0.get(&name.to_string()) {
            Some(bytes) => Ok(bytes.clone()),
            None => bail!("no such resource: {}", name),
        }
    }
}


#[test]
fn test_mem_store() {
    let mut store = MemStore::new();
    let name = ResourceName::try_new("hud/icons.png").unwrap();
    store.insert(name, vec![1, 2, 3]);
    assert_eq!(store.read(name).unwrap(), vec![1, 2, 3]);

    // namespace defaulting makes both spellings the same resource
    let explicit = ResourceName::try_new("core:hud/icons.png").unwrap();
    assert_eq!(store.read(explicit).unwrap(), vec![1, 2, 3]);

    let absent = ResourceName::try_new("hud/nope.png").unwrap();
    let e = store.read(absent).unwrap_err();
    assert!(e.to_string().contains("hud/nope.png"));
}

#[test]
fn test_dir_store() {
    let root = std::env::temp_dir()
        .join(format!("resource_store_test_{}", std::process::id()));
    let subdir = root.join("pack").join("hud");
    fs::create_dir_all(&subdir).unwrap();
    fs::write(subdir.join("icons.png"), b"abc").unwrap();

    let store = DirStore::rooted(&root);
    let name = ResourceName::try_new("pack:hud/icons.png").unwrap();
    assert_eq!(store.read(name).unwrap(), b"abc".to_vec());

    let absent = ResourceName::try_new("pack:hud/nope.png").unwrap();
    let e = store.read(absent).unwrap_err();
    assert!(e.to_string().contains("pack:hud/nope.png"));

    fs::remove_dir_all(&root).unwrap();
}
