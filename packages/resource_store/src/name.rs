//! Resource names: namespaced identifiers resolved by resource stores.

use std::{
    path::{
        Path,
        PathBuf,
        Component,
    },
    borrow::Borrow,
    fmt::{self, Formatter, Display},
};
use anyhow::{
    Result,
    ensure,
    bail,
};


/// Namespace assumed for names written without an explicit one.
pub const DEFAULT_NAMESPACE: &'static str = "core";

const NAMESPACE_SEPARATOR: char = ':';
const PART_SEPARATOR: char = '/';


/// Pre-validated resource name, `namespace:part/part/...`.
///
/// The namespace prefix is optional when written; a name without one lives
/// in [`DEFAULT_NAMESPACE`]. Validation happens at construction, so a held
/// name is always safe to resolve against a store.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ResourceName<S>(S);

impl<S: Borrow<str>> ResourceName<S> {
    pub fn try_new(s: S) -> Result<Self> {
        let (namespace, rel) = split_name(s.borrow());
        if let Some(namespace) = namespace {
            validate_namespace(namespace)?;
        }
        ensure!(!rel.is_empty(), "invalid resource name, empty path");
        for part in rel.split(PART_SEPARATOR) {
            validate_part(part)?;
        }
        Ok(ResourceName(s))
    }

    /// Namespace the name lives in, whether written or defaulted.
    pub fn namespace<'a>(&'a self) -> &'a str {
        split_name(self.0.borrow()).0.unwrap_or(DEFAULT_NAMESPACE)
    }

    /// Path portion of the name, without the namespace.
    pub fn rel<'a>(&'a self) -> &'a str {
        split_name(self.0.borrow()).1
    }

    /// Guarantees made by having been validated:
    /// - won't panic
    /// - at least 1 part
    /// - all parts will parse as `std::path::Component::Normal`
    pub fn parts<'a>(&'a self) -> impl Iterator<Item=&'a str> + 'a {
        self.rel().split(PART_SEPARATOR)
    }

    /// Convert to a relative path, namespace directory first.
    pub fn to_path(&self) -> PathBuf {
        let mut path = PathBuf::from(self.namespace());
        path.extend(self.parts());
        path
    }

    /// Cheap borrowed copy of this name.
    pub fn reborrow(&self) -> ResourceName<&str> {
        ResourceName(self.0.borrow())
    }
}

impl<S: Borrow<str>> Display for ResourceName<S> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.namespace(), NAMESPACE_SEPARATOR, self.rel())
    }
}

fn split_name(name: &str) -> (Option<&str>, &str) {
    match name.find(NAMESPACE_SEPARATOR) {
        Some(i) => (Some(&name[..i]), &name[i + 1..]),
        None => (None, name),
    }
}

fn validate_namespace(namespace: &str) -> Result<()> {
    ensure!(
        !namespace.is_empty(),
        "invalid resource name, empty namespace",
    );
    ensure!(
        namespace.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'),
        "invalid resource namespace {:?}, expected [a-z0-9_]",
        namespace,
    );
    Ok(())
}

fn validate_part(part: &str) -> Result<()> {
    ensure!(
        !part.contains(NAMESPACE_SEPARATOR),
        "invalid resource name part {:?}, contains namespace separator",
        part,
    );
    let mut comps = Path::new(part).components();
    match comps.next() {
        Some(Component::Normal(os_str)) => ensure!(
            os_str.to_str().is_some(),
            "invalid resource name part {:?}, path-parsed as non-utf8",
            part,
        ),
        _ => bail!(
            "invalid resource name part {:?}, not a plain path component",
            part,
        ),
    }
    ensure!(
        comps.next().is_none(),
        "invalid resource name part {:?}, path-parsed as multiple components",
        part,
    );
    Ok(())
}


#[test]
fn test_name_validation() {
    assert!(ResourceName::try_new("hud/crosshair.png").is_ok());
    assert!(ResourceName::try_new("pack_2:hud/icons.png").is_ok());
    assert!(ResourceName::try_new("").is_err());
    assert!(ResourceName::try_new("hud//icons.png").is_err());
    assert!(ResourceName::try_new("../escape.png").is_err());
    assert!(ResourceName::try_new("/etc/passwd").is_err());
    assert!(ResourceName::try_new("Pack:icons.png").is_err());
    assert!(ResourceName::try_new(":icons.png").is_err());
    assert!(ResourceName::try_new("pack:").is_err());
    assert!(ResourceName::try_new("a:b:c.png").is_err());
}

#[test]
fn test_name_namespacing() {
    let name = ResourceName::try_new("hud/crosshair.png").unwrap();
    assert_eq!(name.namespace(), DEFAULT_NAMESPACE);
    assert_eq!(name.rel(), "hud/crosshair.png");
    assert_eq!(
        name.to_path(),
        PathBuf::from(DEFAULT_NAMESPACE).join("hud").join("crosshair.png"),
    );
    assert_eq!(
        name.to_string(),
        format!("{}:hud/crosshair.png", DEFAULT_NAMESPACE),
    );

    let name = ResourceName::try_new("pack:button.png").unwrap();
    assert_eq!(name.namespace(), "pack");
    assert_eq!(name.rel(), "button.png");
    assert_eq!(name.to_path(), PathBuf::from("pack").join("button.png"));
}
