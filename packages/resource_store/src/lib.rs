//! Resource name identifiers and host resource stores.
//!
//! The embedding host supplies resources (GUI skins, fonts, sounds) under
//! namespaced names; this crate validates those names and abstracts how
//! their bytes are fetched, so consumers never depend on a concrete host
//! storage layout.

#[macro_use]
extern crate tracing;

mod name;
mod store;

pub use crate::{
    name::{
        ResourceName,
        DEFAULT_NAMESPACE,
    },
    store::{
        ResourceStore,
        DirStore,
        MemStore,
        DEFAULT_ASSETS_DIR,
    },
};
