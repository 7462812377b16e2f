//! Loads a named image resource and reports its dimensions and channel
//! layout. Smoke tool for asset packs.

use gui_image::{
    ImageLoader,
    StoreImageLoader,
};
use resource_store::{
    DirStore,
    ResourceName,
};
use std::env;
use anyhow::{Result, bail};
use tracing_subscriber::{
    fmt::{
        self,
        time::uptime,
    },
    prelude::*,
    Registry,
    EnvFilter,
};


fn main() -> Result<()> {
    // initialize logging
    let format = fmt::format()
        .compact()
        .with_timer(uptime())
        .with_line_number(true);
    let stdout_log = fmt::layer()
        .event_format(format);
    let subscriber = Registry::default()
        .with(EnvFilter::from_default_env())
        .with(stdout_log);
    tracing::subscriber::set_global_default(subscriber)
        .expect("unable to install log subscriber");

    let mut args = env::args().skip(1);
    let name = match args.next() {
        Some(name) => name,
        None => bail!("usage: gui_image <resource name> [assets root]"),
    };
    let store = match args.next() {
        Some(root) => DirStore::rooted(root),
        None => DirStore::new(),
    };

    let name = ResourceName::try_new(name.as_str())?;
    let image = StoreImageLoader(store).load_image(name)?;
    println!(
        "{}: {}x{}, {:?}, {} bytes",
        name,
        image.width(),
        image.height(),
        image.channels(),
        image.data().len(),
    );
    Ok(())
}
