use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{filter, fmt, Layer};

pub fn init(verbose: bool) {
    let max_level = if verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = tracing_subscriber::Registry::default().with(
        fmt::Layer::new()
            .with_target(false)
            .with_filter(filter::filter_fn(move |metadata| {
                metadata.target().starts_with("apk_builder") && *metadata.level() <= max_level
            })),
    );

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("logging unavailable: {err}");
    }
}
