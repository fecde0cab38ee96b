//! Resolves a JSON prop record into a button class string.
//!
//! ```sh
//! RUST_LOG=bui_variants=trace cargo run --example resolve -- '{"kind": "buy", "size": "large"}' dark
//! ```

use anyhow::Context;
use bui_variants::{
    components::VariantProps,
    theme::{Theme, ThemeContext},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("bui_variants=info".parse()?))
        .init();

    bui_variants::init().context("style tables are incomplete")?;

    let mut args = std::env::args().skip(1);
    let json = args
        .next()
        .unwrap_or_else(|| r#"{"kind": "primary"}"#.to_string());
    let ambient: Theme = match args.next() {
        Some(name) => name.parse()?,
        None => Theme::default(),
    };

    let props = VariantProps::from_json(&json).context("invalid button props")?;
    let classes = props.resolve(&ThemeContext::new(ambient))?;

    tracing::info!(kind = %props.kind, theme = %ambient, "resolved");
    println!("{classes}");

    Ok(())
}
