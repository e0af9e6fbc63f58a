use anyhow::Context;
use clap::Parser;
use rgbify::{convert_file, Options, DEST_FILE, SOURCE_FILE};
use std::path::Path;

/// Convert `manifest (rgb).jsonc` into `manifest.json`, turning hex color
/// strings into `[R, G, B]` arrays.
#[derive(Debug, Parser, Clone, Default)]
#[command(version)]
struct Opt {
    /// Only accept 6-digit `#RRGGBB` colors
    #[arg(long)]
    no_shorthand: bool,

    /// Leave trailing commas in place; the manifest must not contain any
    #[arg(long)]
    keep_trailing_commas: bool,
}

impl Opt {
    fn options(&self) -> Options {
        Options {
            shorthand_hex: !self.no_shorthand,
            strip_trailing_commas: !self.keep_trailing_commas,
        }
    }

    fn run(&self) -> anyhow::Result<()> {
        let options = self.options();
        log::debug!("{options:?}");
        convert_file(Path::new(SOURCE_FILE), Path::new(DEST_FILE), &options)
            .with_context(|| format!("convert {SOURCE_FILE}"))?;
        println!("✓ Converted {SOURCE_FILE} to {DEST_FILE}");
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    Opt::parse().run()
}
