//! Headless front-end for the editor.
//!
//! Loads an image, replays a string of editor keys against it and writes
//! the result:
//!
//! ```text
//! pixelfilter -i CITY.jpg -o out.png gvb
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pixelfilter::editor::KEY_BINDINGS;
use pixelfilter::io::save_grid;
use pixelfilter::{BorderPolicy, Channel, Editor, FilterParams};

#[derive(Parser, Debug)]
#[command(about = "Apply single-key image filters to a picture", long_about = None)]
struct Args {
    /// Image to edit.
    #[arg(short, long, default_value = "CITY.jpg")]
    input: PathBuf,
    /// Where to write the edited image; the extension picks the format.
    #[arg(short, long, required_unless_present = "list_keys")]
    output: Option<PathBuf>,
    /// TOML file overriding the default filter parameters.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    blur_radius: Option<usize>,
    #[arg(long)]
    contrast: Option<f64>,
    #[arg(long)]
    tint: Option<f64>,
    #[arg(long)]
    tint_channel: Option<Channel>,
    /// Leave blur border pixels transparent instead of copying them.
    #[arg(long)]
    transparent_border: bool,
    /// Print the key bindings and exit.
    #[arg(long)]
    list_keys: bool,
    /// Editor keys to apply in order, e.g. "hgv" or "gbr".
    #[arg(default_value = "")]
    keys: String,
}

impl Args {
    fn params(&self) -> Result<FilterParams> {
        let mut params = match &self.config {
            Some(path) => FilterParams::load(path)
                .with_context(|| format!("loading parameters from {}", path.display()))?,
            None => FilterParams::default(),
        };
        if let Some(radius) = self.blur_radius {
            params.blur_radius = radius;
        }
        if let Some(factor) = self.contrast {
            params.contrast_factor = factor;
        }
        if let Some(factor) = self.tint {
            params.tint_factor = factor;
        }
        if let Some(channel) = self.tint_channel {
            params.tint_channel = channel;
        }
        if self.transparent_border {
            params.blur_border = BorderPolicy::Transparent;
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_keys {
        println!("Available keys:");
        for (key, command) in KEY_BINDINGS {
            println!("{key}: {command}");
        }
        return Ok(());
    }

    let output = args.output.clone().context("--output is required")?;
    let params = args.params()?;
    let mut editor = Editor::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let applied = editor
        .apply_keys(&args.keys, &params)
        .with_context(|| format!("applying keys {:?}", args.keys))?;
    log::info!("applied {} command(s)", applied.len());

    save_grid(editor.current(), &output)
        .with_context(|| format!("writing {}", output.display()))?;
    Ok(())
}
