//! Horae studio — file-backed demo of the clock widget.
//!
//! Renders a live clock into an SVG file, re-written once per second, and
//! can rasterize the final frame to PNG. Point a viewer with auto-reload
//! at the output file to watch it tick.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use horae_engine::logging;
use horae_engine::time::ChronoTzProvider;
use horae_ui::{Clock, ClockOptions, Host};

/// Host that mirrors every render into a file.
struct FileHost {
    path: PathBuf,
}

impl FileHost {
    fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Host for FileHost {
    fn replace_markup(&mut self, markup: &str) {
        if let Err(err) = std::fs::write(&self.path, markup) {
            log::warn!("failed to write {}: {err}", self.path.display());
        }
    }
}

struct StudioConfig {
    size: f32,
    timezone: Option<String>,
    out: PathBuf,
    run_for: Duration,
    png: bool,
}

impl StudioConfig {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self {
            size: 400.0,
            timezone: None,
            out: PathBuf::from("clock.svg"),
            run_for: Duration::from_secs(10),
            png: false,
        };
        while let Some(arg) = args.next() {
            let mut value = |name: &str| {
                args.next().with_context(|| format!("{name} needs a value"))
            };
            match arg.as_str() {
                "--size" => config.size = value("--size")?.parse().context("--size")?,
                "--tz" => config.timezone = Some(value("--tz")?),
                "--out" => config.out = PathBuf::from(value("--out")?),
                "--seconds" => {
                    config.run_for = Duration::from_secs(value("--seconds")?.parse().context("--seconds")?)
                }
                "--png" => config.png = true,
                "--help" | "-h" => {
                    println!(
                        "usage: horae-studio [--size PX] [--tz ZONE] [--out FILE.svg] [--seconds N] [--png]"
                    );
                    std::process::exit(0);
                }
                other => bail!("unknown argument {other:?} (try --help)"),
            }
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    logging::init_logging(None);
    let config = StudioConfig::from_args(std::env::args().skip(1))?;

    println!(
        "horae-studio: {} px clock, {} time -> {}",
        config.size,
        config.timezone.as_deref().unwrap_or("local"),
        config.out.display()
    );

    let mut options = ClockOptions::new()
        .size(config.size)
        .timezone_provider(Arc::new(ChronoTzProvider));
    if let Some(tz) = &config.timezone {
        options = options.timezone(tz.clone());
    }

    let mut clock = Clock::new(Box::new(FileHost::new(&config.out)), options);
    clock.start();
    thread::sleep(config.run_for);
    clock.stop();

    if config.png {
        let png = config.out.with_extension("png");
        rasterize(&config.out, &png)?;
        println!("wrote {}", png.display());
    }

    Ok(())
}

/// Rasterizes the SVG at `svg` into a PNG next to it.
fn rasterize(svg: &Path, png: &Path) -> Result<()> {
    use resvg::{tiny_skia, usvg};

    let data = std::fs::read(svg).with_context(|| format!("reading {}", svg.display()))?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
        .context("parsing rendered markup")?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .context("allocating pixmap")?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    pixmap
        .save_png(png)
        .with_context(|| format!("writing {}", png.display()))?;
    Ok(())
}
