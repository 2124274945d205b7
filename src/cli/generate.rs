//! Generate command implementation.
//!
//! Writes every background and logo variant into its imageset, followed
//! by the imageset's `Contents.json`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::{write_contents, ImagesetContents, MANIFEST_NAME};
use crate::error::{LaunchError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{generate_background, generate_logo, write_png};
use crate::types::asset::{BACKGROUND_IMAGESET, DEFAULT_CATALOG, LOGO_IMAGESET};
use crate::types::{BACKGROUNDS, LOGOS};

/// Generate launch-screen images
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Asset catalog directory to write imagesets into
    #[arg(long, short, default_value = DEFAULT_CATALOG)]
    pub out: PathBuf,

    /// Seed for star placement (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}

/// What a generation run wrote.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub backgrounds: Vec<PathBuf>,
    pub logos: Vec<PathBuf>,
    pub manifests: Vec<PathBuf>,
}

impl Summary {
    /// Number of PNG files written.
    pub fn image_count(&self) -> usize {
        self.backgrounds.len() + self.logos.len()
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let summary = generate_catalog(&args.out, &mut rng, &printer)?;

    printer.status(
        "Finished",
        &format!(
            "{} in {}",
            plural(summary.image_count(), "launch image", "launch images"),
            display_path(&args.out)
        ),
    );

    Ok(())
}

/// Generate all imagesets under `root`.
pub fn generate_catalog<R: Rng + ?Sized>(
    root: &Path,
    rng: &mut R,
    printer: &Printer,
) -> Result<Summary> {
    let bg_dir = root.join(BACKGROUND_IMAGESET);
    let logo_dir = root.join(LOGO_IMAGESET);
    create_dir(&bg_dir)?;
    create_dir(&logo_dir)?;

    let mut summary = Summary::default();

    for asset in BACKGROUNDS {
        let img = generate_background(asset.width, asset.height, rng)?;
        let path = bg_dir.join(asset.filename);
        write_png(&img, &path)?;
        printer.status(
            "Created",
            &format!(
                "{} {}",
                asset.filename,
                printer.dim(&format!("({}x{})", asset.width, asset.height))
            ),
        );
        summary.backgrounds.push(path);
    }

    for asset in LOGOS {
        let img = generate_logo(asset.size)?;
        let path = logo_dir.join(asset.filename);
        write_png(&img, &path)?;
        printer.status(
            "Created",
            &format!(
                "{} {}",
                asset.filename,
                printer.dim(&format!("({}x{})", asset.size, asset.size))
            ),
        );
        summary.logos.push(path);
    }

    let bg_contents = ImagesetContents::new(BACKGROUNDS.iter().map(|a| (a.filename, a.scale)));
    let logo_contents = ImagesetContents::new(LOGOS.iter().map(|a| (a.filename, a.scale)));

    for (dir, contents) in [(&bg_dir, bg_contents), (&logo_dir, logo_contents)] {
        write_contents(dir, &contents)?;
        let path = dir.join(MANIFEST_NAME);
        printer.info("Wrote", &display_path(&path));
        summary.manifests.push(path);
    }

    Ok(summary)
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| LaunchError::Io {
        path: dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })
}
