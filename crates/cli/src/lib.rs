mod classify;
mod includes;
mod nativize;
mod relative;
mod scan;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use pathforge_core::registry::{ExtensionRegistry, RegistryConfig};

#[derive(Parser)]
#[command(
    name = "pathforge",
    version,
    about = "Path and asset classification for engine content directories",
    long_about = "Pathforge normalizes file-system paths, classifies files into semantic \
                  asset categories by extension, resolves textual include dependencies \
                  between files, and enumerates directory contents while containing \
                  per-entry failures."
)]
pub struct Cli {
    /// JSON file with extra extensions per category, merged into the
    /// built-in tables at startup
    #[arg(long, global = true, value_name = "FORMATS_JSON")]
    pub formats: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the contents of a directory
    #[command(
        long_about = "Lists the immediate children of a directory. By default only \
                      supported asset files are shown, in image, script, model order. \
                      Entries that cannot be read are skipped, not fatal."
    )]
    Scan {
        /// Directory to scan
        #[arg(value_name = "DIR")]
        path: PathBuf,
        /// List every file, not just supported assets
        #[arg(long)]
        all: bool,
        /// List subdirectories instead of files
        #[arg(long)]
        dirs: bool,
    },
    /// Report the category and native counterpart of a path
    Classify {
        /// Path to classify
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Print the engine-native counterpart of a foreign asset path
    Nativize {
        /// Path to nativize
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Resolve the transitive include dependencies of a file
    Includes {
        /// Root file to resolve
        #[arg(value_name = "FILE")]
        path: PathBuf,
    },
    /// Print a path relative to a base directory
    Relative {
        /// Path to relativize
        #[arg(value_name = "PATH")]
        path: String,
        /// Base directory; defaults to the working directory
        #[arg(long, value_name = "DIR")]
        base: Option<PathBuf>,
    },
    /// Open a directory in the system file browser
    Open {
        /// Directory to open
        #[arg(value_name = "DIR")]
        path: String,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = pathforge_core::logging::init("cli", true);

    let registry = build_registry(cli.formats.as_deref())?;

    match cli.command {
        Commands::Scan { path, all, dirs } => scan::run(&path, all, dirs, registry),
        Commands::Classify { path } => classify::run(&path, registry),
        Commands::Nativize { path } => nativize::run(&path, registry),
        Commands::Includes { path } => includes::run(&path),
        Commands::Relative { path, base } => relative::run(&path, base.as_deref()),
        Commands::Open { path } => {
            pathforge_core::shell::open_in_file_browser(&path);
            Ok(())
        }
    }
}

fn build_registry(
    formats: Option<&std::path::Path>,
) -> pathforge_core::Result<Arc<ExtensionRegistry>> {
    let mut builder = ExtensionRegistry::builder();
    if let Some(path) = formats {
        let config = RegistryConfig::load(path)?;
        builder = builder.apply_config(&config);
    }
    Ok(Arc::new(builder.build()))
}
