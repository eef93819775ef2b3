use std::path::PathBuf;

use clap::Parser;
use sln2csproj::config::ColorMode;
use sln2csproj::domain::value_objects::PlacementMode;

/// sln2csproj - generate an IntelliSense-only C# project for a legacy
/// ASP.NET Web Site solution
#[derive(Parser, Debug)]
#[command(name = "sln2csproj")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Writes <out-dir>/<Website>/<Website>.intellisense.csproj and fake_<Website>.sln next to it."
)]
pub struct Cli {
    /// Path to the .sln file
    #[arg(value_name = "SLN")]
    pub sln: PathBuf,

    /// Which Web Site to convert (1-based, clamped into range)
    #[arg(long, value_name = "N")]
    pub pick: Option<usize>,

    /// Output root, relative to the solution directory unless absolute
    #[arg(long, visible_alias = "outDir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// How referenced binaries are placed
    #[arg(long, value_enum)]
    pub mode: Option<PlacementMode>,

    /// List the Web Sites in the solution and exit without writing
    #[arg(long)]
    pub check: bool,

    /// Print where every referenced binary was found
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format for CI (newline-delimited JSON)
    #[arg(long)]
    pub json: bool,

    /// When to use colors
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
}
