use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "natdoc")]
#[command(about = "Generate Lua declaration files from native catalogs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Generate one .lua declaration file per namespace")]
    Generate {
        #[arg(short, long = "input", help = "Catalog JSON file (repeatable)")]
        inputs: Vec<PathBuf>,

        #[arg(short, long = "url", help = "Catalog URL (repeatable)")]
        urls: Vec<String>,

        #[arg(short, long, help = "Output directory (overrides config)")]
        output: Option<PathBuf>,

        #[arg(short, long, help = "Configuration file [default: ./natdoc.toml]")]
        config: Option<PathBuf>,

        #[arg(long, help = "Build declarations without writing any file")]
        dry_run: bool,
    },

    #[command(about = "Show the effective configuration")]
    Config {
        #[arg(short, long, help = "Configuration file [default: ./natdoc.toml]")]
        config: Option<PathBuf>,

        #[arg(long, help = "Write the configuration to ./natdoc.toml if it does not exist")]
        init: bool,
    },
}
