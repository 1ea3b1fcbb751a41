pub mod modules;

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
}
