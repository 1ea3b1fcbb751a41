use anyhow::{Context, Result};
use clap::Parser;
use slide_maze::modules::{parser, path_finder::PathFinder, renderer};
use slide_maze::CLIArgs;
use std::time::Instant;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let grid = parser::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read grid from given file({}).",
            args.input_path.display()
        )
    })?;

    let timer = Instant::now();
    let mut path_finder = PathFinder::new(grid);
    let path = path_finder.find_shortest_path();
    let elapsed = timer.elapsed();

    print!("{}", renderer::render_path(&path));
    println!("Time taken: {} ms", elapsed.as_millis());

    Ok(())
}
