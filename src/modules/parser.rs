use super::grid::{Cell, Grid, GridError};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Builds a grid from puzzle text: `0` is a wall, `S` and `F` are the
/// start and finish markers, anything else is floor. Rows shorter than
/// the widest row are right-padded with walls so that missing trailing
/// cells never become passable.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let lines: Vec<&str> = text.lines().collect();
    let columns = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let mut cells = Vec::with_capacity(lines.len() * columns);
    for line in &lines {
        let mut filled = 0;
        for c in line.chars() {
            cells.push(match c {
                '0' => Cell::Wall,
                'S' => Cell::Start,
                'F' => Cell::Finish,
                _ => Cell::Floor,
            });
            filled += 1;
        }
        cells.resize(cells.len() + columns - filled, Cell::Wall);
    }

    Grid::new(lines.len(), columns, cells)
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);

    let mut text = String::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} in given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        text.push_str(&line);
        text.push('\n');
    }

    Ok(parse_grid(&text)?)
}
