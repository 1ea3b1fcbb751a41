use super::direction::Direction;
use super::grid::Coordinate;
use std::fmt::Write;

/// Turns an ordered route into a 1-indexed step list. Positions print as
/// (column, row), both 1-based; an empty route becomes a single
/// "No path found." line.
pub fn render_path(path: &[Coordinate]) -> String {
    let mut output = String::new();

    if path.is_empty() {
        output.push_str("No path found.\n");
        return output;
    }

    output.push_str("Path found:\n");
    for (ind, (row, column)) in path.iter().enumerate() {
        if ind == 0 {
            let _ = writeln!(output, "1. Start at ({}, {})", column + 1, row + 1);
        } else {
            let (prev_row, prev_column) = path[ind - 1];
            let direction = if prev_row < *row {
                Direction::Down
            } else if prev_row > *row {
                Direction::Up
            } else if prev_column < *column {
                Direction::Right
            } else {
                Direction::Left
            };
            let _ = writeln!(
                output,
                "{}. Move to {} ({}, {})",
                ind + 1,
                direction,
                column + 1,
                row + 1
            );
        }
    }
    let _ = writeln!(output, "{}. Done!", path.len() + 1);

    output
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn it_reports_a_missing_path() {
        assert_eq!(render_path(&[]), "No path found.\n");
    }

    #[test]
    fn it_renders_a_single_cell_route() {
        assert_eq!(
            render_path(&[(2, 1)]),
            "Path found:\n1. Start at (2, 3)\n2. Done!\n"
        );
    }

    #[test]
    fn it_renders_numbered_steps() {
        let path = [(0, 0), (0, 1), (2, 1), (2, 2)];
        assert_eq!(
            render_path(&path),
            "Path found:\n\
             1. Start at (1, 1)\n\
             2. Move to Right (2, 1)\n\
             3. Move to Down (2, 3)\n\
             4. Move to Right (3, 3)\n\
             5. Done!\n"
        );
    }

    #[test]
    fn it_names_all_directions() {
        let path = [(1, 1), (1, 2), (2, 2), (2, 0), (0, 0)];
        let text = render_path(&path);
        assert!(text.contains("Move to Right"));
        assert!(text.contains("Move to Down"));
        assert!(text.contains("Move to Left"));
        assert!(text.contains("Move to Up"));
    }
}
