//! Grid ingestion: text or pre-split rows into a validated rectangle.

use crate::error::BuildError;

/// Split newline-delimited text into rows of single-character labels.
///
/// Leading and trailing line breaks are dropped; every other character,
/// spaces included, is a label. `\r\n` line endings are accepted.
pub fn split_rows(s: &str) -> Vec<Vec<char>> {
    s.trim_matches(|c| c == '\n' || c == '\r')
        .lines()
        .map(|line| line.chars().collect())
        .collect()
}

/// Check that `rows` form a non-empty rectangle and return its
/// `(width, height)`.
pub fn dimensions<R: AsRef<[char]>>(rows: &[R]) -> Result<(usize, usize), BuildError> {
    let Some(first) = rows.first() else {
        return Err(BuildError::EmptyGrid);
    };
    let width = first.as_ref().len();
    if width == 0 {
        return Err(BuildError::EmptyGrid);
    }
    for (row, r) in rows.iter().enumerate() {
        let found = r.as_ref().len();
        if found != width {
            return Err(BuildError::InconsistentSize {
                row,
                expected: width,
                found,
            });
        }
    }
    Ok((width, rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
####
#..#
#..#
####";

    #[test]
    fn split_and_size() {
        let rows = split_rows(ROOM);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], vec!['#', '.', '.', '#']);
        assert_eq!(dimensions(&rows), Ok((4, 4)));
    }

    #[test]
    fn surrounding_line_breaks_ignored() {
        let rows = split_rows("\n.#\r\n#.\n");
        assert_eq!(rows, vec![vec!['.', '#'], vec!['#', '.']]);
    }

    #[test]
    fn spaces_are_labels() {
        let rows = split_rows(" . ");
        assert_eq!(rows, vec![vec![' ', '.', ' ']]);
    }

    #[test]
    fn jagged_rows() {
        let rows = split_rows("...\n..\n...");
        assert_eq!(
            dimensions(&rows),
            Err(BuildError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn empty_input() {
        assert_eq!(dimensions(&split_rows("")), Err(BuildError::EmptyGrid));
        assert_eq!(dimensions::<Vec<char>>(&[vec![]]), Err(BuildError::EmptyGrid));
    }

    #[test]
    fn accepts_slices() {
        let rows: [&[char]; 2] = [&['a', 'b'], &['c', 'd']];
        assert_eq!(dimensions(&rows), Ok((2, 2)));
    }
}
