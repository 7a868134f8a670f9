//! Rendering seam.
//!
//! Drawing is kept behind [`Render`] so the mapping code never depends on an
//! output technology. [`TextDiagram`] is the plain-text implementation the CLI
//! uses; other front ends implement the trait themselves.

use std::collections::HashMap;

use crate::fretboard::{FretRange, Placement};
use crate::tuning::Tuning;

pub trait Render {
    fn render(&self, placements: &[Placement], tuning: &Tuning, range: FretRange) -> String;
}

/// Fret grid with one row per string, string 1 on top
///
/// ```text
///     0   1   2   3   4   5
/// E4 |E---F-------G-------A---|
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextDiagram {
    /// Characters per fret cell
    pub cell_width: usize,
}

impl Default for TextDiagram {
    fn default() -> Self {
        Self { cell_width: 4 }
    }
}

impl Render for TextDiagram {
    fn render(&self, placements: &[Placement], tuning: &Tuning, range: FretRange) -> String {
        let labels = tuning.string_labels();
        let label_width = labels.iter().map(String::len).max().unwrap_or(0);

        let mut cells: HashMap<(usize, i32), String> = HashMap::new();
        for placement in placements {
            cells.insert((placement.string, placement.fret), placement.note.pitch_class().to_string());
        }

        // Cells grow so the longest note name or fret number keeps one trailing dash
        let widest = cells
            .values()
            .map(String::len)
            .chain(range.frets().map(|fret| fret.to_string().len()))
            .max()
            .unwrap_or(0);
        let width = self.cell_width.max(3).max(widest + 1);

        let mut out = String::new();

        // Fret numbers
        out.push_str(&" ".repeat(label_width + 2));
        for fret in range.frets() {
            out.push_str(&format!("{:<width$}", fret, width = width));
        }
        out.push('\n');

        for (string, label) in (1..).zip(labels.iter()) {
            out.push_str(&format!("{:<lw$} |", label, lw = label_width));
            for fret in range.frets() {
                let cell = match cells.get(&(string, fret)) {
                    Some(name) => format!("{:-<width$}", name, width = width),
                    None => "-".repeat(width),
                };
                out.push_str(&cell);
            }
            out.push_str("|\n");
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::place_all;
    use crate::pitch::Pitch;

    #[test]
    fn test_single_string_diagram() {
        let tuning = Tuning::new(&["E4"]).unwrap();
        let range = FretRange::new(0, 3).unwrap();
        let notes: Vec<Pitch> = ["E4", "F#4", "G4"].iter().map(|n| Pitch::parse(n).unwrap()).collect();
        let placements = place_all(&notes, &tuning, range);

        let diagram = TextDiagram::default().render(&placements, &tuning, range);
        assert_eq!(diagram, "    0   1   2   3   \nE4 |E-------F#--G---|\n");
    }

    #[test]
    fn test_one_row_per_string() {
        let tuning = Tuning::standard();
        let diagram = TextDiagram::default().render(&[], &tuning, FretRange::default());
        let lines: Vec<&str> = diagram.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("E4 |"));
        assert!(lines[6].starts_with("E2 |"));
        assert!(lines[1..].iter().all(|line| line.len() == lines[1].len()));
    }

    #[test]
    fn test_long_note_names_widen_cells() {
        let tuning = Tuning::new(&["E4"]).unwrap();
        let range = FretRange::new(0, 3).unwrap();
        let notes: Vec<Pitch> = ["E4", "E###4"].iter().map(|n| Pitch::parse(n).unwrap()).collect();
        let placements = place_all(&notes, &tuning, range);

        let diagram = TextDiagram::default().render(&placements, &tuning, range);
        assert_eq!(diagram, "    0    1    2    3    \nE4 |E--------------E###-|\n");

        let notes: Vec<Pitch> = ["E4", "E##4"].iter().map(|n| Pitch::parse(n).unwrap()).collect();
        let placements = place_all(&notes, &tuning, range);
        let narrow = TextDiagram { cell_width: 3 }.render(&placements, &tuning, range);
        assert_eq!(narrow.lines().nth(1), Some("E4 |E-------E##-----|"));
    }
}
