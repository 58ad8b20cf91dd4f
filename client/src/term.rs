use colored::Colorize;
use gridle_core as game;
use game::ToNdIndex;
use ndarray::Array2;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct TermCell {
    letter: Option<char>,
    style: Option<game::CellStyle>,
}

/// Repaintable terminal board, the reference `GridRenderer`: scored letters
/// come out bright green / bright yellow / dimmed, like the physical game.
#[derive(Clone, Debug)]
pub struct TermBoard {
    cells: Array2<TermCell>,
}

impl TermBoard {
    pub fn new(config: game::BoardConfig) -> Self {
        Self {
            cells: Array2::default((config.rows as usize, config.cols as usize)),
        }
    }

    /// Renders the whole board as bordered rows of colored letters.
    pub fn render(&self) -> String {
        let (rows, cols) = self.cells.dim();
        let border = "-".repeat(cols * 4 + 1);

        let mut out = String::new();
        for row in 0..rows {
            out.push_str(&border);
            out.push('\n');
            for col in 0..cols {
                let cell = self.cells[[row, col]];
                let letter = cell.letter.unwrap_or(' ').to_string();
                let painted = match cell.style {
                    Some(game::CellStyle::Correct) => letter.bright_green().to_string(),
                    Some(game::CellStyle::Present) => letter.bright_yellow().to_string(),
                    Some(game::CellStyle::Absent) => letter.bright_black().to_string(),
                    None => letter,
                };
                out.push_str("| ");
                out.push_str(&painted);
                out.push(' ');
            }
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }
}

impl game::GridRenderer for TermBoard {
    fn create_cell(&mut self, pos: game::Coord2) {
        self.cells[pos.to_nd_index()] = TermCell::default();
    }

    fn set_cell_text(&mut self, pos: game::Coord2, text: Option<char>) {
        self.cells[pos.to_nd_index()].letter = text;
    }

    fn add_cell_style(&mut self, pos: game::Coord2, style: game::CellStyle) {
        self.cells[pos.to_nd_index()].style = Some(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game::GridRenderer;

    #[test]
    fn letters_and_borders_show_up_in_the_rendering() {
        let mut board = TermBoard::new(game::BoardConfig::CLASSIC);

        board.set_cell_text((0, 0), Some('C'));
        board.add_cell_style((0, 0), game::CellStyle::Correct);

        let output = board.render();
        assert!(output.contains('C'));
        assert!(output.starts_with("---------------------"));
        assert_eq!(output.lines().count(), 13);
    }

    #[test]
    fn clearing_a_cell_blanks_it_again() {
        let mut board = TermBoard::new(game::BoardConfig::CLASSIC);

        board.set_cell_text((2, 3), Some('X'));
        board.set_cell_text((2, 3), None);

        assert!(!board.render().contains('X'));
    }
}
