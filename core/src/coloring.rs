use serde::{Deserialize, Serialize};

use crate::*;

/// Mutually exclusive visual states a scored cell is painted with.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStyle {
    Correct,
    Present,
    Absent,
}

impl From<LetterScore> for CellStyle {
    fn from(score: LetterScore) -> Self {
        match score {
            LetterScore::Correct => Self::Correct,
            LetterScore::Present => Self::Present,
            LetterScore::Absent => Self::Absent,
        }
    }
}

/// Drawing surface the engine writes cells and styles to, addressed by
/// `(row, col)`. The engine never reads visual state back.
pub trait GridRenderer {
    fn create_cell(&mut self, pos: Coord2);
    fn set_cell_text(&mut self, pos: Coord2, text: Option<char>);
    fn add_cell_style(&mut self, pos: Coord2, style: CellStyle);
}

/// Creates every cell of the board once, in row-major order.
pub fn build_grid<R: GridRenderer + ?Sized>(renderer: &mut R, config: BoardConfig) {
    for row in 0..config.rows {
        for col in 0..config.cols {
            renderer.create_cell((row, col));
        }
    }
}

/// Applies a verdict to the cells of `row`: exactly one style per cell,
/// `verdict[i]` deciding column `i`. Re-applying the same verdict yields the
/// same visible state.
pub fn apply_verdict<R: GridRenderer + ?Sized>(renderer: &mut R, row: Coord, verdict: &Verdict) {
    for (col, &score) in verdict.scores().iter().enumerate() {
        renderer.add_cell_style((row, col as Coord), score.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeMap;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct RecordingRenderer {
        created: Vec<Coord2>,
        styles: BTreeMap<Coord2, Vec<CellStyle>>,
    }

    impl GridRenderer for RecordingRenderer {
        fn create_cell(&mut self, pos: Coord2) {
            self.created.push(pos);
        }

        fn set_cell_text(&mut self, _pos: Coord2, _text: Option<char>) {}

        fn add_cell_style(&mut self, pos: Coord2, style: CellStyle) {
            self.styles.entry(pos).or_default().push(style);
        }
    }

    #[test]
    fn build_grid_creates_every_cell_once() {
        let mut renderer = RecordingRenderer::default();

        build_grid(&mut renderer, BoardConfig::CLASSIC);

        assert_eq!(renderer.created.len(), 30);
        assert_eq!(renderer.created[0], (0, 0));
        assert_eq!(renderer.created[29], (5, 4));
    }

    #[test]
    fn verdict_symbols_decide_the_style_per_column() {
        let mut renderer = RecordingRenderer::default();
        let verdict = Verdict::from_symbols("GYBYG", 5).unwrap();

        apply_verdict(&mut renderer, 2, &verdict);

        assert_eq!(renderer.styles.len(), 5);
        assert_eq!(renderer.styles[&(2, 0)], [CellStyle::Correct]);
        assert_eq!(renderer.styles[&(2, 1)], [CellStyle::Present]);
        assert_eq!(renderer.styles[&(2, 2)], [CellStyle::Absent]);
        assert_eq!(renderer.styles[&(2, 3)], [CellStyle::Present]);
        assert_eq!(renderer.styles[&(2, 4)], [CellStyle::Correct]);
    }

    #[test]
    fn reapplying_a_verdict_adds_no_conflicting_style() {
        let mut renderer = RecordingRenderer::default();
        let verdict = Verdict::from_symbols("BBBBB", 5).unwrap();

        apply_verdict(&mut renderer, 0, &verdict);
        apply_verdict(&mut renderer, 0, &verdict);

        for col in 0..5 {
            let styles = &renderer.styles[&(0, col)];
            assert!(styles.iter().all(|&style| style == CellStyle::Absent));
        }
    }
}
