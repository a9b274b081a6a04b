use ndarray::Array2;

use model::GameListener;

/// Presentation state rebuilt purely from game notifications.
pub struct TerminalRenderer {
    cells: Array2<Option<u32>>,
    score: u32,
    best: u32,
    status: Option<&'static str>,
}

impl TerminalRenderer {
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
            score: 0,
            best: 0,
            status: None,
        }
    }

    pub fn cells(&self) -> &Array2<Option<u32>> {
        &self.cells
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn status(&self) -> Option<&'static str> {
        self.status
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}

impl GameListener for TerminalRenderer {
    fn cell_changed(&mut self, row: usize, col: usize, value: Option<u32>) {
        self.cells[(row, col)] = value;
    }

    fn score_changed(&mut self, score: u32, _delta: u32) {
        self.score = score;
        self.best = self.best.max(score);
    }

    fn won(&mut self) {
        self.status = Some("YOU WIN!  [C] continue");
    }

    fn game_over(&mut self) {
        self.status = Some("GAME OVER  [R] new game");
    }

    fn reset(&mut self) {
        self.status = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{Board, Game, Side};
    use ndarray::arr2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn mirrors_game() {
        let mut game = Game::new(Board::new(StdRng::seed_from_u64(1)), TerminalRenderer::new(4));
        for side in Side::ALL.iter().cycle().take(40) {
            game.play(*side);
        }
        let mirrored = game.listener().cells().map(|v| v.unwrap_or(0));
        assert_eq!(mirrored, game.board().into_array());
        assert_eq!(game.listener().score(), game.score());
    }

    #[test]
    fn picks_up_existing_position() {
        let board = Board::from_array(
            arr2(&[[2, 4, 8, 16], [0; 4], [0; 4], [0, 0, 0, 2048]]),
            StdRng::seed_from_u64(3),
        );
        let game = Game::from_board(board, TerminalRenderer::new(4));
        let mirrored = game.listener().cells().map(|v| v.unwrap_or(0));
        assert_eq!(mirrored, game.board().into_array());
    }

    #[test]
    fn best_score_survives_reset() {
        let board = Board::from_array(
            arr2(&[[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]),
            StdRng::seed_from_u64(2),
        );
        let mut game = Game::from_board(board, TerminalRenderer::new(4));
        game.play(Side::Left);
        assert_eq!(game.listener().best(), 4);
        game.reset();
        assert_eq!(game.listener().score(), 0);
        assert_eq!(game.listener().best(), 4);
        assert_eq!(game.listener().status(), None);
    }

    #[test]
    fn status_messages() {
        let mut renderer = TerminalRenderer::new(4);
        renderer.won();
        assert!(renderer.status().unwrap().contains("WIN"));
        renderer.clear_status();
        renderer.game_over();
        assert!(renderer.status().unwrap().contains("GAME OVER"));
    }
}
