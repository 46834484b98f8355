mod renderthing;

use liblife::{board::CellState, Game};
use rand::{rngs::StdRng, Rng, SeedableRng};
use renderthing::{frame::RenderFrame, window::RendererWindowConfig, Renderer};

use crate::config::Config;

/// Runs the window loop until close: each frame draws the current
/// generation, then advances it. Single-threaded end to end; the frame
/// delay paces the whole loop.
pub fn run(config: Config, game: Game) -> anyhow::Result<()> {
    let mut scene = Scene {
        game,
        // Cosmetic only; the simulation never sees this RNG.
        color_rng: StdRng::from_os_rng(),
    };

    let renderer = Renderer::new(RendererWindowConfig {
        title: "Conway's Game of Life".to_owned(),
        width: config.window_width(),
        height: config.window_height(),
        frame_delay: config.frame_delay,
        draw_callback: Box::new(move |frame| scene.draw_and_advance(frame)),
    })?;

    renderer.run()
}

struct Scene {
    game: Game,
    color_rng: StdRng,
}

impl Scene {
    fn draw_and_advance(&mut self, mut frame: RenderFrame) {
        // Cell size comes from the frame itself, so the grid fills the
        // window at any surface scale or size.
        let cell_width = frame.width / self.game.board.width as u32;
        let cell_height = frame.height / self.game.board.height as u32;

        frame.fill([0, 0, 0, 255]);

        for (cell_pos, cell) in self.game.board.enumerate_cells() {
            if *cell != CellState::Alive {
                continue;
            }

            // A fresh random color per live cell per frame, as the
            // original did. The flicker is intentional.
            let color = [
                self.color_rng.random(),
                self.color_rng.random(),
                self.color_rng.random(),
                255,
            ];

            frame.draw_square(
                cell_pos.x as u32 * cell_width,
                cell_pos.y as u32 * cell_height,
                cell_width,
                cell_height,
                color,
            );
        }

        self.game.tick();
    }
}
