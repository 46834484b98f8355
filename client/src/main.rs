use std::env;

use liblife::{rule::Rule, seed, Game};
use log::info;
use rand::{rngs::StdRng, SeedableRng};

mod config;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = config::Config::from_args(args.iter().map(String::as_str))?;

    let mut seed_rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let board = seed::starting_board(config.grid_width, config.grid_height, &mut seed_rng)?;
    let game = Game::new(board, Rule::default());

    info!(
        "Starting {}x{} board, {}px cells, {:?} frame delay, seed {:?}",
        config.grid_width, config.grid_height, config.cell_size, config.frame_delay, config.seed
    );

    renderer::run(config, game)
}
