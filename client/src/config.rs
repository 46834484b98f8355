use std::time::Duration;

use anyhow::{bail, ensure, Context};

/// Startup configuration. The grid dimensions are the primary values;
/// the window size is derived from them and the cell size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub grid_width: usize,
    pub grid_height: usize,
    pub cell_size: usize,
    pub frame_delay: Duration,
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_width: 160,
            grid_height: 120,
            cell_size: 5,
            frame_delay: Duration::from_millis(100),
            seed: None,
        }
    }
}

impl Config {
    pub fn from_args<'a, I>(mut args: I) -> anyhow::Result<Self>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut config = Self::default();

        while let Some(flag) = args.next() {
            match flag {
                "--grid-width" => config.grid_width = parse_value(&mut args, flag)?,
                "--grid-height" => config.grid_height = parse_value(&mut args, flag)?,
                "--cell-size" => config.cell_size = parse_value(&mut args, flag)?,
                "--delay-ms" => {
                    config.frame_delay = Duration::from_millis(parse_value(&mut args, flag)?)
                }
                "--seed" => config.seed = Some(parse_value(&mut args, flag)?),
                _ => bail!("Unknown flag {flag:?}"),
            }
        }

        ensure!(
            config.grid_width > 0 && config.grid_height > 0,
            "Grid dimensions must be positive"
        );
        ensure!(config.cell_size > 0, "Cell size must be positive");

        Ok(config)
    }

    pub fn window_width(&self) -> usize {
        self.grid_width * self.cell_size
    }

    pub fn window_height(&self) -> usize {
        self.grid_height * self.cell_size
    }
}

fn parse_value<'a, I, T>(args: &mut I, flag: &str) -> anyhow::Result<T>
where
    I: Iterator<Item = &'a str>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    args.next()
        .with_context(|| format!("Missing value for {flag}"))?
        .parse()
        .with_context(|| format!("Bad value for {flag}"))
}
