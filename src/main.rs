use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trading_gym::{
    agent::RandomAgent,
    config::EnvConfig,
    constants::{
        files::{DATA_PATH, TRAINING_PATH},
        synthetic::TICKS,
        TICKER,
    },
    data::{load_dataset, save_dataset, synthetic_candles, Dataset},
    env::FiveActionEnv,
    gym::Actions,
    history::MetaHistory,
};

#[derive(Parser)]
#[command(name = "trading_gym")]
#[command(about = "Five-action trading environment driven by a random agent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run episodes against a dataset file, or a synthetic series when none is given
    Run {
        #[arg(short, long)]
        data: Option<PathBuf>,

        #[arg(short, long)]
        config: Option<PathBuf>,

        #[arg(short, long, default_value_t = 10)]
        episodes: usize,

        #[arg(short, long, default_value_t = TICKS)]
        ticks: usize,

        #[arg(short, long)]
        seed: Option<u64>,

        #[arg(short, long)]
        window_size: Option<usize>,

        #[arg(long, default_value_t = false)]
        chart: bool,
    },
    /// Write a synthetic dataset file
    Generate {
        #[arg(short, long)]
        out: Option<PathBuf>,

        #[arg(short, long, default_value_t = TICKS)]
        ticks: usize,

        #[arg(short, long, default_value_t = 1)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("{}", "Start".green());

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run {
            data,
            config,
            episodes,
            ticks,
            seed,
            window_size,
            chart,
        }) => {
            let mut config = match config {
                Some(path) => EnvConfig::from_json_file(&path)
                    .with_context(|| format!("failed to read config {}", path.display()))?,
                None => EnvConfig::default(),
            };
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(window_size) = window_size {
                config.window_size = window_size;
            }

            let dataset = match data {
                Some(path) => load_dataset(&path)
                    .with_context(|| format!("failed to load dataset {}", path.display()))?,
                None => Dataset::from_candles(synthetic_candles(ticks, config.seed)),
            };

            run(dataset, config, episodes, chart)?;
        }
        Some(Commands::Generate { out, ticks, seed }) => {
            let out = out.unwrap_or_else(|| PathBuf::from(DATA_PATH).join(format!("{TICKER}.bin")));
            let dataset = Dataset::from_candles(synthetic_candles(ticks, seed));
            save_dataset(&out, &dataset)
                .with_context(|| format!("failed to write dataset {}", out.display()))?;
        }
        None => {
            let config = EnvConfig::default();
            let dataset = Dataset::from_candles(synthetic_candles(TICKS, config.seed));
            run(dataset, config, 10, false)?;
        }
    }

    println!("{}", "End".green());
    Ok(())
}

fn run(dataset: Dataset, config: EnvConfig, episodes: usize, chart: bool) -> Result<()> {
    let mut agent = RandomAgent::new(config.seed);
    let mut env = FiveActionEnv::new(dataset.features, dataset.candles, config)
        .context("failed to build environment")?;
    let mut meta_history = MetaHistory::default();

    info!(env = %env.base.id, ticks = env.base.prices.len(), episodes, "running random agent");

    for episode in 0..episodes {
        let start = Instant::now();
        env.reset();

        loop {
            let action = agent.act::<Actions>();
            let (_, _, done, _) = env.step(action);
            if done {
                break;
            }
        }

        let trades = env.trade_history().len();
        let sharpe = env.base.get_sharpe_ratio();
        meta_history.record(&env.base.history, trades, sharpe);

        let profit_pct = (env.base.total_profit - 1.0) * 100.0;
        let profit_str = if profit_pct >= 0.0 {
            format!("{:.2}%", profit_pct).green()
        } else {
            format!("{:.2}%", profit_pct).red()
        };

        println!(
            "{} {} - Profit: {} cumulative reward {:.2} | Sharpe: {} | Trades: {} | ticks {} time {:.2}s",
            "Episode".bright_blue(),
            episode.to_string().bright_blue().bold(),
            profit_str,
            env.base.total_reward,
            format!("{:.3}", sharpe).yellow(),
            trades,
            env.base.current_tick - env.base.start_tick,
            start.elapsed().as_secs_f32(),
        );

        #[cfg(feature = "debug_training")]
        if chart {
            let dir = PathBuf::from(TRAINING_PATH).join("episodes").join(episode.to_string());
            env.render_all(&dir)
                .map_err(|err| anyhow::anyhow!("failed to chart episode {episode}: {err}"))?;
        }
    }

    #[cfg(feature = "debug_training")]
    if chart {
        meta_history
            .chart(&PathBuf::from(TRAINING_PATH).join("gens"))
            .map_err(|err| anyhow::anyhow!("failed to chart run: {err}"))?;
    }

    #[cfg(not(feature = "debug_training"))]
    let _ = chart;

    println!(
        "{} over {} episodes: {}",
        "Average final profit".bright_white().bold(),
        meta_history.len(),
        format!("{:.4}", meta_history.avg_final_profit()).bright_white()
    );

    Ok(())
}
