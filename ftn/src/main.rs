use anyhow::Result;
use clap::Parser;
use ftn::{mean_return, write_csv, PathPolicy, RandomPolicy, RandomPolicyConfig};
use ftn_core::{record::BufferedRecorder, util, Configurable, Env as _, Persist};
use ftn_env::{FruitTreeNavigation, FruitTreeNavigationConfig, RewardAttribution};
use log::info;
use std::path::PathBuf;

/// Runs Fruit Tree Navigation episodes with a fixed policy.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Depth of the tree, 5, 6 or 7.
    #[arg(long, default_value_t = 6)]
    depth: usize,

    /// Step budget of an episode, 0 for no limit.
    #[arg(long, default_value_t = 500)]
    max_steps: usize,

    /// Pay the reward of the departed node instead of the arrived one.
    #[arg(long)]
    departed: bool,

    /// YAML configuration of the environment, overriding the flags above.
    #[arg(long)]
    config: Option<PathBuf>,

    /// YAML configuration of a path policy. A random policy is used without it.
    #[arg(long)]
    policy: Option<PathBuf>,

    /// The number of episodes.
    #[arg(long, default_value_t = 10)]
    episodes: usize,

    /// Seed of the random policy.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Writes per-step records to this CSV file.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn env_config(args: &Args) -> Result<FruitTreeNavigationConfig> {
    if let Some(path) = &args.config {
        return FruitTreeNavigationConfig::load(path);
    }

    let reward_attribution = if args.departed {
        RewardAttribution::Departed
    } else {
        RewardAttribution::Arrived
    };
    Ok(FruitTreeNavigationConfig::default()
        .depth(args.depth)
        .max_steps(args.max_steps)
        .reward_attribution(reward_attribution))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let env_config = env_config(&args)?;
    info!("{:?}", env_config);
    let mut env = FruitTreeNavigation::build(&env_config, args.seed as i64)?;
    let mut recorder = BufferedRecorder::new();

    let returns = match &args.policy {
        Some(path) => {
            let mut policy = PathPolicy::build_from_path(path)?;
            util::eval_with_recorder(&mut env, &mut policy, args.episodes, &mut recorder)?
        }
        None => {
            let mut policy = RandomPolicy::build(RandomPolicyConfig { seed: args.seed });
            util::eval_with_recorder(&mut env, &mut policy, args.episodes, &mut recorder)?
        }
    };
    info!(
        "Mean return over {} episodes: {:?}",
        returns.len(),
        mean_return(&returns)
    );

    if let Some(path) = &args.csv {
        write_csv(&recorder, path)?;
        info!("Wrote {} steps to {:?}", recorder.len(), path);
    }

    Ok(())
}
