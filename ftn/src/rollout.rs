//! Per-step rows of a rollout and their CSV dump.
use anyhow::Result;
use ftn_core::record::{BufferedRecorder, Record};
use ftn_env::REWARD_SIZE;
use serde::Serialize;
use std::path::Path;

/// One step of an episode, as written to CSV.
///
/// The reward components are named after the nutrients of the fruits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRow {
    /// Episode number.
    pub episode: usize,
    /// Step number in the episode.
    pub step: usize,
    /// Row of the node after the step.
    pub row: usize,
    /// Column of the node after the step.
    pub column: usize,
    /// Protein component of the reward.
    pub protein: f32,
    /// Carbohydrates component of the reward.
    pub carbs: f32,
    /// Fats component of the reward.
    pub fats: f32,
    /// Vitamins component of the reward.
    pub vitamins: f32,
    /// Minerals component of the reward.
    pub minerals: f32,
    /// Water component of the reward.
    pub water: f32,
    /// Why the episode ended, empty while it goes on.
    pub termination: Option<String>,
}

impl TryFrom<&Record> for StepRow {
    type Error = anyhow::Error;

    fn try_from(record: &Record) -> Result<Self> {
        let reward = record.get_array1("reward")?;
        if reward.len() != REWARD_SIZE {
            return Err(anyhow::anyhow!(
                "Expected {} reward components, found {}",
                REWARD_SIZE,
                reward.len()
            ));
        }

        Ok(Self {
            episode: record.get_scalar("episode")? as _,
            step: record.get_scalar("step")? as _,
            row: record.get_scalar("row")? as _,
            column: record.get_scalar("column")? as _,
            protein: reward[0],
            carbs: reward[1],
            fats: reward[2],
            vitamins: reward[3],
            minerals: reward[4],
            water: reward[5],
            termination: record.get_string("termination").ok(),
        })
    }
}

/// Writes every buffered record as a CSV row.
pub fn write_csv(recorder: &BufferedRecorder, path: impl AsRef<Path>) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in recorder.iter() {
        wtr.serialize(StepRow::try_from(record)?)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Returns the element-wise mean of episode returns.
pub fn mean_return(returns: &[Vec<f64>]) -> Vec<f64> {
    let n = returns.len().max(1) as f64;
    let mut mean = vec![0.0; REWARD_SIZE];
    for r in returns {
        for (m, v) in mean.iter_mut().zip(r) {
            *m += v / n;
        }
    }
    mean
}
