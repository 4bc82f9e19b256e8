//! Utilities for interaction of policies and environments.
use crate::{
    record::{Record, RecordValue, Recorder},
    Env, Policy,
};
use anyhow::Result;
use log::info;

/// Run episodes with a policy and recorder.
///
/// Every step writes the record emitted by the environment, augmented with
/// `episode`, `step` and `reward`, to `recorder`. The return value holds the
/// return vector of each episode.
pub fn eval_with_recorder<E, P, R>(
    env: &mut E,
    policy: &mut P,
    n_episodes: usize,
    recorder: &mut R,
) -> Result<Vec<Vec<f64>>>
where
    E: Env,
    P: Policy<E>,
    R: Recorder,
{
    let mut rs = Vec::with_capacity(n_episodes);

    for episode in 0..n_episodes {
        let mut prev_obs = env.reset()?;
        let mut count_step = 0;
        let mut r_total = Vec::new();

        loop {
            let act = policy.sample(&prev_obs);
            let (step, mut record) = env.step(&act)?;
            accumulate(&mut r_total, &step.reward);

            record.merge_inplace(Record::from_slice(&[
                (
                    "reward",
                    RecordValue::Array1(step.reward.iter().map(|r| *r as f32).collect()),
                ),
                ("episode", RecordValue::Scalar(episode as _)),
                ("step", RecordValue::Scalar(count_step as _)),
            ]));
            recorder.write(record);
            count_step += 1;

            if step.is_done() {
                break;
            }
            prev_obs = step.obs;
        }

        info!(
            "Episode {:?}, {:?} steps, return = {:?}",
            episode, count_step, r_total
        );
        rs.push(r_total);
    }

    Ok(rs)
}

/// Adds `reward` element-wise to `total`, growing `total` on first use.
pub(crate) fn accumulate(total: &mut Vec<f64>, reward: &[f64]) {
    if total.len() < reward.len() {
        total.resize(reward.len(), 0.0);
    }
    for (t, r) in total.iter_mut().zip(reward) {
        *t += r;
    }
}

#[cfg(test)]
mod tests {
    use super::accumulate;

    #[test]
    fn test_accumulate_grows_and_sums() {
        let mut total = Vec::new();
        accumulate(&mut total, &[1.0, 2.0]);
        accumulate(&mut total, &[0.5, 0.5]);
        assert_eq!(total, vec![1.5, 2.5]);
    }
}
