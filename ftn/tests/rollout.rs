use anyhow::Result;
use ftn::{mean_return, write_csv, PathPolicy, RandomPolicy, RandomPolicyConfig};
use ftn_core::{record::BufferedRecorder, util, Configurable, Env as _};
use ftn_env::{FruitTreeNavigation, FruitTreeNavigationConfig, RewardTable};
use std::fs;
use tempdir::TempDir;
use test_log::test;

#[test]
fn test_path_policy_from_yaml_to_csv() -> Result<()> {
    let dir = TempDir::new("ftn_rollout")?;
    let policy_path = dir.path().join("path.yaml");
    fs::write(&policy_path, "actions:\n  - Right\n  - Right\n  - Left\n")?;

    let config = FruitTreeNavigationConfig::default().depth(5).max_steps(0);
    let mut env = FruitTreeNavigation::build(&config, 0)?;
    let mut policy = PathPolicy::build_from_path(&policy_path)?;
    let mut recorder = BufferedRecorder::new();
    let returns = util::eval_with_recorder(&mut env, &mut policy, 2, &mut recorder)?;

    let leaf = RewardTable::shared(5)?.fruits().column(2).to_vec();
    assert_eq!(returns, vec![leaf.clone(), leaf.clone()]);
    assert_eq!(mean_return(&returns), leaf);

    let csv_path = dir.path().join("steps.csv");
    write_csv(&recorder, &csv_path)?;
    let text = fs::read_to_string(&csv_path)?;
    let lines = text.lines().collect::<Vec<_>>();

    assert_eq!(
        lines[0],
        "episode,step,row,column,protein,carbs,fats,vitamins,minerals,water,termination"
    );
    assert_eq!(lines.len(), 1 + 10);
    assert!(lines[1].starts_with("0,0,1,1,0.0,"));
    assert!(lines[5].starts_with("0,4,5,2,"));
    assert!(lines[5].ends_with(",leaf reached"));
    assert!(lines[10].starts_with("1,4,5,2,"));
    Ok(())
}

#[test]
fn test_random_policy_reaches_leaves() -> Result<()> {
    let config = FruitTreeNavigationConfig::default().depth(7);
    let mut env = FruitTreeNavigation::build(&config, 0)?;
    let mut policy = RandomPolicy::build(RandomPolicyConfig { seed: 3 });
    let mut recorder = BufferedRecorder::new();
    let returns = util::eval_with_recorder(&mut env, &mut policy, 4, &mut recorder)?;

    assert_eq!(returns.len(), 4);
    assert_eq!(recorder.len(), 4 * 7);

    let table = RewardTable::shared(7)?;
    let ends = recorder
        .iter()
        .filter(|r| r.get_string("termination").is_ok())
        .collect::<Vec<_>>();
    assert_eq!(ends.len(), 4);
    for (record, ret) in ends.into_iter().zip(&returns) {
        assert_eq!(record.get_scalar("row")?, 7.0);
        let column = record.get_scalar("column")? as usize;
        assert_eq!(*ret, table.fruits().column(column).to_vec());
    }
    Ok(())
}
