use anyhow::Result;
use ftn_core::{
    record::{BufferedRecorder, NullRecorder, Record, RecordValue},
    util, Act, DefaultEvaluator, Env, Evaluator, Obs, Policy, Step,
};
use test_log::test;

#[derive(Clone, Debug)]
struct Position(usize);

impl Obs for Position {
    fn len(&self) -> usize {
        1
    }
}

#[derive(Clone, Debug)]
struct Advance;

impl Act for Advance {
    fn len(&self) -> usize {
        1
    }
}

/// Walks `length` cells to the right, paying `[1, -1]` at every cell.
struct Corridor {
    length: usize,
    pos: usize,
}

impl Env for Corridor {
    type Config = usize;
    type Obs = Position;
    type Act = Advance;
    type Info = ();

    fn build(config: &Self::Config, _seed: i64) -> Result<Self> {
        Ok(Self {
            length: *config,
            pos: 0,
        })
    }

    fn step(&mut self, a: &Self::Act) -> Result<(Step<Self>, Record)> {
        self.pos += 1;
        let done = self.pos == self.length;
        let step = Step::new(Position(self.pos), a.clone(), vec![1.0, -1.0], done, false, ());
        let record = Record::from_scalar("pos", self.pos as f32);
        Ok((step, record))
    }

    fn reset(&mut self) -> Result<Self::Obs> {
        self.pos = 0;
        Ok(Position(0))
    }

    fn reset_with_index(&mut self, _ix: usize) -> Result<Self::Obs> {
        self.reset()
    }
}

struct AlwaysAdvance;

impl Policy<Corridor> for AlwaysAdvance {
    fn sample(&mut self, _obs: &Position) -> Advance {
        Advance
    }
}

#[test]
fn test_default_evaluator_reports_mean_return() -> Result<()> {
    let mut evaluator = DefaultEvaluator::<Corridor>::new(&3, 0, 4)?;
    let record = evaluator.evaluate(&mut AlwaysAdvance)?;

    assert_eq!(record.get_array1("Episode return")?, vec![3.0, -3.0]);
    assert_eq!(record.get_scalar("Episode length")?, 3.0);
    Ok(())
}

#[test]
fn test_eval_with_recorder_writes_every_step() -> Result<()> {
    let mut env = Corridor::build(&2, 0)?;
    let mut recorder = BufferedRecorder::new();
    let returns = util::eval_with_recorder(&mut env, &mut AlwaysAdvance, 3, &mut recorder)?;

    assert_eq!(returns, vec![vec![2.0, -2.0]; 3]);
    assert_eq!(recorder.len(), 6);

    let last = recorder.iter().last().unwrap();
    assert_eq!(last.get_scalar("episode")?, 2.0);
    assert_eq!(last.get_scalar("step")?, 1.0);
    assert_eq!(last.get_scalar("pos")?, 2.0);
    assert_eq!(last.get("reward"), Some(&RecordValue::Array1(vec![1.0, -1.0])));
    Ok(())
}

#[test]
fn test_step_with_reset_sets_initial_observation() -> Result<()> {
    let mut env = Corridor::build(&2, 0)?;
    env.reset()?;

    let (step, _) = env.step_with_reset(&Advance)?;
    assert!(!step.is_done());
    assert!(step.init_obs.is_none());

    let (step, _) = env.step_with_reset(&Advance)?;
    assert!(step.is_done());
    assert_eq!(step.init_obs.map(|o| o.0), Some(0));

    let mut null = NullRecorder::default();
    util::eval_with_recorder(&mut env, &mut AlwaysAdvance, 1, &mut null)?;
    Ok(())
}
