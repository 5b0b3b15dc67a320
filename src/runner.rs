//! Level runs and level sequencing
//!
//! `LevelRun` drives one attempt at a level and reports when it is over,
//! after a short linger so the outcome is visible. `Campaign` decides what
//! comes next: the following level after a win, the same level after a loss.

use std::fmt;
use std::rc::Rc;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::sim::{GameState, Keys, Legend, Level, LevelError, Status};

/// Per-level completion signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelSignal {
    Ongoing,
    Finished(Status),
}

/// One attempt at one level
#[derive(Debug, Clone)]
pub struct LevelRun {
    state: GameState,
    /// Linger time left once the level has ended
    ending: Option<f64>,
}

impl LevelRun {
    pub fn new(level: Rc<Level>) -> Self {
        Self {
            state: GameState::start(level),
            ending: None,
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Advance one frame. The state keeps updating while the run lingers.
    pub fn step(&mut self, dt: f64, keys: &Keys, config: &GameConfig) -> LevelSignal {
        self.state = self.state.update(dt, keys, &config.physics);

        let status = self.state.status();
        if !status.is_finished() {
            return LevelSignal::Ongoing;
        }

        let remaining = self.ending.get_or_insert_with(|| {
            log::info!("Level {}", status.as_str());
            config.finish_delay
        });
        if *remaining > 0.0 {
            *remaining -= dt;
            LevelSignal::Ongoing
        } else {
            LevelSignal::Finished(status)
        }
    }
}

/// What the driver should do after a level finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignEvent {
    /// Play the level at this index next
    NextLevel(usize),
    /// Replay the level at this index
    Retry(usize),
    /// The last level was won
    Completed,
}

/// Campaign construction errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignError {
    NoLevels,
    Level { index: usize, source: LevelError },
}

impl fmt::Display for CampaignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoLevels => write!(f, "campaign has no levels"),
            Self::Level { index, source } => write!(f, "level {}: {source}", index + 1),
        }
    }
}

impl std::error::Error for CampaignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NoLevels => None,
            Self::Level { source, .. } => Some(source),
        }
    }
}

/// Fixed sequence of levels played in order
#[derive(Debug, Clone)]
pub struct Campaign {
    levels: Vec<Rc<Level>>,
    index: usize,
    /// Attempts at the current level, starting at 1
    attempts: u32,
    completed: bool,
}

impl Campaign {
    /// Parse every plan up front so a broken level fails at startup
    pub fn from_plans<R: Rng + ?Sized>(
        plans: &[&str],
        legend: &Legend,
        rng: &mut R,
    ) -> Result<Self, CampaignError> {
        if plans.is_empty() {
            return Err(CampaignError::NoLevels);
        }
        let levels = plans
            .iter()
            .enumerate()
            .map(|(index, plan)| {
                Level::parse(plan, legend, &mut *rng)
                    .map(Rc::new)
                    .map_err(|source| CampaignError::Level { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        log::info!("Campaign loaded with {} levels", levels.len());
        Ok(Self {
            levels,
            index: 0,
            attempts: 1,
            completed: false,
        })
    }

    pub fn from_plans_seeded(
        plans: &[&str],
        legend: &Legend,
        seed: u64,
    ) -> Result<Self, CampaignError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::from_plans(plans, legend, &mut rng)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Index of the level being played
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn levels(&self) -> &[Rc<Level>] {
        &self.levels
    }

    /// Fresh run of the current level
    pub fn start_run(&self) -> LevelRun {
        log::info!(
            "Starting level {}/{} (attempt {})",
            self.index + 1,
            self.levels.len(),
            self.attempts
        );
        LevelRun::new(Rc::clone(&self.levels[self.index]))
    }

    /// Record the outcome of the current level and move on
    pub fn finish(&mut self, status: Status) -> CampaignEvent {
        if self.completed {
            return CampaignEvent::Completed;
        }
        match status {
            Status::Won if self.index + 1 >= self.levels.len() => {
                self.completed = true;
                log::info!("Campaign complete");
                CampaignEvent::Completed
            }
            Status::Won => {
                self.index += 1;
                self.attempts = 1;
                CampaignEvent::NextLevel(self.index)
            }
            Status::Lost => {
                self.attempts += 1;
                CampaignEvent::Retry(self.index)
            }
            Status::Playing => {
                log::warn!("Level {} finished while still playing", self.index + 1);
                CampaignEvent::Retry(self.index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN: &str = "#.....#\n#@..o.#\n#######";
    const LOSE: &str = "#....#\n#@..+#\n######";

    fn right() -> Keys {
        Keys {
            right: true,
            ..Default::default()
        }
    }

    fn play_out(run: &mut LevelRun, config: &GameConfig) -> (Status, usize) {
        for frame in 1..1000 {
            if let LevelSignal::Finished(status) = run.step(0.05, &right(), config) {
                return (status, frame);
            }
        }
        panic!("level never finished");
    }

    #[test]
    fn test_run_lingers_after_end() {
        let config = GameConfig::default();
        let level = Level::parse_seeded(WIN, &Legend::default(), 1).expect("valid plan");
        let mut run = LevelRun::new(Rc::new(level));

        let mut ended_at = None;
        let mut frame = 0;
        let signal = loop {
            frame += 1;
            let signal = run.step(0.0625, &right(), &config);
            if ended_at.is_none() && run.state().status().is_finished() {
                ended_at = Some(frame);
            }
            if signal != LevelSignal::Ongoing {
                break signal;
            }
            assert!(frame < 1000);
        };
        assert_eq!(signal, LevelSignal::Finished(Status::Won));
        // 1s linger at 1/16s frames: the ending frame plus 15 countdown
        // frames, then the report
        let ended_at = ended_at.expect("level ended");
        assert_eq!(frame - ended_at, 16);
    }

    #[test]
    fn test_run_without_linger() {
        let config = GameConfig {
            finish_delay: 0.0,
            ..Default::default()
        };
        let level = Level::parse_seeded(LOSE, &Legend::default(), 1).expect("valid plan");
        let mut run = LevelRun::new(Rc::new(level));
        let (status, _) = play_out(&mut run, &config);
        assert_eq!(status, Status::Lost);
    }

    #[test]
    fn test_campaign_sequence() {
        let mut campaign =
            Campaign::from_plans_seeded(&[LOSE, WIN], &Legend::default(), 9).expect("valid plans");
        assert_eq!(campaign.len(), 2);
        let config = GameConfig::default();

        let mut run = campaign.start_run();
        let (status, _) = play_out(&mut run, &config);
        assert_eq!(campaign.finish(status), CampaignEvent::Retry(0));
        assert_eq!(campaign.index(), 0);
        assert_eq!(campaign.attempts(), 2);

        assert_eq!(campaign.finish(Status::Won), CampaignEvent::NextLevel(1));
        assert_eq!(campaign.index(), 1);
        assert_eq!(campaign.attempts(), 1);

        let mut run = campaign.start_run();
        let (status, _) = play_out(&mut run, &config);
        assert_eq!(campaign.finish(status), CampaignEvent::Completed);
        assert!(campaign.is_completed());
        assert_eq!(campaign.finish(Status::Lost), CampaignEvent::Completed);
    }

    #[test]
    fn test_campaign_errors() {
        let legend = Legend::default();
        assert_eq!(
            Campaign::from_plans_seeded(&[], &legend, 0).unwrap_err(),
            CampaignError::NoLevels
        );
        let err = Campaign::from_plans_seeded(&[WIN, "@@"], &legend, 0).unwrap_err();
        assert_eq!(
            err,
            CampaignError::Level {
                index: 1,
                source: LevelError::MultiplePlayers { count: 2 }
            }
        );
        assert_eq!(
            err.to_string(),
            "level 2: level has 2 player spawns, expected 1"
        );
    }
}
