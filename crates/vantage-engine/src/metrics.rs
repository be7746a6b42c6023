//! Per-player rate table and boss health summary.
//!
//! Rates are derived from cumulative counters already in the frame:
//! `trunc(counter / time)`, zero at or before time zero.

use vantage_replay::{ActorKind, Frame, ReplayData};

/// Cumulative damage to the boss.
pub const BOSS_COUNTER: &str = "bossdamage";
/// Cumulative damage to everything.
pub const CLEAVE_COUNTER: &str = "cleavedamage";

/// Samples earlier than this are ignored when scaling rate bars; early
/// rates are dominated by the first few hits.
pub const RATE_SCALE_WARMUP: f64 = 5.0;

/// One player's row.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerRow {
    /// Actor id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Player class.
    pub class: Option<String>,
    /// Boss damage per second.
    pub boss_rate: i64,
    /// All damage per second.
    pub cleave_rate: i64,
    /// Buff name and stack count.
    pub buffs: Vec<(String, f64)>,
}

/// One boss's health.
#[derive(Clone, Debug, PartialEq)]
pub struct BossHealth {
    /// Actor id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Health percentage.
    pub health: f64,
}

/// Player rows ranked by boss rate, plus boss health.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsTable {
    /// Players, highest boss rate first. Ties keep frame order.
    pub rows: Vec<PlayerRow>,
    /// Bosses that have a health value, in frame order.
    pub bosses: Vec<BossHealth>,
}

impl MetricsTable {
    /// Derive the table from a frame.
    pub fn from_frame(frame: &Frame) -> Self {
        let time = frame.time();
        let mut rows = Vec::new();
        let mut bosses = Vec::new();
        for actor in frame.actors() {
            match actor.kind() {
                ActorKind::Player => rows.push(PlayerRow {
                    id: actor.id().to_string(),
                    name: actor.name().to_string(),
                    class: actor.class().map(str::to_string),
                    boss_rate: rate(actor.counter(BOSS_COUNTER), time),
                    cleave_rate: rate(actor.counter(CLEAVE_COUNTER), time),
                    buffs: actor
                        .buffs()
                        .map(|(name, stacks)| (name.to_string(), stacks))
                        .collect(),
                }),
                ActorKind::Boss => {
                    if let Some(health) = actor.health() {
                        bosses.push(BossHealth {
                            id: actor.id().to_string(),
                            name: actor.name().to_string(),
                            health,
                        });
                    }
                }
                ActorKind::Other => {}
            }
        }
        rows.sort_by(|a, b| b.boss_rate.cmp(&a.boss_rate));
        Self { rows, bosses }
    }
}

/// `trunc(counter / time)`, or zero when the time is not positive or
/// the counter is missing.
pub fn rate(counter: Option<f64>, time: f64) -> i64 {
    match counter {
        Some(total) if time > 0.0 => (total / time).trunc() as i64,
        _ => 0,
    }
}

/// The highest `value / time` over every sample after the warm-up of
/// every track writing `counter`. Used to scale rate bars.
pub fn max_rate(replay: &ReplayData, counter: &str) -> f64 {
    replay
        .tracks()
        .iter()
        .filter(|track| track.path().get(1).is_some_and(|key| key == counter))
        .flat_map(|track| track.samples())
        .filter(|sample| sample.time > RATE_SCALE_WARMUP)
        .filter_map(|sample| Some(sample.value.as_f64()? / sample.time))
        .fold(0.0, f64::max)
}

/// `m:ss`. Negative and non-finite times read as zero.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let minutes = (seconds / 60.0).trunc() as u64;
    let rest = (seconds % 60.0).trunc() as u64;
    format!("{minutes}:{rest:02}")
}
