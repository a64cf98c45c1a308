use serde_derive::{Deserialize, Serialize};

use crate::types::level::Level;

/// A recorded timestamp at which a channel's level changed (or its initial or
/// final recorded value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Timestamp in seconds.
    pub time: f64,
    /// Level in effect from this timestamp onward.
    pub level: Level,
}

/// The minimal ordered record of one channel's level transitions.
///
/// Built once per channel per run by the edge detector and read-only
/// afterwards. The entries reconstruct a held-last-value ("step") waveform:
/// for any query time the level in effect is the level of the last entry at
/// or before it.
///
/// Internally the list keeps parallel `times`/`levels` vectors so that
/// [`EdgeList::level_at`] can binary-search the time axis directly; the
/// decoder issues one query per data bit per channel, so lookups must stay
/// sub-linear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EdgeList {
    times: Vec<f64>,
    levels: Vec<Level>,
}

impl EdgeList {
    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Recorded timestamps, ascending.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Levels parallel to [`EdgeList::times`].
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn get(&self, index: usize) -> Option<Edge> {
        Some(Edge {
            time: *self.times.get(index)?,
            level: *self.levels.get(index)?,
        })
    }

    pub fn last(&self) -> Option<Edge> {
        self.get(self.len().checked_sub(1)?)
    }

    /// Iterates the recorded entries in time order.
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.times
            .iter()
            .zip(self.levels.iter())
            .map(|(&time, &level)| Edge { time, level })
    }

    pub(crate) fn push(&mut self, time: f64, level: Level) {
        self.times.push(time);
        self.levels.push(level);
    }

    /// Returns the level in effect at time `t`.
    ///
    /// Resolved as the level of the rightmost entry with `time <= t`. For a
    /// query before the first recorded entry this returns [`Level::High`]:
    /// the protocol convention is that an idle line rests high before any
    /// capture begins.
    pub fn level_at(&self, t: f64) -> Level {
        let idx: usize = self.times.partition_point(|&time| time <= t);
        if idx == 0 {
            Level::High
        } else {
            self.levels[idx - 1]
        }
    }
}
