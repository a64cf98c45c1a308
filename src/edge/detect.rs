use crate::types::edge_list::EdgeList;
use crate::types::errors::EdgeError;
use crate::types::level::{Level, LevelThresholds};
use crate::types::sample::Sample;

/// Builds an [`EdgeList`] from a time-ordered sequence of quantized levels.
///
/// The scan records:
/// - the **first** sample unconditionally, so the initial level is known even
///   if it never changes;
/// - on every level change, the **previous** sample's `(time, level)` first
///   (unless it is already the most recently recorded entry, which happens
///   when the previous sample was itself a transition point), then the
///   changed sample;
/// - the **last** sample, if its timestamp is not already recorded.
///
/// The result fully reconstructs a held-last-value signal: any later query is
/// answered from the list alone, without re-scanning raw samples.
///
/// # Parameters
/// - `channel`: label used in error reports (e.g. `"primary"`).
/// - `samples`: `(time, level)` pairs, non-decreasing in time.
///
/// # Errors
/// - [`EdgeError::EmptyChannel`] if `samples` yields nothing.
/// - [`EdgeError::OutOfOrderSample`] if a timestamp is strictly smaller than
///   its predecessor. Equal timestamps are tolerated.
pub fn from_levels<I>(channel: &str, samples: I) -> Result<EdgeList, EdgeError>
where
    I: IntoIterator<Item = (f64, Level)>,
{
    let mut edges: EdgeList = EdgeList::default();
    let mut last: Option<(f64, Level)> = None;

    for (time, level) in samples {
        match last {
            None => {
                // First datapoint: record as-is, establishes the initial level.
                edges.push(time, level);
            }
            Some((prev_time, prev_level)) => {
                if time < prev_time {
                    return Err(EdgeError::OutOfOrderSample {
                        channel: channel.to_string(),
                        prev: prev_time,
                        time,
                    });
                }
                if level != prev_level {
                    // Record the datapoint just before the change, unless it
                    // already closed the previous transition.
                    if edges.last().map(|e| e.time) != Some(prev_time) {
                        edges.push(prev_time, prev_level);
                    }
                    edges.push(time, level);
                }
            }
        }
        last = Some((time, level));
    }

    match last {
        None => Err(EdgeError::EmptyChannel {
            channel: channel.to_string(),
        }),
        Some((time, level)) => {
            // Close the list with the last datapoint if not already recorded.
            if edges.last().map(|e| e.time) != Some(time) {
                edges.push(time, level);
            }
            Ok(edges)
        }
    }
}

/// Builds an [`EdgeList`] from raw analog samples, quantizing each voltage
/// through `thresholds` first. See [`from_levels`] for the scan rules.
pub fn from_samples<I>(
    channel: &str,
    thresholds: &LevelThresholds,
    samples: I,
) -> Result<EdgeList, EdgeError>
where
    I: IntoIterator<Item = Sample>,
{
    let th: LevelThresholds = *thresholds;
    from_levels(
        channel,
        samples.into_iter().map(move |s| (s.time, th.level(s.voltage))),
    )
}
