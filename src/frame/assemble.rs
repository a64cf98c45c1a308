use std::collections::HashMap;

use crate::types::config::DecoderConfig;
use crate::types::decoded_byte::{DecodedByte, Direction};
use crate::types::frame::{Frame, FrameType};
use crate::types::summary::DecodeSummary;

/// Assembly states, in wire order of the fields they consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Len,
    Data,
    Sum,
    End,
}

/// A frame being collected; discarded, never exposed, on any failure.
#[derive(Debug, Clone)]
struct Partial {
    frame_type: FrameType,
    start_marker: u8,
    length: u8,
    data: Vec<u8>,
    checksum: u8,
    direction: Direction,
    start_time: f64,
    start_index: usize,
}

/// Resynchronizing state machine over the decoded byte stream.
///
/// Follows `Idle → Len → Data → Sum → End` and back to `Idle`. Before each
/// byte is handled, a guard decides whether the machine must hard-reset
/// first: a gap above the configured tolerance, or a direction flip, means
/// the byte cannot belong to the in-progress frame, so the partial frame is
/// dropped and scanning restarts from `Idle`.
///
/// A frame reaching `End` is emitted only if the end marker matches and
/// `(length + sum(data) + checksum) mod 256 == 0`. Failures are silent per
/// byte; the [`DecodeSummary`] counters make them visible in aggregate.
#[derive(Debug)]
pub struct FrameAssembler {
    start_markers: HashMap<u8, FrameType>,
    end_marker: u8,
    /// Inter-byte gap in seconds above which the link is assumed idle.
    tolerance: f64,
    state: State,
    partial: Option<Partial>,
    prev: Option<(f64, Direction)>,
    frames: Vec<Frame>,
    summary: DecodeSummary,
}

impl FrameAssembler {
    pub fn new(cfg: &DecoderConfig) -> Self {
        FrameAssembler {
            start_markers: cfg.frame_start_markers.clone(),
            end_marker: cfg.frame_end_marker,
            tolerance: cfg.resync_tolerance(),
            state: State::Idle,
            partial: None,
            prev: None,
            frames: Vec::new(),
            summary: DecodeSummary::default(),
        }
    }

    /// Frames validated so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Counters for the bytes pushed so far.
    pub fn summary(&self) -> DecodeSummary {
        self.summary
    }

    /// Consumes the assembler, returning the validated frames and counters.
    /// Any frame still in progress is dropped, as a truncated stream cannot
    /// complete it.
    pub fn finish(self) -> (Vec<Frame>, DecodeSummary) {
        (self.frames, self.summary)
    }

    /// Feeds one decoded byte. `index` is the byte's position in the stream
    /// and is recorded on emitted frames as `start_index`/`end_index`.
    pub fn push(&mut self, index: usize, byte: &DecodedByte) {
        self.summary.bytes_scanned += 1;

        if self.must_reset(byte) {
            log::debug!(
                "resync at t={}: dropping partial frame, back to idle",
                byte.start_time
            );
            self.summary.resyncs += 1;
            self.state = State::Idle;
            self.partial = None;
        }
        self.prev = Some((byte.start_time, byte.direction));

        match self.state {
            State::Idle => {
                if let Some(&frame_type) = self.start_markers.get(&byte.value) {
                    self.partial = Some(Partial {
                        frame_type,
                        start_marker: byte.value,
                        length: 0,
                        data: Vec::new(),
                        checksum: 0,
                        direction: byte.direction,
                        start_time: byte.start_time,
                        start_index: index,
                    });
                    self.state = State::Len;
                }
                // anything else is inter-frame noise, stay idle
            }
            State::Len => {
                if let Some(partial) = self.partial.as_mut() {
                    partial.length = byte.value;
                    partial.data.reserve(byte.value as usize);
                    self.state = if byte.value > 0 { State::Data } else { State::Sum };
                } else {
                    self.state = State::Idle;
                }
            }
            State::Data => {
                if let Some(partial) = self.partial.as_mut() {
                    partial.data.push(byte.value);
                    if partial.data.len() == partial.length as usize {
                        self.state = State::Sum;
                    }
                } else {
                    self.state = State::Idle;
                }
            }
            State::Sum => {
                if let Some(partial) = self.partial.as_mut() {
                    partial.checksum = byte.value;
                    self.state = State::End;
                } else {
                    self.state = State::Idle;
                }
            }
            State::End => {
                if let Some(partial) = self.partial.take() {
                    self.close_frame(partial, byte.value, index);
                }
                self.state = State::Idle;
            }
        }
    }

    /// Pre-transition guard: must the machine hard-reset before this byte?
    fn must_reset(&self, byte: &DecodedByte) -> bool {
        let Some((prev_time, prev_direction)) = self.prev else {
            return false;
        };
        byte.start_time - prev_time > self.tolerance || byte.direction != prev_direction
    }

    /// Validates a completed candidate and either emits or drops it.
    fn close_frame(&mut self, partial: Partial, end_byte: u8, end_index: usize) {
        let frame = Frame {
            frame_type: partial.frame_type,
            start_marker: partial.start_marker,
            length: partial.length,
            data: partial.data,
            checksum: partial.checksum,
            direction: partial.direction,
            start_time: partial.start_time,
            start_index: partial.start_index,
            end_index,
        };
        let good_end: bool = end_byte == self.end_marker;
        if good_end && frame.checksum_ok() {
            self.summary.frames_emitted += 1;
            self.frames.push(frame);
        } else {
            self.summary.frames_dropped += 1;
            log::debug!(
                "frame at t={} dropped: end marker ok={}, checksum ok={}",
                frame.start_time,
                good_end,
                frame.checksum_ok()
            );
        }
    }
}

/// Runs the assembler over a whole byte stream.
pub fn from_bytes(cfg: &DecoderConfig, bytes: &[DecodedByte]) -> (Vec<Frame>, DecodeSummary) {
    let mut assembler = FrameAssembler::new(cfg);
    for (index, byte) in bytes.iter().enumerate() {
        assembler.push(index, byte);
    }
    assembler.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIT: f64 = 1.0 / 115200.0;
    /// One serial frame plus an idle bit, well inside the resync tolerance.
    const BYTE_SPACING: f64 = BIT * 11.0;

    /// Builds a contiguous A→B byte stream starting at t=1.0.
    fn stream(values: &[u8]) -> Vec<DecodedByte> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| DecodedByte {
                start_time: 1.0 + i as f64 * BYTE_SPACING,
                value,
                direction: Direction::AToB,
            })
            .collect()
    }

    // (-(0x02 + 0xAA + 0xBB)) & 0xFF
    const GOOD_SUM: u8 = 0x99;

    #[test]
    fn accepts_valid_command_frame() {
        let cfg = DecoderConfig::default();
        let bytes = stream(&[0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x03]);
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert_eq!(frames.len(), 1);
        let frame = &frames[0];
        assert_eq!(frame.frame_type, FrameType::Command);
        assert_eq!(frame.start_marker, 0x01);
        assert_eq!(frame.length, 2);
        assert_eq!(frame.data, vec![0xAA, 0xBB]);
        assert_eq!(frame.checksum, GOOD_SUM);
        assert_eq!(frame.start_index, 0);
        assert_eq!(frame.end_index, 5);
        assert_eq!(frame.start_time, 1.0);
        assert_eq!(summary.bytes_scanned, 6);
        assert_eq!(summary.frames_emitted, 1);
        assert_eq!(summary.frames_dropped, 0);
    }

    #[test]
    fn rejects_checksum_off_by_one() {
        let cfg = DecoderConfig::default();
        let bytes = stream(&[0x01, 0x02, 0xAA, 0xBB, GOOD_SUM.wrapping_add(1), 0x03]);
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert!(frames.is_empty());
        assert_eq!(summary.frames_dropped, 1);
        assert_eq!(summary.frames_emitted, 0);
    }

    #[test]
    fn rejects_wrong_end_marker() {
        let cfg = DecoderConfig::default();
        let bytes = stream(&[0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x04]);
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert!(frames.is_empty());
        assert_eq!(summary.frames_dropped, 1);
    }

    #[test]
    fn accepts_zero_length_payload() {
        // LEN of 0 goes straight to the checksum field.
        let cfg = DecoderConfig::default();
        let bytes = stream(&[0x02, 0x00, 0x00, 0x03]);
        let (frames, _) = from_bytes(&cfg, &bytes);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].frame_type, FrameType::Data);
        assert_eq!(frames[0].length, 0);
        assert!(frames[0].data.is_empty());
    }

    #[test]
    fn unknown_bytes_in_idle_are_skipped() {
        let cfg = DecoderConfig::default();
        let bytes = stream(&[0x7F, 0xFF, 0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x03]);
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].start_index, 2);
        assert_eq!(frames[0].end_index, 7);
        assert_eq!(summary.bytes_scanned, 8);
    }

    #[test]
    fn gap_above_tolerance_breaks_the_frame() {
        let cfg = DecoderConfig::default();
        let mut bytes = stream(&[0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x03]);
        // push everything from the payload onwards past the tolerance
        let gap = cfg.resync_tolerance() * 2.0;
        for byte in bytes.iter_mut().skip(2) {
            byte.start_time += gap;
        }
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert!(frames.is_empty());
        assert!(summary.resyncs >= 1);
        // nothing after the break forms a frame: 0xAA is not a start marker
        assert_eq!(summary.frames_dropped, 0);
    }

    #[test]
    fn direction_flip_breaks_the_frame() {
        let cfg = DecoderConfig::default();
        let mut bytes = stream(&[0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x03]);
        for byte in bytes.iter_mut().skip(2) {
            byte.direction = Direction::BToA;
        }
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert!(frames.is_empty());
        assert!(summary.resyncs >= 1);
    }

    #[test]
    fn frame_restarts_cleanly_after_a_break() {
        // A truncated frame followed by a complete one: the complete frame
        // must still be recovered.
        let cfg = DecoderConfig::default();
        let mut bytes = stream(&[0x01, 0x05, 0x11, 0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x03]);
        let gap = cfg.resync_tolerance() * 2.0;
        for byte in bytes.iter_mut().skip(3) {
            byte.start_time += gap;
        }
        let (frames, _) = from_bytes(&cfg, &bytes);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].start_index, 3);
        assert_eq!(frames[0].data, vec![0xAA, 0xBB]);
    }

    #[test]
    fn back_to_back_frames_are_both_emitted() {
        let cfg = DecoderConfig::default();
        let bytes = stream(&[
            0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x03, // Command
            0x02, 0x00, 0x00, 0x03, // zero-length Data
        ]);
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].frame_type, FrameType::Command);
        assert_eq!(frames[1].frame_type, FrameType::Data);
        assert_eq!(summary.frames_emitted, 2);
    }

    #[test]
    fn incomplete_frame_at_end_of_stream_is_dropped() {
        let cfg = DecoderConfig::default();
        let bytes = stream(&[0x01, 0x02, 0xAA]);
        let (frames, summary) = from_bytes(&cfg, &bytes);

        assert!(frames.is_empty());
        // never reached the end state, so not counted as dropped
        assert_eq!(summary.frames_dropped, 0);
        assert_eq!(summary.bytes_scanned, 3);
    }

    #[test]
    fn frame_direction_is_recorded() {
        let cfg = DecoderConfig::default();
        let mut bytes = stream(&[0x01, 0x02, 0xAA, 0xBB, GOOD_SUM, 0x03]);
        for byte in bytes.iter_mut() {
            byte.direction = Direction::BToA;
        }
        let (frames, _) = from_bytes(&cfg, &bytes);

        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].direction, Direction::BToA);
    }
}
