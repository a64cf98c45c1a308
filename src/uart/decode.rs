use crate::types::config::DecoderConfig;
use crate::types::decoded_byte::{DecodedByte, Direction};
use crate::types::edge_list::EdgeList;
use crate::types::level::Level;
use crate::uart::direction::infer_direction;

/// Folds LSB-first bits into one byte. `bits[0]` is the least significant.
pub(crate) fn bits_to_byte(bits: &[u8]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |byte, (idx, &bit)| byte | (bit << idx))
}

/// Decodes every serial byte carried by the primary channel.
///
/// The scan walks `primary`'s recorded edges in time order:
/// 1. No decoding happens before the first observed [`Level::High`]; the
///    idle baseline must be established first.
/// 2. A start edge is a transition from `High` to a non-`High` level. Start
///    candidates earlier than the scan cursor are ignored: they are
///    transitions inside the byte just decoded (e.g. a spurious edge within
///    a `Mid`-level data bit).
/// 3. Each data bit `i` is sampled at the middle of its period,
///    `t0 + bit_period * (1 + i + 0.5)`, and reads `1` iff the primary
///    channel is `High` there. The companion channel is sampled at the same
///    instants; the bit-0 sample classifies the byte's direction.
/// 4. After a byte, the cursor advances by
///    `bit_period * (1 + data_bits + stop_bits)`, with the stop-bit count
///    chosen by direction (B→A is framed 8N2, A→B is 8N1).
///
/// Running past the end of the capture is tolerated: [`EdgeList::level_at`]
/// extrapolates the last known level indefinitely, so a byte truncated by
/// the end of the trace decodes from held levels instead of erroring.
///
/// # Parameters
/// - `primary`: edge list of the channel carrying the bit stream (channel A).
/// - `companion`: edge list of the channel sampled for direction (channel B).
/// - `cfg`: baud rate, bit counts and framing options.
///
/// # Returns
/// The decoded bytes in start-time order. Never fails: a trace with no
/// decodable byte yields an empty vector.
pub fn from_edges(
    primary: &EdgeList,
    companion: &EdgeList,
    cfg: &DecoderConfig,
) -> Vec<DecodedByte> {
    let bit_period: f64 = cfg.bit_period();
    let mut bytes: Vec<DecodedByte> = Vec::new();
    let mut prev_level: Option<Level> = None;
    let mut cursor: f64 = f64::NEG_INFINITY;

    for edge in primary.iter() {
        let Some(prev) = prev_level else {
            // Wait for the idle baseline before decoding anything.
            if edge.level == Level::High {
                prev_level = Some(edge.level);
            }
            continue;
        };

        if prev == Level::High && edge.level != Level::High && edge.time >= cursor {
            let t0: f64 = edge.time;
            let mut bits: Vec<u8> = Vec::with_capacity(cfg.data_bits as usize);
            let mut direction: Direction = Direction::AToB;

            for i in 0..cfg.data_bits {
                let t_query: f64 = t0 + bit_period * (1.0 + i as f64 + 0.5);
                let lvl_primary: Level = primary.level_at(t_query);
                let lvl_companion: Level = companion.level_at(t_query);
                bits.push(u8::from(lvl_primary == Level::High));
                if let Some(dir) = infer_direction(i, lvl_primary, lvl_companion, t0) {
                    direction = dir;
                }
            }

            let value: u8 = bits_to_byte(&bits);
            let stop_bits: u8 = match direction {
                Direction::BToA => cfg.stop_bits_long,
                Direction::AToB => cfg.stop_bits_short,
            };
            cursor = t0 + bit_period * (1 + cfg.data_bits + stop_bits) as f64;
            log::trace!("byte 0x{value:02X} ({direction:?}) at t={t0}");
            bytes.push(DecodedByte {
                start_time: t0,
                value,
                direction,
            });
        }

        prev_level = Some(edge.level);
    }

    bytes
}
