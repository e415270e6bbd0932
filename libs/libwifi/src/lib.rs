/// Libwifi's own [Error](error::Error) implementation
pub mod error;
/// The [Frame](frame::Frame) enum and all frame structs.
pub mod frame;
/// Enums representing frame types, frame subtypes and frame tree tags.
mod frame_types;
/// [nom] parsers for internal usage.
pub mod parsers;
/// All traits used or provided by this library.
mod traits;

use log::debug;

use crate::error::Error;
use crate::parsers::*;

// Re-exports for user convenience
pub use crate::frame::Frame;
pub use crate::frame_types::*;
pub use crate::traits::*;

use crc::{Crc, CRC_32_ISO_HDLC};

// CRC algorithm for FCS calculation
pub(crate) const CRC_32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

/// Size of the frame check sequence at the end of a frame.
pub const FCS_SIZE: usize = 4;

/// Parse IEE 802.11 frames from raw bytes.
///
/// If `fcs_included` is set, the last four bytes are treated as frame check sequence
/// and verified before anything else is parsed.
///
/// Only Action frames are modelled. All other subtypes result in
/// [Error::UnhandledFrameSubtype], which carries the parsed frame control and the remaining bytes.
pub fn parse_frame(input: &[u8], fcs_included: bool) -> Result<Frame, Error> {
    let input = if fcs_included {
        if input.len() < FCS_SIZE {
            return Err(Error::Incomplete("Incomplete".to_string()));
        }

        // Split the input into frame data and FCS
        let (frame_data, fcs_bytes) = input.split_at(input.len() - FCS_SIZE);

        let crc = CRC_32.checksum(frame_data);
        // The FCS is transmitted little endian.
        let fcs = u32::from_le_bytes([fcs_bytes[0], fcs_bytes[1], fcs_bytes[2], fcs_bytes[3]]);

        if crc != fcs {
            debug!("Dropping frame with bad FCS {fcs:08x}, calculated {crc:08x}");
            return Err(Error::FcsMismatch {
                expected: crc,
                found: fcs,
            });
        }

        frame_data
    } else {
        input
    };

    let (input, frame_control) = parse_frame_control(input)?;

    // Check which kind of frame sub-type we got
    match frame_control.frame_subtype {
        // Management
        FrameSubType::Action => parse_action(frame_control, input),
        _ => {
            debug!(
                "Unhandled frame subtype {} ({})",
                frame_control.frame_subtype, frame_control.frame_type
            );
            Err(Error::UnhandledFrameSubtype(frame_control, input.to_vec()))
        }
    }
}

#[cfg(doctest)]
doc_comment::doctest!("../../../README.md");
