mod frame_control;
mod header;
mod mac_address;
mod sequence_control;
mod tagged_parameters;

pub use frame_control::FrameControl;
pub use header::*;
pub use mac_address::*;
pub use sequence_control::SequenceControl;
pub use tagged_parameters::{ElementId, TaggedParameter, TaggedParameters, VendorSpecificInfo};
