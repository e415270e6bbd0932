use nom::Needed;

use crate::frame::components::FrameControl;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// This library only models the Action subtype.
    /// Every other subtype results in this error.
    /// The [FrameControl] header is always successfully parsed and can be used for debugging.
    /// The remaining data is passed as second parameter.
    #[error("This frame subtype isn't handled yet: {:?} ({:?})", .0.frame_subtype, .0.frame_type)]
    UnhandledFrameSubtype(FrameControl, Vec<u8>),
    #[error("A parsing failure occurred: \n{}\ndata: {:?}", .0, .1)]
    Failure(String, Vec<u8>),
    #[error("There wasn't enough data. {}", .0)]
    Incomplete(String),

    /// The bytes following the management header are too short for the frame's fixed fields.
    #[error("Malformed frame: expected at least {expected} bytes after the management header, got {remaining}")]
    MalformedFrame { expected: usize, remaining: usize },

    /// A tagged parameter (information element) is truncated or has a dangling header byte.
    #[error("Malformed tagged parameter at offset {offset}: {reason}")]
    MalformedTaggedParameter { offset: usize, reason: String },

    /// Tagged parameters carry a one byte length, their payload can't exceed 255 bytes.
    #[error("Tagged parameter payload of {} bytes exceeds 255 bytes", .0)]
    ParameterTooLong(usize),

    #[error("(FCS) mismatch {expected:08x} {found:08x}")]
    FcsMismatch { expected: u32, found: u32 },
}

impl From<nom::Err<nom::error::Error<&[u8]>>> for Error {
    /// Manually specify the conversion from a [nom::error::Error] to our own error.
    /// We need this conversion, since we work with slices.
    /// If nom's error is propagated through the program, we get lifetime issues as we can't hold
    /// ownership of that slice and thereby require a 'static.
    fn from(error: nom::Err<nom::error::Error<&[u8]>>) -> Self {
        match error {
            nom::Err::Incomplete(needed) => match needed {
                Needed::Size(size) => {
                    Error::Incomplete(format!("At least {size} bytes are missing"))
                }
                Needed::Unknown => Error::Incomplete(String::new()),
            },
            // The complete parsers report a short input as `Eof`.
            nom::Err::Error(error) if error.code == nom::error::ErrorKind::Eof => {
                Error::Incomplete(format!("Input ended early, {} bytes left", error.input.len()))
            }
            nom::Err::Failure(error) | nom::Err::Error(error) => Error::Failure(
                format!(
                    "An error occured while parsing the data: nom::ErrorKind is {:?}",
                    error.code
                ),
                error.input.to_vec(),
            ),
        }
    }
}
