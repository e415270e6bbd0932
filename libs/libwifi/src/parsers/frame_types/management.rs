use log::{debug, trace};
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;

use crate::error::Error;
use crate::frame::components::FrameControl;
use crate::frame::*;

/// Parse the fixed fields of an [Action] frame.
///
/// The input starts directly after the management header.
/// Less than [ActionHeader::SIZE] bytes is a malformed frame.
pub fn parse_action_header(input: &[u8]) -> Result<(&[u8], ActionHeader), Error> {
    if input.len() < ActionHeader::SIZE {
        debug!(
            "Action frame body too short: {} of {} bytes",
            input.len(),
            ActionHeader::SIZE
        );
        return Err(Error::MalformedFrame {
            expected: ActionHeader::SIZE,
            remaining: input.len(),
        });
    }

    let (remaining, (category, action)) = tuple((get_u8, get_u8))(input)?;

    Ok((remaining, ActionHeader::new(category, action)))
}

/// Parse an [Action] frame.
///
/// The general structure is:
/// - ManagementHeader
/// - Category (indicating the type of action, e.g., spectrum management, QoS)
/// - Action (specific action within the category)
/// - Tagged parameters until the end of the input
pub fn parse_action_frame(frame_control: FrameControl, input: &[u8]) -> Result<Action, Error> {
    let (input, mut management) = ManagementFrame::parse(frame_control, input)?;
    let (input, body) = parse_action_header(input)?;
    management.parse_tagged_parameters(input)?;

    trace!(
        "Parsed action frame: category {} action {} with {} tagged parameters",
        body.category,
        body.action,
        management.tagged_parameters.len()
    );

    Ok(Action::from_parts(management, body))
}

/// Parse an [Action] frame into a [Frame].
pub fn parse_action(frame_control: FrameControl, input: &[u8]) -> Result<Frame, Error> {
    Ok(Frame::Action(parse_action_frame(frame_control, input)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_header() {
        let (remaining, header) = parse_action_header(&[4, 10, 221]).unwrap();

        assert_eq!(remaining, &[221]);
        assert_eq!(header.category, ActionCategory(4));
        assert_eq!(header.action, 10);
    }

    #[test]
    fn test_action_header_too_short() {
        for input in [&[][..], &[4][..]] {
            let error = parse_action_header(input).unwrap_err();
            assert!(matches!(
                error,
                Error::MalformedFrame {
                    expected: 2,
                    remaining
                } if remaining == input.len()
            ));
        }
    }
}
