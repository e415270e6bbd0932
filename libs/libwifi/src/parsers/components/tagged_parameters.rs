use log::{debug, trace};
use nom::bytes::complete::take;
use nom::number::complete::u8 as get_u8;
use nom::sequence::tuple;
use nom::IResult;

use crate::error::Error;
use crate::frame::components::{TaggedParameter, TaggedParameters};

/// Parse variable length and variable field information.
/// The general structure of the data looks like this:
///
/// 1 byte: Element id
/// 1 byte: Element length (up to 255 bytes)
/// $element_length bytes: Element data
///
/// Elements are read until the input is exhausted.
/// A single dangling byte or an element that claims more bytes than are left is an error.
///
/// There might be multiple elements with the same element id,
/// which is why the elements are stored in a list in wire order.
pub fn parse_tagged_parameters(input: &[u8]) -> Result<TaggedParameters, Error> {
    let mut parameters = Vec::new();
    let mut remaining = input;

    while !remaining.is_empty() {
        let offset = input.len() - remaining.len();

        let element_header: IResult<&[u8], (u8, u8)> = tuple((get_u8, get_u8))(remaining);
        let Ok((data_start, (element_id, length))) = element_header else {
            debug!("Dangling byte at offset {offset} after the last tagged parameter");
            return Err(Error::MalformedTaggedParameter {
                offset,
                reason: format!("{} byte(s) left, an element needs at least 2", remaining.len()),
            });
        };

        let element_data: IResult<&[u8], &[u8]> = take(length)(data_start);
        let Ok((rest, data)) = element_data else {
            debug!(
                "Tagged parameter {element_id} at offset {offset} is truncated: {length} > {}",
                data_start.len()
            );
            return Err(Error::MalformedTaggedParameter {
                offset,
                reason: format!(
                    "element {element_id} declares {length} bytes, only {} left",
                    data_start.len()
                ),
            });
        };

        trace!("Tagged parameter {element_id} with {length} bytes at offset {offset}");
        parameters.push(TaggedParameter::from_parsed(element_id, data));
        remaining = rest;
    }

    Ok(TaggedParameters(parameters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::components::ElementId;

    #[test]
    fn test_empty_input() {
        let parameters = parse_tagged_parameters(&[]).unwrap();
        assert!(parameters.is_empty());
    }

    #[test]
    fn test_multiple_elements() {
        let payload = [
            0, 4, b'l', b'a', b'b', b'0', // SSID
            1, 2, 0x82, 0x84, // Supported rates
            0, 0, // Empty SSID
            221, 5, 0x00, 0x50, 0xf2, 0x04, 0x10, // Vendor specific
        ];

        let parameters = parse_tagged_parameters(&payload).unwrap();
        let ids: Vec<ElementId> = parameters.iter().map(|p| p.element_id()).collect();

        assert_eq!(
            ids,
            vec![
                ElementId::Ssid,
                ElementId::SupportedRates,
                ElementId::Ssid,
                ElementId::VendorSpecific
            ]
        );
        assert_eq!(parameters.ssid(), Some("lab0".to_string()));
        assert_eq!(parameters.encode(), payload.to_vec());
    }

    #[test]
    fn test_dangling_byte() {
        let payload = [3, 1, 6, 45];

        let error = parse_tagged_parameters(&payload).unwrap_err();
        assert!(matches!(
            error,
            Error::MalformedTaggedParameter { offset: 3, .. }
        ));
    }

    #[test]
    fn test_truncated_element() {
        let payload = [0, 1, b'a', 1, 8, 0x82, 0x84];

        let error = parse_tagged_parameters(&payload).unwrap_err();
        assert!(matches!(
            error,
            Error::MalformedTaggedParameter { offset: 3, .. }
        ));
    }

    #[test]
    fn test_max_length_element() {
        let mut payload = vec![221, 255];
        payload.extend(std::iter::repeat(0xab).take(255));

        let parameters = parse_tagged_parameters(&payload).unwrap();
        assert_eq!(parameters.len(), 1);
        assert_eq!(parameters.iter().next().unwrap().data().len(), 255);
    }
}
