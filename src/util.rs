use anyhow::{bail, Context, Result};
use libwifi::frame::Action;
use libwifi::{Addresses, FrameNode};

/// Parse a `ID:HEX` element argument, e.g. `221:506f9a09` or `0:` for an empty SSID.
pub fn parse_element(argument: &str) -> Result<(u8, Vec<u8>), String> {
    let Some((id, data)) = argument.split_once(':') else {
        return Err(format!("'{argument}' isn't of the form ID:HEX"));
    };

    let id: u8 = id
        .trim()
        .parse()
        .map_err(|err| format!("Invalid element id '{id}': {err}"))?;
    let data = hex::decode(data.trim()).map_err(|err| format!("Invalid element data: {err}"))?;
    if data.len() > u8::MAX as usize {
        return Err(format!(
            "Element data is {} bytes long, at most 255 fit",
            data.len()
        ));
    }

    Ok((id, data))
}

/// Decode a frame given as hex.
/// Whitespace, `:` separators and a leading `0x` are ignored.
pub fn parse_hex_frame(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':')
        .collect();

    if cleaned.is_empty() {
        bail!("Empty frame");
    }

    hex::decode(&cleaned).with_context(|| format!("'{input}' isn't valid hex"))
}

fn option_to_string<T: ToString>(option: Option<T>) -> String {
    option.map_or_else(|| "-".to_string(), |value| value.to_string())
}

/// Human readable lines describing an Action frame.
pub fn describe_action(action: &Action) -> Vec<String> {
    let management = action.management();
    let sequence_control = management.sequence_control();

    let mut lines = vec![
        format!(
            "Action frame, {} bytes, protected: {}",
            action.size(),
            management.frame_control().protected()
        ),
        format!(
            "  dst {} src {} bssid {}",
            action.dest(),
            option_to_string(action.src()),
            option_to_string(action.bssid())
        ),
        format!(
            "  duration {} sequence {} fragment {}",
            management.duration(),
            sequence_control.sequence_number,
            sequence_control.fragment_number
        ),
        format!(
            "  category {} ({}) action {}",
            action.category(),
            action.category().0,
            action.action()
        ),
    ];

    for parameter in action.tagged_parameters() {
        lines.push(format!(
            "  element {:>3} {:<28} len {:>3} {}",
            parameter.id(),
            parameter.element_id().to_string(),
            parameter.data().len(),
            hex::encode(parameter.data())
        ));
    }

    for vendor in action.tagged_parameters().vendor_specific() {
        lines.push(format!(
            "  vendor {} type {}",
            hex::encode(vendor.oui),
            vendor.oui_type
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use libwifi::frame::components::{ElementId, MacAddress};
    use libwifi::frame::CategoryKind;

    #[test]
    fn test_parse_element() {
        assert_eq!(
            parse_element("221:506f9a09"),
            Ok((221, vec![0x50, 0x6f, 0x9a, 0x09]))
        );
        assert_eq!(parse_element("0:"), Ok((0, vec![])));
        assert!(parse_element("221").is_err());
        assert!(parse_element("256:00").is_err());
        assert!(parse_element("1:0g").is_err());
        assert!(parse_element(&format!("1:{}", "00".repeat(256))).is_err());
    }

    #[test]
    fn test_parse_hex_frame() {
        assert_eq!(parse_hex_frame("d0 00").unwrap(), vec![0xd0, 0x00]);
        assert_eq!(parse_hex_frame("0xd0:00:3a").unwrap(), vec![0xd0, 0x00, 0x3a]);
        assert!(parse_hex_frame("").is_err());
        assert!(parse_hex_frame("d0f").is_err());
    }

    #[test]
    fn test_describe_action() {
        let mut action = Action::new(
            MacAddress::broadcast(),
            MacAddress([2, 0, 0, 0, 0, 1]),
            CategoryKind::Public,
            10,
        );
        action
            .tagged_parameters_mut()
            .push(ElementId::VendorSpecific, vec![0x50, 0x6f, 0x9a, 0x09])
            .unwrap();

        let lines = describe_action(&action);

        assert!(lines[1].contains("dst ff:ff:ff:ff:ff:ff src 02:00:00:00:00:01"));
        assert!(lines[3].contains("category Public (4) action 10"));
        assert!(lines[4].contains("506f9a09"));
        assert!(lines[5].contains("vendor 506f9a type 9"));
    }
}
