mod status;
mod util;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use log::{debug, info};

use libwifi::frame::components::MacAddress;
use libwifi::frame::Action;
use libwifi::{parse_frame, Frame, FrameNode};

use crate::status::StatusLog;
use crate::util::{describe_action, parse_element, parse_hex_frame};

#[derive(Parser, Debug)]
#[command(name = "dot11-action", version)]
#[command(about = "Decode and build IEEE 802.11 Action frames", long_about = None)]
struct Cli {
    /// Print more log output, repeat for more detail
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode frames given as hex, starting at the frame control field
    Decode {
        /// One or more frames
        #[arg(required = true)]
        frames: Vec<String>,

        /// Frames end with a frame check sequence
        #[arg(long)]
        fcs: bool,
    },

    /// Build an Action frame and print it as hex
    Build {
        /// Receiver address
        #[arg(long)]
        dst: MacAddress,

        /// Transmitter address, random if not given
        #[arg(long)]
        src: Option<MacAddress>,

        /// Category byte, unset (128) if not given
        #[arg(short, long)]
        category: Option<u8>,

        /// Action byte
        #[arg(short, long, default_value_t = 0)]
        action: u8,

        /// Tagged parameter as ID:HEX, can be repeated
        #[arg(short, long = "element", value_parser = parse_element)]
        elements: Vec<(u8, Vec<u8>)>,

        /// Append a frame check sequence
        #[arg(long)]
        fcs: bool,
    },
}

fn decode(frames: &[String], fcs: bool) -> Result<()> {
    for (index, input) in frames.iter().enumerate() {
        let bytes = parse_hex_frame(input).with_context(|| format!("Frame #{index}"))?;
        debug!("Decoding frame #{index} with {} bytes", bytes.len());

        let frame = parse_frame(&bytes, fcs).with_context(|| format!("Frame #{index}"))?;
        match frame {
            Frame::Action(action) => {
                for line in describe_action(&action) {
                    println!("{line}");
                }
            }
        }
    }

    Ok(())
}

fn build(
    dst: MacAddress,
    src: Option<MacAddress>,
    category: Option<u8>,
    action_code: u8,
    elements: Vec<(u8, Vec<u8>)>,
    fcs: bool,
) -> Result<Frame> {
    let src = src.unwrap_or_else(|| {
        let random = MacAddress::random();
        info!("Using random source address {random}");
        random
    });

    let mut action = Action::with_addresses(dst, src);
    if let Some(category) = category {
        action.set_category(category);
    }
    action.set_action(action_code);

    for (id, data) in elements {
        action
            .tagged_parameters_mut()
            .push(id, data)
            .with_context(|| format!("Element {id}"))?;
    }

    let frame = Frame::from(action);
    debug!("Built {} byte frame, fcs: {fcs}", frame.size());

    Ok(frame)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    StatusLog::init(cli.verbose).context("Couldn't install the logger")?;

    match cli.command {
        Commands::Decode { frames, fcs } => decode(&frames, fcs)?,
        Commands::Build {
            dst,
            src,
            category,
            action,
            elements,
            fcs,
        } => {
            let frame = build(dst, src, category, action, elements, fcs)?;
            let bytes = if fcs {
                frame.encode_with_fcs()
            } else {
                frame.encode()
            };
            println!("{}", hex::encode(bytes));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libwifi::frame::ActionCategory;

    #[test]
    fn test_decode_args() {
        let cli = Cli::try_parse_from([
            "dot11-action",
            "-vv",
            "decode",
            "--fcs",
            "d000",
            "d001",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Decode { frames, fcs } => {
                assert_eq!(frames, vec!["d000".to_string(), "d001".to_string()]);
                assert!(fcs);
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_decode_requires_frames() {
        assert!(Cli::try_parse_from(["dot11-action", "decode"]).is_err());
    }

    #[test]
    fn test_build_args() {
        let cli = Cli::try_parse_from([
            "dot11-action",
            "build",
            "--dst",
            "ff:ff:ff:ff:ff:ff",
            "--category",
            "4",
            "--action",
            "10",
            "--element",
            "221:506f9a09",
            "-e",
            "0:",
        ])
        .unwrap();

        match cli.command {
            Commands::Build {
                dst,
                src,
                category,
                action,
                elements,
                fcs,
            } => {
                assert!(dst.is_broadcast());
                assert_eq!(src, None);
                assert_eq!(category, Some(4));
                assert_eq!(action, 10);
                assert_eq!(
                    elements,
                    vec![(221, vec![0x50, 0x6f, 0x9a, 0x09]), (0, vec![])]
                );
                assert!(!fcs);
            }
            other => panic!("Unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_build_rejects_bad_input() {
        assert!(Cli::try_parse_from(["dot11-action", "build", "--dst", "ff:ff"]).is_err());
        assert!(Cli::try_parse_from([
            "dot11-action",
            "build",
            "--dst",
            "ff:ff:ff:ff:ff:ff",
            "--category",
            "256"
        ])
        .is_err());
    }

    #[test]
    fn test_build_frame() {
        let src = MacAddress([2, 0, 0, 0, 0, 1]);
        let frame = build(
            MacAddress::broadcast(),
            Some(src),
            None,
            3,
            vec![(0, b"lab".to_vec())],
            false,
        )
        .unwrap();

        let Frame::Action(action) = &frame;
        assert_eq!(action.category(), ActionCategory::ERROR);
        assert_eq!(action.action(), 3);
        assert_eq!(action.management().addr2(), &src);
        assert_eq!(action.tagged_parameters().ssid(), Some("lab".to_string()));

        let bytes = frame.encode_with_fcs();
        assert_eq!(parse_frame(&bytes, true).unwrap(), frame);
    }

    #[test]
    fn test_build_random_source() {
        let frame = build(MacAddress::broadcast(), None, Some(4), 0, vec![], false).unwrap();

        let Frame::Action(action) = frame;
        assert!(action.management().addr2().is_real_device());
    }
}
