//! Parser for the display-mode listing printed by the firmware's
//! `tvservice -m <group>` command

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{DisplayMode, ModeGroup};

lazy_static! {
    static ref MODELINE_REGEX: Regex = Regex::new(
        r"mode\s+(\d+):\s+(\d+)x(\d+)\s+@\s+(\d+)Hz\s+(\d+):(\d+),.*progressive"
    )
    .unwrap();
}

/// Parse one listing line such as
/// `(prefer) mode 16: 1920x1080 @ 60Hz 16:9, clock:148MHz progressive`
///
/// Interlaced modes and lines that are not mode lines give `None`.
pub fn parse_mode_line(line: &str) -> Option<DisplayMode> {
    let caps = MODELINE_REGEX.captures(line)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());
    let mut mode = DisplayMode::new(field(1)?, field(2)?, field(3)?, field(4)?, field(5)?, field(6)?);
    mode.preferred = line.contains("prefer");
    mode.native = line.contains("native");
    Some(mode)
}

/// Parse every progressive mode in a listing, in listing order
pub fn parse_mode_listing(listing: &str) -> Vec<DisplayMode> {
    listing.lines().filter_map(parse_mode_line).collect()
}

/// Modes to offer for `group`: the parsed listing, or the group's fallback
/// table when the listing names no usable mode
pub fn available_modes(listing: &str, group: ModeGroup) -> Vec<DisplayMode> {
    let modes = parse_mode_listing(listing);
    if modes.is_empty() {
        group.fallback_modes().to_vec()
    } else {
        modes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "Group CEA has 4 modes:
           mode 1: 640x480 @ 60Hz 4:3, clock:25MHz progressive
           mode 4: 1280x720 @ 60Hz 16:9, clock:74MHz progressive
  (prefer) mode 16: 1920x1080 @ 60Hz 16:9, clock:148MHz progressive
           mode 20: 1920x1080 @ 50Hz 16:9, clock:74MHz interlaced
";

    #[test]
    fn test_parse_mode_listing() {
        let modes = parse_mode_listing(LISTING);
        assert_eq!(modes.len(), 3);
        assert_eq!(modes[1].code, 4);
        assert_eq!(modes[1].width, 1280);
        assert_eq!(modes[1].aspect_w, 16);
        assert!(!modes[1].preferred);
        assert!(modes[2].preferred);
        assert_eq!(modes[2].label(), "16: 1920x1080 60Hz 16:9 (prefer)");
    }

    #[test]
    fn test_native_flag() {
        let mode = parse_mode_line(
            "  (native) mode 82: 1920x1080 @ 60Hz 16:9, clock:148MHz progressive",
        )
        .unwrap();
        assert!(mode.native);
        assert!(!mode.preferred);
    }

    #[test]
    fn test_available_modes_falls_back() {
        let modes = available_modes("Group DMT has 0 modes:\n", ModeGroup::Dmt);
        assert_eq!(modes, ModeGroup::Dmt.fallback_modes().to_vec());
        assert_eq!(available_modes(LISTING, ModeGroup::Cea).len(), 3);
    }
}
