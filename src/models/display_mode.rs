//! HDMI display modes offered when choosing `hdmi_group`/`hdmi_mode`

use std::fmt;

/// HDMI mode group, as stored in `hdmi_group`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeGroup {
    /// Consumer electronics timings (`hdmi_group=1`)
    Cea,
    /// Monitor timings (`hdmi_group=2`)
    Dmt,
}

impl ModeGroup {
    /// Value written to `hdmi_group` for this group
    pub fn group_number(&self) -> i64 {
        match self {
            ModeGroup::Cea => 1,
            ModeGroup::Dmt => 2,
        }
    }

    pub fn from_group_number(n: i64) -> Option<Self> {
        match n {
            1 => Some(ModeGroup::Cea),
            2 => Some(ModeGroup::Dmt),
            _ => None,
        }
    }

    /// Modes offered when the display reports none of its own
    pub fn fallback_modes(&self) -> &'static [DisplayMode] {
        match self {
            ModeGroup::Cea => CEA_FALLBACK_MODES,
            ModeGroup::Dmt => DMT_FALLBACK_MODES,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ModeGroup::Cea => "CEA",
            ModeGroup::Dmt => "DMT",
        }
    }
}

impl std::str::FromStr for ModeGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CEA" => Ok(ModeGroup::Cea),
            "DMT" => Ok(ModeGroup::Dmt),
            _ => Err(format!("unknown mode group '{}'", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub code: u32,
    pub width: u32,
    pub height: u32,
    pub refresh_hz: u32,
    pub aspect_w: u32,
    pub aspect_h: u32,
    pub preferred: bool,
    pub native: bool,
}

impl DisplayMode {
    pub const fn new(
        code: u32,
        width: u32,
        height: u32,
        refresh_hz: u32,
        aspect_w: u32,
        aspect_h: u32,
    ) -> Self {
        DisplayMode {
            code,
            width,
            height,
            refresh_hz,
            aspect_w,
            aspect_h,
            preferred: false,
            native: false,
        }
    }

    /// Human-readable label, e.g. `4: 1280x720 60Hz 16:9 (prefer)`
    pub fn label(&self) -> String {
        let mut label = format!(
            "{}: {}x{} {}Hz {}:{}",
            self.code, self.width, self.height, self.refresh_hz, self.aspect_w, self.aspect_h
        );
        if self.preferred {
            label.push_str(" (prefer)");
        }
        if self.native {
            label.push_str(" (native)");
        }
        label
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

pub static CEA_FALLBACK_MODES: &[DisplayMode] = &[
    DisplayMode::new(1, 640, 480, 60, 4, 3),
    DisplayMode::new(2, 720, 480, 60, 4, 3),
    DisplayMode::new(3, 720, 480, 60, 16, 9),
    DisplayMode::new(4, 1280, 720, 60, 16, 9),
    DisplayMode::new(5, 1920, 1080, 60, 16, 9),
    DisplayMode::new(16, 1920, 1080, 60, 16, 9),
];

pub static DMT_FALLBACK_MODES: &[DisplayMode] = &[
    DisplayMode::new(4, 640, 480, 60, 4, 3),
    DisplayMode::new(9, 800, 600, 60, 4, 3),
    DisplayMode::new(16, 1024, 768, 60, 4, 3),
    DisplayMode::new(28, 1280, 800, 60, 16, 10),
    DisplayMode::new(32, 1280, 960, 60, 4, 3),
    DisplayMode::new(35, 1280, 1024, 60, 5, 4),
    DisplayMode::new(47, 1440, 900, 60, 16, 10),
    DisplayMode::new(51, 1600, 1200, 60, 4, 3),
    DisplayMode::new(58, 1680, 1050, 60, 16, 10),
    DisplayMode::new(82, 1920, 1080, 60, 16, 9),
    DisplayMode::new(85, 1280, 720, 60, 16, 9),
];

/// Build the selection list shown to the user: a leading "default" entry
/// labelled `base_label`, then one entry per mode
pub fn mode_choices(base_label: &str, modes: &[DisplayMode]) -> Vec<(Option<DisplayMode>, String)> {
    let mut choices = Vec::with_capacity(modes.len() + 1);
    choices.push((None, base_label.to_string()));
    choices.extend(modes.iter().map(|m| (Some(*m), m.label())));
    choices
}
