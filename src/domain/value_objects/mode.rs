//! Mode value objects - what a run does once selections are made
//!
//! - `Mode`: the initial state of the workflow state machine
//! - `NextStep`: the follow-up chosen after a `buildOnly` build

use serde::{Deserialize, Serialize};

/// Start mode of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Run the dev server
    Start,
    /// Build, upload, then extract
    Build,
    /// Build, then ask what to do next
    BuildOnly,
    /// Extract assets from an existing build
    Extract,
    /// Upload an existing build
    Upload,
}

impl Mode {
    /// Modes offered by the mode menu, in menu order
    pub const MENU: [Mode; 4] = [Mode::Build, Mode::BuildOnly, Mode::Extract, Mode::Upload];

    /// Name written into the run context
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Start => "start",
            Mode::Build => "build",
            Mode::BuildOnly => "buildOnly",
            Mode::Extract => "extract",
            Mode::Upload => "upload",
        }
    }

    /// Menu label of this mode
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Start => "Dev Server (development stage)",
            Mode::Build => "Build + Upload + Extract",
            Mode::BuildOnly => "Build + Confirm Next",
            Mode::Extract => "Extract Assets in Build Folder",
            Mode::Upload => "Upload Assets from Build Folder",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Mode::Start),
            "build" => Some(Mode::Build),
            "buildOnly" => Some(Mode::BuildOnly),
            "extract" => Some(Mode::Extract),
            "upload" => Some(Mode::Upload),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Follow-up action after a `buildOnly` build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NextStep {
    Upload,
    Extract,
    Both,
    Exit,
}

impl NextStep {
    pub const ALL: [NextStep; 4] = [
        NextStep::Upload,
        NextStep::Extract,
        NextStep::Both,
        NextStep::Exit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NextStep::Upload => "upload",
            NextStep::Extract => "extract",
            NextStep::Both => "both",
            NextStep::Exit => "exit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NextStep::Upload => "Upload assets",
            NextStep::Extract => "Extract assets",
            NextStep::Both => "Upload & Extract assets",
            NextStep::Exit => "Exit",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|step| step.as_str() == name)
    }

    pub fn includes_upload(&self) -> bool {
        matches!(self, NextStep::Upload | NextStep::Both)
    }

    pub fn includes_extract(&self) -> bool {
        matches!(self, NextStep::Extract | NextStep::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_names_roundtrip() {
        for mode in [
            Mode::Start,
            Mode::Build,
            Mode::BuildOnly,
            Mode::Extract,
            Mode::Upload,
        ] {
            assert_eq!(Mode::from_name(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::from_name("deploy"), None);
    }

    #[test]
    fn mode_menu_excludes_start() {
        assert!(!Mode::MENU.contains(&Mode::Start));
    }

    #[test]
    fn mode_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&Mode::BuildOnly).unwrap(),
            "\"buildOnly\""
        );
    }

    #[test]
    fn next_step_expansion() {
        assert!(NextStep::Both.includes_upload());
        assert!(NextStep::Both.includes_extract());
        assert!(!NextStep::Upload.includes_extract());
        assert!(!NextStep::Exit.includes_upload());
        assert_eq!(NextStep::from_name("exit"), Some(NextStep::Exit));
    }
}
