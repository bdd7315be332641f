//! Host settings
//!
//! Controls how the headless host drives the scene. The animation itself is
//! fixed; nothing here changes its timing or motion.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::renderer::OrbitCamera;

/// What the host writes to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Nothing but log lines
    Quiet,
    /// One line per phase change plus a final state line
    #[default]
    Summary,
    /// A JSON snapshot every `snapshot_every` frames
    Snapshots,
}

impl OutputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::Quiet => "quiet",
            OutputMode::Summary => "summary",
            OutputMode::Snapshots => "snapshots",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quiet" => Some(OutputMode::Quiet),
            "summary" => Some(OutputMode::Summary),
            "snapshots" | "json" => Some(OutputMode::Snapshots),
            _ => None,
        }
    }
}

/// Host settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames to simulate before exiting
    pub frames: u64,
    pub output: OutputMode,
    /// Snapshot interval in frames (snapshot mode only, 0 = every frame)
    pub snapshot_every: u64,
    /// Pace frames at the tick rate instead of running flat out
    pub realtime: bool,
    /// Viewport used for the camera aspect ratio
    pub viewport: [u32; 2],
    pub camera: OrbitCamera,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Ten seconds: well past the split and the start of the roll
            frames: 600,
            output: OutputMode::Summary,
            snapshot_every: 30,
            realtime: false,
            viewport: [800, 600],
            camera: OrbitCamera::default(),
        }
    }
}

impl Settings {
    /// Default settings file name, looked up in the working directory
    pub const FILE_NAME: &'static str = "pill-split.json";

    /// Parse settings; missing fields take their defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Invalid settings: {}", e);
                None
            }
        }
    }

    /// Load settings from a file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) => log::warn!("Could not read {}: {}", path.display(), e),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Whether frame `tick` gets a snapshot
    pub fn wants_snapshot(&self, tick: u64) -> bool {
        self.output == OutputMode::Snapshots
            && (self.snapshot_every == 0 || tick % self.snapshot_every == 0)
    }

    /// Camera with the aspect ratio of the configured viewport
    pub fn camera(&self) -> OrbitCamera {
        let mut camera = self.camera;
        camera.set_aspect(self.viewport[0], self.viewport[1]);
        camera
    }
}
