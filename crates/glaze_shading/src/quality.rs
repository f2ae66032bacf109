//! Rendering quality capability flag

use serde::{Deserialize, Serialize};

/// Which parts of the glass model a renderer runs
///
/// Passed explicitly to whoever evaluates the shading; there is no global
/// quality toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderQuality {
    /// Straight-through backdrop, key highlight only
    Standard,
    /// Edge refraction, chromatic splitting and the back-reflection lobe
    #[default]
    Premium,
}

impl RenderQuality {
    pub fn refraction_enabled(self) -> bool {
        self == RenderQuality::Premium
    }

    pub fn chromatic_enabled(self) -> bool {
        self == RenderQuality::Premium
    }

    pub fn kick_enabled(self) -> bool {
        self == RenderQuality::Premium
    }

    pub(crate) fn as_u32(self) -> u32 {
        match self {
            RenderQuality::Standard => 0,
            RenderQuality::Premium => 1,
        }
    }
}
