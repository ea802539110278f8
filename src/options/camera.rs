use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and projection parameters.
pub struct CameraOptions {
    /// Initial eye position in world space.
    #[schemars(skip)]
    pub position: [f32; 3],
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch", extend("step" = 1.0))]
    pub pitch: f32,
    /// Initial yaw in degrees.
    #[schemars(title = "Yaw", extend("step" = 1.0))]
    pub yaw: f32,
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            position: [-2.0, -3.0, 1.6],
            pitch: -28.6,
            yaw: -34.4,
            fovy: 68.75,
            znear: 0.01,
            zfar: 1000.0,
        }
    }
}
