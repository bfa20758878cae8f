// Per-session configuration. Hex colors are parsed here, up front, so the
// frame loop never sees a malformed value.

use crate::color::{Color, ColorError};

pub const DEFAULT_PARTICLE_COLOR: Color = Color { r: 0xa4, g: 0x76, b: 0xff }; // #A476FF
pub const DEFAULT_LINE_COLOR: Color = Color { r: 0x5e, g: 0x44, b: 0x91 }; // #5e4491
pub const DEFAULT_PARTICLE_COUNT: u32 = 100;
pub const DEFAULT_MAX_DISTANCE: f64 = 120.0;
pub const DEFAULT_PARTICLE_SIZE: f64 = 2.0;
pub const DEFAULT_SPEED: f64 = 1.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
    pub particle_color: Color,
    pub line_color: Color,
    pub particle_count: u32,
    /// Pair distance below which a connecting line is drawn, in pixels.
    pub max_distance: f64,
    /// Dot radius in pixels.
    pub particle_size: f64,
    /// Scale factor for the seeded velocities.
    pub speed: f64,
}

impl Default for NetworkConfig {
    fn default() -> NetworkConfig {
        NetworkConfig {
            particle_color: DEFAULT_PARTICLE_COLOR,
            line_color: DEFAULT_LINE_COLOR,
            particle_count: DEFAULT_PARTICLE_COUNT,
            max_distance: DEFAULT_MAX_DISTANCE,
            particle_size: DEFAULT_PARTICLE_SIZE,
            speed: DEFAULT_SPEED,
        }
    }
}

impl NetworkConfig {
    // Build a config from the optional JS-side knobs, falling back to the
    // defaults above. A bad hex string rejects the whole config.
    pub fn from_options(
        particle_color: Option<&str>,
        line_color: Option<&str>,
        particle_count: Option<u32>,
        max_distance: Option<f64>,
        particle_size: Option<f64>,
        speed: Option<f64>,
    ) -> Result<NetworkConfig, ColorError> {
        let defaults = NetworkConfig::default();
        Ok(NetworkConfig {
            particle_color: match particle_color {
                Some(hex) => Color::from_hex(hex)?,
                None => defaults.particle_color,
            },
            line_color: match line_color {
                Some(hex) => Color::from_hex(hex)?,
                None => defaults.line_color,
            },
            particle_count: particle_count.unwrap_or(defaults.particle_count),
            max_distance: max_distance.unwrap_or(defaults.max_distance),
            particle_size: particle_size.unwrap_or(defaults.particle_size),
            speed: speed.unwrap_or(defaults.speed),
        })
    }
}
