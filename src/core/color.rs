use std::fmt;
use std::str::FromStr;

use super::config::ConfigError;

/// Opaque accent colour; alpha is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    #[inline]
    pub fn with_alpha(self, alpha: f64) -> Rgba {
        Rgba {
            rgb: self,
            alpha: if alpha.is_finite() {
                alpha.clamp(0.0, 1.0)
            } else {
                0.0
            },
        }
    }
}

/// Accepts `#rrggbb`, `rrggbb` or `r,g,b`.
impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidColor(s.to_string());

        if s.contains(',') {
            let parts = s
                .split(',')
                .map(|p| p.trim().parse::<u8>().map_err(|_| invalid()))
                .collect::<Result<Vec<_>, _>>()?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Rgb::new(*r, *g, *b)),
                _ => Err(invalid()),
            };
        }

        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f64,
}

/// CSS `rgba()` form, as accepted by canvas fill/stroke styles.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}
