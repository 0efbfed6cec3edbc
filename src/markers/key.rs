//! Marker key model and wire-string parsing.

use std::fmt;

/// Errors from marker key parsing and shape lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerError {
    /// Shape name does not match any known marker shape.
    UnknownShape(String),
    /// Key string does not match the `shape[-flags[-size]]` pattern.
    MalformedKey(String),
}

impl fmt::Display for MarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownShape(name) => {
                write!(f, "unknown marker shape \"{name}\"")
            }
            Self::MalformedKey(key) => {
                write!(f, "malformed marker key \"{key}\"")
            }
        }
    }
}

impl std::error::Error for MarkerError {}

/// Marker shapes the rasterizer knows how to draw.
///
/// A closed set; requesting anything else fails, there is no default
/// substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    /// Circle outline.
    HollowCircle,
    /// Filled disc.
    FilledCircle,
    /// Filled square.
    FilledRectangle,
    /// Square outline.
    HollowRectangle,
    /// Thin X-like cross.
    XCross,
    /// X-like cross drawn as a hollow star outline.
    HollowXCross,
    /// Thin +-like cross.
    PlusCross,
    /// +-like cross drawn as a hollow outline.
    HollowPlusCross,
}

impl MarkerShape {
    /// Wire name of the shape, as it appears in key strings.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::HollowCircle => "hollowCircle",
            Self::FilledCircle => "filledCircle",
            Self::FilledRectangle => "filledRectangle",
            Self::HollowRectangle => "hollowRectangle",
            Self::XCross => "xCross",
            Self::HollowXCross => "hollowXCross",
            Self::PlusCross => "plusCross",
            Self::HollowPlusCross => "hollowPlusCross",
        }
    }

    /// Look a shape up by its wire name.
    pub fn parse(name: &str) -> Result<Self, MarkerError> {
        match name {
            "hollowCircle" => Ok(Self::HollowCircle),
            "filledCircle" => Ok(Self::FilledCircle),
            "filledRectangle" => Ok(Self::FilledRectangle),
            "hollowRectangle" => Ok(Self::HollowRectangle),
            "xCross" => Ok(Self::XCross),
            "hollowXCross" => Ok(Self::HollowXCross),
            "plusCross" => Ok(Self::PlusCross),
            "hollowPlusCross" => Ok(Self::HollowPlusCross),
            _ => Err(MarkerError::UnknownShape(name.to_owned())),
        }
    }
}

impl fmt::Display for MarkerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully resolved marker key: shape, draw/blend flags and pixel size.
///
/// Flag bits: `0x1` skips the stroke pass, `0x2` fills the path (these two
/// select the bitmap), `0x4` disables per-vertex coloring (material only).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerKey {
    /// Marker shape.
    pub shape: MarkerShape,
    /// Draw/blend flag bits.
    pub flags: u32,
    /// Square bitmap edge length in pixels.
    pub size: u32,
}

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.shape, self.flags, self.size)
    }
}

/// A possibly partial marker key; omitted fields fall back to the cache-wide
/// defaults fixed at [`MarkerAssets`](super::MarkerAssets) construction.
///
/// The wire form is `shape[-flags[-size]]` with flags and size as optional
/// trailing integers; it is kept as a transport/debug convenience only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerRequest {
    /// Requested shape, if any.
    pub shape: Option<MarkerShape>,
    /// Requested flag bits, if any.
    pub flags: Option<u32>,
    /// Requested pixel size, if any.
    pub size: Option<u32>,
}

impl MarkerRequest {
    /// Parse the wire form `shape[-flags[-size]]`.
    pub fn parse(key: &str) -> Result<Self, MarkerError> {
        let mut parts = key.split('-');
        let shape = match parts.next() {
            Some(name) if !name.is_empty() => MarkerShape::parse(name)?,
            _ => return Err(MarkerError::MalformedKey(key.to_owned())),
        };
        let parse_int = |part: Option<&str>| match part {
            None => Ok(None),
            Some(digits) => digits
                .parse::<u32>()
                .map(Some)
                .map_err(|_| MarkerError::MalformedKey(key.to_owned())),
        };
        let flags = parse_int(parts.next())?;
        let size = parse_int(parts.next())?;
        if parts.next().is_some() {
            return Err(MarkerError::MalformedKey(key.to_owned()));
        }
        Ok(Self {
            shape: Some(shape),
            flags,
            size,
        })
    }
}

impl From<MarkerKey> for MarkerRequest {
    fn from(key: MarkerKey) -> Self {
        Self {
            shape: Some(key.shape),
            flags: Some(key.flags),
            size: Some(key.size),
        }
    }
}
