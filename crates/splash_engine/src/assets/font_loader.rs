//! Font loading with a configurable failure policy
//!
//! The bundled TrueType asset is opened through the [`AssetManager`], read fully
//! into memory and parsed with `fontdue`. What happens when any of those steps
//! fails is decided by [`FontFallback`]: either the built-in monospace font is
//! substituted, or the error is returned to the caller.

use std::path::Path;

use fontdue::{Font, FontSettings};

use crate::assets::{AssetError, AssetManager};
use crate::core::FontFallback;

/// Built-in fallback typeface, compiled into the binary
static MONOSPACE_TTF: &[u8] = include_bytes!("../../resources/fonts/DejaVuSansMono.ttf");

const MONOSPACE_NAME: &str = "DejaVu Sans Mono";

/// Errors that can occur during font operations
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// The asset could not be located
    #[error("error opening font asset {asset}: {source}")]
    Open {
        /// Asset name
        asset: String,
        /// Underlying error
        #[source]
        source: AssetError,
    },

    /// The asset was found but could not be read
    #[error("error reading font {asset}: {source}")]
    Read {
        /// Asset name
        asset: String,
        /// Underlying error
        #[source]
        source: AssetError,
    },

    /// The bytes are not a usable TrueType/OpenType font
    #[error("error parsing font {name}: {reason}")]
    Parse {
        /// Font name
        name: String,
        /// Parser message
        reason: String,
    },
}

/// Where a loaded font came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    /// Bundled asset with this name
    Asset(String),
    /// Built-in monospace fallback
    BuiltinMonospace,
}

/// A loaded typeface
///
/// Immutable once loaded; owned by the application for its whole lifetime.
pub struct FontFace {
    font: Font,
    name: String,
    source: FontSource,
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl FontFace {
    /// Parse a font from raw TTF/OTF bytes
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8], source: FontSource) -> Result<Self, FontError> {
        let name = name.into();
        let font = Font::from_bytes(bytes, FontSettings::default()).map_err(|reason| FontError::Parse {
            name: name.clone(),
            reason: reason.to_string(),
        })?;

        log::info!("Loaded font {} ({} glyphs)", name, font.glyph_count());
        Ok(Self { font, name, source })
    }

    /// The font compiled into the engine
    pub fn builtin_monospace() -> Result<Self, FontError> {
        Self::from_bytes(MONOSPACE_NAME, MONOSPACE_TTF, FontSource::BuiltinMonospace)
    }

    /// Underlying `fontdue` font
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Origin of this font
    pub fn source(&self) -> &FontSource {
        &self.source
    }

    /// Whether this is the built-in fallback
    pub fn is_fallback(&self) -> bool {
        self.source == FontSource::BuiltinMonospace
    }
}

/// Loads the application font according to a [`FontFallback`] policy
pub struct FontLoader<'a> {
    assets: &'a AssetManager,
    policy: FontFallback,
}

impl<'a> FontLoader<'a> {
    /// Create a loader over the given asset manager
    pub fn new(assets: &'a AssetManager, policy: FontFallback) -> Self {
        Self { assets, policy }
    }

    /// Load `asset`, applying the fallback policy on failure
    pub fn load(&self, asset: &str) -> Result<FontFace, FontError> {
        match self.load_asset(asset) {
            Ok(face) => Ok(face),
            Err(err) => match self.policy {
                FontFallback::Fatal => {
                    log::error!("{err}");
                    Err(err)
                }
                FontFallback::Monospace => {
                    log::warn!("{err}");
                    log::warn!("using {MONOSPACE_NAME} font");
                    FontFace::builtin_monospace()
                }
            },
        }
    }

    fn load_asset(&self, asset: &str) -> Result<FontFace, FontError> {
        let bytes = self.assets.read(asset).map_err(|source| match source {
            AssetError::NotFound(_) => FontError::Open { asset: asset.to_string(), source },
            AssetError::IoError(_) => FontError::Read { asset: asset.to_string(), source },
        })?;

        FontFace::from_bytes(display_name(asset), &bytes, FontSource::Asset(asset.to_string()))
    }
}

/// File stem of an asset name, e.g. `fonts/DejaVuSans.ttf` -> `DejaVuSans`
fn display_name(asset: &str) -> String {
    Path::new(asset)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(asset)
        .to_string()
}
