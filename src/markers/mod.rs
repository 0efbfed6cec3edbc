//! Marker asset cache: rasterized bitmap textures and the shader-backed
//! point materials layered on top of them.
//!
//! Textures are memoized by `(shape, draw-flags, size)` — only the low two
//! flag bits select the bitmap (stroke vs fill); the remaining bits affect
//! material blending only and key a second memoization level inside each
//! texture's catalogue. Entries are created lazily and never evicted; the
//! shape/size/flag space is small and finite in practice.
//!
//! The cache is an explicit object owned by whoever composes the renderer.
//! Mutation goes through `&mut self`, so cross-thread use needs external
//! synchronization; the handed-out [`Arc`] handles are freely shareable.

mod key;
mod raster;
mod shapes;

use std::sync::Arc;

pub use key::{MarkerError, MarkerKey, MarkerRequest, MarkerShape};
pub use raster::MarkerBitmap;
use rustc_hash::FxHashMap;
pub use shapes::{PathCmd, ShapeOutline};

/// Vertex shader for point markers (opaque asset).
pub const MARKER_POINT_VERTEX_SHADER: &str =
    include_str!("../../assets/shaders/marker_point.vert");
/// Fragment shader for point markers (opaque asset).
pub const MARKER_POINT_FRAGMENT_SHADER: &str =
    include_str!("../../assets/shaders/marker_point.frag");

/// Bitmap-selecting low bits of the flag word.
const DRAW_FLAGS: u32 = 0x3;
/// Residual flag bit disabling per-vertex coloring.
const FLAT_COLOR: u32 = 0x4;

/// Blend mode requested from the rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blending {
    /// Standard alpha blending.
    Normal,
    /// Additive blending.
    Additive,
}

/// A rasterized marker texture, shared between all materials built on it.
#[derive(Debug)]
pub struct MarkerTexture {
    /// Shape the bitmap was rasterized from.
    pub shape: MarkerShape,
    /// Bitmap-selecting flag bits (`flags & 0x3`) used for rasterization.
    pub draw_flags: u32,
    /// The rasterized bitmap.
    pub bitmap: MarkerBitmap,
}

/// A shader-backed point material referencing a cached marker texture.
#[derive(Debug)]
pub struct MarkerMaterial {
    /// The cached texture this material samples.
    pub texture: Arc<MarkerTexture>,
    /// Blend mode; markers draw additively over the scene.
    pub blending: Blending,
    /// Whether depth testing applies; markers draw on top.
    pub depth_test: bool,
    /// Whether the material is transparent.
    pub transparent: bool,
    /// Whether per-vertex color modulates the texture alpha.
    pub vertex_colors: bool,
    /// Global marker scale uniform.
    pub marker_scale: f32,
    /// Vertex shader source (opaque asset).
    pub vertex_shader: &'static str,
    /// Fragment shader source (opaque asset).
    pub fragment_shader: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct TextureKey {
    shape: MarkerShape,
    draw_flags: u32,
    size: u32,
}

/// One texture plus the materials derived from it, keyed by residual flags.
struct TextureCatalogue {
    texture: Arc<MarkerTexture>,
    materials: FxHashMap<u32, Arc<MarkerMaterial>>,
}

/// Memoizing factory for marker textures and materials.
pub struct MarkerAssets {
    defaults: MarkerKey,
    cache: FxHashMap<TextureKey, TextureCatalogue>,
}

impl MarkerAssets {
    /// Create a cache with the given defaults for omitted key fields.
    #[must_use]
    pub fn new(defaults: MarkerKey) -> Self {
        Self {
            defaults,
            cache: FxHashMap::default(),
        }
    }

    /// Fill a partial request with the cache-wide defaults.
    #[must_use]
    pub fn complete(&self, request: MarkerRequest) -> MarkerKey {
        MarkerKey {
            shape: request.shape.unwrap_or(self.defaults.shape),
            flags: request.flags.unwrap_or(self.defaults.flags),
            size: request.size.unwrap_or(self.defaults.size),
        }
    }

    /// Texture for the given key, rasterizing on first request.
    pub fn texture(&mut self, request: MarkerRequest) -> Arc<MarkerTexture> {
        let key = self.complete(request);
        Arc::clone(&self.catalogue(key).texture)
    }

    /// Material for the given key, building texture and material on first
    /// request.
    pub fn material(&mut self, request: MarkerRequest) -> Arc<MarkerMaterial> {
        let key = self.complete(request);
        let residual = key.flags & !DRAW_FLAGS;
        let catalogue = self.catalogue(key);
        if let Some(material) = catalogue.materials.get(&residual) {
            return Arc::clone(material);
        }
        let material = Arc::new(MarkerMaterial {
            texture: Arc::clone(&catalogue.texture),
            blending: Blending::Additive,
            depth_test: false,
            transparent: true,
            vertex_colors: residual & FLAT_COLOR == 0,
            marker_scale: 1.0,
            vertex_shader: MARKER_POINT_VERTEX_SHADER,
            fragment_shader: MARKER_POINT_FRAGMENT_SHADER,
        });
        let _ = catalogue.materials.insert(residual, Arc::clone(&material));
        material
    }

    /// Material for a wire-form key string (`shape[-flags[-size]]`).
    pub fn material_for(
        &mut self,
        key: &str,
    ) -> Result<Arc<MarkerMaterial>, MarkerError> {
        let request = MarkerRequest::parse(key)?;
        Ok(self.material(request))
    }

    fn catalogue(&mut self, key: MarkerKey) -> &mut TextureCatalogue {
        let texture_key = TextureKey {
            shape: key.shape,
            draw_flags: key.flags & DRAW_FLAGS,
            size: key.size,
        };
        self.cache.entry(texture_key).or_insert_with(|| {
            TextureCatalogue {
                texture: Arc::new(MarkerTexture {
                    shape: texture_key.shape,
                    draw_flags: texture_key.draw_flags,
                    bitmap: raster::rasterize(
                        texture_key.shape,
                        texture_key.draw_flags,
                        texture_key.size,
                    ),
                }),
                materials: FxHashMap::default(),
            }
        })
    }
}

impl Default for MarkerAssets {
    /// Cache with the production defaults: `xCross`, flags 0, 16 px.
    fn default() -> Self {
        Self::new(MarkerKey {
            shape: MarkerShape::XCross,
            flags: 0,
            size: 16,
        })
    }
}
