//! Static-scene descriptor validation and assembly.
//!
//! A static scene arrives as JSON with `materials` and `geometry` arrays
//! whose items carry a `_type` discriminator from a small closed set. The
//! descriptor is validated at the boundary into tagged enums; an unknown
//! `_type`, like a geometry item referencing an undefined material, is a
//! fatal load error for the scene.

use std::sync::Arc;

use glam::Vec3;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::error::EvdispError;

fn one() -> f32 {
    1.0
}

fn white() -> u32 {
    0x00ff_ffff
}

/// One material record of a scene descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_type")]
pub enum MaterialDescriptor {
    /// Unlit mesh material.
    #[serde(rename = "MeshBasicMaterial")]
    MeshBasic {
        /// Material name referenced from geometry items.
        #[serde(rename = "_name")]
        name: String,
        /// Render as wireframe.
        #[serde(default)]
        wireframe: bool,
        /// Enable alpha blending.
        #[serde(default)]
        transparent: bool,
        /// Opacity in `[0, 1]`.
        #[serde(default = "one")]
        opacity: f32,
        /// Packed 0xRRGGBB color.
        #[serde(default = "white")]
        color: u32,
    },
    /// World-space dashed line material.
    #[serde(rename = "LineDashedMaterial")]
    LineDashed {
        /// Material name referenced from geometry items.
        #[serde(rename = "_name")]
        name: String,
        /// Packed 0xRRGGBB color.
        #[serde(default = "white")]
        color: u32,
        /// Line width in pixels.
        #[serde(default = "one")]
        linewidth: f32,
        /// Dash pattern scale.
        #[serde(default = "one")]
        scale: f32,
        /// Dash length in world units.
        #[serde(rename = "dashSize", default = "one")]
        dash_size: f32,
        /// Gap length in world units.
        #[serde(rename = "gapSize", default = "one")]
        gap_size: f32,
    },
}

impl MaterialDescriptor {
    fn name(&self) -> &str {
        match self {
            Self::MeshBasic { name, .. } | Self::LineDashed { name, .. } => {
                name
            }
        }
    }
}

/// One geometry record of a scene descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "_type")]
pub enum GeometryDescriptor {
    /// Axis-aligned box placed with position and ZYX Euler rotation.
    #[serde(rename = "BoxGeometry")]
    Box {
        /// Item name.
        #[serde(rename = "_name")]
        name: String,
        /// Referenced material name.
        #[serde(rename = "_material")]
        material: String,
        /// Box extents.
        sizes: [f32; 3],
        /// Placement position.
        #[serde(default)]
        position: [f32; 3],
        /// ZYX Euler rotation in degrees.
        #[serde(default)]
        rotation: [f32; 3],
    },
    /// Polyline through fixed world-space points.
    #[serde(rename = "Line")]
    Line {
        /// Item name.
        #[serde(rename = "_name")]
        name: String,
        /// Referenced material name.
        #[serde(rename = "_material")]
        material: String,
        /// Polyline points.
        points: Vec<[f32; 3]>,
    },
}

/// Scene descriptor as fetched from the scene endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDescriptor {
    /// Material records.
    #[serde(default)]
    pub materials: Vec<MaterialDescriptor>,
    /// Geometry records.
    #[serde(default)]
    pub geometry: Vec<GeometryDescriptor>,
}

/// A validated scene material (descriptor minus its name).
#[derive(Debug, Clone, PartialEq)]
pub enum SceneMaterial {
    /// Unlit mesh material.
    MeshBasic {
        /// Render as wireframe.
        wireframe: bool,
        /// Enable alpha blending.
        transparent: bool,
        /// Opacity in `[0, 1]`.
        opacity: f32,
        /// Packed 0xRRGGBB color.
        color: u32,
    },
    /// World-space dashed line material.
    LineDashed {
        /// Packed 0xRRGGBB color.
        color: u32,
        /// Line width in pixels.
        linewidth: f32,
        /// Dash pattern scale.
        scale: f32,
        /// Dash length in world units.
        dash_size: f32,
        /// Gap length in world units.
        gap_size: f32,
    },
}

/// Shape and placement of a validated scene item.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItemKind {
    /// Axis-aligned box with placement.
    Box {
        /// Box extents.
        sizes: Vec3,
        /// Placement position.
        position: Vec3,
        /// ZYX Euler rotation in degrees.
        rotation_deg: Vec3,
    },
    /// Polyline through fixed world-space points.
    Polyline {
        /// Polyline points.
        points: Vec<Vec3>,
    },
}

/// One validated scene item ready for emplacement by the renderer.
#[derive(Debug, Clone)]
pub struct SceneItem {
    /// Item name.
    pub name: String,
    /// Resolved material.
    pub material: Arc<SceneMaterial>,
    /// Shape and placement.
    pub kind: SceneItemKind,
}

/// A validated static scene.
#[derive(Debug, Clone, Default)]
pub struct StaticScene {
    /// Scene items in descriptor order.
    pub items: Vec<SceneItem>,
}

/// Validate a scene descriptor payload and resolve material references.
pub fn load_scene(
    value: serde_json::Value,
) -> Result<StaticScene, EvdispError> {
    let descriptor: SceneDescriptor = serde_json::from_value(value)
        .map_err(|e| EvdispError::SceneLoad(e.to_string()))?;

    let mut materials: FxHashMap<String, Arc<SceneMaterial>> =
        FxHashMap::default();
    for record in &descriptor.materials {
        let material = match *record {
            MaterialDescriptor::MeshBasic {
                wireframe,
                transparent,
                opacity,
                color,
                ..
            } => SceneMaterial::MeshBasic {
                wireframe,
                transparent,
                opacity,
                color,
            },
            MaterialDescriptor::LineDashed {
                color,
                linewidth,
                scale,
                dash_size,
                gap_size,
                ..
            } => SceneMaterial::LineDashed {
                color,
                linewidth,
                scale,
                dash_size,
                gap_size,
            },
        };
        if materials
            .insert(record.name().to_owned(), Arc::new(material))
            .is_some()
        {
            log::warn!(
                "scene material \"{}\" defined twice; keeping the last",
                record.name()
            );
        }
    }

    let resolve = |name: &str, material: &str| {
        materials.get(material).cloned().ok_or_else(|| {
            EvdispError::SceneLoad(format!(
                "geometry \"{name}\" references undefined material \
                 \"{material}\""
            ))
        })
    };

    let mut items = Vec::with_capacity(descriptor.geometry.len());
    for record in descriptor.geometry {
        let item = match record {
            GeometryDescriptor::Box {
                name,
                material,
                sizes,
                position,
                rotation,
            } => SceneItem {
                material: resolve(&name, &material)?,
                kind: SceneItemKind::Box {
                    sizes: Vec3::from(sizes),
                    position: Vec3::from(position),
                    rotation_deg: Vec3::from(rotation),
                },
                name,
            },
            GeometryDescriptor::Line {
                name,
                material,
                points,
            } => SceneItem {
                material: resolve(&name, &material)?,
                kind: SceneItemKind::Polyline {
                    points: points.into_iter().map(Vec3::from).collect(),
                },
                name,
            },
        };
        items.push(item);
    }

    Ok(StaticScene { items })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene_json() -> serde_json::Value {
        serde_json::json!({
            "materials": [
                { "_type": "MeshBasicMaterial", "_name": "det",
                  "wireframe": true, "transparent": true, "opacity": 0.15,
                  "color": 0x00ff_ffaa },
                { "_type": "LineDashedMaterial", "_name": "ref",
                  "color": 0x00ff_7777, "dashSize": 3.0, "gapSize": 1.0 }
            ],
            "geometry": [
                { "_type": "BoxGeometry", "_name": "det1", "_material": "det",
                  "sizes": [0.75, 1.75, 0.1], "position": [0.0, 0.0, -1.0],
                  "rotation": [0.0, 12.0, 6.5] },
                { "_type": "Line", "_name": "beam", "_material": "ref",
                  "points": [[-0.15, 0.56, -2.0], [0.23, -0.3, 2.0]] }
            ]
        })
    }

    #[test]
    fn test_valid_scene_loads() {
        let Ok(scene) = load_scene(scene_json()) else {
            unreachable!("well-formed scene loads");
        };
        assert_eq!(scene.items.len(), 2);
        assert!(matches!(scene.items[0].kind, SceneItemKind::Box { .. }));
        assert!(matches!(
            *scene.items[0].material,
            SceneMaterial::MeshBasic { wireframe: true, .. }
        ));
        assert!(matches!(
            scene.items[1].kind,
            SceneItemKind::Polyline { ref points } if points.len() == 2
        ));
    }

    #[test]
    fn test_unknown_geometry_type_is_fatal() {
        let result = load_scene(serde_json::json!({
            "materials": [],
            "geometry": [
                { "_type": "TorusGeometry", "_name": "t", "_material": "m" }
            ]
        }));
        assert!(matches!(result, Err(EvdispError::SceneLoad(_))));
    }

    #[test]
    fn test_unknown_material_type_is_fatal() {
        let result = load_scene(serde_json::json!({
            "materials": [ { "_type": "PhongMaterial", "_name": "m" } ],
            "geometry": []
        }));
        assert!(matches!(result, Err(EvdispError::SceneLoad(_))));
    }

    #[test]
    fn test_dangling_material_reference_is_fatal() {
        let result = load_scene(serde_json::json!({
            "materials": [],
            "geometry": [
                { "_type": "BoxGeometry", "_name": "det1",
                  "_material": "missing", "sizes": [1.0, 1.0, 1.0] }
            ]
        }));
        assert!(matches!(result, Err(EvdispError::SceneLoad(_))));
    }
}
