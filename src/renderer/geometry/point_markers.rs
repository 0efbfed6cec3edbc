//! Typed point-marker cloud builder.
//!
//! Markers group by kind — every kind gets its own point set and its own
//! shared material — with the first-seen order of kinds preserved so
//! repeated runs stay deterministic. A kind that fails to resolve against
//! the asset cache loses its markers only; the rest of the batch builds
//! normally.

use std::sync::Arc;

use glam::Mat3;

use crate::markers::{MarkerAssets, MarkerMaterial};
use crate::scene::PointMarkerDescriptor;
use crate::util::grouping::group_by_key;

/// Upload-ready buffers for one marker kind's point set.
#[derive(Debug, Clone)]
pub struct PointMarkersPrimitive {
    /// Marker kind (wire form) shared by every point in the set.
    pub kind: String,
    /// Packed positions, stride 3.
    pub positions: Vec<f32>,
    /// Packed colors, stride 3, parallel to `positions`.
    pub colors: Vec<f32>,
    /// Per-point sizes in pixels, stride 1.
    pub sizes: Vec<f32>,
    /// Material shared by the whole set.
    pub material: Arc<MarkerMaterial>,
}

impl PointMarkersPrimitive {
    /// Number of points in the buffers.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.sizes.len()
    }

    /// Position buffer as bytes for upload.
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Color buffer as bytes for upload.
    #[must_use]
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Size buffer as bytes for upload.
    #[must_use]
    pub fn size_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sizes)
    }
}

/// Build one point set per marker kind, applying `tm` to every position and
/// resolving each kind's material through `assets`.
#[must_use]
pub fn build_point_markers(
    markers: &[PointMarkerDescriptor],
    tm: Mat3,
    assets: &mut MarkerAssets,
) -> Vec<PointMarkersPrimitive> {
    let groups = group_by_key(markers, |marker| marker.kind.clone());
    let mut built = Vec::with_capacity(groups.len());
    for (kind, group) in groups {
        let material = match assets.material_for(&kind) {
            Ok(material) => material,
            Err(e) => {
                log::error!("markers of kind \"{kind}\" not drawn: {e}");
                continue;
            }
        };
        let mut positions = Vec::with_capacity(group.len() * 3);
        let mut colors = Vec::with_capacity(group.len() * 3);
        let mut sizes = Vec::with_capacity(group.len());
        for marker in group {
            positions.extend_from_slice(&(tm * marker.position).to_array());
            colors.extend_from_slice(&marker.color);
            sizes.push(marker.size);
        }
        built.push(PointMarkersPrimitive {
            kind,
            positions,
            colors,
            sizes,
            material,
        });
    }
    built
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn marker(kind: &str, x: f32) -> PointMarkerDescriptor {
        PointMarkerDescriptor {
            position: Vec3::new(x, 0.0, 0.0),
            size: 16.0,
            color: [0.94, 0.92, 0.38],
            kind: kind.to_owned(),
            name: None,
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let mut assets = MarkerAssets::default();
        assert!(build_point_markers(&[], Mat3::IDENTITY, &mut assets)
            .is_empty());
    }

    #[test]
    fn test_grouping_preserves_first_seen_order() {
        let mut assets = MarkerAssets::default();
        let markers = vec![
            marker("xCross", 0.0),
            marker("hollowCircle", 1.0),
            marker("xCross", 2.0),
            marker("plusCross", 3.0),
        ];
        let built = build_point_markers(&markers, Mat3::IDENTITY, &mut assets);
        let kinds: Vec<&str> =
            built.iter().map(|p| p.kind.as_str()).collect();
        assert_eq!(kinds, vec!["xCross", "hollowCircle", "plusCross"]);
        assert_eq!(built[0].point_count(), 2);
        assert_eq!(built[0].positions, vec![0.0, 0.0, 0.0, 2.0, 0.0, 0.0]);
    }

    #[test]
    fn test_unresolvable_kind_is_skipped() {
        let mut assets = MarkerAssets::default();
        let markers = vec![marker("nonsense", 0.0), marker("xCross", 1.0)];
        let built = build_point_markers(&markers, Mat3::IDENTITY, &mut assets);
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].kind, "xCross");
    }

    #[test]
    fn test_same_kind_shares_cached_material() {
        let mut assets = MarkerAssets::default();
        let first =
            build_point_markers(&[marker("xCross", 0.0)], Mat3::IDENTITY, &mut assets);
        let second =
            build_point_markers(&[marker("xCross", 1.0)], Mat3::IDENTITY, &mut assets);
        assert!(Arc::ptr_eq(&first[0].material, &second[0].material));
    }

    #[test]
    fn test_transform_applies_to_positions() {
        let mut assets = MarkerAssets::default();
        let built = build_point_markers(
            &[marker("xCross", 1.0)],
            Mat3::from_diagonal(Vec3::splat(3.0)),
            &mut assets,
        );
        assert_eq!(built[0].positions, vec![3.0, 0.0, 0.0]);
    }
}
