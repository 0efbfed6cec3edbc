//! Data-source descriptors and access-model classification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a data source's content must be retrieved and interpreted.
///
/// A closed set; serialized names are the wire tags the middleware and UI
/// store use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccessModel {
    /// Non-iterable content, fetched once.
    StaticView,
    /// Non-iterable content that expires and must be re-fetched.
    StaticViewWithPeriodicUpdates,
    /// Iterable, counted, itemized and paginated collection.
    SparseCollectionWithPagination,
    /// Iterable, counted and itemized collection.
    SparseCollection,
    /// Iterable, counted collection without item listing.
    DenseCollection,
    /// Iterable collection of unknown length, forward iteration only.
    FwIterableCollection,
}

impl AccessModel {
    /// Wire name of the tag.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StaticView => "staticView",
            Self::StaticViewWithPeriodicUpdates => {
                "staticViewWithPeriodicUpdates"
            }
            Self::SparseCollectionWithPagination => {
                "sparseCollectionWithPagination"
            }
            Self::SparseCollection => "sparseCollection",
            Self::DenseCollection => "denseCollection",
            Self::FwIterableCollection => "fwIterableCollection",
        }
    }

    /// Whether geometry data comes embedded in the descriptor itself, with
    /// no follow-up fetch.
    #[must_use]
    pub fn embeds_geometry(self) -> bool {
        matches!(
            self,
            Self::StaticView
                | Self::StaticViewWithPeriodicUpdates
                | Self::FwIterableCollection
        )
    }
}

impl fmt::Display for AccessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor a data endpoint returns on GET, telling the viewer how to
/// treat its content.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceDescriptor {
    /// Whether the content is an iterable collection.
    #[serde(default)]
    pub iterable: bool,
    /// Seconds until a static view goes stale.
    #[serde(rename = "expiresIn", default)]
    pub expires_in: Option<f64>,
    /// Total number of entries in a collection.
    #[serde(default)]
    pub total: Option<u64>,
    /// Number of itemized entries per response.
    #[serde(default)]
    pub items: Option<u64>,
    /// Number of pages in a paginated collection.
    #[serde(default)]
    pub pages: Option<u64>,
    /// URL template for fetching a single entry; the literal token `id` is
    /// substituted with the entry ID.
    #[serde(rename = "_links", default)]
    pub links: Option<String>,
    /// Entry ID to fetch first.
    #[serde(rename = "defaultID", default)]
    pub default_id: Option<serde_json::Value>,
    /// Embedded geometry data, for models that carry it.
    #[serde(rename = "geometryData", default)]
    pub geometry_data: Option<serde_json::Value>,
}

/// A descriptor did not match any of the defined access-model shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Fields present that the matched model forbids.
    ConflictingFields {
        /// Model the descriptor otherwise matched.
        model: AccessModel,
        /// Offending descriptor fields.
        fields: Vec<&'static str>,
    },
    /// A field the matched model requires is missing.
    MissingField {
        /// Model the descriptor otherwise matched.
        model: AccessModel,
        /// Missing descriptor field.
        field: &'static str,
    },
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingFields { model, fields } => write!(
                f,
                "descriptor matches {model} but carries {}",
                fields.join(", ")
            ),
            Self::MissingField { model, field } => {
                write!(f, "descriptor matches {model} but lacks {field}")
            }
        }
    }
}

impl std::error::Error for ClassifyError {}

/// Classify a descriptor into exactly one access model.
///
/// Any descriptor outside the six defined shapes is an error, never a
/// silent default: fields of the collection family must be absent from
/// non-iterable and forward-iterable descriptors, `pages` requires `items`,
/// and the collection models must carry the `_links`/`defaultID` pair the
/// follow-up fetch is synthesized from.
pub fn classify(
    descriptor: &SourceDescriptor,
) -> Result<AccessModel, ClassifyError> {
    let forbid = |model: AccessModel, fields: &[(&'static str, bool)]| {
        let present: Vec<&'static str> = fields
            .iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| *name)
            .collect();
        if present.is_empty() {
            Ok(())
        } else {
            Err(ClassifyError::ConflictingFields {
                model,
                fields: present,
            })
        }
    };
    let require_follow_up = |model: AccessModel| {
        if descriptor.links.is_none() {
            Err(ClassifyError::MissingField {
                model,
                field: "_links",
            })
        } else if descriptor.default_id.is_none() {
            Err(ClassifyError::MissingField {
                model,
                field: "defaultID",
            })
        } else {
            Ok(model)
        }
    };

    if !descriptor.iterable {
        let model = if descriptor.expires_in.is_none() {
            AccessModel::StaticView
        } else {
            AccessModel::StaticViewWithPeriodicUpdates
        };
        forbid(
            model,
            &[
                ("total", descriptor.total.is_some()),
                ("items", descriptor.items.is_some()),
                ("pages", descriptor.pages.is_some()),
            ],
        )?;
        Ok(model)
    } else if descriptor.total.is_some() {
        if descriptor.items.is_some() {
            let model = if descriptor.pages.is_some() {
                AccessModel::SparseCollectionWithPagination
            } else {
                AccessModel::SparseCollection
            };
            require_follow_up(model)
        } else {
            forbid(
                AccessModel::DenseCollection,
                &[("pages", descriptor.pages.is_some())],
            )?;
            require_follow_up(AccessModel::DenseCollection)
        }
    } else {
        let model = AccessModel::FwIterableCollection;
        forbid(
            model,
            &[
                ("items", descriptor.items.is_some()),
                ("pages", descriptor.pages.is_some()),
            ],
        )?;
        Ok(model)
    }
}

/// Synthesize the follow-up URL for a collection source by substituting the
/// entry ID for every occurrence of the literal token `id` in the link
/// template.
#[must_use]
pub fn render_follow_up_url(
    links: &str,
    default_id: &serde_json::Value,
) -> String {
    let id = match default_id {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    links.replace("id", &id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(value: serde_json::Value) -> SourceDescriptor {
        let Ok(descriptor) = serde_json::from_value(value) else {
            unreachable!("test descriptor decodes");
        };
        descriptor
    }

    #[test]
    fn test_six_well_formed_shapes_classify_exactly() {
        let cases = [
            (serde_json::json!({}), AccessModel::StaticView),
            (
                serde_json::json!({ "expiresIn": 30.0 }),
                AccessModel::StaticViewWithPeriodicUpdates,
            ),
            (
                serde_json::json!({
                    "iterable": true, "total": 100, "items": 10, "pages": 10,
                    "_links": "/ev/id", "defaultID": 1
                }),
                AccessModel::SparseCollectionWithPagination,
            ),
            (
                serde_json::json!({
                    "iterable": true, "total": 100, "items": 10,
                    "_links": "/ev/id", "defaultID": 1
                }),
                AccessModel::SparseCollection,
            ),
            (
                serde_json::json!({
                    "iterable": true, "total": 100,
                    "_links": "/ev/id", "defaultID": 1
                }),
                AccessModel::DenseCollection,
            ),
            (
                serde_json::json!({ "iterable": true }),
                AccessModel::FwIterableCollection,
            ),
        ];
        for (value, expected) in cases {
            assert_eq!(classify(&descriptor(value)), Ok(expected));
        }
    }

    #[test]
    fn test_static_view_with_collection_fields_fails() {
        let result = classify(&descriptor(serde_json::json!({
            "total": 100, "items": 10
        })));
        assert_eq!(
            result,
            Err(ClassifyError::ConflictingFields {
                model: AccessModel::StaticView,
                fields: vec!["total", "items"],
            })
        );
    }

    #[test]
    fn test_pages_without_items_fails() {
        let result = classify(&descriptor(serde_json::json!({
            "iterable": true, "total": 100, "pages": 10,
            "_links": "/ev/id", "defaultID": 1
        })));
        assert_eq!(
            result,
            Err(ClassifyError::ConflictingFields {
                model: AccessModel::DenseCollection,
                fields: vec!["pages"],
            })
        );
    }

    #[test]
    fn test_collection_without_links_fails() {
        let result = classify(&descriptor(serde_json::json!({
            "iterable": true, "total": 100, "items": 10
        })));
        assert_eq!(
            result,
            Err(ClassifyError::MissingField {
                model: AccessModel::SparseCollection,
                field: "_links",
            })
        );
    }

    #[test]
    fn test_forward_iterable_with_items_fails() {
        let result = classify(&descriptor(serde_json::json!({
            "iterable": true, "items": 10
        })));
        assert!(matches!(
            result,
            Err(ClassifyError::ConflictingFields { .. })
        ));
    }

    #[test]
    fn test_follow_up_url_substitutes_every_id_token() {
        assert_eq!(
            render_follow_up_url(
                "/api/events/id?ref=id",
                &serde_json::json!(42)
            ),
            "/api/events/42?ref=42"
        );
        assert_eq!(
            render_follow_up_url(
                "/api/events/id",
                &serde_json::json!("run12")
            ),
            "/api/events/run12"
        );
    }

    #[test]
    fn test_access_model_wire_names() {
        let Ok(tag) =
            serde_json::to_value(AccessModel::FwIterableCollection)
        else {
            unreachable!("access model serializes");
        };
        assert_eq!(tag, serde_json::json!("fwIterableCollection"));
        assert_eq!(
            AccessModel::StaticViewWithPeriodicUpdates.to_string(),
            "staticViewWithPeriodicUpdates"
        );
    }
}
