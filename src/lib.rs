// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Float comparison: drawable math frequently compares against 0.0, 1.0, etc.
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
// Pedantic allowances
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::items_after_statements)]

//! Event-display core for a physics data-acquisition system.
//!
//! Evdisp converts loosely-typed event and geometry payloads (JSON) into
//! renderable primitives: colored line-segment sets, camera-relative dashed
//! polylines, and typed point-marker clouds, together with the marker bitmap
//! textures and shader-backed material descriptors those primitives
//! reference. A rendering/UI collaborator fetches the payloads, hands them
//! over with a global transformation matrix, and inserts the resulting
//! primitives into its scene graph.
//!
//! # Key entry points
//!
//! - [`source::classify`] - data-source access-model classification
//! - [`scene`] - drawable entities (sensitive planes, track scores, tracks)
//! - [`renderer::geometry`] - primitive builders producing packed buffers
//! - [`markers::MarkerAssets`] - memoized marker textures and materials
//! - [`options::Options`] - runtime configuration (colors, markers, dash)
//!
//! # Architecture
//!
//! Per data source: the classifier runs once on the fetched descriptor and
//! decides whether geometry data is embedded or must be re-fetched through a
//! follow-up URL. Embedded geometry and per-event payloads feed the entity
//! model, which emits [`scene::DrawableSet`]s; the primitive builders turn
//! those into packed vertex buffers, resolving point-marker materials
//! through the asset cache. All steps are synchronous; the suspension
//! points (HTTP fetches) live in the caller.

pub mod error;
pub mod markers;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod source;
pub mod util;
