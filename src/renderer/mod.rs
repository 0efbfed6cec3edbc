//! Rendering-side data generation.
//!
//! Builders here are pure: they turn drawable descriptors into packed,
//! upload-ready vertex buffers plus material descriptors. The GPU upload
//! itself belongs to the rendering collaborator.

pub mod geometry;
