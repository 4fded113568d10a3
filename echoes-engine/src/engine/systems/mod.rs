//! Per-frame systems shared by the scene and the poem.
//!
//! Keeps the screen-space word labels glued to their animated 3D points and
//! owns the pointer cursor.

/// Ref-counted pointer cursor service.
///
/// Words acquire the pointer while hovered; the window icon follows the count.
pub mod cursor;

/// Projection of 3D word positions onto UI label nodes.
///
/// Applies perspective sizing, fog fade and depth ordering every frame.
pub mod label_projection;
