// Copyright 2026 the Restack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restack Node Meta: immutable snapshots of list nodes for drag interactions.
//!
//! ## Overview
//!
//! A drag interaction over a (possibly nested) list needs a stable view of
//! each node it touches: its identity, its parent group, its ancestry, its
//! position among siblings, and its measured on-screen rectangle. This crate
//! provides [`NodeMeta`], an immutable snapshot of exactly that, built at the
//! moment a node is touched (hover or drag start) and replaced wholesale on
//! the next touch, never patched in place.
//!
//! The crate does not measure layout. The host measures the live element in a
//! consistent coordinate space (for example, viewport pixels) and passes the
//! resulting [`kurbo::Rect`] in. Construction validates the measurement and
//! fails with [`InvalidMeasurement`] for rects a detached or not-yet-laid-out
//! element would produce.
//!
//! The core types are generic over the node identifier `K`, so callers can
//! use any cheap, comparable handle (an integer id, an interned symbol, or an
//! application-specific key type).
//!
//! ## Ancestry and containment
//!
//! `ancestor_ids` is the ordered chain of identifiers from the root down to
//! the node's parent. It never contains the node's own id, and it is empty
//! for top-level nodes. Ancestry is passed explicitly at construction rather
//! than looked up through ambient context, which keeps the containment rule
//! in [`containment`] a pure function of two snapshots: a group may never be
//! dropped into its own subtree.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Rect;
//! use restack_node_meta::{NodeMeta, containment};
//!
//! // A group node "1" with a child "2" inside it.
//! let group = NodeMeta::from_measured(
//!     Rect::new(0.0, 0.0, 200.0, 120.0),
//!     1_u32,
//!     None,
//!     &[],
//!     0,
//!     true,
//! )
//! .unwrap();
//! let child = NodeMeta::from_measured(
//!     Rect::new(8.0, 30.0, 192.0, 60.0),
//!     2_u32,
//!     Some(1),
//!     &[1],
//!     0,
//!     false,
//! )
//! .unwrap();
//!
//! // Dragging the group: its own child is not a legal hover target.
//! assert!(!containment::hover_allowed(&group, &child));
//! // Dragging the child over the group is fine.
//! assert!(containment::hover_allowed(&child, &group));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::fmt;

use kurbo::Rect;
use smallvec::SmallVec;

pub mod containment;

/// Ancestor identifier chain, ordered root → parent.
///
/// List nesting is shallow in practice, so the chain lives inline up to a
/// depth of eight before spilling to the heap.
pub type AncestorIds<K> = SmallVec<[K; 8]>;

/// Immutable snapshot of one list node, taken when the node is touched.
///
/// A snapshot captures both the node's place in the list structure (identity,
/// parent group, ancestry, sibling index, groupness) and its measured screen
/// rectangle at the time of the touch. Snapshots are read-only once built;
/// a later touch of the same node produces a fresh snapshot rather than
/// mutating the old one, so no reader ever observes a half-updated rect.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeMeta<K> {
    /// Caller-supplied identifier, unique per node within a drag interaction.
    pub id: K,
    /// Identifier of the immediate parent group, or `None` for top-level nodes.
    pub group_id: Option<K>,
    /// Identifiers from the root to this node's parent, excluding the node itself.
    ///
    /// Empty for top-level nodes. Used by [`containment`] to test whether a
    /// candidate drop target lives inside the dragged node's subtree.
    pub ancestor_ids: AncestorIds<K>,
    /// Position among siblings at the time of measurement (zero-based).
    pub index: usize,
    /// Whether this node can itself contain children.
    pub is_group: bool,
    /// Measured rectangle in the host's screen coordinate space.
    pub rect: Rect,
}

impl<K: Clone + PartialEq> NodeMeta<K> {
    /// Build a snapshot from a measured rectangle and render-time node properties.
    ///
    /// Pure construction: no layout is read here; `rect` is whatever the host
    /// measured for the live element. Fails with [`InvalidMeasurement`] when
    /// the rect has a non-finite or negative width or height, which indicates
    /// the host measured a detached or not-yet-laid-out element.
    ///
    /// `ancestor_ids` must run root → parent and must not include `id`; for a
    /// top-level node pass an empty slice.
    pub fn from_measured(
        rect: Rect,
        id: K,
        group_id: Option<K>,
        ancestor_ids: &[K],
        index: usize,
        is_group: bool,
    ) -> Result<Self, InvalidMeasurement> {
        let (width, height) = (rect.width(), rect.height());
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(InvalidMeasurement { width, height });
        }
        Ok(Self {
            id,
            group_id,
            ancestor_ids: ancestor_ids.iter().cloned().collect(),
            index,
            is_group,
            rect,
        })
    }

    /// Whether this node lives inside the subtree rooted at `id`.
    ///
    /// Tests the ancestor chain only; a node is not a descendant of itself.
    pub fn is_descendant_of(&self, id: &K) -> bool {
        self.ancestor_ids.iter().any(|a| a == id)
    }

    /// Whether this node and `other` share the same immediate parent group.
    pub fn is_sibling_of(&self, other: &Self) -> bool {
        self.group_id == other.group_id
    }
}

/// A node's measured rectangle was unusable.
///
/// Produced by [`NodeMeta::from_measured`] when the width or height is
/// non-finite or negative. Hosts driven by real pointer hardware should treat
/// this as fail-soft: ignore the triggering event and keep prior state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InvalidMeasurement {
    /// The rejected width.
    pub width: f64,
    /// The rejected height.
    pub height: f64,
}

impl fmt::Display for InvalidMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid node measurement: width={}, height={}",
            self.width, self.height
        )
    }
}

impl core::error::Error for InvalidMeasurement {}
