// Copyright 2026 the Restack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group containment guard: reject hover targets inside the dragged subtree.
//!
//! Dropping a group into its own descendant would create a cycle in the
//! list's tree structure, so while a group is being dragged, any node whose
//! ancestor chain contains the dragged id must be ignored as a hover target.
//! Leaf (non-group) nodes can never contain anything, so drags of leaves are
//! exempt from the check entirely.
//!
//! The guard is a pure predicate over two [`NodeMeta`] snapshots; the session
//! layer applies it before recording a hover, leaving the previously recorded
//! target untouched on rejection.

use crate::NodeMeta;

/// Whether `candidate` is a legal hover target while `dragging` is dragged.
///
/// Returns `false` exactly when `dragging` is a group and `candidate` lies
/// inside its subtree (the dragged id appears in the candidate's ancestor
/// chain). The candidate itself is never in its own chain, so hovering the
/// dragged node directly remains legal and resolves to a no-op move.
pub fn hover_allowed<K: Clone + PartialEq>(
    dragging: &NodeMeta<K>,
    candidate: &NodeMeta<K>,
) -> bool {
    if !dragging.is_group {
        return true;
    }
    !candidate.is_descendant_of(&dragging.id)
}
