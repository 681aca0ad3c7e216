// Copyright 2026 the Restack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Destination resolution: map a hover to the flat index a drop would occupy.
//!
//! Given the node being dragged, the node under the pointer, and the resolved
//! drop direction, [`resolve`] computes the `(group, index)` pair the dragged
//! node would occupy if released now. The destination group is always the
//! hovered node's *parent* group: a drop line marks a gap between siblings,
//! never entry into the hovered node's own children.
//!
//! The one subtlety is the same-group shift correction. When the move stays
//! within one parent and heads downward, removing the dragged node from its
//! current slot shifts every later sibling up by one before the insertion
//! happens, so the raw insertion index must be decremented to land where the
//! drop line showed.

use restack_drop_line::DropLineDirection;
use restack_node_meta::NodeMeta;

/// The `(group, index)` pair a drag would resolve to if released now.
#[derive(Clone, Debug, PartialEq)]
pub struct Destination<K> {
    /// Parent group the dragged node would be inserted into; `None` for the root.
    pub group_id: Option<K>,
    /// Flat index among that group's children, after shift correction.
    pub index: usize,
}

/// Resolve the destination for a drop at `direction` relative to `overed`.
///
/// Base index is `overed.index` for [`Top`](DropLineDirection::Top) and
/// `overed.index + 1` for [`Bottom`](DropLineDirection::Bottom). When both
/// nodes share a parent group and the dragged node currently sits before the
/// base index, the base is decremented by one to account for the dragged
/// node's removal.
///
/// A destination equal to the dragged node's origin is a valid no-op result,
/// not an error; callers decide whether to act on it. In particular, hovering
/// the dragged node itself resolves to its own position.
pub fn resolve<K: Clone + PartialEq>(
    dragging: &NodeMeta<K>,
    overed: &NodeMeta<K>,
    direction: DropLineDirection,
) -> Destination<K> {
    let mut index = match direction {
        DropLineDirection::Top => overed.index,
        DropLineDirection::Bottom => overed.index + 1,
    };
    if dragging.is_sibling_of(overed) && dragging.index < index {
        index -= 1;
    }
    Destination {
        group_id: overed.group_id.clone(),
        index,
    }
}
