// Copyright 2026 the Restack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restack Drop Line: pure geometry for the drop indicator of a reorderable list.
//!
//! ## Overview
//!
//! While an item is dragged over a list, the host paints a thin line in the
//! gap between two siblings to show where the item would land. This crate
//! computes that line from the current pointer position and the hovered
//! node's last-measured rectangle; it never touches layout or paints
//! anything itself.
//!
//! Two pure functions cover the whole concern:
//!
//! - [`direction_from_pointer`] splits the hovered rect at its vertical
//!   midpoint and reports whether the drop would land above or below the
//!   hovered node.
//! - [`position_from_pointer`] places the indicator line inside the visual
//!   gap between siblings, centered by half of the configured item spacing
//!   so the line sits in the middle of the gap regardless of spacing.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use restack_drop_line::{DropLineDirection, direction_from_pointer, position_from_pointer};
//! use restack_node_meta::NodeMeta;
//!
//! let overed =
//!     NodeMeta::from_measured(Rect::new(10.0, 100.0, 210.0, 140.0), 1_u32, None, &[], 0, false)
//!         .unwrap();
//!
//! // Midpoint is y = 120: above it the drop lands before the node...
//! assert_eq!(
//!     direction_from_pointer(Point::new(50.0, 115.0), &overed),
//!     DropLineDirection::Top
//! );
//! // ...and the indicator sits centered in the 8px gap above it.
//! let pos = position_from_pointer(Point::new(50.0, 115.0), &overed, 8.0);
//! assert_eq!((pos.top, pos.left, pos.width), (96.0, 10.0, 200.0));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::Point;
use restack_node_meta::NodeMeta;

/// Which side of the hovered node a drop would land on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DropLineDirection {
    /// The drop lands before the hovered node (pointer above its midpoint).
    Top,
    /// The drop lands after the hovered node (pointer at or below its midpoint).
    Bottom,
}

/// Computed placement for the drop indicator, in the host's coordinate space.
///
/// The indicator is a horizontal line: `top` is its y position, `left` its
/// starting x, and `width` matches the hovered node so the line spans the
/// same columns as the siblings it separates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DropLinePosition {
    /// Vertical position of the line.
    pub top: f64,
    /// Left edge of the line.
    pub left: f64,
    /// Width of the line.
    pub width: f64,
}

/// Resolve the drop direction from the pointer and the hovered node's rect.
///
/// The hovered rect is split at its vertical midpoint. A pointer strictly
/// above the midpoint resolves to [`DropLineDirection::Top`]; the midpoint
/// itself and everything below resolve to [`DropLineDirection::Bottom`].
pub fn direction_from_pointer<K>(pointer: Point, overed: &NodeMeta<K>) -> DropLineDirection {
    let midpoint = overed.rect.y0 + overed.rect.height() / 2.0;
    if pointer.y < midpoint {
        DropLineDirection::Top
    } else {
        DropLineDirection::Bottom
    }
}

/// Place the drop indicator relative to the hovered node.
///
/// For [`Top`](DropLineDirection::Top) the line sits half of `item_spacing`
/// above the node's top edge; for [`Bottom`](DropLineDirection::Bottom), half
/// of `item_spacing` below its bottom edge. Either way the line lands in the
/// middle of the visual gap between siblings. `left` and `width` mirror the
/// hovered rect.
pub fn position_from_pointer<K>(
    pointer: Point,
    overed: &NodeMeta<K>,
    item_spacing: f64,
) -> DropLinePosition {
    let top = match direction_from_pointer(pointer, overed) {
        DropLineDirection::Top => overed.rect.y0 - item_spacing / 2.0,
        DropLineDirection::Bottom => overed.rect.y1 + item_spacing / 2.0,
    };
    DropLinePosition {
        top,
        left: overed.rect.x0,
        width: overed.rect.width(),
    }
}
