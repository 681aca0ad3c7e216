// Copyright 2026 the Restack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Restack Drag State: the drag session engine for drag-reorderable lists.
//!
//! ## Overview
//!
//! This crate is the orchestrating layer of Restack. It owns the transient
//! state of one drag gesture — dragged node, hover target, pending
//! destination, drop-line placement, ghost offset — and drives the leaf
//! crates in response to the host's pointer event stream:
//!
//! - [`restack_node_meta`] builds immutable node snapshots and rules out
//!   hovers inside the dragged subtree.
//! - [`restack_drop_line`] turns the pointer position and the hovered rect
//!   into a drop direction and an indicator placement.
//! - [`destination`] maps (dragged, hovered, direction) to the `(group,
//!   index)` pair a drop would occupy, including the same-group shift
//!   correction for downward moves.
//!
//! The engine never measures layout, never paints, and never mutates the
//! host's list data. Events go in; plain values come out. Everything is
//! handled synchronously on one logical thread, in the order received.
//!
//! ## Workflow
//!
//! 1) On drag start, feed the originating node's measured rect and
//!    render-time properties (identifier, parent group, explicit ancestry,
//!    sibling index, groupness) to [`session::DragState::on_drag_start`] and
//!    deliver the returned [`session::DragStart`] to the application.
//! 2) On every hover, feed the node under the pointer to
//!    [`session::DragState::on_hover`]; illegal targets are dropped silently.
//! 3) On every pointer move, call [`session::DragState::on_move`] and apply
//!    [`session::DragState::drop_line`] and
//!    [`session::DragState::ghost_offset`] through a thin renderer adapter.
//! 4) On release, [`session::DragState::on_drag_end`] reports the move as a
//!    [`session::DragEnd`]; the application splices its own data from
//!    `(next_group_id, next_index)`.
//!
//! ## Example
//!
//! Drag the first of three rows below the midpoint of the last one:
//!
//! ```
//! use kurbo::{Point, Rect};
//! use restack_drag_state::session::DragState;
//!
//! // Rows are 40px tall with an 8px gap: index i starts at y = i * 48.
//! let row = |i: usize| {
//!     let top = i as f64 * 48.0;
//!     Rect::new(0.0, top, 200.0, top + 40.0)
//! };
//!
//! let mut state: DragState<u32> = DragState::with_item_spacing(8.0);
//!
//! let started = state
//!     .on_drag_start(row(0), 100, None, &[], 0, false, Point::new(100.0, 20.0))
//!     .unwrap();
//! assert_eq!(started.index, 0);
//!
//! // Pointer reaches the lower half of row 2.
//! state.on_hover(row(2), 102, None, &[], 2, false);
//! state.on_move(Point::new(100.0, 130.0));
//! assert!(state.drop_line().visible);
//!
//! let ended = state.on_drag_end().unwrap();
//! // Insert-below resolves to index 3, then the same-group correction
//! // accounts for row 0's removal: the node lands at index 2.
//! assert_eq!((ended.index, ended.next_index), (0, 2));
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

pub mod destination;
pub mod session;
