// Copyright 2026 the Restack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session state machine for reorderable lists.
//!
//! [`DragState`] owns the transient state of exactly one drag gesture: which
//! node is dragged, which node the pointer was last over, the pending
//! destination, the drop-line placement, and the ghost offset. It is driven
//! by a sequential stream of drag-start / hover / move / drag-end events and
//! handles each synchronously, so a move always observes the latest hover and
//! an end always observes the latest move.
//!
//! The machine has two states, idle and dragging. Everything is cleared back
//! to idle on drag end, unconditionally; no state survives across sessions.
//!
//! ## Events in, values out
//!
//! Transition methods return plain values ([`DragStart`], [`DragEnd`]) and
//! the read accessors ([`DragState::drop_line`], [`DragState::ghost_offset`])
//! expose computed visuals. Painting, data mutation, and page-level side
//! effects (such as suppressing text selection while a drag is active) belong
//! to a thin host adapter keyed off these values; the machine itself never
//! touches the host's list data.
//!
//! ## Robustness
//!
//! The event stream comes from real pointer hardware and is allowed to be
//! imperfect. A move or hover before any drag start, a hover rejected by the
//! containment rule, or a node measured with an unusable rect all degrade to
//! no-ops that leave prior state intact. No input is fatal.

use kurbo::{Point, Rect, Vec2};

use restack_drop_line::{direction_from_pointer, position_from_pointer};
use restack_node_meta::{NodeMeta, containment};

use crate::destination::{self, Destination};

/// Default pixel gap between siblings, used for drop-line placement.
pub const DEFAULT_ITEM_SPACING: f64 = 8.0;

/// State machine owning one drag session over a reorderable list.
///
/// At most one drag is active per list instance; the host event source is
/// expected not to deliver a second drag start before the matching drag end.
/// A drag start arriving while a drag is active is ignored.
#[derive(Clone, Debug)]
pub struct DragState<K> {
    /// Pixel gap between siblings; affects where the drop line is placed.
    pub item_spacing: f64,
    dragging: Option<NodeMeta<K>>,
    overed: Option<NodeMeta<K>>,
    destination: Option<Destination<K>>,
    drop_line: DropLineState,
    pointer_origin: Point,
    ghost_offset: Vec2,
}

/// Drop indicator state for the renderer: visibility plus placement.
///
/// All-zero and invisible while idle. Once visible during a drag, the line
/// stays visible (tracking the pointer) until the drag ends.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DropLineState {
    /// Whether the renderer should paint the line at all.
    pub visible: bool,
    /// Vertical position of the line.
    pub top: f64,
    /// Left edge of the line.
    pub left: f64,
    /// Width of the line.
    pub width: f64,
}

/// Notification returned once per drag, at drag start.
#[derive(Clone, Debug, PartialEq)]
pub struct DragStart<K> {
    /// Identifier of the dragged node.
    pub id: K,
    /// Parent group of the dragged node at drag start; `None` at the root.
    pub group_id: Option<K>,
    /// Sibling index of the dragged node at drag start.
    pub index: usize,
    /// Whether the dragged node is a group.
    pub is_group: bool,
}

/// Notification returned once per drag, at drag end.
///
/// The host splices its own data structure from `(next_group_id, next_index)`;
/// the engine performs no mutation and never reverts a reported move. A drag
/// that never hovered a valid target reports its origin back (a no-op move).
#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd<K> {
    /// Identifier of the dragged node.
    pub id: K,
    /// Parent group of the dragged node at drag start; `None` at the root.
    pub group_id: Option<K>,
    /// Sibling index of the dragged node at drag start.
    pub index: usize,
    /// Whether the dragged node is a group.
    pub is_group: bool,
    /// Parent group the node should be moved into; `None` for the root.
    pub next_group_id: Option<K>,
    /// Sibling index the node should be moved to within `next_group_id`.
    pub next_index: usize,
}

impl<K: Clone + PartialEq> DragState<K> {
    /// Create an idle drag state with [`DEFAULT_ITEM_SPACING`].
    pub fn new() -> Self {
        Self::with_item_spacing(DEFAULT_ITEM_SPACING)
    }

    /// Create an idle drag state with a custom sibling gap in pixels.
    pub fn with_item_spacing(item_spacing: f64) -> Self {
        Self {
            item_spacing,
            dragging: None,
            overed: None,
            destination: None,
            drop_line: DropLineState::default(),
            pointer_origin: Point::ORIGIN,
            ghost_offset: Vec2::ZERO,
        }
    }

    /// Begin a drag on the node described by the given render-time properties.
    ///
    /// Builds the dragging snapshot from the measured `rect`, clears any
    /// stale hover and destination, and records `pointer` as the origin for
    /// the ghost offset.
    ///
    /// # Returns
    /// The drag-started notification, or `None` when the event is ignored:
    /// either a drag is already active, or the measurement was invalid
    /// (fail-soft, state unchanged).
    pub fn on_drag_start(
        &mut self,
        rect: Rect,
        id: K,
        group_id: Option<K>,
        ancestor_ids: &[K],
        index: usize,
        is_group: bool,
        pointer: Point,
    ) -> Option<DragStart<K>> {
        if self.dragging.is_some() {
            return None;
        }
        let meta = NodeMeta::from_measured(rect, id, group_id, ancestor_ids, index, is_group).ok()?;

        let started = DragStart {
            id: meta.id.clone(),
            group_id: meta.group_id.clone(),
            index: meta.index,
            is_group: meta.is_group,
        };
        self.dragging = Some(meta);
        self.overed = None;
        self.destination = None;
        self.drop_line = DropLineState::default();
        self.pointer_origin = pointer;
        self.ghost_offset = Vec2::ZERO;
        Some(started)
    }

    /// Record the node under the pointer as the current hover target.
    ///
    /// No-op while idle. The candidate snapshot is built from the measured
    /// `rect` and checked against [`containment::hover_allowed`]; a rejected
    /// or invalidly measured candidate leaves the previously recorded target
    /// (and the rest of the session) untouched. On acceptance the old
    /// destination is cleared and recomputed by the next move.
    ///
    /// # Returns
    /// `true` if the hover was recorded.
    pub fn on_hover(
        &mut self,
        rect: Rect,
        id: K,
        group_id: Option<K>,
        ancestor_ids: &[K],
        index: usize,
        is_group: bool,
    ) -> bool {
        let Some(dragging) = &self.dragging else {
            return false;
        };
        let Ok(meta) = NodeMeta::from_measured(rect, id, group_id, ancestor_ids, index, is_group)
        else {
            return false;
        };
        if !containment::hover_allowed(dragging, &meta) {
            return false;
        }
        self.overed = Some(meta);
        self.destination = None;
        true
    }

    /// Process a pointer move at an absolute position.
    ///
    /// No-op while idle. The ghost offset always tracks the raw movement
    /// since drag start, whether or not a hover target exists. When one does,
    /// the move resolves the drop direction, re-places the drop line, makes
    /// it visible once the dragged and hovered indices differ, and recomputes
    /// the destination.
    ///
    /// # Returns
    /// The destination as of this move, or `None` when idle or when no hover
    /// target has been recorded yet.
    pub fn on_move(&mut self, pointer: Point) -> Option<&Destination<K>> {
        if self.dragging.is_none() {
            return None;
        }
        self.ghost_offset = pointer - self.pointer_origin;

        let (visible, position, dest) = {
            let dragging = self.dragging.as_ref()?;
            let overed = self.overed.as_ref()?;
            // Never show the line exactly where the dragged item already
            // sits; once shown it stays up for the rest of the drag.
            let visible = self.drop_line.visible || dragging.index != overed.index;
            let position = position_from_pointer(pointer, overed, self.item_spacing);
            let direction = direction_from_pointer(pointer, overed);
            (visible, position, destination::resolve(dragging, overed, direction))
        };
        self.drop_line = DropLineState {
            visible,
            top: position.top,
            left: position.left,
            width: position.width,
        };
        self.destination = Some(dest);
        self.destination.as_ref()
    }

    /// End the active drag and reset to idle.
    ///
    /// Reads the last recorded destination, falling back to the origin when
    /// the drag never hovered a valid target (a no-op move). Every session
    /// field is cleared back to its idle value unconditionally; whether the
    /// host acts on the reported move or not, the machine never re-enters the
    /// old session.
    ///
    /// # Returns
    /// The drag-ended notification, or `None` when no drag was active.
    pub fn on_drag_end(&mut self) -> Option<DragEnd<K>> {
        let dragging = self.dragging.take()?;
        let destination = self.destination.take().unwrap_or(Destination {
            group_id: dragging.group_id.clone(),
            index: dragging.index,
        });

        self.overed = None;
        self.drop_line = DropLineState::default();
        self.pointer_origin = Point::ORIGIN;
        self.ghost_offset = Vec2::ZERO;

        Some(DragEnd {
            id: dragging.id,
            group_id: dragging.group_id,
            index: dragging.index,
            is_group: dragging.is_group,
            next_group_id: destination.group_id,
            next_index: destination.index,
        })
    }

    /// Abort the active drag: a synthetic drag end with the origin as destination.
    ///
    /// Takes the same reset path as [`DragState::on_drag_end`], discarding
    /// any destination the drag had accumulated.
    pub fn abort(&mut self) -> Option<DragEnd<K>> {
        self.destination = None;
        self.on_drag_end()
    }

    /// Whether a drag is currently active.
    ///
    /// Hosts typically suppress page-wide text selection exactly while this
    /// is `true`.
    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Snapshot of the node being dragged, if any.
    ///
    /// Its `rect` is the measurement taken at drag start, which a renderer
    /// can use to size the floating ghost.
    pub fn dragging(&self) -> Option<&NodeMeta<K>> {
        self.dragging.as_ref()
    }

    /// Snapshot of the last accepted hover target, if any.
    pub fn overed(&self) -> Option<&NodeMeta<K>> {
        self.overed.as_ref()
    }

    /// The destination the drag would resolve to if released now, if any.
    pub fn destination(&self) -> Option<&Destination<K>> {
        self.destination.as_ref()
    }

    /// Current drop indicator state for the renderer.
    pub fn drop_line(&self) -> DropLineState {
        self.drop_line
    }

    /// Ghost translation: raw pointer movement since drag start.
    pub fn ghost_offset(&self) -> Vec2 {
        self.ghost_offset
    }
}

impl<K: Clone + PartialEq> Default for DragState<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_HEIGHT: f64 = 40.0;
    const SPACING: f64 = 8.0;

    // Five siblings at the root, stacked vertically: index i occupies
    // y = [i * 48, i * 48 + 40).
    fn row_rect(index: usize) -> Rect {
        let top = index as f64 * (ITEM_HEIGHT + SPACING);
        Rect::new(0.0, top, 200.0, top + ITEM_HEIGHT)
    }

    fn row_mid(index: usize) -> Point {
        Point::new(100.0, index as f64 * (ITEM_HEIGHT + SPACING) + ITEM_HEIGHT / 2.0)
    }

    fn start_root_drag(state: &mut DragState<u32>, id: u32, index: usize) -> Option<DragStart<u32>> {
        state.on_drag_start(row_rect(index), id, None, &[], index, false, row_mid(index))
    }

    fn hover_root(state: &mut DragState<u32>, id: u32, index: usize) -> bool {
        state.on_hover(row_rect(index), id, None, &[], index, false)
    }

    #[test]
    fn drag_start_reports_origin_and_enters_dragging() {
        let mut state: DragState<u32> = DragState::new();
        let started = start_root_drag(&mut state, 10, 0).unwrap();
        assert_eq!(
            started,
            DragStart { id: 10, group_id: None, index: 0, is_group: false }
        );
        assert!(state.is_dragging());
        assert!(state.overed().is_none());
        assert!(state.destination().is_none());
    }

    #[test]
    fn second_drag_start_is_ignored() {
        let mut state: DragState<u32> = DragState::new();
        assert!(start_root_drag(&mut state, 10, 0).is_some());
        assert!(start_root_drag(&mut state, 11, 1).is_none());
        assert_eq!(state.dragging().unwrap().id, 10);
    }

    #[test]
    fn events_while_idle_are_no_ops() {
        let mut state: DragState<u32> = DragState::new();
        assert!(!hover_root(&mut state, 11, 1));
        assert!(state.on_move(Point::new(50.0, 50.0)).is_none());
        assert!(state.on_drag_end().is_none());
        assert!(state.abort().is_none());
        assert_eq!(state.ghost_offset(), Vec2::ZERO);
    }

    #[test]
    fn invalid_measurement_is_fail_soft() {
        let mut state: DragState<u32> = DragState::new();
        let bad = Rect::new(0.0, 0.0, f64::NAN, 40.0);

        // At drag start: event ignored, still idle.
        assert!(state.on_drag_start(bad, 10, None, &[], 0, false, Point::ORIGIN).is_none());
        assert!(!state.is_dragging());

        // Mid-drag: a badly measured hover leaves the prior target in place.
        start_root_drag(&mut state, 10, 0).unwrap();
        assert!(hover_root(&mut state, 12, 2));
        assert!(!state.on_hover(bad, 13, None, &[], 3, false));
        assert_eq!(state.overed().unwrap().id, 12);
    }

    #[test]
    fn move_without_hover_updates_ghost_only() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 10, 0).unwrap();

        let dest = state.on_move(row_mid(0) + Vec2::new(3.0, 17.0));
        assert!(dest.is_none());
        assert_eq!(state.ghost_offset(), Vec2::new(3.0, 17.0));
        assert!(!state.drop_line().visible);
    }

    #[test]
    fn ghost_offset_tracks_raw_pointer_movement() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 10, 0).unwrap();
        hover_root(&mut state, 12, 2);

        state.on_move(row_mid(2));
        let expected = row_mid(2) - row_mid(0);
        assert_eq!(state.ghost_offset(), expected);

        // Moving back to the origin zeroes the offset again.
        state.on_move(row_mid(0));
        assert_eq!(state.ghost_offset(), Vec2::ZERO);
    }

    #[test]
    fn hover_clears_stale_destination_until_next_move() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 10, 0).unwrap();
        hover_root(&mut state, 12, 2);
        state.on_move(row_mid(2));
        assert!(state.destination().is_some());

        hover_root(&mut state, 13, 3);
        assert!(state.destination().is_none());
        assert!(state.on_move(row_mid(3)).is_some());
    }

    #[test]
    fn drop_line_hidden_over_own_slot_visible_elsewhere() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 10, 0).unwrap();

        // Hovering the dragged item's own index keeps the line hidden...
        hover_root(&mut state, 10, 0);
        state.on_move(row_mid(0));
        assert!(!state.drop_line().visible);

        // ...but a different index shows it, and it stays up afterwards.
        hover_root(&mut state, 11, 1);
        state.on_move(row_mid(1));
        assert!(state.drop_line().visible);
        hover_root(&mut state, 10, 0);
        state.on_move(row_mid(0));
        assert!(state.drop_line().visible);
    }

    #[test]
    fn drop_line_is_placed_in_the_sibling_gap() {
        let mut state: DragState<u32> = DragState::with_item_spacing(SPACING);
        start_root_drag(&mut state, 10, 0).unwrap();
        hover_root(&mut state, 12, 2);

        // Pointer in the lower half of row 2: line sits below its bottom
        // edge, centered in the 8px gap.
        state.on_move(Point::new(100.0, row_rect(2).y1 - 1.0));
        let line = state.drop_line();
        assert_eq!(line.top, row_rect(2).y1 + SPACING / 2.0);
        assert_eq!(line.left, 0.0);
        assert_eq!(line.width, 200.0);
    }

    // Dragging a group over its own descendant must not move the recorded
    // hover target.
    #[test]
    fn containment_rejection_keeps_prior_hover() {
        let mut state: DragState<u32> = DragState::new();
        // Group 1 contains group 2, which contains leaf 3.
        state
            .on_drag_start(row_rect(0), 1, None, &[], 0, true, row_mid(0))
            .unwrap();
        assert!(hover_root(&mut state, 9, 4));

        // Direct child and deeper descendant are both rejected.
        assert!(!state.on_hover(row_rect(1), 2, Some(1), &[1], 0, true));
        assert!(!state.on_hover(row_rect(2), 3, Some(2), &[1, 2], 0, false));
        assert_eq!(state.overed().unwrap().id, 9);
    }

    #[test]
    fn leaf_drag_may_hover_into_any_group() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 10, 0).unwrap();
        assert!(state.on_hover(row_rect(1), 3, Some(2), &[1, 2], 0, false));
        assert_eq!(state.overed().unwrap().group_id, Some(2));
    }

    #[test]
    fn hovering_self_yields_no_op_destination() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 12, 2).unwrap();
        hover_root(&mut state, 12, 2);

        state.on_move(row_mid(2));
        let dest = state.destination().unwrap();
        assert_eq!((dest.group_id, dest.index), (None, 2));

        let ended = state.on_drag_end().unwrap();
        assert_eq!(ended.next_index, ended.index);
        assert_eq!(ended.next_group_id, ended.group_id);
    }

    #[test]
    fn drag_end_without_hover_reports_origin() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 11, 1).unwrap();
        state.on_move(row_mid(4));

        let ended = state.on_drag_end().unwrap();
        assert_eq!(
            ended,
            DragEnd {
                id: 11,
                group_id: None,
                index: 1,
                is_group: false,
                next_group_id: None,
                next_index: 1,
            }
        );
    }

    #[test]
    fn cross_group_destination_is_reported_unshifted() {
        let mut state: DragState<u32> = DragState::new();
        // Dragging index 1 of group 10 over index 0 of group 20, upper half.
        state
            .on_drag_start(row_rect(1), 5, Some(10), &[10], 1, false, row_mid(1))
            .unwrap();
        assert!(state.on_hover(row_rect(3), 7, Some(20), &[20], 0, false));
        state.on_move(Point::new(100.0, row_rect(3).y0 + 1.0));

        let ended = state.on_drag_end().unwrap();
        assert_eq!((ended.next_group_id, ended.next_index), (Some(20), 0));
    }

    // End-to-end: drag row 0 below row 2's midpoint and drop.
    #[test]
    fn downward_reorder_reports_corrected_index() {
        let mut state: DragState<u32> = DragState::new();
        let started = start_root_drag(&mut state, 100, 0).unwrap();
        assert_eq!(started.index, 0);

        hover_root(&mut state, 102, 2);
        let below_midpoint = Point::new(100.0, row_rect(2).y0 + ITEM_HEIGHT / 2.0 + 1.0);
        let dest = state.on_move(below_midpoint).unwrap();
        // Base 3, same group and 0 < 3, corrected to 2.
        assert_eq!(dest.index, 2);

        let ended = state.on_drag_end().unwrap();
        assert_eq!(ended.id, 100);
        assert_eq!(ended.index, 0);
        assert_eq!(ended.next_index, 2);
        assert_eq!(ended.next_group_id, None);
    }

    #[test]
    fn session_reset_is_complete_regardless_of_history() {
        let idle: DragState<u32> = DragState::new();
        let mut state: DragState<u32> = DragState::new();

        start_root_drag(&mut state, 10, 0).unwrap();
        for (id, index) in [(11_u32, 1_usize), (12, 2), (13, 3)] {
            hover_root(&mut state, id, index);
            state.on_move(row_mid(index));
            state.on_move(row_mid(index) + Vec2::new(5.0, 5.0));
        }
        assert!(state.on_drag_end().is_some());

        assert!(!state.is_dragging());
        assert!(state.overed().is_none());
        assert!(state.destination().is_none());
        assert_eq!(state.drop_line(), idle.drop_line());
        assert_eq!(state.ghost_offset(), Vec2::ZERO);

        // A second drag starts from a clean slate.
        assert!(start_root_drag(&mut state, 13, 3).is_some());
        assert!(state.overed().is_none());
        assert!(state.destination().is_none());
    }

    #[test]
    fn abort_discards_destination_and_resets() {
        let mut state: DragState<u32> = DragState::new();
        start_root_drag(&mut state, 10, 0).unwrap();
        hover_root(&mut state, 13, 3);
        state.on_move(row_mid(3));
        assert!(state.destination().is_some());

        let ended = state.abort().unwrap();
        assert_eq!(ended.next_index, 0);
        assert_eq!(ended.next_group_id, None);
        assert!(!state.is_dragging());
    }
}
