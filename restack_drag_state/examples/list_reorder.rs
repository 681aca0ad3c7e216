// Copyright 2026 the Restack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Restack Drag State: drive a full drag over a flat list and
//! splice the host's data from the reported move.

use kurbo::{Point, Rect};
use restack_drag_state::session::DragState;

const ITEM_HEIGHT: f64 = 40.0;
const SPACING: f64 = 8.0;

fn row(index: usize) -> Rect {
    let top = index as f64 * (ITEM_HEIGHT + SPACING);
    Rect::new(0.0, top, 240.0, top + ITEM_HEIGHT)
}

fn main() {
    let mut items = vec!["alpha", "bravo", "charlie", "delta", "echo"];
    let mut state: DragState<usize> = DragState::with_item_spacing(SPACING);

    // Press on the first row.
    let started = state
        .on_drag_start(row(0), 0, None, &[], 0, false, Point::new(120.0, 20.0))
        .expect("drag start on a measured row");
    println!("drag started: {:?} at index {}", items[started.index], started.index);

    // Drag downward across the rows; the drop line follows the pointer.
    for index in 1..=2 {
        state.on_hover(row(index), index, None, &[], index, false);
        let pointer = Point::new(120.0, row(index).y1 - 4.0);
        state.on_move(pointer);
        let line = state.drop_line();
        println!(
            "over {:?}: drop line visible={} top={} ghost offset={:?}",
            items[index],
            line.visible,
            line.top,
            state.ghost_offset()
        );
    }

    // Release and splice.
    let ended = state.on_drag_end().expect("a drag was active");
    let moved = items.remove(ended.index);
    items.insert(ended.next_index, moved);
    println!(
        "drag ended: {:?} moved {} -> {}; list is now {:?}",
        moved, ended.index, ended.next_index, items
    );
}
