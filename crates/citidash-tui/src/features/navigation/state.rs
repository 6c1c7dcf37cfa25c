//! Hit areas of the control pairs.

use std::cell::Cell;

use citidash_core::navigation::StepDirection;
use enum_map::{Enum, EnumMap};
use ratatui::layout::{Position, Rect};

/// Where a control pair is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum ControlSite {
    Top,
    Bottom,
}

#[derive(Debug, Default)]
struct ButtonAreas {
    prev: Cell<Rect>,
    next: Cell<Rect>,
}

/// Button rectangles recorded during render, read back by the reducer.
#[derive(Debug, Default)]
pub struct NavControlsState {
    areas: EnumMap<ControlSite, ButtonAreas>,
}

impl NavControlsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, site: ControlSite, prev: Rect, next: Rect) {
        self.areas[site].prev.set(prev);
        self.areas[site].next.set(next);
    }

    /// Button under the cell `(column, row)`, if any.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<(ControlSite, StepDirection)> {
        let pos = Position::new(column, row);
        self.areas.iter().find_map(|(site, areas)| {
            if areas.prev.get().contains(pos) {
                Some((site, StepDirection::Backward))
            } else if areas.next.get().contains(pos) {
                Some((site, StepDirection::Forward))
            } else {
                None
            }
        })
    }
}
