//! Click-drag zoom over the time axis.
//!
//! A small interaction state machine: a press at a resolvable axis position
//! starts a drag, moves update the drag cursor (pure UI feedback for the
//! selection band), and the release commits an inclusive `[left, right]`
//! window iff the pointer actually moved. A double-activation gesture
//! resets everything from any state.

/// Committed inclusive time window. Invariant: `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomWindow {
    pub left: f64,
    pub right: f64,
}

impl ZoomWindow {
    pub fn contains(&self, time: f64) -> bool {
        time >= self.left && time <= self.right
    }
}

/// In-progress drag gesture. Never part of committed state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Draft {
    anchor: Option<f64>,
    cursor: Option<f64>,
    active: bool,
}

/// Converts axis-position pointer events into a persisted [`ZoomWindow`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomController {
    window: Option<ZoomWindow>,
    draft: Draft,
}

impl ZoomController {
    /// The committed window, if any. `None` means "show full range".
    pub fn window(&self) -> Option<ZoomWindow> {
        self.window
    }

    /// Whether a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.draft.active
    }

    /// The `(anchor, cursor)` pair of an in-progress drag, for drawing the
    /// translucent selection band. `None` until the pointer has moved.
    pub fn drag_band(&self) -> Option<(f64, f64)> {
        if !self.draft.active {
            return None;
        }
        Some((self.draft.anchor?, self.draft.cursor?))
    }

    /// Pointer pressed. Enters the drag state only when the press resolved
    /// to an axis position; a press outside the plotted data is a no-op.
    pub fn pointer_down(&mut self, axis_pos: Option<f64>) {
        let Some(x) = axis_pos else { return };
        self.draft = Draft {
            anchor: Some(x),
            cursor: None,
            active: true,
        };
    }

    /// Pointer moved. Updates the drag cursor only; the committed window is
    /// untouched until release.
    pub fn pointer_move(&mut self, axis_pos: Option<f64>) {
        if !self.draft.active {
            return;
        }
        if let Some(x) = axis_pos {
            self.draft.cursor = Some(x);
        }
    }

    /// Pointer released. Commits `[min, max]` of anchor and cursor when both
    /// are known and not numerically equal; a click without drag changes
    /// nothing. The draft always clears. A release without a matching drag
    /// is a no-op.
    pub fn pointer_up(&mut self) {
        if !self.draft.active {
            return;
        }
        if let (Some(a), Some(c)) = (self.draft.anchor, self.draft.cursor) {
            if a != c {
                self.window = Some(ZoomWindow {
                    left: a.min(c),
                    right: a.max(c),
                });
            }
        }
        self.draft = Draft::default();
    }

    /// Reset gesture: clears the committed window and any in-progress draft.
    pub fn reset(&mut self) {
        self.window = None;
        self.draft = Draft::default();
    }
}
