// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{FoldResult, StyledText};

/// Whether folded text shows its closed or open rendering
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FoldState {
    Closed,
    Open,
}

impl FoldState {
    /// The other state
    pub fn flip(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Reported once a transition has completed
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FoldEvent {
    Opened,
    Closed,
}

impl FoldEvent {
    fn entered(state: FoldState) -> Self {
        match state {
            FoldState::Closed => Self::Closed,
            FoldState::Open => Self::Opened,
        }
    }
}

/// A change of state the host has to present
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// State being entered
    pub target: FoldState,
    /// Height to animate from
    pub from_height: f32,
    /// Height to animate to
    pub to_height: f32,
    /// True if the host should animate and call [`Fold::finish_transition`] when done
    pub animated: bool,
    /// Set when the transition completed immediately
    pub event: Option<FoldEvent>,
}

/// Open/closed state machine over a [`FoldResult`]
///
/// The result is computed once; switching states only selects which content
/// and height the host presents. While an animated transition is in flight,
/// further requests are ignored rather than queued.
#[derive(Clone, Debug)]
pub struct Fold {
    result: FoldResult,
    state: FoldState,
    /// State whose content is displayed, lags `state` while closing
    shown: FoldState,
    height: f32,
    in_flight: Option<FoldState>,
}

impl Fold {
    /// Create a fold, closed if the result is expandable
    pub fn new(result: FoldResult) -> Self {
        let state = if result.expandable {
            FoldState::Closed
        } else {
            FoldState::Open
        };
        let height = result.closed_height;
        Self {
            result,
            state,
            shown: state,
            height,
            in_flight: None,
        }
    }

    /// Replace the result after a recomputation, resetting to closed
    pub fn reset(&mut self, result: FoldResult) {
        *self = Self::new(result);
    }

    pub fn result(&self) -> &FoldResult {
        &self.result
    }

    pub fn is_expandable(&self) -> bool {
        self.result.expandable
    }

    /// Current state, `None` if the text cannot be folded
    pub fn state(&self) -> Option<FoldState> {
        if self.result.expandable {
            Some(self.state)
        } else {
            None
        }
    }

    pub fn is_transitioning(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Content the host should display now
    pub fn content(&self) -> &StyledText {
        match self.shown {
            FoldState::Closed => &self.result.closed,
            FoldState::Open => &self.result.open,
        }
    }

    /// Height the host should settle on, the target height while animating
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Line limit the host should apply while displaying [`Self::content`]
    pub fn visible_max_lines(&self, max_lines: usize) -> Option<usize> {
        match self.shown {
            FoldState::Closed if self.result.expandable => Some(max_lines),
            _ => None,
        }
    }

    pub fn open(&mut self, animated: bool) -> Option<Transition> {
        self.transition(FoldState::Open, animated)
    }

    pub fn close(&mut self, animated: bool) -> Option<Transition> {
        self.transition(FoldState::Closed, animated)
    }

    pub fn toggle(&mut self, animated: bool) -> Option<Transition> {
        self.transition(self.state.flip(), animated)
    }

    fn transition(&mut self, target: FoldState, animated: bool) -> Option<Transition> {
        if !self.result.expandable {
            return None;
        }
        if let Some(in_flight) = self.in_flight {
            log::debug!("ignoring {:?} while {:?} is in flight", target, in_flight);
            return None;
        }
        if self.state == target {
            return None;
        }

        let (from_height, to_height) = match target {
            FoldState::Open => (self.result.closed_height, self.result.open_height),
            FoldState::Closed => (self.result.open_height, self.result.closed_height),
        };
        self.state = target;
        self.height = to_height;

        let event = if animated {
            self.in_flight = Some(target);
            // Opening shows the full text as it grows; closing keeps it until the end
            if target == FoldState::Open {
                self.shown = FoldState::Open;
            }
            None
        } else {
            self.shown = target;
            Some(FoldEvent::entered(target))
        };

        Some(Transition {
            target,
            from_height,
            to_height,
            animated,
            event,
        })
    }

    /// Complete an animated transition, applying the deferred content swap
    ///
    /// Returns the event to report, or `None` if nothing was in flight.
    pub fn finish_transition(&mut self) -> Option<FoldEvent> {
        let target = self.in_flight.take()?;
        self.shown = target;
        Some(FoldEvent::entered(target))
    }
}
