//! Onboarding Tour
//!
//! Linear walkthrough over the steps in [`steps::TOUR_STEPS`]. At most
//! one tour exists at a time: [`create_tour`] hands back the in-flight
//! instance if there is one, and finishing or cancelling clears the
//! slot so a later call builds a fresh tour.

pub mod steps;

use leptos::{create_rw_signal, RwSignal, SignalGet, SignalSet};
use std::cell::RefCell;
use std::rc::Rc;

pub use steps::{AttachSide, StepAction, StepAnchor, StepButton, TourStep, TOUR_STEPS};

/// Storage key flagging that the user has finished the walkthrough.
pub const TOUR_COMPLETED_KEY: &str = "tour_completed";

/// Where the walkthrough currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TourStatus {
    NotStarted,
    /// Showing the step at this index.
    Active(usize),
    Completed,
    /// Skipped; absorbing like `Completed`.
    Cancelled,
}

struct TourInner {
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
}

/// Handle to the walkthrough. Cloning shares the underlying tour.
#[derive(Clone)]
pub struct Tour {
    status: RwSignal<TourStatus>,
    inner: Rc<TourInner>,
}

impl Tour {
    fn new(on_complete: Box<dyn FnOnce()>) -> Self {
        Self {
            status: create_rw_signal(TourStatus::NotStarted),
            inner: Rc::new(TourInner {
                on_complete: RefCell::new(Some(on_complete)),
            }),
        }
    }

    pub fn status(&self) -> TourStatus {
        self.status.get()
    }

    /// The step currently shown, if the tour is running.
    pub fn current_step(&self) -> Option<&'static TourStep> {
        match self.status.get() {
            TourStatus::Active(i) => TOUR_STEPS.get(i),
            _ => None,
        }
    }

    pub fn step_index(&self) -> Option<usize> {
        match self.status.get() {
            TourStatus::Active(i) => Some(i),
            _ => None,
        }
    }

    pub fn step_count(&self) -> usize {
        TOUR_STEPS.len()
    }

    /// Begin showing the first step. No-op once underway.
    pub fn start(&self) {
        if self.status.get() == TourStatus::NotStarted {
            self.status.set(TourStatus::Active(0));
        }
    }

    /// Advance one step. Clamps at the last step; finishing is an
    /// explicit action on its own button.
    pub fn next(&self) {
        if let TourStatus::Active(i) = self.status.get() {
            if i + 1 < TOUR_STEPS.len() {
                self.status.set(TourStatus::Active(i + 1));
            }
        }
    }

    /// Go back one step. Clamps at the first step.
    pub fn back(&self) {
        if let TourStatus::Active(i) = self.status.get() {
            if i > 0 {
                self.status.set(TourStatus::Active(i - 1));
            }
        }
    }

    /// Skip out of the tour. Reachable from any step; does not fire the
    /// completion callback.
    pub fn cancel(&self) {
        match self.status.get() {
            TourStatus::Completed | TourStatus::Cancelled => {}
            _ => {
                self.status.set(TourStatus::Cancelled);
                clear_active(self);
            }
        }
    }

    /// Finish the tour: fires the completion callback exactly once and
    /// releases the singleton slot.
    pub fn complete(&self) {
        if let TourStatus::Active(_) = self.status.get() {
            self.status.set(TourStatus::Completed);
            if let Some(callback) = self.inner.on_complete.borrow_mut().take() {
                callback();
            }
            clear_active(self);
        }
    }

    /// Dispatch a step-card button press.
    pub fn press(&self, action: StepAction) {
        match action {
            StepAction::Back => self.back(),
            StepAction::Next => self.next(),
            StepAction::Skip => self.cancel(),
            StepAction::Finish => self.complete(),
        }
    }

    /// Whether two handles refer to the same tour instance.
    pub fn ptr_eq(&self, other: &Tour) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

thread_local! {
    static ACTIVE: RefCell<Option<Tour>> = RefCell::new(None);
}

/// Create the tour, or return the in-flight instance if one already
/// exists (its original completion callback is kept).
pub fn create_tour(on_complete: impl FnOnce() + 'static) -> Tour {
    if let Some(existing) = active_tour() {
        return existing;
    }
    let tour = Tour::new(Box::new(on_complete));
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(tour.clone()));
    tour
}

/// Create (or reuse) the tour and start it.
pub fn start_tour(on_complete: impl FnOnce() + 'static) -> Tour {
    let tour = create_tour(on_complete);
    tour.start();
    tour
}

/// The in-flight tour, if any.
pub fn active_tour() -> Option<Tour> {
    ACTIVE.with(|slot| slot.borrow().clone())
}

fn clear_active(tour: &Tour) {
    ACTIVE.with(|slot| {
        let release = slot
            .borrow()
            .as_ref()
            .map_or(false, |active| active.ptr_eq(tour));
        if release {
            *slot.borrow_mut() = None;
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn walks_forward_and_back_with_clamping() {
        let runtime = leptos::create_runtime();
        let tour = create_tour(|| {});

        assert_eq!(tour.status(), TourStatus::NotStarted);
        assert!(tour.current_step().is_none());

        tour.start();
        assert_eq!(tour.step_index(), Some(0));
        tour.back();
        assert_eq!(tour.step_index(), Some(0));

        for _ in 0..TOUR_STEPS.len() {
            tour.next();
        }
        // Clamped at the last step; Finish is explicit.
        assert_eq!(tour.step_index(), Some(TOUR_STEPS.len() - 1));
        assert_eq!(tour.current_step().unwrap().id, "profile");

        tour.back();
        assert_eq!(tour.current_step().unwrap().id, "upload");

        tour.cancel();
        runtime.dispose();
    }

    #[test]
    fn create_twice_returns_the_same_instance() {
        let runtime = leptos::create_runtime();

        let first = create_tour(|| {});
        first.start();
        let second = create_tour(|| {});
        assert!(first.ptr_eq(&second));

        // Finishing releases the slot, so the next create is fresh.
        while first.step_index() != Some(TOUR_STEPS.len() - 1) {
            first.next();
        }
        first.complete();
        let third = create_tour(|| {});
        assert!(!first.ptr_eq(&third));

        third.cancel();
        runtime.dispose();
    }

    #[test]
    fn completion_fires_callback_exactly_once() {
        let runtime = leptos::create_runtime();

        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        let tour = start_tour(move || counter.set(counter.get() + 1));

        while tour.step_index() != Some(TOUR_STEPS.len() - 1) {
            tour.next();
        }
        tour.complete();
        tour.complete();
        assert_eq!(fired.get(), 1);
        assert_eq!(tour.status(), TourStatus::Completed);
        assert!(active_tour().is_none());

        runtime.dispose();
    }

    #[test]
    fn skip_cancels_without_firing_callback() {
        let runtime = leptos::create_runtime();

        let fired = Rc::new(Cell::new(0u32));
        let counter = fired.clone();
        let tour = start_tour(move || counter.set(counter.get() + 1));

        tour.next();
        tour.press(StepAction::Skip);
        assert_eq!(tour.status(), TourStatus::Cancelled);
        assert_eq!(fired.get(), 0);
        assert!(active_tour().is_none());

        // Cancelled is absorbing.
        tour.complete();
        assert_eq!(tour.status(), TourStatus::Cancelled);
        assert_eq!(fired.get(), 0);

        runtime.dispose();
    }

    #[test]
    fn button_presses_drive_the_machine() {
        let runtime = leptos::create_runtime();
        let tour = start_tour(|| {});

        tour.press(StepAction::Next);
        assert_eq!(tour.current_step().unwrap().id, "dashboard");
        tour.press(StepAction::Back);
        assert_eq!(tour.current_step().unwrap().id, "welcome");

        tour.cancel();
        runtime.dispose();
    }
}
