use std::rc::Rc;

use missionplot_core::{ControlEvent, ControlState};
use yew::prelude::*;

/// Page-level state: the live form values plus the snapshot the chart was
/// last drawn from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub controls: ControlState,
    pub drawn: ControlState,
}

impl Reducible for PageState {
    type Action = ControlEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let redraw = action.redraws();
        let controls = self.controls.clone().with(action);
        let drawn = if redraw {
            controls.clone()
        } else {
            self.drawn.clone()
        };
        Rc::new(Self { controls, drawn })
    }
}

#[hook]
pub fn use_page_state() -> UseReducerHandle<PageState> {
    use_reducer(PageState::default)
}
