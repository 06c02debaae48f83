use std::rc::Rc;

use missionplot_core::{ControlState, Mission};
use yew::prelude::*;

pub const CHART_ID: &str = "chart";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub missions: Rc<Vec<Mission>>,
    /// Control snapshot of the last event that required a redraw.
    pub controls: ControlState,
    pub show_thumbnails: bool,
}

/// Container for the scatter plot. The chart itself is created once the
/// container is mounted and redrawn whenever `controls` changes.
#[function_component(MissionChart)]
pub fn mission_chart(p: &Props) -> Html {
    let node = use_node_ref();
    use_echarts(&node, p);
    html! {
      <div id={CHART_ID} class="chart" ref={node}></div>
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[hook]
fn use_echarts(_node: &NodeRef, _p: &Props) {}

#[cfg(target_arch = "wasm32")]
type Slot = Rc<std::cell::RefCell<Option<missionplot_core::ChartController<crate::chart::EChartsAdapter>>>>;

#[cfg(target_arch = "wasm32")]
fn mount(
    node: &NodeRef,
    slot: &Slot,
    missions: &[Mission],
) -> Result<crate::chart::ResizeListener, crate::chart::ChartError> {
    use crate::chart::{ChartError, EChartsAdapter, ResizeListener};
    use missionplot_core::{ChartController, TooltipState};

    let container = node
        .cast::<web_sys::HtmlElement>()
        .ok_or(ChartError::MissingContainer(CHART_ID))?;
    let tooltip = Rc::new(std::cell::RefCell::new(TooltipState::default()));
    let adapter = EChartsAdapter::init(&container, &tooltip)?;
    *slot.borrow_mut() = Some(ChartController::new(adapter, missions.to_vec(), tooltip));
    ResizeListener::attach(Rc::clone(slot))
}

#[cfg(target_arch = "wasm32")]
#[hook]
fn use_echarts(node: &NodeRef, p: &Props) {
    let chart: Slot = use_mut_ref(|| None);

    {
        let chart = chart.clone();
        let node = node.clone();
        let missions = Rc::clone(&p.missions);
        use_effect_with((), move |()| {
            let listener = match mount(&node, &chart, &missions) {
                Ok(listener) => Some(listener),
                Err(err) => {
                    log::error!("chart unavailable: {err}");
                    None
                }
            };
            move || {
                drop(listener);
                chart.borrow_mut().take();
            }
        });
    }

    {
        let chart = chart.clone();
        use_effect_with(p.controls.clone(), move |controls| {
            if let Some(chart) = chart.borrow().as_ref() {
                if let Err(err) = chart.refresh(controls) {
                    log::error!("chart update failed: {err}");
                }
            }
            || {}
        });
    }

    use_effect_with(p.show_thumbnails, move |show| {
        if let Some(chart) = chart.borrow().as_ref() {
            chart.set_show_thumbnails(*show);
        }
        || {}
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_the_chart_container() {
        let props = Props {
            missions: Rc::new(Vec::new()),
            controls: ControlState::default(),
            show_thumbnails: false,
        };
        let html = block_on(LocalServerRenderer::<MissionChart>::with_props(props).render());
        assert!(html.contains("id=\"chart\""));
    }
}
