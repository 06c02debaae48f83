use std::rc::Rc;

use missionplot_core::{ControlEvent, Mission, MissionSource};
use yew::prelude::*;

use crate::components::control_panel::ControlPanel;
use crate::components::mission_chart::MissionChart;
use crate::data::WebMissionSource;

pub mod state;

pub use state::{PageState, use_page_state};

#[cfg(feature = "author-filter")]
fn offered_authors(missions: &[Mission]) -> Vec<String> {
    missionplot_core::unique_authors(missions)
}

#[cfg(not(feature = "author-filter"))]
fn offered_authors(_missions: &[Mission]) -> Vec<String> {
    Vec::new()
}

#[function_component(App)]
pub fn app() -> Html {
    let dataset = use_memo((), |()| {
        WebMissionSource
            .load_missions()
            .map(Rc::new)
            .map_err(|err| err.to_string())
    });
    let page = use_page_state();

    let missions = match dataset.as_ref() {
        Ok(missions) => Rc::clone(missions),
        Err(message) => {
            log::error!("{message}");
            return html! {
              <main id="main" role="main">
                <div class="alert" role="alert">{ format!("Could not load missions: {message}") }</div>
              </main>
            };
        }
    };

    let on_event = {
        let page = page.clone();
        Callback::from(move |event: ControlEvent| page.dispatch(event))
    };

    html! {
      <main id="main" role="main">
        <h1>{"Fan mission ratings"}</h1>
        <ControlPanel
          controls={page.controls.clone()}
          on_event={on_event}
          authors={offered_authors(&missions)}
        />
        <MissionChart
          missions={missions}
          controls={page.drawn.clone()}
          show_thumbnails={page.controls.show_thumbnails}
        />
      </main>
    }
}
