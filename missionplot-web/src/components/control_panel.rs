use missionplot_core::{ControlEvent, ControlState, DataType, Game};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::author_select::AuthorMultiSelect;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub controls: ControlState,
    pub on_event: Callback<ControlEvent>,
    /// Authors offered for filtering. Empty keeps the author box inert.
    #[prop_or_default]
    pub authors: Vec<String>,
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}

fn checkbox(on_event: &Callback<ControlEvent>, make: fn(bool) -> ControlEvent) -> Callback<Event> {
    on_event.reform(move |e: Event| make(e.target_unchecked_into::<HtmlInputElement>().checked()))
}

fn text_input(
    on_event: &Callback<ControlEvent>,
    make: fn(String) -> ControlEvent,
) -> Callback<InputEvent> {
    on_event.reform(move |e: InputEvent| make(e.target_unchecked_into::<HtmlInputElement>().value()))
}

/// Form controls driving the chart. Element ids are stable and match the
/// host page's stylesheet.
#[function_component(ControlPanel)]
pub fn control_panel(p: &Props) -> Html {
    let c = &p.controls;

    let on_game = {
        let on_event = p.on_event.clone();
        Callback::from(move |e: Event| match Game::parse_by_name(&select_value(&e)) {
            Ok(game) => on_event.emit(ControlEvent::SelectGame(game)),
            Err(err) => log::error!("game selector: {err}"),
        })
    };
    let on_data_type = {
        let on_event = p.on_event.clone();
        Callback::from(move |e: Event| {
            if let Some(data_type) = DataType::from_label(&select_value(&e)) {
                on_event.emit(ControlEvent::SelectDataType(data_type));
            }
        })
    };
    let on_toggle_author = p.on_event.reform(ControlEvent::ToggleAuthor);

    html! {
      <form class="controls" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
        <div class="field">
          <label for="selectGame">{"Game"}</label>
          <select id="selectGame" onchange={on_game}>
            { for Game::all().iter().map(|game| html! {
                <option value={game.name()} selected={*game == c.game}>{ game.name() }</option>
            }) }
          </select>
        </div>
        <div class="field">
          <label for="selectDataType">{"Display"}</label>
          <select id="selectDataType" onchange={on_data_type}>
            { for DataType::ALL.iter().map(|dt| html! {
                <option value={dt.label()} selected={*dt == c.data_type}>{ dt.label() }</option>
            }) }
          </select>
        </div>
        <div id="checkboxesAuthors" class="authors">
          if !p.authors.is_empty() {
            <AuthorMultiSelect
              authors={p.authors.clone()}
              selected={c.selected_authors.clone()}
              on_toggle={on_toggle_author}
            />
          }
        </div>
        <fieldset class="axis">
          <legend>{"Rating axis"}</legend>
          <label for="checkboxLimitY">{"Limit Y"}</label>
          <input id="checkboxLimitY" type="checkbox" checked={c.limit_y}
            onchange={checkbox(&p.on_event, ControlEvent::SetLimitY)} />
          <label for="ybottom">{"From"}</label>
          <input id="ybottom" type="number" step="0.1" value={c.y_bottom.clone()}
            oninput={text_input(&p.on_event, ControlEvent::YBottom)} />
          <label for="ytop">{"To"}</label>
          <input id="ytop" type="number" step="0.1" value={c.y_top.clone()}
            oninput={text_input(&p.on_event, ControlEvent::YTop)} />
        </fieldset>
        <fieldset class="axis">
          <legend>{"Release year"}</legend>
          <label for="checkboxLimitX">{"Limit X"}</label>
          <input id="checkboxLimitX" type="checkbox" checked={c.limit_x}
            onchange={checkbox(&p.on_event, ControlEvent::SetLimitX)} />
          <label for="xleft">{"From"}</label>
          <input id="xleft" type="number" value={c.x_left.clone()}
            oninput={text_input(&p.on_event, ControlEvent::XLeft)} />
          <label for="xright">{"To"}</label>
          <input id="xright" type="number" value={c.x_right.clone()}
            oninput={text_input(&p.on_event, ControlEvent::XRight)} />
        </fieldset>
        <div class="field">
          <input id="checkboxMissionThumbnails" type="checkbox" checked={c.show_thumbnails}
            onchange={checkbox(&p.on_event, ControlEvent::ShowThumbnails)} />
          <label for="checkboxMissionThumbnails">{"Show mission thumbnails"}</label>
        </div>
        <div class="field">
          <input id="checkboxScaleByRatings" type="checkbox" checked={c.scale_by_ratings}
            onchange={checkbox(&p.on_event, ControlEvent::ScaleByRatings)} />
          <label for="checkboxScaleByRatings">{"Scale markers by rating count"}</label>
        </div>
      </form>
    }
}
