use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub authors: Vec<String>,
    #[prop_or_default]
    pub selected: Vec<String>,
    pub on_toggle: Callback<String>,
}

/// One labelled checkbox per author.
#[function_component(AuthorMultiSelect)]
pub fn author_multi_select(p: &Props) -> Html {
    html! {
      <>
        { for p.authors.iter().map(|author| {
            let onchange = {
                let author = author.clone();
                p.on_toggle.reform(move |_: Event| author.clone())
            };
            html! {
              <>
                <label>
                  { author.clone() }
                  <input type="checkbox" name="options" value={author.clone()}
                    checked={p.selected.contains(author)} {onchange} />
                </label>
                <br />
              </>
            }
        }) }
      </>
    }
}
