//! ECharts adapter
//!
//! The library is loaded by the host page as the global `echarts` object and
//! driven through `js-sys` reflection, so a page without it fails with
//! [`ChartError::MissingLibrary`] instead of a link error.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    #[error("echarts is not loaded on this page")]
    MissingLibrary,
    #[error("chart container #{0} is not mounted")]
    MissingContainer(&'static str),
    #[error("chart call `{call}` failed: {message}")]
    Js { call: &'static str, message: String },
    #[error("could not convert chart data: {0}")]
    Convert(String),
}

#[cfg(target_arch = "wasm32")]
pub use adapter::{EChartsAdapter, ResizeListener};

#[cfg(target_arch = "wasm32")]
mod adapter {
    use std::cell::RefCell;
    use std::rc::Rc;

    use js_sys::{Array, Function, Reflect};
    use missionplot_core::{
        ChartAdapter, ChartController, ChartEvent, ChartOptions, MissionData, SCATTER_SERIES,
        TooltipState, field,
    };
    use serde::Serialize;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlElement;

    use super::ChartError;
    use crate::dom;

    #[allow(clippy::cast_possible_truncation)] // slot indices are single digits
    const RATING_COUNT_SLOT: u32 = field::RATING_COUNT as u32;

    type Callback1 = Closure<dyn FnMut(JsValue) -> JsValue>;
    type Handler = Closure<dyn FnMut(JsValue)>;

    fn js_err(call: &'static str) -> impl Fn(JsValue) -> ChartError {
        move |value| ChartError::Js {
            call,
            message: dom::js_error_message(&value),
        }
    }

    fn method(target: &JsValue, name: &'static str) -> Result<Function, ChartError> {
        Reflect::get(target, &JsValue::from_str(name))
            .map_err(js_err(name))?
            .dyn_into::<Function>()
            .map_err(js_err(name))
    }

    fn invoke(target: &JsValue, name: &'static str, args: &[&JsValue]) -> Result<JsValue, ChartError> {
        let func = method(target, name)?;
        let args: Array = args.iter().copied().collect();
        Reflect::apply(&func, target, &args).map_err(js_err(name))
    }

    /// Translate an ECharts `mouseover` payload. Points of series other than
    /// the scatter yield `None` without decoding their data.
    fn enter_event(params: &JsValue) -> Result<Option<ChartEvent>, ChartError> {
        let series_type = Reflect::get(params, &JsValue::from_str("componentSubType"))
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default();
        if series_type != SCATTER_SERIES {
            return Ok(None);
        }
        let raw = Reflect::get(params, &JsValue::from_str("data")).map_err(js_err("data"))?;
        let data: MissionData = serde_wasm_bindgen::from_value(raw)
            .map_err(|err| ChartError::Convert(err.to_string()))?;
        Ok(Some(ChartEvent::PointerEnter { series_type, data }))
    }

    /// One live ECharts instance and the callbacks it holds on to.
    pub struct EChartsAdapter {
        instance: JsValue,
        symbol_size: Callback1,
        formatter: Callback1,
        _mouseover: Handler,
        _mouseout: Handler,
    }

    impl EChartsAdapter {
        /// Create the chart inside `container` and subscribe the hover
        /// handlers to `tooltip`.
        ///
        /// # Errors
        /// Returns an error if `echarts` is not loaded or refuses the container.
        pub fn init(
            container: &HtmlElement,
            tooltip: &Rc<RefCell<TooltipState>>,
        ) -> Result<Self, ChartError> {
            let echarts = Reflect::get(&js_sys::global(), &JsValue::from_str("echarts"))
                .map_err(js_err("echarts"))?;
            if echarts.is_undefined() || echarts.is_null() {
                return Err(ChartError::MissingLibrary);
            }
            let target: &JsValue = container.as_ref();
            let instance = invoke(&echarts, "init", &[target])?;

            let symbol_size: Callback1 = Closure::wrap(Box::new(|point: JsValue| {
                Reflect::get_u32(&point, RATING_COUNT_SLOT).unwrap_or(JsValue::UNDEFINED)
            }) as Box<dyn FnMut(JsValue) -> JsValue>);

            let formatter: Callback1 = {
                let tooltip = Rc::clone(tooltip);
                Closure::wrap(Box::new(move |_params: JsValue| {
                    JsValue::from_str(tooltip.borrow().html())
                }) as Box<dyn FnMut(JsValue) -> JsValue>)
            };

            let mouseover: Handler = {
                let tooltip = Rc::clone(tooltip);
                Closure::wrap(Box::new(move |params: JsValue| match enter_event(&params) {
                    Ok(Some(event)) => tooltip.borrow_mut().handle(&event),
                    Ok(None) => {}
                    Err(err) => log::warn!("ignoring hover: {err}"),
                }) as Box<dyn FnMut(JsValue)>)
            };

            let mouseout: Handler = {
                let tooltip = Rc::clone(tooltip);
                Closure::wrap(Box::new(move |_params: JsValue| {
                    tooltip.borrow_mut().handle(&ChartEvent::PointerLeave);
                }) as Box<dyn FnMut(JsValue)>)
            };

            invoke(
                &instance,
                "on",
                &[&JsValue::from_str("mouseover"), mouseover.as_ref()],
            )?;
            invoke(
                &instance,
                "on",
                &[&JsValue::from_str("mouseout"), mouseout.as_ref()],
            )?;

            Ok(Self {
                instance,
                symbol_size,
                formatter,
                _mouseover: mouseover,
                _mouseout: mouseout,
            })
        }

        fn to_js(&self, options: &ChartOptions) -> Result<JsValue, ChartError> {
            let value = options
                .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
                .map_err(|err| ChartError::Convert(err.to_string()))?;

            let tooltip =
                Reflect::get(&value, &JsValue::from_str("tooltip")).map_err(js_err("tooltip"))?;
            Reflect::set(
                &tooltip,
                &JsValue::from_str("formatter"),
                self.formatter.as_ref(),
            )
            .map_err(js_err("tooltip.formatter"))?;

            let series =
                Reflect::get(&value, &JsValue::from_str("series")).map_err(js_err("series"))?;
            for idx in options.rating_sized_series() {
                let idx = u32::try_from(idx).map_err(|err| ChartError::Convert(err.to_string()))?;
                let entry = Reflect::get_u32(&series, idx).map_err(js_err("series[]"))?;
                Reflect::set(
                    &entry,
                    &JsValue::from_str("symbolSize"),
                    self.symbol_size.as_ref(),
                )
                .map_err(js_err("series[].symbolSize"))?;
            }
            Ok(value)
        }
    }

    impl ChartAdapter for EChartsAdapter {
        type Error = ChartError;

        fn set_option(&self, options: &ChartOptions) -> Result<(), Self::Error> {
            let value = self.to_js(options)?;
            invoke(&self.instance, "setOption", &[&value]).map(|_| ())
        }

        fn resize(&self) -> Result<(), Self::Error> {
            invoke(&self.instance, "resize", &[]).map(|_| ())
        }
    }

    impl Drop for EChartsAdapter {
        fn drop(&mut self) {
            if let Err(err) = invoke(&self.instance, "dispose", &[]) {
                log::warn!("chart dispose failed: {err}");
            }
        }
    }

    /// Window `resize` subscription forwarding to a chart; unsubscribes on drop.
    pub struct ResizeListener {
        closure: Closure<dyn FnMut()>,
    }

    impl ResizeListener {
        /// # Errors
        /// Returns an error if there is no window to listen on.
        pub fn attach(
            chart: Rc<RefCell<Option<ChartController<EChartsAdapter>>>>,
        ) -> Result<Self, ChartError> {
            let window = dom::window().ok_or(ChartError::MissingContainer("window"))?;
            let closure: Closure<dyn FnMut()> = Closure::wrap(Box::new(move || {
                if let Some(chart) = chart.borrow().as_ref() {
                    if let Err(err) = chart.resize() {
                        log::warn!("chart resize failed: {err}");
                    }
                }
            }) as Box<dyn FnMut()>);
            window
                .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
                .map_err(js_err("addEventListener"))?;
            Ok(Self { closure })
        }
    }

    impl Drop for ResizeListener {
        fn drop(&mut self) {
            if let Some(window) = dom::window() {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
    }
}
