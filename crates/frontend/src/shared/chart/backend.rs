use super::config::{compact_tick, format_tooltip, ChartConfig, TooltipContext, TooltipFormat};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("Chart.js is not loaded on this page")]
    NotLoaded,
    #[error("canvas #{0} not found")]
    CanvasNotFound(String),
    #[error("invalid chart config: {0}")]
    Config(String),
    #[error("Chart.js rejected the config: {0}")]
    Construct(String),
}

/// Creates and destroys chart instances bound to a canvas.
pub trait ChartBackend {
    type Handle;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<Self::Handle, ChartError>;

    fn destroy(&self, handle: Self::Handle);
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = Chart)]
    type JsChart;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(canvas: &HtmlCanvasElement, config: &JsValue) -> Result<JsChart, JsValue>;

    #[wasm_bindgen(method, js_class = "Chart")]
    fn destroy(this: &JsChart);
}

/// Live Chart.js instance plus the Rust callbacks it calls into
pub struct ChartJsHandle {
    chart: JsChart,
    _tick: Option<Closure<dyn Fn(f64) -> String>>,
    _tooltip: Option<Closure<dyn Fn(JsValue) -> String>>,
}

/// Global `Chart` constructor provided by the host page
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJsBackend;

impl ChartJsBackend {
    pub fn is_loaded() -> bool {
        js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Chart")).unwrap_or(false)
    }
}

impl ChartBackend for ChartJsBackend {
    type Handle = ChartJsHandle;

    fn create(&self, canvas_id: &str, config: &ChartConfig) -> Result<ChartJsHandle, ChartError> {
        if !Self::is_loaded() {
            return Err(ChartError::NotLoaded);
        }
        let canvas = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
            .ok_or_else(|| ChartError::CanvasNotFound(canvas_id.to_string()))?;

        let js_config = config
            .to_js()
            .map_err(|e| ChartError::Config(e.to_string()))?;

        let tick = match &config.compact_ticks_axis {
            Some(axis) => {
                let callback = Closure::wrap(Box::new(compact_tick) as Box<dyn Fn(f64) -> String>);
                set_path(
                    &js_config,
                    &["options", "scales", axis.as_str(), "ticks", "callback"],
                    callback.as_ref(),
                )?;
                Some(callback)
            }
            None => None,
        };

        let tooltip = match config.tooltip {
            Some(format) => {
                let horizontal = config.is_horizontal();
                let names = config.tooltip_names.clone();
                let callback = Closure::wrap(Box::new(move |ctx: JsValue| {
                    tooltip_line(format, &ctx, horizontal, names.as_deref())
                }) as Box<dyn Fn(JsValue) -> String>);
                set_path(
                    &js_config,
                    &["options", "plugins", "tooltip", "callbacks", "label"],
                    callback.as_ref(),
                )?;
                Some(callback)
            }
            None => None,
        };

        let chart = JsChart::new(&canvas, &js_config)
            .map_err(|e| ChartError::Construct(format!("{:?}", e)))?;

        Ok(ChartJsHandle {
            chart,
            _tick: tick,
            _tooltip: tooltip,
        })
    }

    fn destroy(&self, handle: ChartJsHandle) {
        handle.chart.destroy();
    }
}

fn get(target: &JsValue, key: &str) -> JsValue {
    js_sys::Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
}

fn set_path(root: &JsValue, path: &[&str], value: &JsValue) -> Result<(), ChartError> {
    let Some((last, parents)) = path.split_last() else {
        return Ok(());
    };
    let mut node = root.clone();
    for key in parents {
        let mut next = get(&node, key);
        if !next.is_object() {
            next = js_sys::Object::new().into();
            js_sys::Reflect::set(&node, &JsValue::from_str(key), &next)
                .map_err(|e| ChartError::Config(format!("{:?}", e)))?;
        }
        node = next;
    }
    js_sys::Reflect::set(&node, &JsValue::from_str(last), value)
        .map_err(|e| ChartError::Config(format!("{:?}", e)))?;
    Ok(())
}

fn tooltip_line(
    format: TooltipFormat,
    ctx: &JsValue,
    horizontal: bool,
    names: Option<&[String]>,
) -> String {
    let dataset = get(ctx, "dataset");
    let parsed = get(ctx, "parsed");
    let value = parsed
        .as_f64()
        .or_else(|| get(&parsed, if horizontal { "x" } else { "y" }).as_f64())
        .unwrap_or(0.0);
    let dataset_total = js_sys::Array::from(&get(&dataset, "data"))
        .iter()
        .filter_map(|v| v.as_f64())
        .sum();

    let context = TooltipContext {
        label: names
            .zip(get(ctx, "dataIndex").as_f64())
            .and_then(|(names, i)| names.get(i as usize).cloned())
            .or_else(|| get(ctx, "label").as_string())
            .unwrap_or_default(),
        dataset_label: get(&dataset, "label").as_string().unwrap_or_default(),
        value,
        dataset_total,
        axis_id: get(&dataset, "yAxisID").as_string(),
    };
    format_tooltip(format, &context)
}
