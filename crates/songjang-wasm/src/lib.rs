//! WASM bindings for the songjang order-text parser.
//!
//! This crate provides WebAssembly bindings for the paste-and-convert web page.

use js_sys::Array;
use wasm_bindgen::prelude::*;

use songjang_core::render::{courier_block, join_courier_blocks};
use songjang_core::{
    split_blocks, BlockMode, ExtractionResult, OrderParser, OrderTextParser, RenderConfig,
    SongjangConfig,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn block_mode(per_line: bool) -> BlockMode {
    if per_line {
        BlockMode::Line
    } else {
        BlockMode::Paragraph
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse one order and return the record.
#[wasm_bindgen]
pub fn parse_order(text: &str) -> Result<JsValue, JsValue> {
    to_js(&OrderParser::new().parse(text).record)
}

/// Parse every order in a paste and return an array of records.
#[wasm_bindgen]
pub fn parse_orders(text: &str, per_line: bool) -> Result<JsValue, JsValue> {
    let records: Vec<_> = OrderParser::new()
        .parse_blocks(text, block_mode(per_line))
        .into_iter()
        .map(|r| r.record)
        .collect();
    to_js(&records)
}

/// Split a paste into order blocks.
#[wasm_bindgen]
pub fn split_orders(text: &str, per_line: bool) -> Array {
    split_blocks(text, block_mode(per_line))
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Convert a paste into courier request blocks with the default settings.
#[wasm_bindgen]
pub fn render_courier(text: &str, per_line: bool) -> String {
    let render = RenderConfig::default();
    let blocks: Vec<String> = OrderParser::new()
        .parse_blocks(text, block_mode(per_line))
        .iter()
        .map(|r| courier_block(&r.record, &render))
        .collect();
    join_courier_blocks(&blocks)
}

/// Order extractor class for browser use.
#[wasm_bindgen]
pub struct OrderExtractor {
    parser: OrderParser,
    render: RenderConfig,
}

#[wasm_bindgen]
impl OrderExtractor {
    /// Create an extractor with the built-in settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: OrderParser::new(),
            render: RenderConfig::default(),
        }
    }

    /// Create an extractor from a JSON configuration string.
    #[wasm_bindgen]
    pub fn from_config_json(json: &str) -> Result<OrderExtractor, JsValue> {
        let config: SongjangConfig =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        config
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        Ok(Self {
            parser: OrderParser::from_config(&config.extraction),
            render: config.render,
        })
    }

    /// Extract one order record.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text).record)
    }

    /// Extract one order with raw text, lines and warnings.
    #[wasm_bindgen]
    pub fn extract_with_warnings(&self, text: &str) -> Result<JsValue, JsValue> {
        let result: ExtractionResult = self.parser.parse(text);
        to_js(&result)
    }

    /// Convert a paste into courier request blocks.
    #[wasm_bindgen]
    pub fn courier(&self, text: &str, per_line: bool) -> String {
        let blocks: Vec<String> = self
            .parser
            .parse_blocks(text, block_mode(per_line))
            .iter()
            .map(|r| courier_block(&r.record, &self.render))
            .collect();
        join_courier_blocks(&blocks)
    }
}

impl Default for OrderExtractor {
    fn default() -> Self {
        Self::new()
    }
}
