use chrono::{DateTime, NaiveDate};
use resume_document::{format_date_range, ImagePolicy, ImagePosition, ImageUpload, SectionKind, StylePatch};
use resume_editor::{Editor, EditorOptions, StyleTarget, DEFAULT_DEBOUNCE_MS};
use resume_export::FileNaming;
use resume_form::{ResumeData, SubmittedResume};
use resume_preview::{render_document, render_static, RenderOptions};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn js_error(context: &str, err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&format!("{}: {}", context, err))
}

fn from_json<T: DeserializeOwned>(context: &str, json: &str) -> Result<T, JsValue> {
    serde_json::from_str(json).map_err(|e| js_error(context, e))
}

/// Parse a bare enum name such as `"experience"` or `"center"`
fn from_name<T: DeserializeOwned>(context: &str, name: &str) -> Result<T, JsValue> {
    serde_json::from_value(serde_json::Value::String(name.to_string())).map_err(|e| js_error(context, e))
}

/// Millisecond timestamp from JS; `None` for NaN, infinities and negatives
fn clock_ms(now_ms: f64) -> Option<u64> {
    if now_ms.is_finite() && now_ms >= 0.0 {
        Some(now_ms as u64)
    } else {
        None
    }
}

fn checked_clock(now_ms: f64) -> Result<u64, JsValue> {
    clock_ms(now_ms).ok_or_else(|| js_error("Invalid timestamp", now_ms))
}

fn today_from_ms(now_ms: f64) -> NaiveDate {
    DateTime::from_timestamp_millis(now_ms as i64)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

fn render_options(pretty: bool) -> RenderOptions {
    if pretty {
        RenderOptions::default()
    } else {
        RenderOptions::compact()
    }
}

/// Session options accepted by `ResumeEditor.withOptions`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SessionOptions {
    history_limit: usize,
    style_debounce_ms: u64,
    image_size_limit: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            history_limit: 0,
            style_debounce_ms: DEFAULT_DEBOUNCE_MS,
            image_size_limit: None,
        }
    }
}

/// WYSIWYG editor session
#[wasm_bindgen]
pub struct ResumeEditor {
    inner: Editor,
}

#[wasm_bindgen]
impl ResumeEditor {
    /// Seeded editor; `now_ms` seeds item ids and today's date
    #[wasm_bindgen(constructor)]
    pub fn new(now_ms: f64) -> Result<ResumeEditor, JsValue> {
        let seed = checked_clock(now_ms)?;
        Ok(ResumeEditor {
            inner: Editor::seeded(today_from_ms(now_ms), seed),
        })
    }

    #[wasm_bindgen(js_name = withOptions)]
    pub fn with_options(now_ms: f64, options_json: &str) -> Result<ResumeEditor, JsValue> {
        let seed = checked_clock(now_ms)?;
        let options: SessionOptions = from_json("Invalid options", options_json)?;
        let options = EditorOptions {
            history_limit: options.history_limit,
            style_debounce_ms: options.style_debounce_ms,
            image_policy: ImagePolicy {
                max_bytes: options.image_size_limit,
            },
        };

        Ok(ResumeEditor {
            inner: Editor::with_options(
                resume_document::Document::seeded(today_from_ms(now_ms)),
                seed,
                options,
            ),
        })
    }

    /// Apply a JSON command; returns whether a history entry was recorded
    pub fn dispatch(&mut self, command_json: &str) -> Result<bool, JsValue> {
        self.inner
            .dispatch_json(command_json)
            .map_err(|e| js_error("Invalid command", e))
    }

    pub fn undo(&mut self) -> bool {
        self.inner.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.inner.redo()
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> bool {
        self.inner.can_undo()
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> bool {
        self.inner.can_redo()
    }

    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.inner.document()).map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self, pretty: bool) -> String {
        render_document(self.inner.document(), render_options(pretty))
    }

    #[wasm_bindgen(js_name = selectSection)]
    pub fn select_section(&mut self, section_id: &str) -> bool {
        self.inner.select_section(section_id)
    }

    #[wasm_bindgen(js_name = closePanel)]
    pub fn close_panel(&mut self) {
        self.inner.close_panel();
    }

    /// The section open in the edit panel, as JSON
    #[wasm_bindgen(js_name = selectedSectionJson)]
    pub fn selected_section_json(&self) -> Result<Option<String>, JsValue> {
        self.inner
            .selected_section()
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| js_error("Serialization error", e))
    }

    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(&mut self, section_id: &str) -> Option<String> {
        self.inner.add_item(section_id)
    }

    #[wasm_bindgen(js_name = moveItem)]
    pub fn move_item(&mut self, section_id: &str, from_index: usize, to_index: usize) -> bool {
        self.inner.move_item(section_id, from_index, to_index)
    }

    /// Append a section of the given kind (`"experience"`, `"custom"`, ...)
    #[wasm_bindgen(js_name = addSection)]
    pub fn add_section(&mut self, kind: &str) -> Result<String, JsValue> {
        let kind: SectionKind = from_name("Invalid section type", kind)?;
        Ok(self.inner.add_section(kind))
    }

    #[wasm_bindgen(js_name = queueStyleChange)]
    pub fn queue_style_change(&mut self, target_json: &str, patch_json: &str, now_ms: f64) -> Result<(), JsValue> {
        let target: StyleTarget = from_json("Invalid style target", target_json)?;
        let patch: StylePatch = from_json("Invalid style patch", patch_json)?;
        self.inner.queue_style_change(target, patch, checked_clock(now_ms)?);
        Ok(())
    }

    /// Commit style edits that have been quiet long enough
    #[wasm_bindgen(js_name = flushStyles)]
    pub fn flush_styles(&mut self, now_ms: f64) -> Result<usize, JsValue> {
        Ok(self.inner.flush_due_styles(checked_clock(now_ms)?))
    }

    #[wasm_bindgen(js_name = nextStyleDeadline)]
    pub fn next_style_deadline(&self) -> Option<f64> {
        self.inner.next_style_deadline().map(|ms| ms as f64)
    }

    /// Returns false when the image is rejected; see `imageError`
    #[wasm_bindgen(js_name = uploadImage)]
    pub fn upload_image(&mut self, file_name: &str, mime_type: &str, bytes: &[u8]) -> bool {
        let upload = ImageUpload::new(file_name, mime_type, bytes.to_vec());
        self.inner.upload_profile_image(&upload).is_ok()
    }

    #[wasm_bindgen(js_name = imageError)]
    pub fn image_error(&self) -> Option<String> {
        self.inner.image_error().map(str::to_string)
    }

    #[wasm_bindgen(js_name = setImagePosition)]
    pub fn set_image_position(&mut self, position: &str) -> Result<bool, JsValue> {
        let position: ImagePosition = from_name("Invalid image position", position)?;
        Ok(self.inner.set_image_position(position))
    }

    #[wasm_bindgen(js_name = removeImage)]
    pub fn remove_image(&mut self) -> bool {
        self.inner.remove_profile_image()
    }
}

/// Date line for an item, from optional `YYYY-MM-DD` strings
#[wasm_bindgen(js_name = formatDateRange)]
pub fn format_date_range_js(start: Option<String>, end: Option<String>) -> Result<Option<String>, JsValue> {
    let parse = |value: Option<String>| -> Result<Option<NaiveDate>, JsValue> {
        value
            .filter(|v| !v.is_empty())
            .map(|v| NaiveDate::parse_from_str(&v, "%Y-%m-%d").map_err(|e| js_error("Invalid date", e)))
            .transpose()
    };

    Ok(format_date_range(parse(start)?, parse(end)?))
}

/// Download name for a resume; `naming` is `"fixed"` or `"fullName"`
#[wasm_bindgen(js_name = exportFileName)]
pub fn export_file_name(full_name: &str, naming: &str) -> Result<String, JsValue> {
    let naming: FileNaming = from_name("Invalid file naming", naming)?;
    Ok(naming.file_name(full_name))
}

/// Validate structured form data and render the static resume. Field
/// errors are returned as a JSON array of `{ path, message }`.
#[wasm_bindgen(js_name = renderForm)]
pub fn render_form(data_json: &str, profile_image: Option<String>, pretty: bool) -> Result<String, JsValue> {
    let data: ResumeData = from_json("Invalid form data", data_json)?;

    match SubmittedResume::from_data(&data, profile_image.as_deref()) {
        Ok(resume) => Ok(render_static(&resume, render_options(pretty))),
        Err(errors) => {
            let errors: Vec<_> = errors
                .iter()
                .map(|e| serde_json::json!({ "path": e.path(), "message": e.to_string() }))
                .collect();
            Err(JsValue::from_str(&serde_json::Value::Array(errors).to_string()))
        }
    }
}
