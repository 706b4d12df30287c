//! JavaScript collaborators
//!
//! The host hands over plain objects of functions. Every function is
//! optional; a missing one behaves like the no-op default of the trait it
//! stands in for.

use crate::view::page_views;
use async_trait::async_trait;
use js_sys::{Array, Function, Promise, Reflect};
use page_editor_core::{
    ActionOutput, EditorError, EditorUi, LocalPageActions, PageActions, PageId, PageSpec,
    PagesContainer, Result, Selection,
};
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn method(host: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(host, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Call `host[name](...args)` if the host defines it
fn call(
    host: &JsValue,
    name: &str,
    args: &[JsValue],
) -> Option<std::result::Result<JsValue, JsValue>> {
    let function = method(host, name)?;
    let args: Array = args.iter().collect();
    Some(function.apply(host, &args))
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn id_array(ids: impl IntoIterator<Item = u32>) -> JsValue {
    ids.into_iter().map(JsValue::from).collect::<Array>().into()
}

/// [`EditorUi`] backed by a JavaScript object
pub struct JsEditorUi {
    host: JsValue,
    split_marker: String,
}

impl JsEditorUi {
    pub fn new(host: JsValue, split_marker: impl Into<String>) -> Self {
        Self {
            host,
            split_marker: split_marker.into(),
        }
    }

    fn notify(&self, name: &str, args: &[JsValue]) {
        if let Some(Err(e)) = call(&self.host, name, args) {
            tracing::warn!(callback = name, error = %describe(&e), "UI callback threw");
        }
    }

    fn query(&self, name: &str) -> Option<JsValue> {
        match call(&self.host, name, &[])? {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(callback = name, error = %describe(&e), "UI callback threw");
                None
            }
        }
    }
}

impl EditorUi for JsEditorUi {
    fn filename(&self) -> String {
        self.query("filename")
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    }

    fn set_filename_editable(&mut self, editable: bool, value: &str) {
        self.notify(
            "setFilenameEditable",
            &[JsValue::from_bool(editable), JsValue::from_str(value)],
        );
    }

    fn set_filename_label(&mut self, text: &str) {
        self.notify("setFilenameLabel", &[JsValue::from_str(text)]);
    }

    fn set_export_enabled(&mut self, enabled: bool) {
        self.notify("setExportEnabled", &[JsValue::from_bool(enabled)]);
    }

    fn set_history_enabled(&mut self, can_undo: bool, can_redo: bool) {
        self.notify(
            "setHistoryEnabled",
            &[JsValue::from_bool(can_undo), JsValue::from_bool(can_redo)],
        );
    }

    fn selection_updated(&mut self, selection: &Selection) {
        self.notify("selectionUpdated", &[id_array(selection.pages())]);
    }

    fn set_selection_mode(&mut self, active: bool) {
        self.notify("setSelectionMode", &[JsValue::from_bool(active)]);
    }

    fn update_page_numbers_and_checkboxes(
        &mut self,
        pages: &PagesContainer,
        selection: &Selection,
    ) {
        let views = page_views(pages, selection, &self.split_marker);
        match serde_wasm_bindgen::to_value(&views) {
            Ok(views) => self.notify("updatePages", &[views]),
            Err(e) => tracing::warn!(error = %e, "could not serialize pages"),
        }
    }

    fn page_extent(&self) -> f64 {
        self.query("pageExtent")
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }

    fn scroll_by(&mut self, dx: f64) {
        self.notify("scrollBy", &[JsValue::from_f64(dx)]);
    }
}

/// What a page-producing host function may resolve to
#[derive(Deserialize)]
#[serde(untagged)]
enum Produced {
    Many(Vec<PageSpec>),
    One(PageSpec),
}

/// [`PageActions`] backed by a JavaScript object whose functions return
/// page descriptions (or promises of them)
pub struct JsPageActions {
    host: JsValue,
}

impl JsPageActions {
    pub fn new(host: JsValue) -> Self {
        Self { host }
    }

    /// None when the host does not define `name`
    async fn invoke(&self, name: &str, args: &[JsValue]) -> Result<Option<Vec<PageSpec>>> {
        let Some(function) = method(&self.host, name) else {
            return Ok(None);
        };
        let failed = |e: JsValue| EditorError::Action(format!("{}: {}", name, describe(&e)));

        let args: Array = args.iter().collect();
        let returned = function.apply(&self.host, &args).map_err(failed)?;
        let resolved = JsFuture::from(Promise::resolve(&returned))
            .await
            .map_err(failed)?;
        if resolved.is_null() || resolved.is_undefined() {
            return Ok(Some(Vec::new()));
        }

        let produced: Produced = serde_wasm_bindgen::from_value(resolved).map_err(|e| {
            EditorError::Action(format!("{} returned an unexpected value: {}", name, e))
        })?;
        Ok(Some(match produced {
            Produced::One(spec) => vec![spec],
            Produced::Many(specs) => specs,
        }))
    }
}

fn insert_specs(
    pages: &mut PagesContainer,
    specs: Vec<PageSpec>,
    before: Option<PageId>,
) -> ActionOutput {
    let ids: Vec<PageId> = specs
        .into_iter()
        .map(|spec| {
            let id = pages.create_from_spec(spec);
            pages.insert_before(id, before);
            id
        })
        .collect();

    match ids.as_slice() {
        [] => ActionOutput::None,
        [id] => ActionOutput::One(*id),
        _ => ActionOutput::Many(ids),
    }
}

#[async_trait(?Send)]
impl PageActions for JsPageActions {
    async fn add_files(
        &mut self,
        pages: &mut PagesContainer,
        anchor: Option<PageId>,
    ) -> Result<ActionOutput> {
        let anchor_arg = anchor.map_or(JsValue::NULL, |id| JsValue::from(id.get()));
        let specs = self
            .invoke("addFiles", &[anchor_arg])
            .await?
            .unwrap_or_default();
        tracing::debug!(count = specs.len(), "host produced pages from files");
        Ok(insert_specs(pages, specs, anchor))
    }

    async fn page_break(
        &mut self,
        pages: &mut PagesContainer,
        before: PageId,
        added_so_far: &[PageId],
    ) -> Result<ActionOutput> {
        let args = [
            JsValue::from(before.get()),
            id_array(added_so_far.iter().map(|id| id.get())),
        ];
        match self.invoke("pageBreak", &args).await? {
            Some(specs) => Ok(insert_specs(pages, specs, Some(before))),
            None => LocalPageActions.page_break(pages, before, added_so_far).await,
        }
    }
}
