//! Stateful page editor session
//!
//! Holds pages, selection and undo history in Rust. JavaScript forwards
//! user events and renders whatever the UI callbacks report.
//!
//! Operations that go through the history return Promises. While one of
//! them is in flight the session is borrowed, and any other call is
//! rejected with a busy error instead of interleaving.

use crate::bridge::{JsEditorUi, JsPageActions};
use crate::view::page_views;
use js_sys::Promise;
use page_editor_core::commands::{
    AddPages, DeletePage, DeleteSelected, DuplicatePage, MovePage, PageBreak, PruneSelection,
    RotatePage, RotatePages, SplitAll, TogglePageSelection, ToggleSplit,
};
use page_editor_core::{
    resolve_drop_target, Command, DragDropBridge, EditorConfig, EditorContext, EditorError,
    HistoryManager, PageId, PageSpec,
};
use std::cell::{RefCell, RefMut};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

fn to_js(e: EditorError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

struct Inner {
    ctx: EditorContext,
    history: HistoryManager,
    drag: DragDropBridge,
}

impl Inner {
    fn attached(&self, id: u32) -> Result<PageId, EditorError> {
        let id = PageId::from(id);
        if self.ctx.pages.contains(id) {
            Ok(id)
        } else {
            Err(EditorError::UnknownPage(id))
        }
    }

    fn attached_opt(&self, id: Option<u32>) -> Result<Option<PageId>, EditorError> {
        id.map(|id| self.attached(id)).transpose()
    }

    fn refresh(&mut self) {
        self.ctx.refresh_page_numbers();
        self.ctx.notify_selection();
    }
}

#[wasm_bindgen]
pub struct PageEditorSession {
    inner: Rc<RefCell<Inner>>,
}

impl PageEditorSession {
    fn borrow(&self) -> Result<RefMut<'_, Inner>, JsValue> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| to_js(EditorError::Busy))
    }

    /// Build a command from the current state and run it through the
    /// history. The borrow is held until the command resolves.
    #[allow(clippy::await_holding_refcell_ref)]
    fn run<F>(&self, build: F) -> Promise
    where
        F: FnOnce(&Inner) -> Result<Box<dyn Command>, EditorError> + 'static,
    {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let mut guard = inner
                .try_borrow_mut()
                .map_err(|_| to_js(EditorError::Busy))?;
            let command = build(&*guard).map_err(to_js)?;

            let Inner { ctx, history, .. } = &mut *guard;
            history
                .execute(ctx, Box::new(PruneSelection::new(command)))
                .await
                .map_err(to_js)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    #[allow(clippy::await_holding_refcell_ref)]
    fn step(&self, forward: bool) -> Promise {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let mut guard = inner
                .try_borrow_mut()
                .map_err(|_| to_js(EditorError::Busy))?;
            let Inner { ctx, history, .. } = &mut *guard;
            let moved = if forward {
                history.redo(ctx).await
            } else {
                history.undo(ctx).await
            };
            moved.map(JsValue::from_bool).map_err(to_js)
        })
    }
}

#[wasm_bindgen]
impl PageEditorSession {
    /// `ui` and `actions` are objects of optional callbacks; `config` is
    /// an optional JSON string
    #[wasm_bindgen(constructor)]
    pub fn new(
        ui: JsValue,
        actions: JsValue,
        config: Option<String>,
    ) -> Result<PageEditorSession, JsValue> {
        let config = match config.as_deref() {
            Some(json) => EditorConfig::from_json(json).map_err(to_js)?,
            None => EditorConfig::default(),
        };
        let history = HistoryManager::from_config(&config);
        let ui = JsEditorUi::new(ui, config.split_marker.clone());
        let actions = JsPageActions::new(actions);
        let ctx = EditorContext::with_config(Box::new(ui), Box::new(actions), config);

        Ok(Self {
            inner: Rc::new(RefCell::new(Inner {
                ctx,
                history,
                drag: DragDropBridge::new(),
            })),
        })
    }

    /// Replace every page with `pages` (an array of `{label, rotation?,
    /// splitBefore?}`) and forget the history
    #[wasm_bindgen(js_name = loadPages)]
    pub fn load_pages(&self, pages: JsValue, filename: &str) -> Result<(), JsValue> {
        let specs: Vec<PageSpec> = serde_wasm_bindgen::from_value(pages)
            .map_err(|e| JsValue::from_str(&format!("Invalid pages: {}", e)))?;

        let mut inner = self.borrow()?;
        let Inner { ctx, history, drag } = &mut *inner;
        ctx.pages.clear();
        ctx.selection.clear();
        ctx.selection.set_mode(false);
        for spec in specs {
            let id = ctx.pages.create_from_spec(spec);
            ctx.pages.append(id);
        }
        drag.cancel();
        tracing::debug!(pages = ctx.pages.len(), "pages loaded");

        ctx.ui.set_selection_mode(false);
        ctx.ui.set_filename_label(filename);
        if !ctx.clear_controls_if_empty() {
            ctx.enable_controls(filename);
        }
        history.clear(ctx);
        inner.refresh();
        Ok(())
    }

    /// Current pages in document order
    pub fn pages(&self) -> Result<JsValue, JsValue> {
        let inner = self.borrow()?;
        let views = page_views(
            &inner.ctx.pages,
            &inner.ctx.selection,
            &inner.ctx.config.split_marker,
        );
        serde_wasm_bindgen::to_value(&views)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Add pages from files in front of `before`, or at the end
    #[wasm_bindgen(js_name = addFiles)]
    pub fn add_files(&self, before: Option<u32>) -> Promise {
        self.run(move |inner| {
            let anchor = inner.attached_opt(before)?;
            Ok(Box::new(AddPages::new(anchor)) as Box<dyn Command>)
        })
    }

    #[wasm_bindgen(js_name = deletePage)]
    pub fn delete_page(&self, id: u32) -> Promise {
        self.run(move |inner| {
            Ok(Box::new(DeletePage::new(inner.attached(id)?)) as Box<dyn Command>)
        })
    }

    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&self) -> Promise {
        self.run(|_| Ok(Box::new(DeleteSelected::new()) as Box<dyn Command>))
    }

    #[wasm_bindgen(js_name = rotatePage)]
    pub fn rotate_page(&self, id: u32, degrees: i32) -> Promise {
        self.run(move |inner| {
            Ok(Box::new(RotatePage::new(inner.attached(id)?, degrees)) as Box<dyn Command>)
        })
    }

    /// Rotate every page, or only the selected ones in selection mode
    #[wasm_bindgen(js_name = rotateAll)]
    pub fn rotate_all(&self, degrees: i32) -> Promise {
        self.run(move |inner| {
            Ok(Box::new(RotatePages::in_scope(&inner.ctx, degrees)) as Box<dyn Command>)
        })
    }

    /// Move page `id` in front of `before`, or to the end
    #[wasm_bindgen(js_name = movePage)]
    pub fn move_page(&self, id: u32, before: Option<u32>) -> Promise {
        self.run(move |inner| {
            let element = inner.attached(id)?;
            let destination = inner.attached_opt(before)?;
            let scroll = inner.ctx.config.scroll_on_move;
            let command = MovePage::new(&inner.ctx.pages, element, destination, scroll);
            Ok(Box::new(command) as Box<dyn Command>)
        })
    }

    #[wasm_bindgen(js_name = duplicatePage)]
    pub fn duplicate_page(&self, id: u32) -> Promise {
        self.run(move |inner| {
            Ok(Box::new(DuplicatePage::new(inner.attached(id)?)) as Box<dyn Command>)
        })
    }

    #[wasm_bindgen(js_name = toggleSplit)]
    pub fn toggle_split(&self, id: u32) -> Promise {
        self.run(move |inner| {
            Ok(Box::new(ToggleSplit::new(inner.attached(id)?)) as Box<dyn Command>)
        })
    }

    #[wasm_bindgen(js_name = splitAll)]
    pub fn split_all(&self) -> Promise {
        self.run(|inner| {
            Ok(Box::new(SplitAll::from_context(&inner.ctx)) as Box<dyn Command>)
        })
    }

    #[wasm_bindgen(js_name = insertPageBreaks)]
    pub fn insert_page_breaks(&self) -> Promise {
        self.run(|inner| {
            Ok(Box::new(PageBreak::from_context(&inner.ctx)) as Box<dyn Command>)
        })
    }

    /// Checkbox click on page number `page` (1-indexed)
    #[wasm_bindgen(js_name = togglePageSelection)]
    pub fn toggle_page_selection(&self, page: u32, checked: bool) -> Promise {
        self.run(move |_| {
            Ok(Box::new(TogglePageSelection::new(page, checked)) as Box<dyn Command>)
        })
    }

    #[wasm_bindgen(js_name = selectAll)]
    pub fn select_all(&self) -> Result<(), JsValue> {
        let mut inner = self.borrow()?;
        let count = inner.ctx.pages.len();
        inner.ctx.selection.select_all(count);
        inner.refresh();
        Ok(())
    }

    #[wasm_bindgen(js_name = deselectAll)]
    pub fn deselect_all(&self) -> Result<(), JsValue> {
        let mut inner = self.borrow()?;
        inner.ctx.selection.deselect_all();
        inner.refresh();
        Ok(())
    }

    /// Select pages from a range string like "1-3, 5". Parts that name no
    /// page are ignored.
    #[wasm_bindgen(js_name = setSelectionFromRanges)]
    pub fn set_selection_from_ranges(&self, input: &str) -> Result<(), JsValue> {
        let mut inner = self.borrow()?;
        let count = inner.ctx.pages.len();
        inner.ctx.selection.set_from_ranges(input, count);
        inner.refresh();
        Ok(())
    }

    /// Record that the host drew (or removed) a page-number badge on
    /// page `id`. Deleting or moving the page drops a stale badge.
    #[wasm_bindgen(js_name = setPageNumberBadge)]
    pub fn set_page_number_badge(&self, id: u32, shown: bool) -> Result<(), JsValue> {
        let mut inner = self.borrow()?;
        let id = inner.attached(id).map_err(to_js)?;
        if let Some(page) = inner.ctx.pages.get_mut(id) {
            page.page_number_badge = shown;
        }
        inner.refresh();
        Ok(())
    }

    /// Returns whether selection mode is now on
    #[wasm_bindgen(js_name = toggleSelectionMode)]
    pub fn toggle_selection_mode(&self) -> Result<bool, JsValue> {
        let mut inner = self.borrow()?;
        let active = inner.ctx.selection.toggle_mode();
        inner.ctx.ui.set_selection_mode(active);
        inner.refresh();
        Ok(active)
    }

    #[wasm_bindgen(js_name = selectedPages)]
    pub fn selected_pages(&self) -> Result<Vec<u32>, JsValue> {
        Ok(self.borrow()?.ctx.selection.pages())
    }

    /// Start dragging the pages with the given ids
    #[wasm_bindgen(js_name = beginDrag)]
    pub fn begin_drag(&self, ids: Vec<u32>) -> Result<(), JsValue> {
        let mut inner = self.borrow()?;
        let mut dragged: Vec<PageId> = ids
            .into_iter()
            .map(PageId::from)
            .filter(|&id| inner.ctx.pages.contains(id))
            .collect();
        dragged.sort_by_key(|&id| inner.ctx.pages.index_of(id));
        dragged.dedup();
        inner.drag.begin(dragged);
        Ok(())
    }

    #[wasm_bindgen(js_name = dragOver)]
    pub fn drag_over(&self, id: Option<u32>) -> Result<(), JsValue> {
        let mut inner = self.borrow()?;
        inner.drag.hover(id.map(PageId::from));
        Ok(())
    }

    /// Finish the drag over the hovered page. `pointer_fraction` is the
    /// pointer's horizontal position inside it (0 left edge, 1 right
    /// edge). Resolves to whether any page moved.
    #[allow(clippy::await_holding_refcell_ref)]
    pub fn drop(&self, pointer_fraction: f64) -> Promise {
        let inner = self.inner.clone();
        future_to_promise(async move {
            let mut guard = inner
                .try_borrow_mut()
                .map_err(|_| to_js(EditorError::Busy))?;
            let Inner { ctx, history, drag } = &mut *guard;

            let target = resolve_drop_target(&ctx.pages, drag.hovered(), pointer_fraction);
            let Some(command) = drag.drop_on(ctx, target) else {
                return Ok(JsValue::FALSE);
            };
            history
                .execute(ctx, Box::new(PruneSelection::new(command)))
                .await
                .map_err(to_js)?;
            Ok(JsValue::TRUE)
        })
    }

    #[wasm_bindgen(js_name = cancelDrag)]
    pub fn cancel_drag(&self) -> Result<(), JsValue> {
        self.borrow()?.drag.cancel();
        Ok(())
    }

    /// Resolves to false when there was nothing to undo
    pub fn undo(&self) -> Promise {
        self.step(false)
    }

    /// Resolves to false when there was nothing to redo
    pub fn redo(&self) -> Promise {
        self.step(true)
    }

    #[wasm_bindgen(js_name = canUndo)]
    pub fn can_undo(&self) -> Result<bool, JsValue> {
        Ok(self.borrow()?.history.can_undo())
    }

    #[wasm_bindgen(js_name = canRedo)]
    pub fn can_redo(&self) -> Result<bool, JsValue> {
        Ok(self.borrow()?.history.can_redo())
    }

    #[wasm_bindgen(js_name = clearHistory)]
    pub fn clear_history(&self) -> Result<(), JsValue> {
        let mut inner = self.borrow()?;
        let Inner { ctx, history, .. } = &mut *inner;
        history.clear(ctx);
        Ok(())
    }
}
