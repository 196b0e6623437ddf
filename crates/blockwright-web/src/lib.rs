mod app;
mod canvas2d;
mod error;
mod input;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use blockwright_core::ColorTag;
use blockwright_editor::{EditorSettings, Tool};
use wasm_bindgen::prelude::*;

use app::{Application, SharedApp};
use error::WebError;

const CANVAS_ID: &str = "blockwright-canvas";

thread_local! {
    static APP: RefCell<Option<SharedApp>> = const { RefCell::new(None) };
}

/// WASM entry point. Sets the panic hook and initializes logging.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger init failed");
    log::info!("Blockwright starting...");

    if let Err(e) = run() {
        show_error_to_user(&format!("{e}"));
    }
}

fn run() -> Result<(), WebError> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| WebError::CanvasNotFound(CANVAS_ID.to_string()))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| WebError::NotACanvas(CANVAS_ID.to_string()))?;

    let application = Application::new(canvas.clone(), EditorSettings::shipped())?;
    let app_rc = Rc::new(RefCell::new(application));

    // Register input listeners ONCE.
    input::register_input_listeners(&canvas, app_rc.clone());
    APP.with(|slot| *slot.borrow_mut() = Some(app_rc));
    Ok(())
}

/// Show a user-visible error, not just a console line.
fn show_error_to_user(msg: &str) {
    log::error!("{msg}");
    let window = web_sys::window().expect("no global window");
    let _ = window.alert_with_message(&format!("Blockwright Error: {msg}"));
}

fn running_app() -> Result<SharedApp, JsValue> {
    APP.with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("blockwright is not running"))
}

/// Run `f` against the application and redraw afterwards.
fn with_app<R>(f: impl FnOnce(&mut Application) -> R) -> Result<R, JsValue> {
    let app = running_app()?;
    let mut app = app.borrow_mut();
    let result = f(&mut app);
    app.redraw();
    Ok(result)
}

fn read_app<R>(f: impl FnOnce(&Application) -> R) -> Result<R, JsValue> {
    let app = running_app()?;
    let app = app.borrow();
    Ok(f(&app))
}

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// -- page controls --

/// Select a tool by name: "cube", "erase" or "paint".
#[wasm_bindgen(js_name = setTool)]
pub fn set_tool(name: &str) -> Result<(), JsValue> {
    let tool = [Tool::Cube, Tool::Erase, Tool::Paint]
        .into_iter()
        .find(|t| t.name() == name)
        .ok_or_else(|| JsValue::from_str(&format!("unknown tool '{name}'")))?;
    with_app(|app| app.editor_mut().set_tool(tool))
}

#[wasm_bindgen(js_name = setColor)]
pub fn set_color(hex: &str) -> Result<(), JsValue> {
    let color = ColorTag::parse(hex).map_err(js_err)?;
    with_app(|app| app.editor_mut().set_color(color))
}

/// Palette colors from the settings, as `#rrggbb` strings.
#[wasm_bindgen]
pub fn palette() -> Result<js_sys::Array, JsValue> {
    read_app(|app| {
        app.editor()
            .settings()
            .palette()
            .iter()
            .map(|c| JsValue::from_str(c.as_str()))
            .collect::<js_sys::Array>()
    })
}

#[wasm_bindgen(js_name = setShowFloor)]
pub fn set_show_floor(show: bool) -> Result<(), JsValue> {
    with_app(|app| app.editor_mut().set_show_floor(show))
}

/// Returns the number of cubes purged by the smaller footprint.
#[wasm_bindgen(js_name = setGridSize)]
pub fn set_grid_size(size: u32) -> Result<usize, JsValue> {
    with_app(|app| app.editor_mut().set_footprint(size))
}

/// Returns the number of cubes purged by the lower ceiling.
#[wasm_bindgen(js_name = setGridHeight)]
pub fn set_grid_height(height: u32) -> Result<usize, JsValue> {
    with_app(|app| app.editor_mut().set_max_height(height))
}

#[wasm_bindgen(js_name = resetView)]
pub fn reset_view() -> Result<(), JsValue> {
    with_app(|app| app.editor_mut().reset_view())
}

#[wasm_bindgen(js_name = clearGrid)]
pub fn clear_grid() -> Result<(), JsValue> {
    with_app(|app| app.editor_mut().clear_grid())
}

#[wasm_bindgen(js_name = clearWorkspace)]
pub fn clear_workspace() -> Result<(), JsValue> {
    with_app(|app| app.editor_mut().clear_workspace())
}

// -- library --

/// Save the build as a polyhedron; returns the new id.
#[wasm_bindgen(js_name = finalizeBuild)]
pub fn finalize_build() -> Result<String, JsValue> {
    with_app(|app| app.editor_mut().finalize_build())?.map_err(js_err)
}

#[wasm_bindgen(js_name = editPolyhedron)]
pub fn edit_polyhedron(id: &str) -> Result<(), JsValue> {
    with_app(|app| app.editor_mut().edit_polyhedron(id))?.map_err(js_err)
}

#[wasm_bindgen(js_name = deletePolyhedron)]
pub fn delete_polyhedron(id: &str) -> Result<(), JsValue> {
    with_app(|app| app.editor_mut().delete_polyhedron(id))?.map_err(js_err)
}

#[wasm_bindgen(js_name = duplicatePolyhedron)]
pub fn duplicate_polyhedron(id: &str) -> Result<String, JsValue> {
    with_app(|app| app.editor_mut().duplicate_polyhedron(id))?.map_err(js_err)
}

/// The library as a JSON array, for the page's list.
#[wasm_bindgen(js_name = libraryJson)]
pub fn library_json() -> Result<String, JsValue> {
    read_app(|app| serde_json::to_string(app.editor().library().as_slice()))?.map_err(js_err)
}

/// Current status line.
#[wasm_bindgen]
pub fn status() -> Result<String, JsValue> {
    read_app(|app| app.editor().status().text.clone())
}

// -- files --

/// Download the project as `polyhedron_project_<ms>.json`.
#[wasm_bindgen(js_name = exportProject)]
pub fn export_project() -> Result<(), JsValue> {
    let (text, filename) = with_app(|app| {
        let name = app.editor().export_file_name();
        app.editor_mut().export_project().map(|text| (text, name))
    })?
    .map_err(js_err)?;
    storage::save_to_file(&text, &filename)
}

/// Pick a project file and replace the workspace with it. A rejected file
/// leaves the workspace untouched and shows why in the status line.
#[wasm_bindgen(js_name = importProject)]
pub fn import_project() -> Result<(), JsValue> {
    storage::load_from_file(|text| {
        let outcome = with_app(|app| app.editor_mut().import_project(&text));
        match outcome {
            Ok(Ok(_warnings)) => {}
            Ok(Err(e)) => show_error_to_user(&format!("Import failed: {e}")),
            Err(e) => log::error!("import: {e:?}"),
        }
    })
}
