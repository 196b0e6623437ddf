use blockwright_persist::format::{FILE_EXTENSION, MIME_TYPE};
use wasm_bindgen::prelude::*;

/// Download `text` as a project file using a Blob URL and a hidden `<a download>`.
pub fn save_to_file(text: &str, filename: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(text));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(MIME_TYPE);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");
    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.style().set_property("display", "none").ok();

    let body = document.body().expect("no body");
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor).ok();

    web_sys::Url::revoke_object_url(&url).ok();
    log::info!("storage: downloaded {filename} ({} bytes)", text.len());
    Ok(())
}

/// Open a file picker and call `callback` with the chosen file's text.
/// Nothing is called when the picker is dismissed.
pub fn load_from_file(callback: impl FnOnce(String) + 'static) -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("no window")
        .document()
        .expect("no document");
    let input: web_sys::HtmlInputElement = document.create_element("input")?.dyn_into()?;
    input.set_type("file");
    input.set_accept(&format!("{FILE_EXTENSION},{MIME_TYPE}"));
    input.style().set_property("display", "none").ok();

    let body = document.body().expect("no body");
    body.append_child(&input)?;

    let input_clone = input.clone();
    let callback = std::cell::RefCell::new(Some(callback));

    let onchange = Closure::<dyn FnMut()>::new(move || {
        if let Some(parent) = input_clone.parent_node() {
            parent.remove_child(&input_clone).ok();
        }
        let Some(file) = input_clone.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(cb) = callback.borrow_mut().take() else {
            return;
        };
        if let Err(e) = read_text(&file, cb) {
            log::warn!("storage: reading {} failed: {e:?}", file.name());
        }
    });
    input.set_onchange(Some(onchange.as_ref().unchecked_ref()));
    onchange.forget(); // Lives for the picker's lifetime

    input.click();
    Ok(())
}

fn read_text(file: &web_sys::File, callback: impl FnOnce(String) + 'static) -> Result<(), JsValue> {
    let reader = web_sys::FileReader::new()?;
    let reader_clone = reader.clone();
    let callback = std::cell::RefCell::new(Some(callback));
    let name = file.name();

    let onload = Closure::<dyn FnMut()>::new(move || {
        let Some(cb) = callback.borrow_mut().take() else {
            return;
        };
        match reader_clone.result().ok().and_then(|r| r.as_string()) {
            Some(text) => {
                log::info!("storage: read {name} ({} bytes)", text.len());
                cb(text);
            }
            None => log::warn!("storage: {name} did not read as text"),
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget(); // Lives for the read's lifetime

    reader.read_as_text(file)
}
