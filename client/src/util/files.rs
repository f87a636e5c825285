//! Reading user-picked files in the browser.

/// Read `file` as a data URL and hand it to `on_loaded`. Read failures are
/// logged and dropped.
#[cfg(feature = "csr")]
pub fn read_data_url(file: &web_sys::File, on_loaded: impl FnOnce(String) + 'static) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(err) => {
            log::error!("file reader unavailable: {err:?}");
            return;
        }
    };
    let reader_for_cb = reader.clone();
    let onload = Closure::once_into_js(move || {
        match reader_for_cb.result().ok().and_then(|v| v.as_string()) {
            Some(url) => on_loaded(url),
            None => log::warn!("file read produced no data url"),
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    if let Err(err) = reader.read_as_data_url(file) {
        log::error!("file read failed: {err:?}");
    }
}

/// First file selected in a file input change event.
#[cfg(feature = "csr")]
pub fn first_file(ev: &leptos::ev::Event) -> Option<web_sys::File> {
    use wasm_bindgen::JsCast;

    let input = ev.target()?.dyn_into::<web_sys::HtmlInputElement>().ok()?;
    let file = input.files()?.get(0);
    input.set_value("");
    file
}
