//! Clipboard adapter: async Clipboard API first, legacy `execCommand("copy")` second.

use platform_host::{ClipboardFuture, ClipboardService};

#[derive(Debug, Clone, Copy, Default)]
/// Browser clipboard adapter.
pub struct WebClipboardService;

impl ClipboardService for WebClipboardService {
    fn write_text<'a>(&'a self, text: &'a str) -> ClipboardFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                let Err(api_err) = imp::write_with_clipboard_api(text).await else {
                    return Ok(());
                };
                return imp::write_with_exec_command(text).map_err(|fallback_err| {
                    format!("clipboard write failed ({api_err}); fallback failed ({fallback_err})")
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = text;
                Err(crate::unsupported("clipboard access"))
            }
        })
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use js_sys::Promise;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen(inline_js = r#"
export function jsClipboardWriteText(text) {
  if (typeof navigator === 'undefined' || !navigator.clipboard || !navigator.clipboard.writeText) {
    return Promise.reject(new Error('Clipboard API is unavailable in this browser context'));
  }
  return navigator.clipboard.writeText(text);
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsClipboardWriteText)]
        fn js_clipboard_write_text(text: &str) -> Promise;
    }

    fn js_error_to_string(err: JsValue) -> String {
        if let Some(text) = err.as_string() {
            return text;
        }
        if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
            if let Some(text) = message.as_string() {
                return text;
            }
        }
        format!("{err:?}")
    }

    pub(super) async fn write_with_clipboard_api(text: &str) -> Result<(), String> {
        JsFuture::from(js_clipboard_write_text(text))
            .await
            .map(|_| ())
            .map_err(js_error_to_string)
    }

    pub(super) fn write_with_exec_command(text: &str) -> Result<(), String> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| "document unavailable".to_string())?;
        let body = document
            .body()
            .ok_or_else(|| "document body unavailable".to_string())?;
        let textarea = document
            .create_element("textarea")
            .map_err(js_error_to_string)?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "failed to cast clipboard textarea".to_string())?;
        textarea.set_value(text);
        body.append_child(&textarea).map_err(js_error_to_string)?;
        textarea.select();

        let copied = document
            .dyn_ref::<web_sys::HtmlDocument>()
            .ok_or_else(|| "document does not support execCommand".to_string())
            .and_then(|html| html.exec_command("copy").map_err(js_error_to_string));
        textarea.remove();

        match copied? {
            true => Ok(()),
            false => Err("copy command was rejected".to_string()),
        }
    }
}
