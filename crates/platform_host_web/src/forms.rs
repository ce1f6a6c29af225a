//! Form submission adapter: builds a transient `<form>` with hidden inputs and submits it.

use platform_host::{FormSubmission, FormSubmitter};

#[derive(Debug, Clone, Copy, Default)]
/// Browser form submitter.
///
/// The form is attached to `document.body` only for the duration of `submit()` and removed
/// right after, so repeated submissions never accumulate elements.
pub struct WebFormSubmitter;

impl FormSubmitter for WebFormSubmitter {
    fn submit(&self, submission: &FormSubmission) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| "document unavailable".to_string())?;
            let body = document
                .body()
                .ok_or_else(|| "document body unavailable".to_string())?;
            let form = document
                .create_element("form")
                .map_err(|err| format!("failed to create form: {err:?}"))?
                .dyn_into::<web_sys::HtmlFormElement>()
                .map_err(|_| "failed to cast form element".to_string())?;
            form.set_method("post");
            form.set_action(&submission.action);

            for (name, value) in &submission.fields {
                let input = document
                    .create_element("input")
                    .map_err(|err| format!("failed to create hidden input: {err:?}"))?
                    .dyn_into::<web_sys::HtmlInputElement>()
                    .map_err(|_| "failed to cast hidden input".to_string())?;
                input.set_type("hidden");
                input.set_name(name);
                input.set_value(value);
                form.append_child(&input)
                    .map_err(|err| format!("failed to append hidden input: {err:?}"))?;
            }

            body.append_child(&form)
                .map_err(|err| format!("failed to attach form: {err:?}"))?;
            let submitted = form
                .submit()
                .map_err(|err| format!("form submission failed: {err:?}"));
            form.remove();
            return submitted;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = submission;
            Err(crate::unsupported("form submission"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_submit_reports_unsupported() {
        let err = WebFormSubmitter
            .submit(&FormSubmission::post("/delete/1"))
            .expect_err("native submit should fail");
        assert!(err.starts_with("form submission"));
    }
}
