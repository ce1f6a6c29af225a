//! Runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::PageRuntimeContext;

/// Installs the effect executor that drains reducer-emitted page effects in order.
pub fn install(runtime: PageRuntimeContext) {
    // Clear the queue before running so effects that dispatch synchronously enqueue a fresh
    // batch instead of being overwritten by the in-flight drain.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            runtime
                .host
                .get_value()
                .run_page_effect(effect, runtime.dispatch);
        }
    });
}
