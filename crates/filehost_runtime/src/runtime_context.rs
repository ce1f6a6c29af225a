//! Runtime provider and context wiring for the file-hosting page.
//!
//! This module owns the long-lived reducer container, the effect queue, and the storage poll
//! interval. UI composition stays in [`crate::components`].

use std::time::Duration;

use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::PageHostContext,
    model::PageState,
    poller::StoragePoller,
    reducer::{reduce_page, PageAction, PageEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading page state and dispatching [`PageAction`] values.
pub struct PageRuntimeContext {
    /// Host service bundle for executing side effects.
    pub host: StoredValue<PageHostContext>,
    /// Reactive page state signal.
    pub state: RwSignal<PageState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<PageEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<PageAction>,
    /// Storage poll interval owner.
    pub poller: StoredValue<StoragePoller>,
}

impl PageRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: PageAction) {
        self.dispatch.call(action);
    }

    /// (Re)starts storage polling with the configured path and interval.
    pub fn start_storage_polling(&self) {
        let config = self.state.with_untracked(|state| state.config.clone());
        let host = self.host.get_value();
        let dispatch = self.dispatch;
        let started = self.poller.with_value(|poller| {
            poller.start(
                host,
                config.storage_usage_path,
                Duration::from_millis(u64::from(config.storage_poll_interval_ms)),
                dispatch,
            )
        });
        if let Err(err) = started {
            logging::warn!("{err}");
        }
    }

    /// Stops storage polling. Safe to call during teardown.
    pub fn stop_storage_polling(&self) {
        let _ = self.poller.try_with_value(StoragePoller::stop);
    }
}

#[component]
/// Provides [`PageRuntimeContext`] to descendant components and starts storage polling.
pub fn PageProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// State parsed from the page's bootstrap payloads.
    initial_state: PageState,
    children: Children,
) -> impl IntoView {
    let host = store_value(PageHostContext::new(host_services));
    let state = create_rw_signal(initial_state);
    let effects = create_rw_signal(Vec::<PageEffect>::new());
    let poller = store_value(StoragePoller::default());

    let dispatch = Callback::new(move |action: PageAction| {
        let mut page = state.get_untracked();
        let previous = page.clone();

        match reduce_page(&mut page, action) {
            Ok(new_effects) => {
                if page != previous {
                    state.set(page);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Err(err) => logging::warn!("page reducer error: {err}"),
        }
    });

    let runtime = PageRuntimeContext {
        host,
        state,
        effects,
        dispatch,
        poller,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    logging::log!(
        "file host runtime mounted ({} host)",
        host.with_value(PageHostContext::host_strategy_name)
    );
    runtime.start_storage_polling();
    on_cleanup(move || runtime.stop_storage_polling());

    children().into_view()
}

/// Returns the current [`PageRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`PageProvider`].
pub fn use_page_runtime() -> PageRuntimeContext {
    use_context::<PageRuntimeContext>().expect("PageRuntimeContext not provided")
}
