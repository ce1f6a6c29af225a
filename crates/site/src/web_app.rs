use filehost_runtime::{
    initial_page_state, load_boot_payload, read_embedded_json, FileHostPage, PageProvider,
};
use leptos::*;
use leptos_meta::*;
use platform_host_web::build_host_services;

#[component]
pub fn FileHostApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="File Host" />
        <Meta name="description" content="Upload, share, and manage hosted files." />

        <main class="site-root">
            <FileHostEntry />
        </main>
    }
}

#[component]
pub fn FileHostEntry() -> impl IntoView {
    let initial_state = initial_page_state(load_boot_payload(read_embedded_json));

    view! {
        <PageProvider host_services=build_host_services() initial_state=initial_state>
            <FileHostPage />
        </PageProvider>
    }
}
