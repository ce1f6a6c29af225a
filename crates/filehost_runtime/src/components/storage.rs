use system_ui::{Badge, ProgressBar, ProgressVariant, TextTone};

use super::*;
use crate::{model::StorageLevel, size::format_file_size};

const METER_SCALE: u16 = 1000;

fn meter_value(percentage: f64) -> u16 {
    (percentage.clamp(0.0, 100.0) * f64::from(METER_SCALE) / 100.0).round() as u16
}

fn level_variant(level: Option<StorageLevel>) -> ProgressVariant {
    match level {
        Some(StorageLevel::Full) => ProgressVariant::Danger,
        Some(StorageLevel::Warning) => ProgressVariant::Warning,
        _ => ProgressVariant::Standard,
    }
}

#[component]
pub(super) fn StorageIndicator() -> impl IntoView {
    let runtime = use_page_runtime();
    let state = runtime.state;
    let info = create_memo(move |_| state.with(|state| state.storage.info.clone()));
    let level = create_memo(move |_| state.with(PageState::storage_level));
    let stale = create_memo(move |_| state.with(|state| state.storage.stale));
    let last_error = move || {
        state.with(|state| state.storage.last_error.clone().unwrap_or_default())
    };

    view! {
        <div
            class="storage-indicator"
            data-ui-kind="storage-indicator"
            data-storage-level=move || level.get().map(StorageLevel::token).unwrap_or("unknown")
            data-storage-stale=move || stale.get().to_string()
        >
            {move || match info.get() {
                Some(info) => view! {
                    <div class="storage-summary">
                        <span class="storage-used">
                            {format!(
                                "{} of {} used",
                                format_file_size(info.used_space),
                                format_file_size(info.total_space),
                            )}
                        </span>
                        <span class="storage-percentage">{info.formatted_usage_percentage()}</span>
                        <span class="storage-file-count">
                            {format!("{} files", info.file_count)}
                        </span>
                    </div>
                    <ProgressBar
                        layout_class="storage-meter"
                        aria_label="Storage usage"
                        max=METER_SCALE
                        value=meter_value(info.usage_percentage)
                        variant=Signal::derive(move || level_variant(level.get()))
                    />
                }
                .into_view(),
                None => view! {
                    <span class="storage-unavailable">"Storage usage unavailable"</span>
                }
                .into_view(),
            }}
            <Show when=move || stale.get()>
                <span title=last_error>
                    <Badge tone=TextTone::Warning>"Last update failed"</Badge>
                </span>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meter_value_scales_and_clamps_percentages() {
        assert_eq!(meter_value(12.5), 125);
        assert_eq!(meter_value(-3.0), 0);
        assert_eq!(meter_value(140.0), METER_SCALE);
    }

    #[test]
    fn storage_levels_map_to_meter_variants() {
        assert_eq!(level_variant(Some(StorageLevel::Full)), ProgressVariant::Danger);
        assert_eq!(level_variant(Some(StorageLevel::Warning)), ProgressVariant::Warning);
        assert_eq!(level_variant(None), ProgressVariant::Standard);
    }
}
