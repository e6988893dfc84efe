use contracts::enums::{MeasurementType, Unit};
use leptos::prelude::*;

/// Drop-down of the units available for a measurement type.
///
/// The selector owns which unit is picked (through the `unit` signal handed
/// in by the embedding field) and raises `on_unit_change` when the user
/// selects another one. It holds no conversion logic of its own.
#[component]
pub fn UnitSelector(
    /// Measurement type whose units are offered
    #[prop(into)]
    measurement_type: Signal<MeasurementType>,
    /// Currently selected unit
    unit: RwSignal<Unit>,
    /// Change event handler
    #[prop(optional)]
    on_unit_change: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <select
            class="unit-selector"
            on:change=move |ev| {
                if let Some(picked) = Unit::from_code(&event_target_value(&ev)) {
                    unit.set(picked);
                    if let Some(handler) = on_unit_change {
                        handler.run(());
                    }
                }
            }
        >
            <For
                each=move || Unit::all_for(measurement_type.get())
                key=|u| u.code()
                children=move |u| {
                    let is_selected = move || unit.get() == u;
                    view! {
                        <option value=u.code() selected=is_selected>
                            {u.display_name()}
                        </option>
                    }
                }
            />
        </select>
    }
}
