use super::view_model::MeasurementFieldVm;
use crate::shared::components::UnitSelector;
use leptos::prelude::*;

/// A single measurement row: labeled quantity input, embedded unit selector
/// and a removal button.
///
/// The field validates its own input and notifies the container through the
/// callbacks. The notifications carry no payload: consumers re-read
/// `quantity` and `unit` from the view-model. Removal is only requested,
/// never performed here; the container owns the document tree.
#[component]
pub fn MeasurementField(
    vm: MeasurementFieldVm,
    /// Raised once per successfully validated quantity input
    #[prop(optional)]
    on_quantity_changed: Option<Callback<()>>,
    /// Relay of the embedded selector's change notification
    #[prop(optional)]
    on_unit_changed: Option<Callback<()>>,
    /// Raised when the user activates the removal button
    #[prop(optional)]
    on_remove_requested: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="measurement-field">
            <fieldset>
                <legend>"Measurement"</legend>
                <label>
                    "Quantity: "
                    <input
                        type="text"
                        name="quantity"
                        value="0"
                        class:invalid=move || !vm.input_valid.get()
                        on:input=move |ev| {
                            if vm.handle_quantity_input(&event_target_value(&ev)) {
                                if let Some(handler) = on_quantity_changed {
                                    handler.run(());
                                }
                            }
                        }
                    />
                </label>
                <UnitSelector
                    measurement_type=vm.measurement_type
                    unit=vm.unit
                    on_unit_change=Callback::new(move |_| {
                        if let Some(handler) = on_unit_changed {
                            handler.run(());
                        }
                    })
                />
            </fieldset>
            <button
                class="measurement-field__remove"
                title="Remove measurement"
                on:click=move |_| {
                    if let Some(handler) = on_remove_requested {
                        handler.run(());
                    }
                }
            >
                "\u{00d7}"
            </button>
        </div>
    }
}
