use super::model::{self, Comparison, Measurement};
use crate::domain::measurement::ui::field::{MeasurementField, MeasurementFieldVm};
use contracts::enums::MeasurementType;
use leptos::prelude::*;

/// Comparison page: a mutable list of measurement fields sharing one
/// measurement type, plus a summary recomputed whenever a field reports a
/// quantity or unit change.
///
/// The page owns the field list exclusively: fields request their own
/// removal through `on_remove_requested`, and only the page detaches them.
#[component]
pub fn ComparePage() -> impl IntoView {
    let page_type = RwSignal::new(MeasurementType::Length);
    let next_id = RwSignal::new(2usize);
    let fields = RwSignal::new(vec![
        (0usize, MeasurementFieldVm::new()),
        (1usize, MeasurementFieldVm::new()),
    ]);

    let descriptions = RwSignal::new(Vec::<String>::new());
    let comparison = RwSignal::new(Comparison::NotEnough);
    let error = RwSignal::new(Option::<String>::None);

    let recompute = move || {
        let measurements: Vec<Measurement> = fields
            .get_untracked()
            .iter()
            .map(|(_, vm)| Measurement {
                quantity: vm.quantity.get_untracked(),
                unit: vm.unit.get_untracked(),
            })
            .collect();
        descriptions.set(measurements.iter().map(model::describe).collect());
        comparison.set(model::compare(&measurements));
    };
    recompute();

    // The page-level type select retypes every field; a rejected code is
    // surfaced instead of propagating out of the UI.
    let retype = move |code: String| {
        error.set(None);
        for (_, vm) in fields.get_untracked() {
            if let Err(e) = vm.set_measurement_type(&code) {
                error.set(Some(e.to_string()));
                return;
            }
        }
        if let Some(t) = MeasurementType::from_code(&code) {
            page_type.set(t);
        }
        recompute();
    };

    let add_measurement = move |_| {
        let id = next_id.get_untracked();
        next_id.set(id + 1);
        fields.update(|f| {
            f.push((id, MeasurementFieldVm::with_type(page_type.get_untracked())));
        });
        recompute();
    };

    let remove_measurement = move |id: usize| {
        fields.update(|f| f.retain(|(field_id, _)| *field_id != id));
        recompute();
    };

    let on_field_changed = Callback::new(move |_| recompute());

    view! {
        <div class="compare-page">
            <h2>"Compare measurements"</h2>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="compare-page__toolbar">
                <label>
                    "Measurement type: "
                    <select on:change=move |ev| retype(event_target_value(&ev))>
                        {MeasurementType::all()
                            .into_iter()
                            .map(|t| {
                                let is_selected = move || page_type.get() == t;
                                view! {
                                    <option value=t.code() selected=is_selected>
                                        {t.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <button on:click=add_measurement>"Add measurement"</button>
            </div>

            <For
                each=move || fields.get()
                key=|(id, _)| *id
                children=move |(id, vm)| {
                    view! {
                        <MeasurementField
                            vm=vm
                            on_quantity_changed=on_field_changed
                            on_unit_changed=on_field_changed
                            on_remove_requested=Callback::new(move |_| remove_measurement(id))
                        />
                    }
                }
            />

            <div class="compare-page__summary">
                <h3>"Comparison"</h3>
                <ul>
                    {move || {
                        descriptions
                            .get()
                            .into_iter()
                            .map(|d| view! { <li>{d}</li> })
                            .collect_view()
                    }}
                </ul>
                <p>
                    {move || match comparison.get() {
                        Comparison::NotEnough => {
                            "Add at least two measurements to compare.".to_string()
                        }
                        Comparison::Mixed => {
                            "The measurements use different measurement types.".to_string()
                        }
                        Comparison::AllEqual => "All measurements are equal.".to_string(),
                        Comparison::Largest(i) => {
                            format!("Measurement {} is the largest.", i + 1)
                        }
                    }}
                </p>
            </div>
        </div>
    }
}
