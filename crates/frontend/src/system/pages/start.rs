use contracts::enums::MeasurementType;
use leptos::prelude::*;

/// Static welcome page listing the supported measurement types.
#[component]
pub fn StartPage() -> impl IntoView {
    view! {
        <div class="start-page">
            <h2>"Welcome to Unit Converter"</h2>
            <p>"- a tool for converting and comparing measurements of different units."</p>
            <p>"Supported measurement types:"</p>
            <ul>
                {MeasurementType::all()
                    .into_iter()
                    .map(|t| view! { <li>{t.display_name()}</li> })
                    .collect_view()}
            </ul>
        </div>
    }
}
