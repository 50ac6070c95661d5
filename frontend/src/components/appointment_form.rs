use chrono::Local;
use log::{error, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::SUBMIT_DELAY_MS;
use crate::dom;
use crate::timer::{BrowserScheduler, Scheduler, TaskHandle};
use crate::validation::{self, AppointmentDraft, FieldCheck, ValidationReport};

#[derive(Properties, PartialEq)]
pub struct AppointmentFormProps {
    pub submit_label: String,
    pub confirmation: String,
    /// Fired after the simulated request completes.
    pub on_submitted: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct FormGroupProps {
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
    check: Option<FieldCheck>,
    on_input: Callback<String>,
}

#[function_component(FormGroup)]
fn form_group(props: &FormGroupProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    let state = match props.check {
        Some(Ok(())) => Some("success"),
        Some(Err(_)) => Some("error"),
        None => None,
    };

    html! {
        <div class={classes!("form-group", state)}>
            <label for={props.id}>{ props.label }</label>
            <input id={props.id} type={props.input_type} value={props.value.clone()} {oninput} />
            {
                if let Some(Err(e)) = props.check {
                    html! { <small class="error-message">{ e.to_string() }</small> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Clone, Copy, Default, PartialEq)]
struct Annotations {
    name: Option<FieldCheck>,
    phone: Option<FieldCheck>,
    date: Option<FieldCheck>,
}

impl From<&ValidationReport> for Annotations {
    /// Every field reflects the latest submit only; an emptied date loses its old annotation.
    fn from(report: &ValidationReport) -> Self {
        Self {
            name: Some(report.name),
            phone: Some(report.phone),
            date: report.date,
        }
    }
}

#[function_component(AppointmentForm)]
pub fn appointment_form(props: &AppointmentFormProps) -> Html {
    let draft = use_state(AppointmentDraft::default);
    let annotations = use_state(Annotations::default);
    let is_submitting = use_state(|| false);
    // Dropped on unmount, which cancels a pending submission.
    let pending = use_mut_ref(|| None::<TaskHandle>);

    let set_field = |apply: fn(&mut AppointmentDraft, String)| {
        let draft = draft.clone();
        Callback::from(move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let annotations = annotations.clone();
        let is_submitting = is_submitting.clone();
        let pending = pending.clone();
        let confirmation = props.confirmation.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }

            let today = Local::now().date_naive();
            let report = validation::validate(&draft, today);
            annotations.set(Annotations::from(&report));
            if !report.is_valid() {
                info!("Appointment form rejected");
                return;
            }

            is_submitting.set(true);
            let draft = draft.clone();
            let annotations = annotations.clone();
            let is_submitting = is_submitting.clone();
            let confirmation = confirmation.clone();
            let on_submitted = on_submitted.clone();
            let handle = BrowserScheduler.once(
                SUBMIT_DELAY_MS,
                Box::new(move || {
                    info!("Appointment request submitted");
                    if let Err(e) = dom::alert(&confirmation) {
                        error!("Could not show confirmation: {}", e);
                    }
                    draft.set(AppointmentDraft::default());
                    annotations.set(Annotations::default());
                    is_submitting.set(false);
                    on_submitted.emit(());
                }),
            );
            *pending.borrow_mut() = Some(handle);
        })
    };

    let submit_text = if *is_submitting {
        "Processing...".to_string()
    } else {
        props.submit_label.clone()
    };

    html! {
        <form id="appointmentForm" {onsubmit}>
            <FormGroup
                id="patientName"
                label="Full Name"
                input_type="text"
                value={draft.name.clone()}
                check={annotations.name}
                on_input={set_field(|d, v| d.name = v)}
            />
            <FormGroup
                id="patientPhone"
                label="Phone Number"
                input_type="tel"
                value={draft.phone.clone()}
                check={annotations.phone}
                on_input={set_field(|d, v| d.phone = v)}
            />
            <FormGroup
                id="appointmentDate"
                label="Preferred Date"
                input_type="date"
                value={draft.date.clone()}
                check={annotations.date}
                on_input={set_field(|d, v| d.date = v)}
            />
            <button type="submit" class="submit-btn" disabled={*is_submitting}>
                { submit_text }
            </button>
        </form>
    }
}
