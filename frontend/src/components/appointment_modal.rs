use log::error;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::dom;

#[derive(Properties, PartialEq)]
pub struct AppointmentModalProps {
    pub open: bool,
    pub title: String,
    #[prop_or(true)]
    pub show_close: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AppointmentModal)]
pub fn appointment_modal(props: &AppointmentModalProps) -> Html {
    let AppointmentModalProps {
        open,
        title,
        show_close,
        on_close,
        children,
    } = props;

    // Page behind the dialog must not scroll while it is open. Body overflow is left alone
    // until the dialog has been opened at least once.
    let locked = use_mut_ref(|| false);
    use_effect_with_deps(
        move |open| {
            let was_locked = *locked.borrow();
            if *open || was_locked {
                match dom::lock_body_scroll(*open) {
                    Ok(()) => *locked.borrow_mut() = *open,
                    Err(e) => error!("Failed to toggle page scrolling: {}", e),
                }
            }
            || ()
        },
        *open,
    );

    {
        let open = *open;
        let on_close = on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    // Only a click on the overlay itself closes; clicks inside the content bubble up here too.
    let on_overlay_click = {
        let on_close = on_close.clone();
        Callback::from(move |e: MouseEvent| {
            if e.target() == e.current_target() {
                on_close.emit(());
            }
        })
    };

    let on_close_click = {
        let on_close = on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="appointmentModal" class={classes!("modal", open.then_some("active"))} onclick={on_overlay_click}>
            <div class="modal-content">
                {
                    if *show_close {
                        html! {
                            <span class="close-modal" onclick={on_close_click}>{"×"}</span>
                        }
                    } else {
                        html! {}
                    }
                }
                <h2>{ title }</h2>
                { for children.iter() }
            </div>
        </div>
    }
}
