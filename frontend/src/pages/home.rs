use log::info;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{
    appointment_form::AppointmentForm,
    appointment_modal::AppointmentModal,
    hero_slider::HeroSlider,
    service_cards::ServiceCards,
    stats_counter::StatsCounter,
};
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: SiteContent,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;
    let modal_open = use_state(|| false);

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            info!("Opening appointment dialog");
            modal_open.set(true);
        })
    };

    let close_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: ()| modal_open.set(false))
    };

    html! {
        <main class="home-page">
            <HeroSlider slides={content.slides.clone()} />
            <StatsCounter stats={content.stats.clone()} />
            <ServiceCards services={content.services.clone()} />
            {
                match &content.appointment {
                    Some(appointment) => html! {
                        <>
                            <button id="quickAppointment" class="quick-appointment" onclick={open_modal}>
                                <i class="fas fa-calendar-check"></i>
                                { &appointment.trigger_label }
                            </button>
                            <AppointmentModal
                                open={*modal_open}
                                title={appointment.title.clone()}
                                show_close={appointment.show_close}
                                on_close={close_modal.clone()}
                            >
                                <AppointmentForm
                                    submit_label={appointment.submit_label.clone()}
                                    confirmation={appointment.confirmation.clone()}
                                    on_submitted={close_modal}
                                />
                            </AppointmentModal>
                        </>
                    },
                    None => html! {},
                }
            }
            <footer id="contact" class="footer">
                <p>{ format!("© {}", content.brand) }</p>
            </footer>
        </main>
    }
}
