use log::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{CARD_ROOT_MARGIN, CARD_VISIBILITY_THRESHOLD, ICON_PULSE_MS};
use crate::content::Service;
use crate::timer::{BrowserScheduler, Scheduler, TaskHandle};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Calls `on_visible` the first time `element` scrolls into view, then stops observing it.
fn observe_entrance(
    element: &Element,
    on_visible: Callback<()>,
) -> Result<(IntersectionObserver, ObserverCallback), JsValue> {
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    on_visible.emit(());
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(CARD_VISIBILITY_THRESHOLD));
    options.set_root_margin(CARD_ROOT_MARGIN);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(element);
    Ok((observer, callback))
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let Service {
        title,
        description,
        icon,
        service,
    } = &props.service;
    let card_ref = use_node_ref();
    let animated = use_state(|| false);
    let pulsing = use_state(|| false);
    let pulse_timer = use_mut_ref(|| None::<TaskHandle>);

    {
        let card_ref = card_ref.clone();
        let animated = animated.clone();
        use_effect_with_deps(
            move |_| {
                let on_visible = Callback::from(move |_: ()| animated.set(true));
                let observed = card_ref
                    .cast::<Element>()
                    .map(|element| observe_entrance(&element, on_visible));
                let observed = match observed {
                    Some(Ok(observed)) => Some(observed),
                    Some(Err(e)) => {
                        error!("Card entrance animation unavailable: {:?}", e);
                        None
                    }
                    None => None,
                };
                move || {
                    if let Some((observer, _callback)) = observed {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let onmouseenter = {
        let pulsing = pulsing.clone();
        let pulse_timer = pulse_timer.clone();
        let can_pulse = service.is_some() && icon.is_some();
        let service = service.clone();
        Callback::from(move |_: MouseEvent| {
            if !can_pulse {
                return;
            }
            debug!("Pulsing icon of {:?}", service);
            pulsing.set(true);
            let pulsing = pulsing.clone();
            let handle = BrowserScheduler.once(
                ICON_PULSE_MS,
                Box::new(move || pulsing.set(false)),
            );
            *pulse_timer.borrow_mut() = Some(handle);
        })
    };

    html! {
        <div
            ref={card_ref}
            class={classes!("flex-card", (*animated).then_some("animated"))}
            data-service={service.clone()}
            {onmouseenter}
        >
            {
                match icon {
                    Some(icon) => html! {
                        <div class="card-icon">
                            <i class={classes!("fas", icon.clone(), (*pulsing).then_some("pulse"))}></i>
                        </div>
                    },
                    None => html! {},
                }
            }
            <h3>{ title }</h3>
            <p>{ description }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardsProps {
    pub services: Vec<Service>,
}

#[function_component(ServiceCards)]
pub fn service_cards(props: &ServiceCardsProps) -> Html {
    if props.services.is_empty() {
        return html! {};
    }

    html! {
        <section id="services" class="services">
            <div class="cards-grid">
                { for props.services.iter().map(|service| html! {
                    <ServiceCard key={service.title.clone()} service={service.clone()} />
                }) }
            </div>
        </section>
    }
}
