use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, Node};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::NavLink;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub links: Vec<NavLink>,
}

fn contains(node_ref: &NodeRef, target: &Node) -> bool {
    node_ref
        .get()
        .map_or(false, |node| node.contains(Some(target)))
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, links } = props;
    let menu_open = use_state(|| false);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    // Clicking anywhere outside the toggle and the menu closes it.
    {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_event_with_window("click", move |e: MouseEvent| {
            if !*menu_open {
                return;
            }
            let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if !contains(&toggle_ref, &target) && !contains(&menu_ref, &target) {
                debug!("Closing menu after outside click");
                menu_open.set(false);
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    if links.is_empty() {
        return html! {
            <nav class="top-nav">
                <div class="nav-content">
                    <a href="#" class="nav-logo">{ brand }</a>
                </div>
            </nav>
        };
    }

    let icon = if *menu_open { "fas fa-times" } else { "fas fa-bars" };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <a href="#" class="nav-logo">{ brand }</a>

                <button ref={toggle_ref} class="mobile-menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                    <i class={icon}></i>
                </button>
                <ul ref={menu_ref} class={classes!("nav-menu", (*menu_open).then_some("active"))}>
                    { for links.iter().map(|link| html! {
                        <li>
                            <a href={link.href.clone()} class="nav-link" onclick={close_menu.clone()}>
                                { &link.label }
                            </a>
                        </li>
                    }) }
                </ul>
            </div>
        </nav>
    }
}
