use log::{error, info};
use yew::prelude::*;

use clinic_frontend::components::nav::Nav;
use clinic_frontend::config;
use clinic_frontend::content::SiteContent;
use clinic_frontend::pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: SiteContent,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let content = &props.content;

    html! {
        <>
            <Nav brand={content.brand.clone()} links={content.nav.clone()} />
            <Home content={content.clone()} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    // Bad content only switches features off, the page still renders.
    let content = SiteContent::embedded().unwrap_or_else(|e| {
        error!("Falling back to empty site content: {}", e);
        SiteContent::default()
    });

    info!("Starting site");
    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
