use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

use crate::content::Slide;
use crate::rotator::Rotator;
use crate::timer::BrowserScheduler;

#[derive(Properties, PartialEq)]
pub struct HeroSliderProps {
    pub slides: Vec<Slide>,
    #[prop_or(true)]
    pub show_controls: bool,
    #[prop_or(true)]
    pub pause_on_hover: bool,
}

pub enum HeroSliderMsg {
    Tick,
    GoTo(usize),
    Next,
    Prev,
    PointerEnter,
    PointerLeave,
}

pub struct HeroSlider {
    rotator: Option<Rotator<BrowserScheduler>>,
}

impl Component for HeroSlider {
    type Message = HeroSliderMsg;
    type Properties = HeroSliderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let tick: Rc<dyn Fn()> = Rc::new(move || link.send_message(HeroSliderMsg::Tick));
        let rotator = Rotator::start(ctx.props().slides.len(), BrowserScheduler, tick);
        if let Some(rotator) = &rotator {
            info!("Hero slider started with {} panels", rotator.panel_count());
        }
        Self { rotator }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        let Some(rotator) = self.rotator.as_mut() else {
            return false;
        };
        match msg {
            HeroSliderMsg::Tick => rotator.tick(),
            HeroSliderMsg::GoTo(index) => {
                if let Err(e) = rotator.go_to(index) {
                    error!("Slider navigation failed: {}", e);
                    return false;
                }
            }
            HeroSliderMsg::Next => rotator.next(),
            HeroSliderMsg::Prev => rotator.prev(),
            HeroSliderMsg::PointerEnter => {
                rotator.pause();
                return false;
            }
            HeroSliderMsg::PointerLeave => {
                rotator.resume();
                return false;
            }
        }
        true
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.slides.len() != ctx.props().slides.len() {
            // Panel count is fixed for a rotator's lifetime; start over.
            *self = <Self as Component>::create(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(rotator) = self.rotator.as_ref() else {
            return html! {};
        };
        let props = ctx.props();
        let link = ctx.link();

        let (onmouseenter, onmouseleave) = if props.pause_on_hover {
            (
                Some(link.callback(|_: MouseEvent| HeroSliderMsg::PointerEnter)),
                Some(link.callback(|_: MouseEvent| HeroSliderMsg::PointerLeave)),
            )
        } else {
            (None, None)
        };

        html! {
            <section id="heroSection" class="hero" {onmouseenter} {onmouseleave}>
                <div class="slider">
                    { for props.slides.iter().enumerate().map(|(index, slide)| html! {
                        <div
                            class={classes!("slide", rotator.is_active(index).then_some("active"))}
                            style={format!("background-image: url('{}');", slide.image)}
                        >
                            <div class="slide-content">
                                <h1>{ &slide.title }</h1>
                                <p>{ &slide.subtitle }</p>
                            </div>
                        </div>
                    }) }
                </div>
                {
                    if props.show_controls {
                        html! {
                            <>
                                <button class="prev-btn" aria-label="Previous slide"
                                    onclick={link.callback(|_| HeroSliderMsg::Prev)}>
                                    <i class="fas fa-chevron-left"></i>
                                </button>
                                <button class="next-btn" aria-label="Next slide"
                                    onclick={link.callback(|_| HeroSliderMsg::Next)}>
                                    <i class="fas fa-chevron-right"></i>
                                </button>
                            </>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="slider-dots">
                    { for (0..rotator.panel_count()).map(|index| html! {
                        <div
                            class={classes!("dot", rotator.is_active(index).then_some("active"))}
                            onclick={link.callback(move |_| HeroSliderMsg::GoTo(index))}
                        ></div>
                    }) }
                </div>
            </section>
        }
    }
}
