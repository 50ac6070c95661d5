use std::collections::HashMap;

use log::{error, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::config::COUNTER_TICK_MS;
use crate::content::Stat;
use crate::counter::StatsBoard;
use crate::dom;
use crate::timer::{BrowserScheduler, Scheduler, TaskHandle};

#[derive(Properties, PartialEq)]
pub struct StatsCounterProps {
    pub stats: Vec<Stat>,
}

pub enum StatsCounterMsg {
    Check,
    Step(usize),
}

pub struct StatsCounter {
    board: Option<StatsBoard>,
    item_refs: Vec<NodeRef>,
    ticks: HashMap<usize, TaskHandle>,
    scroll_listener: Option<Closure<dyn FnMut()>>,
}

impl StatsCounter {
    fn attach_scroll_listener(ctx: &Context<Self>) -> Option<Closure<dyn FnMut()>> {
        let link = ctx.link().clone();
        let listener = Closure::wrap(
            Box::new(move || link.send_message(StatsCounterMsg::Check)) as Box<dyn FnMut()>
        );
        let attached = dom::window().and_then(|window| {
            window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .map_err(|_| crate::error::SiteError::Browser("addEventListener"))
        });
        match attached {
            Ok(()) => Some(listener),
            Err(e) => {
                error!("Stats counter will not follow scrolling: {}", e);
                None
            }
        }
    }

    fn detach(&mut self) {
        self.ticks.clear();
        if let Some(listener) = self.scroll_listener.take() {
            if let Ok(window) = dom::window() {
                if let Err(e) = window
                    .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                {
                    error!("Failed to remove stats scroll listener: {:?}", e);
                }
            }
        }
    }

    fn in_view(&self, index: usize) -> bool {
        let Ok(viewport) = dom::viewport() else {
            return false;
        };
        self.item_refs
            .get(index)
            .and_then(|node| node.cast::<Element>())
            .map_or(false, |element| viewport.fully_contains(&dom::bounds(&element)))
    }
}

impl Component for StatsCounter {
    type Message = StatsCounterMsg;
    type Properties = StatsCounterProps;

    fn create(ctx: &Context<Self>) -> Self {
        let stats = &ctx.props().stats;
        let board = StatsBoard::new(stats.iter().map(|stat| stat.count.clone()));
        let scroll_listener = match board {
            Some(_) => {
                info!("Stats counter watching {} metrics", stats.len());
                Self::attach_scroll_listener(ctx)
            }
            None => None,
        };
        Self {
            board,
            item_refs: stats.iter().map(|_| NodeRef::default()).collect(),
            ticks: HashMap::new(),
            scroll_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            StatsCounterMsg::Check => {
                match self.board.as_ref() {
                    Some(board) if !board.all_animated() => {}
                    _ => return false,
                }
                let Some(mut board) = self.board.take() else {
                    return false;
                };
                let flagged_before = board.animated_count();
                let started = board.check_and_animate(|index| self.in_view(index));
                let flagged = board.animated_count() != flagged_before;
                self.board = Some(board);

                for index in &started {
                    let link = ctx.link().clone();
                    let index = *index;
                    let handle = BrowserScheduler.every(
                        COUNTER_TICK_MS,
                        Box::new(move || link.send_message(StatsCounterMsg::Step(index))),
                    );
                    self.ticks.insert(index, handle);
                }
                flagged
            }
            StatsCounterMsg::Step(index) => {
                let Some(board) = self.board.as_mut() else {
                    return false;
                };
                if board.step(index) {
                    self.ticks.remove(&index);
                }
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && self.board.is_some() {
            ctx.link().send_message(StatsCounterMsg::Check);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if old_props.stats != ctx.props().stats {
            self.detach();
            *self = <Self as Component>::create(ctx);
            ctx.link().send_message(StatsCounterMsg::Check);
        }
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.detach();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(board) = self.board.as_ref() else {
            return html! {};
        };

        html! {
            <section id="stats" class="stats">
                <div class="stats-grid">
                    { for ctx.props().stats.iter().zip(board.metrics()).zip(&self.item_refs).map(|((stat, metric), node)| html! {
                        <div
                            ref={node.clone()}
                            class={classes!(
                                "stat-item",
                                metric.is_animated().then_some("animated"),
                                metric.is_counting().then_some("counting"),
                            )}
                            data-count={stat.count.clone()}
                        >
                            <h3>{ metric.display() }</h3>
                            <p>{ &stat.label }</p>
                        </div>
                    }) }
                </div>
            </section>
        }
    }
}
