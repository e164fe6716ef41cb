use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::NavItem;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub items: Vec<NavItem>,
    pub menu_open: bool,
    pub on_navigate: Callback<String>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, items, menu_open, on_navigate, on_toggle_menu } = props;

    let toggle_menu = {
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_menu.emit(());
        })
    };

    let nav_button = |item: &NavItem, class: &'static str| {
        let on_navigate = on_navigate.clone();
        let target = item.target.clone();
        html! {
            <button key={item.target.clone()} class={class} onclick={Callback::from(move |_: MouseEvent| {
                on_navigate.emit(target.clone());
            })}>
                { item.label.clone() }
            </button>
        }
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <div class="nav-logo">{ brand.clone() }</div>
                <div class="nav-links">
                    { for items.iter().map(|item| nav_button(item, "nav-link")) }
                </div>
                <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for items.iter().map(|item| nav_button(item, "mobile-nav-link")) }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}
