use std::rc::Rc;

use log::{error, info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod controller;
mod viewport;
mod components {
    pub mod contact;
    pub mod nav;
    pub mod project_card;
    pub mod skill_bar;
}
mod pages {
    pub mod notices;
    pub mod portfolio;
}

use config::Profile;
use pages::{
    notices::{NotFound, ProfileError},
    portfolio::Portfolio,
};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/studio")]
    Studio,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn profile(&self) -> Option<Profile> {
        match self {
            Route::Home => Some(Profile::Primary),
            Route::Studio => Some(Profile::Studio),
            Route::NotFound => None,
        }
    }
}

fn render_profile(profile: Profile) -> Html {
    match profile.load() {
        Ok(site) => {
            // keyed by slug so switching variants remounts the page and resets its state
            let slug = site.slug.clone();
            html! { <Portfolio key={slug} site={Rc::new(site)} /> }
        }
        Err(err) => {
            error!("Failed to load {:?} profile: {}", profile, err);
            html! { <ProfileError message={err.to_string()} /> }
        }
    }
}

fn switch(routes: Route) -> Html {
    match routes.profile() {
        Some(profile) => {
            info!("Rendering {:?} portfolio", profile);
            render_profile(profile)
        }
        None => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
