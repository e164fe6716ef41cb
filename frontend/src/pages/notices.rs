use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const NOTICE_CSS: &str = r#"
    .notice-page {
        min-height: 60vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        gap: 1rem;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1f2937;
    }
    .notice-link {
        color: #2563eb;
    }
    .notice-detail {
        color: #6b7280;
        font-family: monospace;
    }
"#;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="notice-page">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="notice-link">
                {"Back to the portfolio"}
            </Link<Route>>
            <style>{NOTICE_CSS}</style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileErrorProps {
    pub message: String,
}

/// Shown instead of the site when its profile data fails to load.
#[function_component(ProfileError)]
pub fn profile_error(props: &ProfileErrorProps) -> Html {
    html! {
        <div class="notice-page">
            <h1>{"This page could not be loaded"}</h1>
            <p class="notice-detail">{ props.message.clone() }</p>
            <style>{NOTICE_CSS}</style>
        </div>
    }
}
