use std::rc::Rc;

use chrono::Datelike;
use log::{debug, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::{
    contact::Contact,
    nav::Nav,
    project_card::ProjectCard,
    skill_bar::SkillBar,
};
use crate::config::SiteConfig;
use crate::controller::PageController;
use crate::viewport::{DomViewport, ViewportListener};

pub enum PortfolioMsg {
    ToggleMenu,
    Navigate(String),
    ViewportChanged,
    SendMessage,
}

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub site: Rc<SiteConfig>,
}

/// The whole one-page site for one `SiteConfig`.
pub struct Portfolio {
    controller: PageController,
    listener: Option<ViewportListener>,
}

impl Component for Portfolio {
    type Message = PortfolioMsg;
    type Properties = PortfolioProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: PageController::new(),
            listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            PortfolioMsg::ToggleMenu => {
                self.controller.toggle_mobile_menu();
                true
            }
            PortfolioMsg::Navigate(section_id) => {
                let Some(viewport) = DomViewport::current() else {
                    return false;
                };
                let was_open = self.controller.mobile_menu_open();
                debug!("Navigating to #{}", section_id);
                self.controller.navigate_to_section(&section_id, &viewport) && was_open
            }
            PortfolioMsg::ViewportChanged => match DomViewport::current() {
                Some(viewport) => self.controller.on_viewport_change(&viewport),
                None => false,
            },
            PortfolioMsg::SendMessage => {
                let message = self.controller.submit_contact_form(&ctx.props().site);
                if let Some(window) = web_sys::window() {
                    if let Err(err) = window.alert_with_message(message) {
                        warn!("Could not show acknowledgment: {:?}", err);
                    }
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            self.listener = ViewportListener::attach(move || {
                link.send_message(PortfolioMsg::ViewportChanged);
            });
            // Initial check, the About section may already be on screen
            ctx.link().send_message(PortfolioMsg::ViewportChanged);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.listener = None;
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let site = &ctx.props().site;
        let link = ctx.link();

        let on_navigate = link.callback(PortfolioMsg::Navigate);
        let on_toggle_menu = link.callback(|_: ()| PortfolioMsg::ToggleMenu);
        let on_send = link.callback(|_: ()| PortfolioMsg::SendMessage);
        let view_work = link.callback(|_: MouseEvent| PortfolioMsg::Navigate("projects".to_string()));

        let download_cv = match &site.cv_url {
            Some(url) => html! {
                <a class="secondary-button" href={url.clone()} download="">{"Download CV"}</a>
            },
            None => html! {
                <button class="secondary-button">{"Download CV"}</button>
            },
        };

        html! {
            <div class="portfolio">
                <Nav
                    brand={site.brand.clone()}
                    items={site.nav.clone()}
                    menu_open={self.controller.mobile_menu_open()}
                    on_navigate={on_navigate}
                    on_toggle_menu={on_toggle_menu}
                />

                <section id="home" class="hero">
                    <div class="container hero-grid">
                        <div class="hero-text">
                            <h1>
                                { site.hero.greeting.clone() }<br />
                                <span class="accent-text">{ site.hero.name.clone() }</span>
                            </h1>
                            <p class="hero-tagline">{ site.hero.tagline.clone() }</p>
                            <div class="hero-actions">
                                <button class="primary-button" onclick={view_work}>
                                    {"View My Work →"}
                                </button>
                                { download_cv }
                            </div>
                            <div class="social-links">
                                { for site.socials.iter().enumerate().map(|(index, social)| html! {
                                    <a key={index} class="social-link" href={social.href.clone()}>
                                        { social.icon.clone() }
                                    </a>
                                }) }
                            </div>
                        </div>
                        <div class="hero-visual">
                            <div class="avatar-ring">
                                <div class="avatar">{ site.hero.avatar.clone() }</div>
                            </div>
                            <div class="role-badge">{ site.hero.role_badge.clone() }</div>
                            <div class="pulse-dot"></div>
                        </div>
                    </div>
                </section>

                <section id="about" class="section">
                    <div class="container">
                        <div class="section-heading">
                            <h2>{ site.about.heading.clone() }</h2>
                            <p>{ site.about.summary.clone() }</p>
                        </div>
                        <div class="two-columns">
                            <div>
                                <h3 class="accent-title">{ site.about.journey_title.clone() }</h3>
                                { for site.about.journey.iter().map(|paragraph| html! {
                                    <p class="journey">{ paragraph.clone() }</p>
                                }) }
                            </div>
                            <div class="skill-list">
                                { for site.skills.iter().map(|skill| html! {
                                    <SkillBar
                                        key={skill.name.clone()}
                                        name={skill.name.clone()}
                                        percentage={skill.percentage}
                                        width={self.controller.skill_bar_width(skill.percentage)}
                                    />
                                }) }
                            </div>
                        </div>
                    </div>
                </section>

                <section id="projects" class="section muted">
                    <div class="container">
                        <div class="section-heading">
                            <h2>{ site.sections.projects.heading.clone() }</h2>
                            <p>{ site.sections.projects.subtitle.clone() }</p>
                        </div>
                        <div class="card-grid">
                            { for site.projects.iter().map(|project| html! {
                                <ProjectCard key={project.title.clone()} project={project.clone()} />
                            }) }
                        </div>
                    </div>
                </section>

                <section id="skills" class="section">
                    <div class="container">
                        <div class="section-heading">
                            <h2>{ site.sections.skills.heading.clone() }</h2>
                            <p>{ site.sections.skills.subtitle.clone() }</p>
                        </div>
                        <div class="card-grid">
                            { for site.skill_categories.iter().map(|category| html! {
                                <div key={category.title.clone()} class="category-card">
                                    <div class="category-icon">{ category.icon.clone() }</div>
                                    <h3>{ category.title.clone() }</h3>
                                    <p>{ category.description.clone() }</p>
                                    <ul>
                                        { for category.skills.iter().map(|skill| html! {
                                            <li><span class="check">{"✓"}</span>{ skill.clone() }</li>
                                        }) }
                                    </ul>
                                </div>
                            }) }
                        </div>
                    </div>
                </section>

                <section id="contact" class="section muted">
                    <div class="container">
                        <div class="section-heading">
                            <h2>{ site.sections.contact.heading.clone() }</h2>
                            <p>{ site.sections.contact.subtitle.clone() }</p>
                        </div>
                        <Contact entries={site.contacts.clone()} on_send={on_send} />
                    </div>
                </section>

                <footer class="footer">
                    <p>{ format!("© {} {}. All rights reserved.", chrono::Local::now().year(), site.owner()) }</p>
                </footer>

                <style>
                    {PORTFOLIO_CSS}
                </style>
            </div>
        }
    }
}

const PORTFOLIO_CSS: &str = r#"
    .portfolio {
        min-height: 100vh;
        background: #ffffff;
        color: #1f2937;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    html {
        scroll-behavior: smooth;
    }
    .container {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        background: rgba(255, 255, 255, 0.9);
        backdrop-filter: blur(12px);
        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
    }
    .nav-content {
        max-width: 80rem;
        margin: 0 auto;
        padding: 0 2rem;
        height: 4rem;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .nav-logo {
        font-weight: 700;
        font-size: 1.5rem;
        color: #2563eb;
    }
    .nav-links {
        display: flex;
        gap: 2rem;
    }
    .nav-link, .mobile-nav-link {
        background: none;
        border: none;
        color: #374151;
        font-size: 1rem;
        cursor: pointer;
        transition: color 0.2s ease;
    }
    .nav-link:hover, .mobile-nav-link:hover {
        color: #2563eb;
    }
    .burger-menu {
        display: none;
        flex-direction: column;
        gap: 5px;
        background: none;
        border: none;
        cursor: pointer;
        padding: 0.5rem;
    }
    .burger-menu span {
        width: 24px;
        height: 2px;
        background: #374151;
    }
    .mobile-menu {
        display: none;
        background: #ffffff;
        border-top: 1px solid #e5e7eb;
        padding: 0.5rem;
    }
    .mobile-nav-link {
        display: block;
        width: 100%;
        text-align: left;
        padding: 0.5rem 0.75rem;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding-top: 4rem;
        background: linear-gradient(135deg, #eff6ff 0%, #e0e7ff 100%);
    }
    .hero-grid, .two-columns, .contact-grid {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }
    .hero h1 {
        font-size: 3.75rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }
    .accent-text, .accent-title {
        color: #2563eb;
    }
    .hero-tagline {
        font-size: 1.25rem;
        color: #4b5563;
        line-height: 1.7;
        margin-bottom: 2rem;
    }
    .hero-actions {
        display: flex;
        gap: 1rem;
        margin-bottom: 2rem;
    }
    .primary-button {
        background: #2563eb;
        color: #ffffff;
        border: none;
        padding: 0.75rem 2rem;
        border-radius: 0.5rem;
        font-weight: 600;
        cursor: pointer;
        transition: background 0.2s ease;
    }
    .primary-button:hover {
        background: #1d4ed8;
    }
    .full-width {
        width: 100%;
    }
    .secondary-button {
        border: 2px solid #2563eb;
        color: #2563eb;
        background: transparent;
        padding: 0.75rem 2rem;
        border-radius: 0.5rem;
        font-weight: 600;
        text-decoration: none;
        cursor: pointer;
    }
    .social-links {
        display: flex;
        gap: 1rem;
    }
    .social-link {
        width: 3rem;
        height: 3rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #dbeafe;
        border-radius: 0.5rem;
        font-size: 1.25rem;
        text-decoration: none;
    }
    .hero-visual {
        position: relative;
    }
    .avatar-ring {
        width: 20rem;
        height: 20rem;
        margin: 0 auto;
        border-radius: 50%;
        padding: 0.5rem;
        background: linear-gradient(135deg, #60a5fa, #9333ea);
    }
    .avatar {
        width: 100%;
        height: 100%;
        border-radius: 50%;
        background: #e5e7eb;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 3.75rem;
    }
    .role-badge {
        position: absolute;
        bottom: -1rem;
        right: -1rem;
        background: #2563eb;
        color: #ffffff;
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        font-weight: 600;
        font-size: 0.875rem;
    }
    .pulse-dot {
        position: absolute;
        top: 2.5rem;
        right: 2.5rem;
        width: 5rem;
        height: 5rem;
        border-radius: 50%;
        background: #3b82f6;
        opacity: 0.2;
        animation: pulse 2s ease-in-out infinite;
    }
    @keyframes pulse {
        0%, 100% { transform: scale(1); }
        50% { transform: scale(1.15); }
    }
    .section {
        padding: 5rem 0;
    }
    .section.muted {
        background: #f9fafb;
    }
    .section-heading {
        text-align: center;
        margin-bottom: 4rem;
    }
    .section-heading h2 {
        font-size: 2.25rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }
    .section-heading p {
        font-size: 1.25rem;
        color: #4b5563;
        max-width: 48rem;
        margin: 0 auto;
    }
    .journey {
        color: #4b5563;
        line-height: 1.7;
        margin-bottom: 1.5rem;
    }
    .skill-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .skill-header {
        display: flex;
        justify-content: space-between;
        margin-bottom: 0.5rem;
        font-weight: 600;
    }
    .skill-percentage {
        color: #2563eb;
    }
    .skill-track {
        width: 100%;
        height: 0.75rem;
        background: #e5e7eb;
        border-radius: 9999px;
    }
    .skill-fill {
        height: 0.75rem;
        border-radius: 9999px;
        background: linear-gradient(90deg, #3b82f6, #2563eb);
        transition: width 2s ease-out;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
        gap: 2rem;
    }
    .project-link {
        color: inherit;
        text-decoration: none;
    }
    .project-card, .category-card {
        background: #ffffff;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        overflow: hidden;
        transition: transform 0.3s ease;
    }
    .project-card:hover, .category-card:hover {
        transform: scale(1.05);
    }
    .project-banner {
        height: 16rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .project-icon, .category-icon {
        font-size: 3.75rem;
    }
    .project-body {
        padding: 1.5rem;
    }
    .project-heading {
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        margin-bottom: 1rem;
    }
    .project-category {
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .project-description {
        color: #4b5563;
        margin-bottom: 1rem;
    }
    .project-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .project-tag {
        background: #f3f4f6;
        color: #374151;
        padding: 0.25rem 0.75rem;
        border-radius: 9999px;
        font-size: 0.875rem;
    }
    .project-banner.accent-blue { background: linear-gradient(135deg, #dbeafe, #f3e8ff); }
    .project-banner.accent-green { background: linear-gradient(135deg, #dcfce7, #ccfbf1); }
    .project-banner.accent-purple { background: linear-gradient(135deg, #f3e8ff, #fce7f3); }
    .project-banner.accent-orange { background: linear-gradient(135deg, #ffedd5, #fef9c3); }
    .project-banner.accent-teal { background: linear-gradient(135deg, #ccfbf1, #dbeafe); }
    .project-banner.accent-pink { background: linear-gradient(135deg, #fce7f3, #ffe4e6); }
    .project-category.accent-blue { background: #dbeafe; color: #2563eb; }
    .project-category.accent-green { background: #dcfce7; color: #16a34a; }
    .project-category.accent-purple { background: #f3e8ff; color: #9333ea; }
    .project-category.accent-orange { background: #ffedd5; color: #ea580c; }
    .project-category.accent-teal { background: #ccfbf1; color: #0d9488; }
    .project-category.accent-pink { background: #fce7f3; color: #db2777; }
    .category-card {
        background: #f9fafb;
        padding: 2rem;
        text-align: center;
    }
    .category-card ul {
        list-style: none;
        text-align: left;
        padding: 0;
    }
    .category-card li {
        margin-bottom: 0.5rem;
    }
    .check {
        color: #3b82f6;
        margin-right: 0.5rem;
    }
    .contact-grid {
        align-items: start;
    }
    .contact-entries {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .contact-entry {
        display: flex;
        align-items: center;
    }
    .contact-icon {
        width: 3rem;
        height: 3rem;
        margin-right: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        background: #dbeafe;
        border-radius: 0.5rem;
        font-size: 1.25rem;
    }
    .contact-label {
        font-weight: 600;
        color: #374151;
    }
    .contact-value, .contact-note {
        color: #4b5563;
    }
    .contact-form {
        background: #ffffff;
        border-radius: 0.75rem;
        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
        padding: 2rem;
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }
    .form-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    .contact-form input, .contact-form textarea {
        width: 100%;
        box-sizing: border-box;
        padding: 0.75rem 1rem;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
        font: inherit;
        resize: none;
    }
    .footer {
        background: #1f2937;
        color: #ffffff;
        padding: 2rem 0;
        text-align: center;
    }
    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }
        .burger-menu {
            display: flex;
        }
        .mobile-menu {
            display: block;
        }
        .hero-grid, .two-columns, .contact-grid, .form-row {
            grid-template-columns: 1fr;
        }
        .hero h1 {
            font-size: 3rem;
        }
        .hero-actions {
            flex-direction: column;
        }
    }
"#;
