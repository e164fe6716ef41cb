use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config::ContactEntry;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub entries: Vec<ContactEntry>,
    pub on_send: Callback<()>,
}

/// Contact details plus the message form. The form fields are never read.
#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let send = {
        let on_send = props.on_send.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_send.emit(());
        })
    };

    html! {
        <div class="contact-grid">
            <div>
                <h3 class="accent-title">{"Get In Touch"}</h3>
                <div class="contact-entries">
                    { for props.entries.iter().map(|entry| html! {
                        <div key={entry.label.clone()} class="contact-entry">
                            <div class="contact-icon">{ entry.icon.clone() }</div>
                            <div>
                                <div class="contact-label">{ entry.label.clone() }</div>
                                <div class="contact-value">{ entry.value.clone() }</div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <div class="contact-form">
                <h3>{"Send Message"}</h3>
                <p class="contact-note">{"I'll get back to you within 24 hours"}</p>
                <div class="form-row">
                    <input type="text" placeholder="Your Name" />
                    <input type="email" placeholder="Your Email" />
                </div>
                <input type="text" placeholder="Subject" />
                <textarea placeholder="Your Message" rows="5"></textarea>
                <button class="primary-button full-width" onclick={send}>
                    {"Send Message"}
                </button>
            </div>
        </div>
    }
}
