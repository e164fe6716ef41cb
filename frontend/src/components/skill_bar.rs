use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub name: String,
    pub percentage: u8,
    /// Current fill width, `0%` until the About section has been seen.
    pub width: String,
}

#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    html! {
        <div class="skill-item">
            <div class="skill-header">
                <span class="skill-name">{ props.name.clone() }</span>
                <span class="skill-percentage">{ format!("{}%", props.percentage) }</span>
            </div>
            <div class="skill-track">
                <div class="skill-fill" style={format!("width: {};", props.width)}></div>
            </div>
        </div>
    }
}
