// Template renderer: one shared visibility/ordering contract, ten layouts
// that only supply geometry and typography, and an HTML writer.

pub mod contract;
pub mod handlers;
pub mod html;
pub mod layouts;

use crate::models::TemplateId;
use crate::resume::ResumeState;

pub use contract::RenderPlan;

/// Plans `state` with `template`, or the session's chosen template when `None`.
pub fn plan_for(state: &ResumeState, template: Option<TemplateId>) -> RenderPlan {
    let template = template.unwrap_or(state.presentation.template_id);
    contract::plan(
        &state.document,
        &state.presentation,
        layouts::layout_for(template),
    )
}

pub fn render_html(state: &ResumeState, template: Option<TemplateId>) -> String {
    html::render_document(&state.document, &plan_for(state, template))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::defaults::placeholder_state;

    #[test]
    fn test_template_override_beats_session_choice() {
        let mut state = placeholder_state();
        state.presentation.template_id = TemplateId::Swiss;
        assert_eq!(plan_for(&state, None).template, TemplateId::Swiss);
        assert_eq!(
            plan_for(&state, Some(TemplateId::Minimal)).template,
            TemplateId::Minimal
        );
        assert!(render_html(&state, Some(TemplateId::Minimal))
            .contains("class=\"resume template-minimal"));
    }
}
