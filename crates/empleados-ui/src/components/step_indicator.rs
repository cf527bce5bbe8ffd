use empleados_core::form::{Step, StepStatus};
use empleados_core::i18n::TranslationBundle;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct StepIndicatorProps {
    pub active: Step,
}

/// Three-step progress bar; completed and active steps are highlighted.
#[function_component(StepIndicator)]
pub(crate) fn step_indicator(props: &StepIndicatorProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    html! {
        <ul class="steps w-full">
            {for Step::ALL.into_iter().map(|step| {
                let status = step.status(props.active);
                let class = match status {
                    StepStatus::Completed | StepStatus::Active => Some("step-primary"),
                    StepStatus::Upcoming => None,
                };
                let current = (status == StepStatus::Active).then_some("step");
                html! {
                    <li class={classes!("step", class)} aria-current={current} data-content={step.number().to_string()}>
                        {bundle.text(step.title_key(), "")}
                    </li>
                }
            })}
        </ul>
    }
}
