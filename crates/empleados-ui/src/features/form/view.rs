//! Three-step create/edit form wired to [`FormController`].

use std::rc::Rc;

use crate::app::{ApiCtx, RouterNavigator, ToastCtx, ToastNotifier, api_base_url};
use crate::components::step_indicator::StepIndicator;
use crate::services::api::ApiClient;
use empleados_api_models::Department;
use empleados_core::form::{Field, FormController, FormMode, FormPhase, FormState};
use empleados_core::i18n::TranslationBundle;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

type Controller = FormController<Rc<ApiClient>, ToastNotifier, RouterNavigator>;

#[derive(Properties, PartialEq)]
pub(crate) struct EmployeeFormPageProps {
    pub mode: FormMode,
}

#[function_component(EmployeeFormPage)]
pub(crate) fn employee_form_page(props: &EmployeeFormPageProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let toasts = use_context::<ToastCtx>();
    let navigator = use_navigator();
    let controller: Rc<Controller> = {
        let bundle = bundle.clone();
        use_memo(
            move |mode: &FormMode| {
                let api = api_ctx.unwrap_or_else(|| ApiCtx::new(api_base_url()));
                FormController::new(
                    mode.clone(),
                    api.client,
                    ToastNotifier::new(toasts),
                    RouterNavigator::new(navigator),
                    bundle,
                )
            },
            props.mode.clone(),
        )
    };
    let redraw = use_force_update();
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                controller.observe(move || redraw.force_update());
                let task = controller.clone();
                spawn_local(async move { task.prime().await });
                move || controller.detach()
            },
            props.mode.clone(),
        );
    }

    let state = controller.state();
    let title = bundle.text(state.mode.title_key(), "");
    let content = match &state.phase {
        FormPhase::Loading => html! {
            <div class="loading-state" role="status">
                <span class="loading loading-spinner"></span>
                {bundle.text("form.loading", "Cargando datos del empleado...")}
            </div>
        },
        FormPhase::LoadFailed(message) => html! {
            <div class="alert alert-error" role="alert">
                <span>{message.clone()}</span>
                {cancel_button(&controller, &bundle)}
            </div>
        },
        FormPhase::Editing | FormPhase::Submitting | FormPhase::Submitted => {
            render_form(&state, &controller, &bundle)
        }
    };

    html! {
        <section class="employee-form">
            <h2>{title}</h2>
            {content}
        </section>
    }
}

fn render_form(state: &FormState, controller: &Rc<Controller>, bundle: &TranslationBundle) -> Html {
    let step = state.step;
    let submitting = matches!(state.phase, FormPhase::Submitting);
    let onsubmit = {
        let controller = controller.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if step.is_last() {
                let controller = controller.clone();
                spawn_local(async move {
                    controller.submit().await;
                });
            } else {
                controller.next();
            }
        })
    };
    let on_back = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            controller.back();
        })
    };
    let primary_label = if !step.is_last() {
        bundle.text("form.next", "Siguiente")
    } else if submitting {
        bundle.text("form.saving", "Guardando...")
    } else {
        bundle.text("form.save", "Guardar")
    };

    html! {
        <form class="flex flex-col gap-4" {onsubmit}>
            <StepIndicator active={step} />
            {for step.fields().iter().map(|field| render_field(*field, state, controller, bundle))}
            <div class="form-actions flex gap-2">
                {cancel_button(controller, bundle)}
                if step.previous().is_some() {
                    <button type="button" class="btn btn-ghost" onclick={on_back} disabled={submitting}>
                        {bundle.text("form.back", "Atrás")}
                    </button>
                }
                <button type="submit" class="btn btn-primary" disabled={!state.is_editable()}>
                    {primary_label}
                </button>
            </div>
        </form>
    }
}

fn render_field(
    field: Field,
    state: &FormState,
    controller: &Rc<Controller>,
    bundle: &TranslationBundle,
) -> Html {
    let id = format!("field-{}", field.name());
    let label = bundle.text(field.label_key(), field.name());
    let value = state.draft.get(field).to_string();
    let error = controller.error_text(field);
    let disabled = !state.is_editable();

    let control = match field {
        Field::Department => {
            let onchange = {
                let controller = controller.clone();
                Callback::from(move |event: Event| {
                    let select: HtmlSelectElement = event.target_unchecked_into();
                    controller.set_field(field, select.value());
                })
            };
            html! {
                <select id={id.clone()} class="select select-bordered" {onchange} {disabled}>
                    <option value="" selected={value.is_empty()} disabled=true>
                        {bundle.text("form.select_department", "Selecciona un departamento")}
                    </option>
                    {for Department::ALL.iter().map(|department| {
                        let name = department.as_str();
                        html! { <option value={name} selected={value == name}>{name}</option> }
                    })}
                </select>
            }
        }
        _ => {
            let (kind, step_attr) = match field {
                Field::Age => ("number", Some("1")),
                Field::Salary => ("number", Some("0.01")),
                _ => ("text", None),
            };
            let oninput = {
                let controller = controller.clone();
                Callback::from(move |event: InputEvent| {
                    let input: HtmlInputElement = event.target_unchecked_into();
                    controller.set_field(field, input.value());
                })
            };
            html! {
                <input
                    id={id.clone()}
                    type={kind}
                    step={step_attr}
                    class={classes!("input", "input-bordered", error.is_some().then_some("input-error"))}
                    {value}
                    {oninput}
                    {disabled}
                />
            }
        }
    };

    html! {
        <div class="form-control">
            <label class="label" for={id}>{label}</label>
            {control}
            {error.map(|text| html! { <span class="text-error text-sm" role="alert">{text}</span> }).unwrap_or_default()}
        </div>
    }
}

fn cancel_button(controller: &Rc<Controller>, bundle: &TranslationBundle) -> Html {
    let onclick = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.cancel())
    };
    html! {
        <button type="button" class="btn btn-ghost" {onclick}>
            {bundle.text("form.cancel", "Cancelar")}
        </button>
    }
}
