use crate::models::{TOAST_TIMEOUT_MS, Toast, ToastTimers};
use empleados_core::i18n::TranslationBundle;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ToastHostProps {
    pub toasts: Vec<Toast>,
    pub on_dismiss: Callback<u64>,
}

#[function_component(ToastHost)]
pub(crate) fn toast_host(props: &ToastHostProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let timers = use_mut_ref(ToastTimers::<Timeout>::default);
    {
        let timers = timers.clone();
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |list: &Vec<Toast>| {
                timers.borrow_mut().sync(list, |id| {
                    let on_dismiss = on_dismiss.clone();
                    Timeout::new(TOAST_TIMEOUT_MS, move || on_dismiss.emit(id))
                });
                || ()
            },
            props.toasts.clone(),
        );
    }
    {
        let timers = timers.clone();
        use_effect_with_deps(move |()| move || timers.borrow_mut().clear(), ());
    }

    let dismiss_label = bundle.text("toast.dismiss", "Cerrar");
    html! {
        <div class="toast toast-end" aria-live="polite" aria-atomic="true">
            {for props.toasts.iter().map(|toast| render_toast(toast, &props.on_dismiss, &dismiss_label))}
        </div>
    }
}

fn render_toast(toast: &Toast, on_dismiss: &Callback<u64>, dismiss_label: &str) -> Html {
    let id = toast.id;
    let on_close = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(id))
    };

    html! {
        <div class={classes!("alert", toast.kind.class())} role="status">
            <span>{toast.message.clone()}</span>
            <button class="btn btn-ghost btn-xs" aria-label={dismiss_label.to_string()} onclick={on_close}>{"✕"}</button>
        </div>
    }
}
