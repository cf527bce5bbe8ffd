//! App shell: contexts, router, and toast host.

use crate::components::empty_state::EmptyState;
use crate::components::toast::ToastHost;
use crate::features::form::EmployeeFormPage;
use crate::features::listing::EmployeeListPage;
use crate::models::{ToastAction, ToastQueue};
use crate::routes::Route;
use empleados_core::form::FormMode;
use empleados_core::i18n::{LocaleCode, TranslationBundle};
use preferences::{load_locale, persist_locale};
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) use adapters::{RouterNavigator, ToastCtx, ToastNotifier};
pub(crate) use api::ApiCtx;
pub(crate) use preferences::api_base_url;

mod adapters;
mod api;
mod preferences;

#[function_component(EmpleadosApp)]
pub(crate) fn empleados_app() -> Html {
    let locale = use_state(load_locale);
    let bundle = {
        let locale = *locale;
        use_memo(move |_| TranslationBundle::new(locale), locale)
    };
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());
    let toasts = use_reducer(ToastQueue::default);
    {
        use_effect_with_deps(
            move |locale: &LocaleCode| {
                persist_locale(*locale);
                || ()
            },
            *locale,
        );
    }

    let on_dismiss = {
        let dispatcher = toasts.dispatcher();
        Callback::from(move |id: u64| dispatcher.dispatch(ToastAction::Dismiss(id)))
    };
    let on_locale = {
        let locale = locale.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            if let Some(next) = LocaleCode::from_lang_tag(&select.value()) {
                locale.set(next);
            }
        })
    };

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
                <ContextProvider<ToastCtx> context={toasts.dispatcher()}>
                    <BrowserRouter>
                        <header class="navbar bg-base-200 gap-4">
                            <Link<Route> to={Route::Listing} classes="btn btn-ghost">
                                {bundle.text("nav.listing", "Empleados")}
                            </Link<Route>>
                            <Link<Route> to={Route::Create} classes="btn btn-ghost">
                                {bundle.text("nav.create", "Nuevo empleado")}
                            </Link<Route>>
                            <select
                                class="select select-sm ml-auto"
                                aria-label={bundle.text("locale.label", "Idioma")}
                                onchange={on_locale}
                            >
                                {for LocaleCode::all().into_iter().map(|code| html! {
                                    <option value={code.code()} selected={code == *locale}>{code.label()}</option>
                                })}
                            </select>
                        </header>
                        <main class="container mx-auto p-4">
                            <Switch<Route> render={switch} />
                        </main>
                        <ToastHost toasts={toasts.toasts().to_vec()} {on_dismiss} />
                    </BrowserRouter>
                </ContextProvider<ToastCtx>>
            </ContextProvider<TranslationBundle>>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::Listing} /> },
        Route::Listing => html! { <EmployeeListPage /> },
        Route::Create => html! { <EmployeeFormPage mode={FormMode::Create} /> },
        Route::Edit { id } => html! { <EmployeeFormPage key={id.clone()} mode={FormMode::Edit(id)} /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(NotFoundPage)]
fn not_found_page() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    html! {
        <EmptyState
            title={bundle.text("not_found.title", "Página no encontrada")}
            description={AttrValue::from(bundle.text("not_found.body", "La ruta solicitada no existe."))}
        >
            <Link<Route> to={Route::Listing} classes="btn btn-primary">
                {bundle.text("nav.listing", "Empleados")}
            </Link<Route>>
        </EmptyState>
    }
}

/// Mount the app on the document body.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<EmpleadosApp>::new().render();
}
