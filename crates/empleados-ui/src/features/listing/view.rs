//! Employee table wired to [`ListingController`].
//!
//! # Design
//! - The controller owns the state; the component re-renders when it signals a change.
//! - The observer is detached on unmount so late responses never touch a dead component.

use std::rc::Rc;

use crate::app::{ApiCtx, RouterNavigator, ToastCtx, ToastNotifier, api_base_url};
use crate::components::bulk_action_bar::BulkActionBar;
use crate::components::context_menu::{ContextMenu, MenuAnchor};
use crate::services::api::ApiClient;
use empleados_api_models::Employee;
use empleados_core::i18n::TranslationBundle;
use empleados_core::listing::state::{
    all_selected, is_selected, select_visible_rows, show_select_all, total,
};
use empleados_core::listing::{ListingController, ListingState, LoadState, RowAction};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

type Controller = ListingController<Rc<ApiClient>, ToastNotifier, RouterNavigator>;

#[function_component(EmployeeListPage)]
pub(crate) fn employee_list_page() -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let api_ctx = use_context::<ApiCtx>();
    let toasts = use_context::<ToastCtx>();
    let navigator = use_navigator();
    let controller: Rc<Controller> = {
        let bundle = bundle.clone();
        use_memo(
            move |_| {
                let api = api_ctx.unwrap_or_else(|| ApiCtx::new(api_base_url()));
                ListingController::new(
                    api.client,
                    ToastNotifier::new(toasts),
                    RouterNavigator::new(navigator),
                    bundle,
                )
            },
            (),
        )
    };
    let redraw = use_force_update();
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                controller.observe(move || redraw.force_update());
                let task = controller.clone();
                spawn_local(async move { task.load().await });
                move || controller.detach()
            },
            (),
        );
    }
    let menu = use_state(|| None::<MenuAnchor>);

    let state = controller.state();
    let body = match &state.load {
        LoadState::Loading => html! {
            <div class="loading-state" role="status">
                <span class="loading loading-spinner"></span>
                {bundle.text("listing.loading", "Cargando empleados...")}
            </div>
        },
        LoadState::Failed(message) => html! {
            <div class="alert alert-error" role="alert">{message.clone()}</div>
        },
        LoadState::Ready => render_table(&state, &controller, &menu, &bundle),
    };

    let on_create = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.create())
    };
    let context_menu = (*menu).clone().map(|anchor| {
        let on_select = {
            let controller = controller.clone();
            let menu = menu.clone();
            Callback::from(move |(id, action): (String, RowAction)| {
                menu.set(None);
                let controller = controller.clone();
                spawn_local(async move { controller.perform(&id, action).await });
            })
        };
        let on_close = {
            let menu = menu.clone();
            Callback::from(move |()| menu.set(None))
        };
        html! { <ContextMenu {anchor} {on_select} {on_close} /> }
    });

    html! {
        <section class="employee-list">
            <header class="flex items-center justify-between">
                <h2>{bundle.text("listing.title", "Lista de Empleados")}</h2>
                <button type="button" class="btn btn-primary" onclick={on_create}>
                    {bundle.text("listing.create", "Nuevo empleado")}
                </button>
            </header>
            {body}
            {context_menu.unwrap_or_default()}
        </section>
    }
}

fn render_table(
    state: &ListingState,
    controller: &Rc<Controller>,
    menu: &UseStateHandle<Option<MenuAnchor>>,
    bundle: &TranslationBundle,
) -> Html {
    let every_row_selected = all_selected(state);
    let select_label = if every_row_selected {
        bundle.text("listing.clear_selection", "Quitar selección")
    } else {
        bundle.text("listing.select_all", "Seleccionar todos")
    };
    let on_toggle_all = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| controller.toggle_all())
    };
    let on_delete_selected = {
        let controller = controller.clone();
        Callback::from(move |_: MouseEvent| {
            let controller = controller.clone();
            spawn_local(async move {
                controller.delete_selected().await;
            });
        })
    };
    let column = |key: &str, default: &str| bundle.text(&format!("listing.columns.{key}"), default);
    let delete_label = if state.deleting {
        bundle.text("listing.deleting", "Eliminando...")
    } else {
        bundle.text("listing.delete_selected", "Eliminar seleccionados")
    };
    let rows = select_visible_rows(state);

    html! {
        <>
            if show_select_all(state) {
                <BulkActionBar
                    select_label={select_label}
                    selected_label={bundle.text("listing.selected", "seleccionados")}
                    selected_count={state.selected.len()}
                    {on_toggle_all}
                >
                    <button
                        type="button"
                        class="btn btn-error btn-sm"
                        disabled={state.selected.is_empty() || state.deleting}
                        onclick={on_delete_selected}
                    >
                        {delete_label}
                    </button>
                </BulkActionBar>
            }
            <table class="table">
                <thead>
                    <tr>
                        <th></th>
                        <th>{column("id", "ID")}</th>
                        <th>{column("first_name", "Nombre")}</th>
                        <th>{column("last_name", "Apellido")}</th>
                        <th>{column("age", "Edad")}</th>
                        <th>{column("department", "Departamento")}</th>
                        <th>{column("salary", "Salario")}</th>
                    </tr>
                </thead>
                <tbody>
                    if rows.is_empty() {
                        <tr>
                            <td colspan="7" class="text-center">
                                {bundle.text("listing.empty", "No hay empleados registrados")}
                            </td>
                        </tr>
                    }
                    {for rows.iter().map(|row| {
                        render_row(row, is_selected(state, &row.id), controller, menu)
                    })}
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="7">{format!("{}: {}", bundle.text("listing.total", "Total"), total(state))}</td>
                    </tr>
                </tfoot>
            </table>
        </>
    }
}

fn render_row(
    row: &Employee,
    selected: bool,
    controller: &Rc<Controller>,
    menu: &UseStateHandle<Option<MenuAnchor>>,
) -> Html {
    let on_toggle = {
        let controller = controller.clone();
        let id = row.id.clone();
        Callback::from(move |_: Event| controller.toggle(&id))
    };
    let on_context = {
        let menu = menu.clone();
        let id = row.id.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            menu.set(Some(MenuAnchor {
                id: id.clone(),
                x: event.client_x(),
                y: event.client_y(),
            }));
        })
    };

    html! {
        <tr key={row.id.clone()} class={classes!(selected.then_some("active"))} oncontextmenu={on_context}>
            <td>
                <input type="checkbox" class="checkbox" checked={selected} onchange={on_toggle} />
            </td>
            <td class="font-mono text-xs">{row.id.clone()}</td>
            <td>{row.first_name.clone()}</td>
            <td>{row.last_name.clone()}</td>
            <td>{row.age}</td>
            <td>{row.department.clone()}</td>
            <td class="text-right">{format!("{:.2}", row.salary)}</td>
        </tr>
    }
}
