//! Right-click row menu.
//!
//! # Design
//! - Positioned at the pointer; closes on selection, outside click, or Escape.
//! - Emits callbacks only; the page decides what each action does.

use empleados_core::i18n::TranslationBundle;
use empleados_core::listing::RowAction;
use yew::prelude::*;

/// Pointer position and row the menu was opened for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MenuAnchor {
    pub id: String,
    pub x: i32,
    pub y: i32,
}

#[derive(Properties, PartialEq)]
pub(crate) struct ContextMenuProps {
    pub anchor: MenuAnchor,
    pub on_select: Callback<(String, RowAction)>,
    pub on_close: Callback<()>,
}

#[function_component(ContextMenu)]
pub(crate) fn context_menu(props: &ContextMenuProps) -> Html {
    let bundle = use_context::<TranslationBundle>().unwrap_or_default();
    let backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_close.emit(());
            }
        })
    };
    let style = format!("position: fixed; left: {}px; top: {}px;", props.anchor.x, props.anchor.y);

    html! {
        <>
            <div class="fixed inset-0" onclick={backdrop_click} oncontextmenu={suppress_native_menu()}></div>
            <ul class="menu bg-base-100 rounded-box w-44 p-1 shadow" role="menu" {style} tabindex="0" onkeydown={keydown}>
                {for RowAction::MENU.into_iter().map(|action| {
                    let on_select = props.on_select.clone();
                    let id = props.anchor.id.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_select.emit((id.clone(), action)));
                    let class = action.is_destructive().then_some("text-error");
                    html! {
                        <li>
                            <button type="button" role="menuitem" class={classes!("justify-start", class)} {onclick}>
                                {bundle.text(action.label_key(), "")}
                            </button>
                        </li>
                    }
                })}
            </ul>
        </>
    }
}

fn suppress_native_menu() -> Callback<MouseEvent> {
    Callback::from(|event: MouseEvent| event.prevent_default())
}
