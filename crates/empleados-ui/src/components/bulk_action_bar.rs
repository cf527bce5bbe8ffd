//! Sticky bulk action bar above the employee table.
//!
//! # Design
//! - Keep labels/counts and actions fully prop-driven.
//! - Render action buttons through child content.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BulkActionBarProps {
    pub select_label: AttrValue,
    pub selected_label: AttrValue,
    pub selected_count: usize,
    #[prop_or_default]
    pub on_toggle_all: Callback<MouseEvent>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(BulkActionBar)]
pub(crate) fn bulk_action_bar(props: &BulkActionBarProps) -> Html {
    html! {
        <div class="bulk-actions flex items-center gap-3">
            <button type="button" class="btn btn-ghost btn-sm" onclick={props.on_toggle_all.clone()}>
                {props.select_label.clone()}
            </button>
            <span class="muted">{format!("{} {}", props.selected_count, props.selected_label)}</span>
            <div class="bulk-buttons">
                { for props.children.iter() }
            </div>
        </div>
    }
}
