pub mod center;
pub mod global_context;
pub mod left;
pub mod modal_service;
pub mod tabs;
pub mod top_header;

pub use modal_service::{ConfirmModal, ModalService};

use crate::shared::toast::Toaster;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |   TabBar + page content       |
/// |   (Left)  |          (Center)             |
/// +------------------------------------------+
/// ```
///
/// The confirmation dialog and the toasts are rendered once, above everything.
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Left sidebar - uses ctx.left_open for visibility
                <left::Left>
                    {left()}
                </left::Left>

                <div class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </div>
            </div>

            <ConfirmModal />
            <Toaster />
        </div>
    }
}
