//! Toast stack rendering and auto-dismiss scheduling.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastState};

/// Queue a toast and schedule its removal after `duration_ms`.
///
/// Every toast gets its own single-shot timer; overlapping notifications
/// dismiss independently. Outside a browser the toast stays queued until
/// dismissed by hand.
pub fn notify(
    toasts: RwSignal<ToastState>,
    text: impl Into<String>,
    kind: ToastKind,
    duration_ms: u32,
) {
    let text = text.into();
    let mut id = 0;
    toasts.update(|state| id = state.push(text, kind, duration_ms));
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(duration_ms))).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "csr"))]
    let _ = id;
}

/// Fixed-position toast container rendered once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-container">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        view! {
                            <div class=format!("toast {}", toast.kind.css_class())>
                                <i class=toast.kind.icon_class()></i>
                                {toast.text.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
