//! App-wide toast queue. Every async failure path ends here with a
//! localized message; successes may push one too.

use leptos::prelude::*;
use std::time::Duration;

const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    fn alert_class(self) -> &'static str {
        match self {
            ToastLevel::Success => "alert alert-success shadow-lg",
            ToastLevel::Error => "alert alert-error shadow-lg",
            ToastLevel::Info => "alert alert-info shadow-lg",
        }
    }
}

#[derive(Clone)]
pub struct Toast {
    pub id: u32,
    pub message: String,
    pub level: ToastLevel,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl ToastContext {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: RwSignal::new(0),
        }
    }

    pub fn push(&self, message: impl Into<String>, level: ToastLevel) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id.wrapping_add(1));
        let message = message.into();
        self.set_toasts.update(|list| {
            list.push(Toast { id, message, level });
        });
        let set_toasts = self.set_toasts;
        set_timeout(
            move || set_toasts.update(|list| list.retain(|t| t.id != id)),
            DISMISS_AFTER,
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Error);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(message, ToastLevel::Info);
    }
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>().expect("ToastContext should be provided")
}

/// Renders the active toast stack; mounted once at the app root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_toast();
    let toasts = ctx.toasts;

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    view! {
                        <div class=toast.level.alert_class()>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
