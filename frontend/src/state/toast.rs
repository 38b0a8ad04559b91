use leptos::{
    create_rw_signal, provide_context, store_value, use_context, RwSignal, SignalUpdate,
    StoredValue,
};

pub const TOAST_DISMISS_MS: u32 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Context-provided toast store. Mutation outcomes land here; background
/// list-load failures render inline instead.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        Self {
            list: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        }
    }

    pub fn list(&self) -> RwSignal<Vec<Toast>> {
        self.list
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.list.update(|toasts| toasts.retain(|toast| toast.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self
            .next_id
            .try_update_value(|next| {
                *next += 1;
                *next
            })
            .unwrap_or_default();
        self.list.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });
        self.schedule_dismiss(id);
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        let toasts = *self;
        leptos::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_DISMISS_MS).await;
            toasts.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_toasts() -> Toasts {
    if let Some(existing) = use_context::<Toasts>() {
        return existing;
    }
    let toasts = Toasts::new();
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>().unwrap_or_else(provide_toasts)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;
    use leptos::SignalGetUntracked;

    #[test]
    fn toasts_accumulate_and_dismiss_by_id() {
        with_runtime(|| {
            let toasts = Toasts::new();
            toasts.success("Attendance saved");
            toasts.error("Email already in use");

            let list = toasts.list().get_untracked();
            assert_eq!(list.len(), 2);
            assert_eq!(list[0].kind, ToastKind::Success);
            assert_eq!(list[0].message, "Attendance saved");
            assert_eq!(list[1].kind, ToastKind::Error);

            toasts.dismiss(list[0].id);
            let list = toasts.list().get_untracked();
            assert_eq!(list.len(), 1);
            assert_eq!(list[0].message, "Email already in use");
        });
    }

    #[test]
    fn ids_are_unique_across_pushes() {
        with_runtime(|| {
            let toasts = Toasts::new();
            toasts.success("one");
            toasts.success("two");
            toasts.success("three");
            let list = toasts.list().get_untracked();
            let mut ids: Vec<u64> = list.iter().map(|t| t.id).collect();
            ids.dedup();
            assert_eq!(ids.len(), 3);
        });
    }
}
