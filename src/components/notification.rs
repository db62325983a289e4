use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

/// At most this many toasts are on screen; pushing past the cap drops
/// the oldest immediately.
pub const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifKind {
    Success,
    Error,
    Info,
}

impl NotifKind {
    fn class(self) -> &'static str {
        match self {
            NotifKind::Success => "toast-success",
            NotifKind::Error => "toast-error",
            NotifKind::Info => "toast-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            NotifKind::Success => "✓",
            NotifKind::Error => "!",
            NotifKind::Info => "i",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub kind: NotifKind,
    pub title: String,
    pub body: String,
    pub lifetime_ms: u32,
}

pub enum NotifAction {
    Push {
        kind: NotifKind,
        title: String,
        body: String,
        lifetime_ms: u32,
    },
    Dismiss(u32),
}

#[derive(Default, PartialEq)]
pub struct NotificationList {
    pub items: Vec<Notification>,
    next_id: u32,
}

impl Reducible for NotificationList {
    type Action = NotifAction;

    fn reduce(self: Rc<Self>, action: NotifAction) -> Rc<Self> {
        let mut items = self.items.clone();
        let mut next_id = self.next_id;
        match action {
            NotifAction::Push {
                kind,
                title,
                body,
                lifetime_ms,
            } => {
                items.push(Notification {
                    id: next_id,
                    kind,
                    title,
                    body,
                    lifetime_ms,
                });
                next_id = next_id.wrapping_add(1);
                if items.len() > MAX_VISIBLE {
                    items.remove(0);
                }
            }
            NotifAction::Dismiss(id) => items.retain(|n| n.id != id),
        }
        Rc::new(NotificationList { items, next_id })
    }
}

/// Context handle for raising toasts from anywhere in the tree.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    dispatcher: UseReducerDispatcher<NotificationList>,
}

impl Notifier {
    pub fn notify(&self, kind: NotifKind, title: &str, body: &str) {
        self.notify_with_lifetime(kind, title, body, config::NOTIFICATION_LIFETIME_MS);
    }

    pub fn notify_with_lifetime(&self, kind: NotifKind, title: &str, body: &str, lifetime_ms: u32) {
        self.dispatcher.dispatch(NotifAction::Push {
            kind,
            title: title.to_string(),
            body: body.to_string(),
            lifetime_ms,
        });
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    // Fallback reducer keeps a missing provider from panicking; toasts
    // raised through it simply never render.
    let fallback = use_reducer(NotificationList::default);
    use_context::<Notifier>().unwrap_or(Notifier {
        dispatcher: fallback.dispatcher(),
    })
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    #[prop_or_default]
    pub children: Children,
}

/// Owns the toast list, provides the [`Notifier`] context, and renders
/// the stack in the top-right corner above everything else.
#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let list = use_reducer(NotificationList::default);
    let notifier = Notifier {
        dispatcher: list.dispatcher(),
    };
    let on_dismiss = {
        let list = list.clone();
        Callback::from(move |id: u32| list.dispatch(NotifAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { for props.children.iter() }
            <div class="toast-stack">
                <style>
                    {r#"
                    .toast-stack {
                        position: fixed;
                        top: 1rem;
                        right: 1rem;
                        z-index: 1100;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                        max-width: 360px;
                    }
                    .toast {
                        display: flex;
                        gap: 0.75rem;
                        align-items: flex-start;
                        background: rgba(30, 30, 30, 0.95);
                        border-radius: 12px;
                        padding: 1rem;
                        color: #fff;
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.3);
                        animation: toast-in 0.3s ease-out;
                        transition: opacity 0.3s ease, transform 0.3s ease;
                    }
                    .toast.leaving {
                        opacity: 0;
                        transform: translateX(30%);
                    }
                    .toast-icon {
                        width: 24px;
                        height: 24px;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: bold;
                        flex-shrink: 0;
                    }
                    .toast-success .toast-icon { background: #2e7d32; }
                    .toast-error .toast-icon { background: #c62828; }
                    .toast-info .toast-icon { background: #1565c0; }
                    .toast-title { font-weight: 600; margin-bottom: 0.25rem; }
                    .toast-body {
                        color: #ccc;
                        font-size: 0.9rem;
                        white-space: pre-line;
                    }
                    .toast-close {
                        background: none;
                        border: none;
                        color: #888;
                        cursor: pointer;
                        font-size: 1rem;
                        margin-left: auto;
                        padding: 0;
                    }
                    @keyframes toast-in {
                        from { transform: translateX(30%); opacity: 0; }
                        to { transform: translateX(0); opacity: 1; }
                    }
                    "#}
                </style>
                {
                    for list.items.iter().map(|n| html! {
                        <NotificationPanel
                            key={n.id}
                            notification={n.clone()}
                            on_dismiss={on_dismiss.clone()}
                        />
                    })
                }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    notification: Notification,
    on_dismiss: Callback<u32>,
}

#[function_component(NotificationPanel)]
fn notification_panel(props: &PanelProps) -> Html {
    let leaving = use_state(|| false);
    // Mutable flag so that both the auto-dismiss timer and the close
    // button see the same "already closing" state regardless of which
    // render they were created in.
    let closing = use_mut_ref(|| false);

    let begin_close = {
        let leaving = leaving.clone();
        let closing = closing.clone();
        let on_dismiss = props.on_dismiss.clone();
        let id = props.notification.id;
        Callback::from(move |_: ()| {
            if *closing.borrow() {
                return;
            }
            *closing.borrow_mut() = true;
            leaving.set(true);
            let on_dismiss = on_dismiss.clone();
            Timeout::new(config::NOTIFICATION_EXIT_MS, move || {
                on_dismiss.emit(id);
            })
            .forget();
        })
    };

    {
        let begin_close = begin_close.clone();
        let lifetime_ms = props.notification.lifetime_ms;
        use_effect_with_deps(
            move |_| {
                Timeout::new(lifetime_ms, move || begin_close.emit(())).forget();
                || ()
            },
            (),
        );
    }

    let onclick = {
        let begin_close = begin_close.clone();
        Callback::from(move |_: MouseEvent| begin_close.emit(()))
    };

    let n = &props.notification;
    let class = classes!("toast", n.kind.class(), (*leaving).then_some("leaving"));

    html! {
        <div {class} role="alert">
            <div class="toast-icon">{ n.kind.icon() }</div>
            <div>
                <div class="toast-title">{ &n.title }</div>
                <div class="toast-body">{ &n.body }</div>
            </div>
            <button class="toast-close" {onclick} aria-label="Close">{"✕"}</button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<NotificationList>, title: &str) -> Rc<NotificationList> {
        list.reduce(NotifAction::Push {
            kind: NotifKind::Info,
            title: title.to_string(),
            body: String::new(),
            lifetime_ms: config::NOTIFICATION_LIFETIME_MS,
        })
    }

    #[test]
    fn push_assigns_increasing_ids() {
        let mut list = Rc::new(NotificationList::default());
        list = push(list, "a");
        list = push(list, "b");
        assert_eq!(list.items.len(), 2);
        assert!(list.items[0].id < list.items[1].id);
    }

    #[test]
    fn cap_drops_the_oldest() {
        let mut list = Rc::new(NotificationList::default());
        for i in 0..MAX_VISIBLE + 2 {
            list = push(list, &format!("toast {i}"));
        }
        assert_eq!(list.items.len(), MAX_VISIBLE);
        assert_eq!(list.items[0].title, "toast 2");
        assert_eq!(list.items.last().map(|n| n.title.as_str()), Some("toast 5"));
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut list = Rc::new(NotificationList::default());
        list = push(list, "a");
        list = push(list, "b");
        let first_id = list.items[0].id;
        list = list.reduce(NotifAction::Dismiss(first_id));
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "b");
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let mut list = Rc::new(NotificationList::default());
        list = push(list, "a");
        list = list.reduce(NotifAction::Dismiss(999));
        assert_eq!(list.items.len(), 1);
    }
}
