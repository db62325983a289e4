//! The application dialog: modal lifecycle, per-field validation, and
//! the submission flow with loader and toast feedback.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, Event, FocusEvent, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, KeyboardEvent, MouseEvent, PointerEvent,
};
use yew::prelude::*;

use crate::analytics;
use crate::application::submit::{
    ApplicationData, Backend, BackendHandle, Session, SimulatedBackend, SubmissionState,
};
use crate::application::validation::{validate_field, validate_form, FieldSnapshot, FieldValidity};
use crate::components::loader::LoaderOverlay;
use crate::components::notification::{use_notifier, NotifKind};
use crate::config;
use crate::i18n::{t, use_lang};

/// Dialog lifecycle. The `Closing` phase exists so the exit transition
/// can play before the dialog leaves the tree; every CSS class on the
/// overlay is a projection of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    Closing,
}

/// Per-field verdicts, applied as input styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Validities {
    name: FieldValidity,
    email: FieldValidity,
    phone: FieldValidity,
    course: FieldValidity,
    mode: FieldValidity,
}

#[derive(Properties, PartialEq)]
pub struct ApplyModalProps {
    /// Parent's request to show the dialog. Turning this on while the
    /// dialog is already open is a no-op.
    pub open: bool,
    /// Fired once the closing transition has finished and the session
    /// has been reset.
    pub on_closed: Callback<()>,
    #[prop_or_else(default_backend)]
    pub backend: BackendHandle,
}

fn default_backend() -> BackendHandle {
    BackendHandle(Rc::new(SimulatedBackend::default()))
}

fn field_class(validity: FieldValidity) -> Classes {
    classes!(
        "form-input",
        match validity {
            FieldValidity::Untouched => None,
            FieldValidity::Valid => Some("valid"),
            FieldValidity::Invalid => Some("invalid"),
        }
    )
}

fn restore_scroll_next_frame(container: &Element, top: i32) {
    let el = container.clone();
    let cb = Closure::once_into_js(move || el.set_scroll_top(top));
    if let Some(win) = web_sys::window() {
        let _ = win.request_animation_frame(cb.unchecked_ref());
    }
}

#[function_component(ApplyModal)]
pub fn apply_modal(props: &ApplyModalProps) -> Html {
    let lang = use_lang();
    let notifier = use_notifier();

    let phase = use_state(ModalState::default);
    let submission = use_state(SubmissionState::default);

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let course = use_state(String::new);
    let mode = use_state(String::new);
    let message = use_state(String::new);
    let validities = use_state(Validities::default);

    // Guards shared by every close path so Escape, backdrop, and the
    // close button cannot race each other into a double transition.
    let closing = use_mut_ref(|| false);
    let session = use_mut_ref(Session::default);
    let body_ref = use_node_ref();

    let begin_close = {
        let phase = phase.clone();
        let submission = submission.clone();
        let closing = closing.clone();
        let session = session.clone();
        let validities = validities.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let course = course.clone();
        let mode = mode.clone();
        let message = message.clone();
        let on_closed = props.on_closed.clone();
        Callback::from(move |_: ()| {
            if *closing.borrow() {
                return;
            }
            *closing.borrow_mut() = true;
            // A submission still in flight belongs to this session;
            // its result must not surface after the dialog is gone.
            session.borrow_mut().invalidate();
            phase.set(ModalState::Closing);

            let phase = phase.clone();
            let submission = submission.clone();
            let validities = validities.clone();
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let course = course.clone();
            let mode = mode.clone();
            let message = message.clone();
            let on_closed = on_closed.clone();
            Timeout::new(config::MODAL_CLOSE_MS, move || {
                phase.set(ModalState::Closed);
                submission.set(SubmissionState::Idle);
                validities.set(Validities::default());
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                course.set(String::new());
                mode.set(String::new());
                message.set(String::new());
                on_closed.emit(());
            })
            .forget();
        })
    };

    // React to the parent's open request.
    {
        let phase = phase.clone();
        let closing = closing.clone();
        use_effect_with_deps(
            move |open| {
                if *open && *phase == ModalState::Closed {
                    *closing.borrow_mut() = false;
                    phase.set(ModalState::Open);
                    analytics::track("application_modal", "open");
                    // Focus after the opening transition has started,
                    // not during it.
                    Timeout::new(config::MODAL_FOCUS_DELAY_MS, || {
                        let field = web_sys::window()
                            .and_then(|w| w.document())
                            .and_then(|d| d.get_element_by_id("apply-name"))
                            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
                        if let Some(field) = field {
                            let _ = field.focus();
                        }
                    })
                    .forget();
                }
                || ()
            },
            props.open,
        );
    }

    // Body scroll is trapped while the dialog is visible.
    use_effect_with_deps(
        move |phase| {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                match phase {
                    ModalState::Open | ModalState::Closing => {
                        let _ = body.style().set_property("overflow", "hidden");
                    }
                    ModalState::Closed => {
                        let _ = body.style().remove_property("overflow");
                    }
                }
            }
            || ()
        },
        *phase,
    );

    // Escape closes, but only while actually open.
    {
        let begin_close = begin_close.clone();
        use_effect_with_deps(
            move |phase| {
                let destructor: Box<dyn FnOnce()> = if *phase == ModalState::Open {
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        let callback =
                            Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                                if e.key() == "Escape" {
                                    begin_close.emit(());
                                }
                            });
                        let _ = document.add_event_listener_with_callback(
                            "keydown",
                            callback.as_ref().unchecked_ref(),
                        );
                        Box::new(move || {
                            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                                let _ = document.remove_event_listener_with_callback(
                                    "keydown",
                                    callback.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    } else {
                        Box::new(|| ())
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            *phase,
        );
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_name_blur = {
        let name = name.clone();
        let validities = validities.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let verdict = validate_field(&FieldSnapshot::new("name", &value, true));
            name.set(value);
            validities.set(Validities {
                name: verdict,
                ..*validities
            });
        })
    };

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };
    let on_email_blur = {
        let email = email.clone();
        let validities = validities.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let verdict = validate_field(&FieldSnapshot::new("email", &value, true));
            email.set(value);
            validities.set(Validities {
                email: verdict,
                ..*validities
            });
        })
    };

    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            phone.set(input.value());
        })
    };
    let on_phone_blur = {
        let phone = phone.clone();
        let validities = validities.clone();
        Callback::from(move |e: FocusEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            let verdict = validate_field(&FieldSnapshot::new("phone", &value, true));
            phone.set(value);
            validities.set(Validities {
                phone: verdict,
                ..*validities
            });
        })
    };

    let on_course_change = {
        let course = course.clone();
        let validities = validities.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let value = select.value();
            let verdict = validate_field(&FieldSnapshot::new("course", &value, true));
            course.set(value);
            validities.set(Validities {
                course: verdict,
                ..*validities
            });
        })
    };

    // Radios must not steal focus from whatever the visitor was typing
    // in.
    let prevent_focus_steal = Callback::from(|e: PointerEvent| e.prevent_default());

    let on_mode_change = {
        let mode = mode.clone();
        let validities = validities.clone();
        let body_ref = body_ref.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = input.value();
            // Validating a radio re-renders the form; keep the body's
            // scroll offset across that paint.
            let container = body_ref.cast::<Element>();
            let scroll_top = container.as_ref().map(|c| c.scroll_top());
            let verdict = validate_field(&FieldSnapshot::new("mode", &value, true));
            mode.set(value);
            validities.set(Validities {
                mode: verdict,
                ..*validities
            });
            if let (Some(container), Some(top)) = (container, scroll_top) {
                restore_scroll_next_frame(&container, top);
            }
        })
    };

    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let on_submit = {
        let lang = lang.clone();
        let notifier = notifier.clone();
        let submission = submission.clone();
        let session = session.clone();
        let validities = validities.clone();
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let course = course.clone();
        let mode = mode.clone();
        let message = message.clone();
        let backend = props.backend.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !submission.can_begin() {
                return;
            }
            let current = lang.current();

            let snapshots = vec![
                FieldSnapshot::new("name", &name, true),
                FieldSnapshot::new("email", &email, true),
                FieldSnapshot::new("phone", &phone, true),
                FieldSnapshot::new("course", &course, true),
                FieldSnapshot::new("mode", &mode, true),
                FieldSnapshot::new("message", &message, false),
            ];
            validities.set(Validities {
                name: validate_field(&snapshots[0]),
                email: validate_field(&snapshots[1]),
                phone: validate_field(&snapshots[2]),
                course: validate_field(&snapshots[3]),
                mode: validate_field(&snapshots[4]),
            });

            let report = validate_form(current, &snapshots);
            if !report.is_valid {
                notifier.notify(
                    NotifKind::Error,
                    &t(current, "notify.invalid.title"),
                    &report.errors.join("\n"),
                );
                return;
            }

            submission.set(SubmissionState::Submitting);
            let token = session.borrow().token();
            let future = backend.0.submit(ApplicationData {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                course: (*course).clone(),
                mode: (*mode).clone(),
                message: (*message).clone(),
            });

            let submission = submission.clone();
            let session = session.clone();
            let notifier = notifier.clone();
            let validities = validities.clone();
            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let course = course.clone();
            let mode = mode.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = future.await;
                if !session.borrow().accepts(token) {
                    log::debug!("submission resolved after its session ended; dropping result");
                    return;
                }
                match result {
                    Ok(()) => {
                        submission.set(SubmissionState::Succeeded);
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        course.set(String::new());
                        mode.set(String::new());
                        message.set(String::new());
                        validities.set(Validities::default());
                        notifier.notify(
                            NotifKind::Success,
                            &t(current, "notify.success.title"),
                            &t(current, "notify.success.body"),
                        );
                        analytics::track("application_submit", "success");
                    }
                    Err(err) => {
                        log::warn!("submission failed: {err}");
                        // Field contents stay put so the visitor can
                        // retry without retyping.
                        submission.set(SubmissionState::Failed);
                        notifier.notify(
                            NotifKind::Error,
                            &t(current, "notify.failed.title"),
                            &t(current, "notify.failed.body"),
                        );
                        analytics::track("application_submit", "error");
                    }
                }
            });
        })
    };

    if *phase == ModalState::Closed {
        return html! {};
    }

    let current = lang.current();
    let v = *validities;
    let overlay_class = classes!(
        "modal-overlay",
        (*phase == ModalState::Closing).then_some("closing")
    );
    let on_backdrop_click = begin_close.reform(|_: MouseEvent| ());
    let on_close_click = begin_close.reform(|e: MouseEvent| {
        e.stop_propagation();
    });
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={overlay_class} onclick={on_backdrop_click}>
            <style>
                {r#"
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.7);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 1000;
                    padding: 1rem;
                    animation: overlay-in 0.25s ease-out;
                }
                .modal-overlay.closing { opacity: 0; transition: opacity 0.25s ease; }
                .modal-dialog {
                    background: #1e1e1e;
                    border: 1px solid rgba(255, 153, 51, 0.2);
                    border-radius: 16px;
                    width: 100%;
                    max-width: 520px;
                    max-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    position: relative;
                    color: #fff;
                }
                .modal-overlay.closing .modal-dialog { transform: translateY(12px); transition: transform 0.25s ease; }
                .modal-header { padding: 1.5rem 1.5rem 0; }
                .modal-header h2 { margin: 0 0 0.25rem; }
                .modal-subtitle { color: #aaa; margin: 0 0 1rem; }
                .modal-close {
                    position: absolute;
                    top: 0.75rem;
                    right: 0.75rem;
                    background: none;
                    border: none;
                    color: #888;
                    font-size: 1.2rem;
                    cursor: pointer;
                }
                .modal-body { padding: 0 1.5rem 1.5rem; overflow-y: auto; }
                .form-row { margin-bottom: 1rem; display: flex; flex-direction: column; gap: 0.35rem; }
                .form-row label { color: #ddd; font-size: 0.9rem; }
                .form-input {
                    background: #2a2a2a;
                    border: 1px solid #444;
                    border-radius: 8px;
                    padding: 0.6rem 0.75rem;
                    color: #fff;
                    font-size: 1rem;
                }
                .form-input.invalid { border-color: #c62828; }
                .form-input.valid { border-color: #2e7d32; }
                .radio-group { display: flex; gap: 1.5rem; }
                .radio-group label { display: flex; align-items: center; gap: 0.4rem; color: #ddd; }
                .submit-button {
                    width: 100%;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #FF9933, #ffb163);
                    color: #1a1a1a;
                    font-weight: 600;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .submit-button:disabled { opacity: 0.6; cursor: wait; }
                @keyframes overlay-in { from { opacity: 0; } to { opacity: 1; } }
                "#}
            </style>
            <div class="modal-dialog" role="dialog" aria-modal="true" onclick={stop_propagation}>
                <button class="modal-close" onclick={on_close_click} aria-label="Close">{"✕"}</button>
                <div class="modal-header">
                    <h2>{ t(current, "form.title") }</h2>
                    <p class="modal-subtitle">{ t(current, "form.subtitle") }</p>
                </div>
                <div class="modal-body" ref={body_ref}>
                    <form onsubmit={on_submit} novalidate=true>
                        <div class="form-row">
                            <label for="apply-name">{ t(current, "form.name.label") }</label>
                            <input
                                id="apply-name"
                                name="name"
                                type="text"
                                required=true
                                class={field_class(v.name)}
                                value={(*name).clone()}
                                placeholder={t(current, "form.name.ph")}
                                oninput={on_name_input}
                                onblur={on_name_blur}
                            />
                        </div>
                        <div class="form-row">
                            <label for="apply-email">{ t(current, "form.email.label") }</label>
                            <input
                                id="apply-email"
                                name="email"
                                type="email"
                                required=true
                                class={field_class(v.email)}
                                value={(*email).clone()}
                                placeholder={t(current, "form.email.ph")}
                                oninput={on_email_input}
                                onblur={on_email_blur}
                            />
                        </div>
                        <div class="form-row">
                            <label for="apply-phone">{ t(current, "form.phone.label") }</label>
                            <input
                                id="apply-phone"
                                name="phone"
                                type="tel"
                                required=true
                                class={field_class(v.phone)}
                                value={(*phone).clone()}
                                placeholder={t(current, "form.phone.ph")}
                                oninput={on_phone_input}
                                onblur={on_phone_blur}
                            />
                        </div>
                        <div class="form-row">
                            <label for="apply-course">{ t(current, "form.course.label") }</label>
                            <select
                                id="apply-course"
                                name="course"
                                required=true
                                class={field_class(v.course)}
                                onchange={on_course_change}
                            >
                                <option value="" selected={course.is_empty()} disabled=true>
                                    { t(current, "form.course.ph") }
                                </option>
                                <option value="electrician" selected={*course == "electrician"}>
                                    { t(current, "course.electrician") }
                                </option>
                                <option value="tailoring" selected={*course == "tailoring"}>
                                    { t(current, "course.tailoring") }
                                </option>
                                <option value="computer" selected={*course == "computer"}>
                                    { t(current, "course.computer") }
                                </option>
                                <option value="retail" selected={*course == "retail"}>
                                    { t(current, "course.retail") }
                                </option>
                            </select>
                        </div>
                        <div class="form-row">
                            <label>{ t(current, "form.mode.label") }</label>
                            <div class="radio-group">
                                <label>
                                    <input
                                        type="radio"
                                        name="mode"
                                        value="classroom"
                                        checked={*mode == "classroom"}
                                        onpointerdown={prevent_focus_steal.clone()}
                                        onchange={on_mode_change.clone()}
                                    />
                                    { t(current, "form.mode.classroom") }
                                </label>
                                <label>
                                    <input
                                        type="radio"
                                        name="mode"
                                        value="online"
                                        checked={*mode == "online"}
                                        onpointerdown={prevent_focus_steal}
                                        onchange={on_mode_change}
                                    />
                                    { t(current, "form.mode.online") }
                                </label>
                            </div>
                        </div>
                        <div class="form-row">
                            <label for="apply-message">{ t(current, "form.message.label") }</label>
                            <textarea
                                id="apply-message"
                                name="message"
                                rows="3"
                                class="form-input"
                                value={(*message).clone()}
                                placeholder={t(current, "form.message.ph")}
                                oninput={on_message_input}
                            />
                        </div>
                        <button
                            type="submit"
                            class="submit-button"
                            disabled={*submission == SubmissionState::Submitting}
                        >
                            {
                                if *submission == SubmissionState::Failed {
                                    t(current, "form.retry")
                                } else {
                                    t(current, "form.submit")
                                }
                            }
                        </button>
                    </form>
                </div>
            </div>
            {
                if *submission == SubmissionState::Submitting {
                    html! { <LoaderOverlay message={t(current, "loader.submitting")} /> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
