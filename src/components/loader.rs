use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    pub message: String,
}

/// Full-screen blocking indicator shown while a submission is in
/// flight. The host renders it while the state machine is
/// `Submitting`, so dismissal is a pure projection of state and is
/// naturally idempotent.
#[function_component(LoaderOverlay)]
pub fn loader_overlay(props: &LoaderProps) -> Html {
    html! {
        <div class="loader-overlay">
            <style>
                {r#"
                .loader-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.6);
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    z-index: 1200;
                    animation: loader-fade 0.2s ease-in;
                }
                .loader-spinner {
                    width: 42px;
                    height: 42px;
                    border: 4px solid rgba(255, 255, 255, 0.3);
                    border-top-color: #fff;
                    border-radius: 50%;
                    animation: loader-spin 1s linear infinite;
                }
                .loader-message { color: #fff; font-size: 1.1rem; }
                @keyframes loader-spin { to { transform: rotate(360deg); } }
                @keyframes loader-fade { from { opacity: 0; } to { opacity: 1; } }
                "#}
            </style>
            <div class="loader-spinner"></div>
            <div class="loader-message">{ &props.message }</div>
        </div>
    }
}
