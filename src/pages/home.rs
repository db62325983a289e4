use web_sys::MouseEvent;
use yew::prelude::*;

use crate::application::modal::ApplyModal;
use crate::i18n::{t, use_lang};

#[function_component(Home)]
pub fn home() -> Html {
    let lang = use_lang();
    let modal_open = use_state(|| false);

    // Scroll to top only on initial mount.
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| {
            modal_open.set(true);
        })
    };

    let on_modal_closed = {
        let modal_open = modal_open.clone();
        Callback::from(move |_| {
            modal_open.set(false);
        })
    };

    let current = lang.current();
    let courses = [
        ("course.electrician", "⚡"),
        ("course.tailoring", "🧵"),
        ("course.computer", "💻"),
        ("course.retail", "🛒"),
    ];

    html! {
        <div class="home-page">
            <style>
                {r#"
                .home-page { background: #1a1a1a; color: #fff; min-height: 100vh; }
                .hero {
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    padding: 6rem 1.5rem 3rem;
                }
                .hero-content { max-width: 720px; }
                .hero h1 { font-size: 2.8rem; margin-bottom: 1rem; }
                .hero .highlight {
                    background: linear-gradient(45deg, #FF9933, #ffb163);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle { color: #bbb; font-size: 1.2rem; margin-bottom: 2rem; }
                .hero-cta-group { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                .hero-cta {
                    padding: 0.9rem 2rem;
                    border: none;
                    border-radius: 8px;
                    background: linear-gradient(45deg, #FF9933, #ffb163);
                    color: #1a1a1a;
                    font-size: 1.1rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .hero-secondary { color: #FF9933; align-self: center; }
                .courses { padding: 4rem 1.5rem; max-width: 960px; margin: 0 auto; }
                .courses h2 { text-align: center; font-size: 2rem; margin-bottom: 2rem; }
                .course-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 1.5rem;
                }
                .course-card {
                    background: rgba(30, 30, 30, 0.7);
                    border: 1px solid rgba(255, 153, 51, 0.15);
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                }
                .course-card .course-icon { font-size: 2rem; margin-bottom: 0.5rem; }
                .course-card h3 { margin: 0 0 0.5rem; }
                .course-card p { color: #999; font-size: 0.9rem; margin: 0; }
                .page-footer {
                    border-top: 1px solid #333;
                    padding: 2rem 1.5rem;
                    text-align: center;
                    color: #888;
                }
                @media (max-width: 768px) {
                    .hero h1 { font-size: 2rem; }
                }
                "#}
            </style>

            <header class="hero">
                <div class="hero-content">
                    <h1>
                        { t(current, "hero.title.pre") }
                        {" "}
                        <span class="highlight">{ t(current, "hero.title.mark") }</span>
                        { t(current, "hero.title.post") }
                    </h1>
                    <p class="hero-subtitle">{ t(current, "hero.subtitle") }</p>
                    <div class="hero-cta-group">
                        <button class="hero-cta" onclick={open_modal.clone()}>
                            { t(current, "hero.cta") }
                        </button>
                        <a href="#courses" class="hero-secondary">
                            { t(current, "hero.cta.secondary") }
                        </a>
                    </div>
                </div>
            </header>

            <section class="courses" id="courses">
                <h2>{ t(current, "courses.title") }</h2>
                <div class="course-grid">
                    {
                        for courses.iter().map(|(key, icon)| html! {
                            <div class="course-card">
                                <div class="course-icon">{ *icon }</div>
                                <h3>{ t(current, key) }</h3>
                                <p>{ t(current, "courses.duration") }</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <footer class="page-footer" id="contact">
                <p>{ t(current, "footer.tagline") }</p>
            </footer>

            <ApplyModal open={*modal_open} on_closed={on_modal_closed} />
        </div>
    }
}
