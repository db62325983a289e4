use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod analytics;
mod config;
mod i18n;
mod application {
    pub mod modal;
    pub mod submit;
    pub mod validation;
}
mod components {
    pub mod loader;
    pub mod nav;
    pub mod notification;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use components::notification::NotificationHost;
use i18n::LangProvider;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <LangProvider>
            <NotificationHost>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </NotificationHost>
        </LangProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
