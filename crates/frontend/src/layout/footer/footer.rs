use crate::shared::api_utils::api_url;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, Debug, PartialEq)]
enum ServerStatus {
    Online,
    Offline,
    Checking,
}

impl ServerStatus {
    fn display_text(&self) -> &'static str {
        match self {
            ServerStatus::Online => "Records API: Online",
            ServerStatus::Offline => "Records API: Offline",
            ServerStatus::Checking => "Records API: Checking...",
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online => "status-online",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let status = RwSignal::new(ServerStatus::Checking);

    let check_server = move || {
        status.set(ServerStatus::Checking);

        spawn_local(async move {
            let online = ping_server().await;
            status.set(if online {
                ServerStatus::Online
            } else {
                ServerStatus::Offline
            });
        });
    };

    // Проверяем сервер при монтировании
    Effect::new(move |_| {
        check_server();
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || status.get().css_class()>
                {move || status.get().display_text()}
            </span>
            <button class="status-recheck" on:click=move |_| check_server()>"Recheck"</button>
        </footer>
    }
}

async fn ping_server() -> bool {
    match gloo_net::http::Request::get(&api_url("/health")).send().await {
        Ok(response) => response.ok(),
        Err(e) => {
            log::warn!("health check failed: {}", e);
            false
        }
    }
}
