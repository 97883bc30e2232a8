// ============================================================================
// HEADER - Menú lateral + popover de perfil (avatar, ID, foto, logout)
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::User;
use crate::state::View;
use crate::utils::files::read_first_file;
use crate::utils::initials;
use crate::viewmodels::{AvatarFormState, ProfileViewModel};

const SIDEBAR_ITEMS: [(View, &str); 3] = [
    (View::Tickets, "📥"),
    (View::Urgent, "⚠️"),
    (View::History, "🕒"),
];

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active_view: View,
    pub user: Option<User>,
    pub on_navigate: Callback<View>,
    pub on_logout: Callback<()>,
    pub on_avatar_updated: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let sidebar_open = use_state(|| false);
    let profile_open = use_state(|| false);
    let avatar = use_state(AvatarFormState::default);
    let profile_ref = use_node_ref();

    // Popover abierto: un mousedown fuera del contenedor lo cierra
    {
        let profile_open = profile_open.clone();
        let profile_ref = profile_ref.clone();
        use_effect_with(*profile_open, move |open| {
            let document = web_sys::window().and_then(|w| w.document());
            let listener = open.then(|| {
                Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
                    let target = event.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                    let inside = match (profile_ref.get(), target) {
                        (Some(container), Some(target)) => container.contains(Some(&target)),
                        _ => false,
                    };
                    if !inside {
                        profile_open.set(false);
                    }
                }) as Box<dyn FnMut(web_sys::MouseEvent)>)
            });

            if let (Some(document), Some(listener)) = (&document, &listener) {
                if document
                    .add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("⚠️ No se pudo escuchar clics fuera del perfil");
                }
            }

            move || {
                if let (Some(document), Some(listener)) = (document, listener) {
                    let _ = document.remove_event_listener_with_callback(
                        "mousedown",
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let user_name = props
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| "Usuario".to_string());
    let user_id = props
        .user
        .as_ref()
        .map(|u| u.id.clone())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| "—".to_string());
    let avatar_url = props.user.as_ref().and_then(|u| u.avatar_url.clone());
    let user_initials = initials(&user_name);

    let open_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(true))
    };
    let close_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(false))
    };
    let toggle_profile = {
        let profile_open = profile_open.clone();
        Callback::from(move |_: MouseEvent| profile_open.set(!*profile_open))
    };

    let on_avatar_change = {
        let avatar = avatar.clone();
        let on_avatar_updated = props.on_avatar_updated.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let avatar = avatar.clone();
            let on_avatar_updated = on_avatar_updated.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let file = match read_first_file(&input).await {
                    Ok(Some(file)) => file,
                    Ok(None) => return,
                    Err(e) => {
                        log::error!("❌ {}", e);
                        return;
                    }
                };

                let uploading = AvatarFormState::with_file(Some(file)).uploading();
                avatar.set(uploading.clone());

                let vm = ProfileViewModel::new();
                let result = vm.upload(uploading, |_user| on_avatar_updated.emit(())).await;
                avatar.set(result);
                input.set_value("");
            });
        })
    };

    let on_profile = {
        let on_navigate = props.on_navigate.clone();
        let profile_open = profile_open.clone();
        Callback::from(move |_: MouseEvent| {
            profile_open.set(false);
            on_navigate.emit(View::Profile);
        })
    };

    let on_logout = {
        let on_logout = props.on_logout.clone();
        let profile_open = profile_open.clone();
        Callback::from(move |_: MouseEvent| {
            profile_open.set(false);
            on_logout.emit(());
        })
    };

    let avatar_thumb = |class: &'static str, fallback_class: &'static str| match &avatar_url {
        Some(url) => html! { <img src={url.clone()} alt={user_name.clone()} class={class} /> },
        None => html! { <div class={fallback_class}>{user_initials.clone()}</div> },
    };

    html! {
        <header class="app-header">
            <div class="header-left">
                <button class="menu-button" onclick={open_sidebar} aria-label="Abrir menú">{"☰"}</button>
            </div>

            <div class="header-center">
                <img src="/logo-helpdesk.png" alt="Helpdesk" class="header-image" />
            </div>

            <div class="header-right">
                <div class="profile-container" ref={profile_ref}>
                    <button
                        class="profile-button"
                        onclick={toggle_profile}
                        aria-haspopup="true"
                        aria-expanded={profile_open.to_string()}
                        aria-label="Abrir perfil"
                    >
                        {avatar_thumb("avatar-thumb", "avatar-fallback")}
                        <span class="user-name">{user_name.clone()}</span>
                        <span class="chevron">{"▾"}</span>
                    </button>

                    <div class={classes!("profile-menu", profile_open.then_some("menu-open"))}>
                        <div class="profile-info">
                            <div class="profile-header">
                                {avatar_thumb("profile-photo", "profile-photo-fallback")}
                                <div>
                                    <div class="profile-name">{user_name.clone()}</div>
                                    <div class="profile-role">{"Ingeniero en sistemas"}</div>
                                </div>
                            </div>
                            <div class="profile-details">
                                <div class="detail-item">
                                    <span class="detail-label">{"ID"}</span>
                                    <span class="detail-value">{user_id}</span>
                                </div>
                            </div>
                            if let Some(error) = &avatar.error {
                                <p class="error-text">{error.clone()}</p>
                            }
                        </div>

                        <div class="menu-actions">
                            <label class="menu-item">
                                <span>{ if avatar.uploading { "Subiendo…" } else { "Subir foto" } }</span>
                                <input
                                    type="file"
                                    accept="image/*"
                                    class="hidden-file"
                                    onchange={on_avatar_change}
                                    disabled={avatar.uploading}
                                />
                            </label>
                            <button class="menu-item" onclick={on_profile}>
                                <span>{View::Profile.label()}</span>
                            </button>
                            <button class="menu-item" onclick={on_logout}>
                                <span>{"Cerrar sesión"}</span>
                            </button>
                        </div>
                    </div>
                </div>
            </div>

            <div
                class={classes!("sidebar-overlay", sidebar_open.then_some("overlay-open"))}
                onclick={close_sidebar}
            />
            <aside class={classes!("sidebar", sidebar_open.then_some("sidebar-open"))}>
                <h2 class="sidebar-title">{"Menú"}</h2>
                <ul class="sidebar-menu">
                    { for SIDEBAR_ITEMS.iter().map(|(view, icon)| {
                        let view = *view;
                        let onclick = {
                            let on_navigate = props.on_navigate.clone();
                            let sidebar_open = sidebar_open.clone();
                            Callback::from(move |_: MouseEvent| {
                                on_navigate.emit(view);
                                sidebar_open.set(false);
                            })
                        };
                        html! {
                            <li
                                key={view.fragment()}
                                class={classes!("sidebar-menu-item", (props.active_view == view).then_some("active"))}
                            >
                                <button {onclick}>
                                    <span class="sidebar-icon">{*icon}</span>
                                    <span>{view.label().to_uppercase()}</span>
                                </button>
                            </li>
                        }
                    }) }
                </ul>
            </aside>
        </header>
    }
}
