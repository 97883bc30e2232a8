use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::files::read_first_file;
use crate::viewmodels::{AvatarFormState, ProfileViewModel};

#[derive(Properties, PartialEq)]
pub struct ProfileScreenProps {
    pub on_avatar_updated: Callback<()>,
}

/// "Mi Perfil": subida de la foto que aparece en los reportes
#[function_component(ProfileScreen)]
pub fn profile_screen(props: &ProfileScreenProps) -> Html {
    let form = use_state(AvatarFormState::default);

    let on_file = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let form = form.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match read_first_file(&input).await {
                    Ok(file) => form.set(AvatarFormState::with_file(file)),
                    Err(e) => form.set(AvatarFormState {
                        error: Some(e),
                        ..AvatarFormState::default()
                    }),
                }
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_avatar_updated = props.on_avatar_updated.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.uploading {
                return;
            }

            let uploading = form.uploading();
            form.set(uploading.clone());

            let form = form.clone();
            let on_avatar_updated = on_avatar_updated.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = ProfileViewModel::new();
                let result = vm.upload(uploading, |_user| on_avatar_updated.emit(())).await;
                form.set(result);
            });
        })
    };

    html! {
        <div class="profile-screen">
            <h2>{"Mi Perfil"}</h2>
            <form class="avatar-form" onsubmit={on_submit}>
                <input type="file" accept="image/*" onchange={on_file} disabled={form.uploading} />
                <button type="submit" disabled={form.uploading}>
                    { if form.uploading { "Subiendo…" } else { "Subir" } }
                </button>
            </form>
            if let Some(message) = &form.message {
                <p class="success-text">{message.clone()}</p>
            }
            if let Some(error) = &form.error {
                <p class="error-text">{error.clone()}</p>
            }
        </div>
    }
}
