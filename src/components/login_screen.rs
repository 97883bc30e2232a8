use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::Session;
use crate::viewmodels::{LoginFormState, LoginViewModel};

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_login: Callback<Session>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let form = use_state(LoginFormState::default);

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginFormState {
                email: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_password = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(LoginFormState {
                password: input.value(),
                ..(*form).clone()
            });
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.loading {
                return;
            }

            let submitting = form.submitting();
            form.set(submitting.clone());

            let form = form.clone();
            let on_login = on_login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let vm = LoginViewModel::new();
                let result = vm.submit(submitting, |session| on_login.emit(session)).await;
                form.set(result);
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-card">
                <img src="/Logo-login.png" alt="Logo" class="login-logo" />
                <h1>{"Iniciar sesión"}</h1>
                <p class="login-subtitle">{"Ingresa tus credenciales para continuar"}</p>

                <form class="login-form" onsubmit={on_submit}>
                    if let Some(error) = &form.error {
                        <div class="error-message">{error.clone()}</div>
                    }

                    <input
                        type="email"
                        placeholder="Correo"
                        value={form.email.clone()}
                        oninput={on_email}
                        required=true
                        disabled={form.loading}
                    />
                    <input
                        type="password"
                        placeholder="Contraseña"
                        value={form.password.clone()}
                        oninput={on_password}
                        required=true
                        disabled={form.loading}
                    />

                    <button type="submit" class="btn-login" disabled={form.loading}>
                        { if form.loading { "Ingresando…" } else { "Entrar" } }
                    </button>
                </form>

                <div class="login-footer">
                    <p>{"¿Olvidaste tu contraseña?"}</p>
                </div>
            </div>
        </div>
    }
}
