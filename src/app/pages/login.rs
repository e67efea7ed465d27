//! Login page component.
//!
//! Phone number entry, WhatsApp OTP entry, then a jump to the dashboard once
//! the token is stored.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::state::{use_app_state, DEFAULT_TITLE};
use crate::app::{use_services, Route};
use crate::auth::{LoginFlow, LoginStage, COUNTRY_CODES};

/// Login page component.
///
/// `logout` is set when the route guard bounced a visitor without a session.
#[component]
pub fn Login(logout: bool) -> Element {
    let app = use_app_state();
    let nav = navigator();
    let flow = use_signal(LoginFlow::new);

    use_effect(move || {
        app.set_title(DEFAULT_TITLE);
        if logout {
            app.set_logged_in(false);
        }
    });

    rsx! {
        Layout {
            LoginForm {
                flow,
                logout,
                on_verified: move |_| {
                    nav.push(Route::Dashboard {});
                },
            }
        }
    }
}

/// The login card. Owns no navigation; `on_verified` fires once the token
/// has been stored.
#[component]
fn LoginForm(
    flow: Signal<LoginFlow>,
    logout: bool,
    on_verified: EventHandler<()>,
) -> Element {
    let services = use_services();
    let mut flow = flow;

    let submit = move |evt: FormEvent| {
        evt.prevent_default();

        let stage = flow.peek().stage();
        match stage {
            LoginStage::PhoneEntry => {
                // Validation errors are recorded on the flow for display
                let Ok(phone) = flow.write().begin_phone_submit() else {
                    return;
                };
                let api = services.api.clone();
                spawn(async move {
                    let result = api.request_otp(&phone).await;
                    let _ = flow.write().complete_phone_submit(result);
                });
            }
            LoginStage::OtpEntry => {
                let Ok(submission) = flow.write().begin_otp_submit() else {
                    return;
                };
                let api = services.api.clone();
                let session = services.session.clone();
                spawn(async move {
                    let result = api
                        .verify_otp(&submission.phone_number, &submission.otp)
                        .await;
                    let verified = flow
                        .write()
                        .complete_otp_submit(result, session.as_ref())
                        .is_ok();
                    if verified {
                        on_verified.call(());
                    }
                });
            }
            LoginStage::Verified => {}
        }
    };

    let snapshot = flow.read().clone();
    let stage = snapshot.stage();
    let locked = snapshot.phone_locked();
    let busy = snapshot.is_busy();
    let country_index = snapshot.country_index();
    let local_number = snapshot.local_number().to_string();
    let otp = snapshot.otp().to_string();
    let phone_error = snapshot.phone_error().map(str::to_string);
    let form_error = snapshot.form_error().map(str::to_string);

    let button_label = match stage {
        LoginStage::PhoneEntry => "WhatsApp OTP",
        LoginStage::OtpEntry => "Verify",
        LoginStage::Verified => "Signed in",
    };

    rsx! {
        article { class: "login-card",
            h1 { "Welcome to admin" }
            p { "Sign in to manage your batch job runs." }

            if logout {
                p { class: "status-pending", "Your session has ended. Please sign in again." }
            }

            form {
                role: "form",
                onsubmit: submit,

                div { class: "phone-row",
                    select {
                        id: "country-code",
                        aria_label: "Country code",
                        disabled: if locked { "true" },
                        onchange: move |evt| {
                            if let Ok(index) = evt.value().parse::<usize>() {
                                flow.write().select_country(index);
                            }
                        },
                        for (index, code) in COUNTRY_CODES.iter().enumerate() {
                            option {
                                value: "{index}",
                                selected: index == country_index,
                                "{code.label}"
                            }
                        }
                    }
                    input {
                        id: "mobile-num",
                        r#type: "tel",
                        placeholder: "Admin mobile #",
                        autocomplete: "tel-national",
                        value: "{local_number}",
                        readonly: if locked { "true" },
                        aria_invalid: if phone_error.is_some() { "true" } else { "false" },
                        oninput: move |evt| flow.write().set_local_number(evt.value()),
                    }
                }
                if let Some(err) = phone_error.as_ref() {
                    small { class: "status-err", "{err}" }
                }

                if stage == LoginStage::OtpEntry {
                    input {
                        id: "otp",
                        r#type: "text",
                        inputmode: "numeric",
                        autocomplete: "one-time-code",
                        placeholder: "Code from WhatsApp",
                        value: "{otp}",
                        oninput: move |evt| flow.write().set_otp(evt.value()),
                    }
                }

                if let Some(err) = form_error.as_ref() {
                    p { class: "status-err", "{err}" }
                }

                button {
                    id: "login-submit",
                    r#type: "submit",
                    disabled: if busy || stage == LoginStage::Verified { "true" },
                    aria_busy: "{busy}",
                    "{button_label}"
                }
            }
        }
    }
}
