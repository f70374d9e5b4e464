#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use crate::core::auth::{Credentials, FieldValidity, FormMode};
    use crate::core::flow::{
        FALLBACK_SIGNUP_ERROR, LOGIN_SUCCESS, ProviderError, SIGN_IN_INCOMPLETE, SIGNUP_SUCCESS,
        SessionProvider, SignInResult, SignupApi, SignupError, SubmitOutcome, SubmitPhase,
        run_submission,
    };
    use crate::core::routes;

    /// Signup endpoint double that records calls and replays a canned reply.
    struct FakeSignup {
        response: Result<(), SignupError>,
        calls: RefCell<usize>,
    }

    impl FakeSignup {
        fn ok() -> Self {
            Self {
                response: Ok(()),
                calls: RefCell::new(0),
            }
        }

        fn rejected(message: Option<&str>) -> Self {
            Self {
                response: Err(SignupError::Rejected {
                    message: message.map(str::to_string),
                }),
                calls: RefCell::new(0),
            }
        }

        fn transport(message: &str) -> Self {
            Self {
                response: Err(SignupError::Transport(message.to_string())),
                calls: RefCell::new(0),
            }
        }

        fn calls(&self) -> usize {
            *self.calls.borrow()
        }
    }

    impl SignupApi for FakeSignup {
        async fn create_account(&self, _credentials: &Credentials) -> Result<(), SignupError> {
            *self.calls.borrow_mut() += 1;
            self.response.clone()
        }
    }

    /// Session provider double with call counters for both operations.
    struct FakeProvider {
        response: Result<SignInResult, ProviderError>,
        sign_in_calls: RefCell<usize>,
        sign_out_calls: RefCell<usize>,
    }

    impl FakeProvider {
        fn with_result(result: SignInResult) -> Self {
            Self {
                response: Ok(result),
                sign_in_calls: RefCell::new(0),
                sign_out_calls: RefCell::new(0),
            }
        }

        fn ok() -> Self {
            Self::with_result(SignInResult {
                ok: true,
                error: None,
            })
        }

        fn erroring(message: &str) -> Self {
            Self::with_result(SignInResult {
                ok: false,
                error: Some(message.to_string()),
            })
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(ProviderError(message.to_string())),
                sign_in_calls: RefCell::new(0),
                sign_out_calls: RefCell::new(0),
            }
        }

        fn sign_in_calls(&self) -> usize {
            *self.sign_in_calls.borrow()
        }
    }

    impl SessionProvider for FakeProvider {
        async fn sign_in(
            &self,
            _credentials: &Credentials,
        ) -> Result<SignInResult, ProviderError> {
            *self.sign_in_calls.borrow_mut() += 1;
            self.response.clone()
        }

        async fn sign_out(&self) {
            *self.sign_out_calls.borrow_mut() += 1;
        }
    }

    fn valid_credentials() -> Credentials {
        Credentials::new("student@example.com", "secret-enough")
    }

    async fn submit_recording(
        mode: FormMode,
        credentials: Credentials,
        signup: &FakeSignup,
        provider: &FakeProvider,
    ) -> (SubmitOutcome, Vec<SubmitPhase>) {
        let phases = RefCell::new(Vec::new());
        let outcome = run_submission(mode, credentials, signup, provider, |phase| {
            phases.borrow_mut().push(phase);
        })
        .await;
        (outcome, phases.into_inner())
    }

    // ------------------------------------------------------------------
    // Validation gate: nothing may leave the browser on a rejected attempt
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn invalid_email_is_rejected_before_any_call() {
        let signup = FakeSignup::ok();
        let provider = FakeProvider::ok();

        for email in ["", "no-at-sign.example.com"] {
            for mode in [FormMode::SignUp, FormMode::Login] {
                let (outcome, phases) = submit_recording(
                    mode,
                    Credentials::new(email, "long-enough-password"),
                    &signup,
                    &provider,
                )
                .await;

                let SubmitOutcome::Rejected(validity) = &outcome else {
                    panic!("expected rejection, got {outcome:?}");
                };
                assert!(validity.email_invalid);
                assert!(!validity.password_invalid);
                assert_eq!(
                    phases,
                    vec![
                        SubmitPhase::Validating,
                        SubmitPhase::Done(outcome.clone())
                    ]
                );
            }
        }

        assert_eq!(signup.calls(), 0);
        assert_eq!(provider.sign_in_calls(), 0);
    }

    #[tokio::test]
    async fn short_password_is_rejected_before_any_call() {
        let signup = FakeSignup::ok();
        let provider = FakeProvider::ok();

        let (outcome, phases) = submit_recording(
            FormMode::Login,
            Credentials::new("student@example.com", "five5"),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Rejected(FieldValidity {
                email_invalid: false,
                password_invalid: true,
            })
        );
        assert!(!phases.contains(&SubmitPhase::Loading));
        assert_eq!(signup.calls(), 0);
        assert_eq!(provider.sign_in_calls(), 0);
    }

    // ------------------------------------------------------------------
    // SignUp branch
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn signup_success_navigates_to_login() {
        let signup = FakeSignup::ok();
        let provider = FakeProvider::ok();

        let (outcome, _) = submit_recording(
            FormMode::SignUp,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Success {
                message: SIGNUP_SUCCESS.to_string(),
                destination: Some(routes::LOGIN),
            }
        );
        // Only the signup collaborator was consulted.
        assert_eq!(signup.calls(), 1);
        assert_eq!(provider.sign_in_calls(), 0);
    }

    #[tokio::test]
    async fn signup_rejection_surfaces_server_message() {
        let signup = FakeSignup::rejected(Some("Email taken"));
        let provider = FakeProvider::ok();

        let (outcome, _) = submit_recording(
            FormMode::SignUp,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failure {
                message: "Email taken".to_string(),
                destination: Some(routes::SIGNUP),
            }
        );
    }

    #[tokio::test]
    async fn signup_rejection_without_message_uses_fallback() {
        let signup = FakeSignup::rejected(None);
        let provider = FakeProvider::ok();

        let (outcome, _) = submit_recording(
            FormMode::SignUp,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failure {
                message: FALLBACK_SIGNUP_ERROR.to_string(),
                destination: Some(routes::SIGNUP),
            }
        );
    }

    #[tokio::test]
    async fn signup_transport_failure_keeps_signup_destination() {
        let signup = FakeSignup::transport("connection reset");
        let provider = FakeProvider::ok();

        let (outcome, phases) = submit_recording(
            FormMode::SignUp,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failure {
                message: "connection reset".to_string(),
                destination: Some(routes::SIGNUP),
            }
        );
        // The loading phase still resolved into a terminal outcome.
        assert_eq!(
            phases,
            vec![
                SubmitPhase::Validating,
                SubmitPhase::Loading,
                SubmitPhase::Done(outcome.clone())
            ]
        );
    }

    // ------------------------------------------------------------------
    // Login branch
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn login_success_navigates_to_upcoming_sessions() {
        let signup = FakeSignup::ok();
        let provider = FakeProvider::ok();

        let (outcome, _) = submit_recording(
            FormMode::Login,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Success {
                message: LOGIN_SUCCESS.to_string(),
                destination: Some(routes::UPCOMING_SESSIONS),
            }
        );
        assert_eq!(provider.sign_in_calls(), 1);
        assert_eq!(signup.calls(), 0);
    }

    #[tokio::test]
    async fn login_error_surfaces_provider_message_without_navigation() {
        let signup = FakeSignup::ok();
        let provider = FakeProvider::erroring("bad password");

        let (outcome, _) = submit_recording(
            FormMode::Login,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failure {
                message: "bad password".to_string(),
                destination: None,
            }
        );
    }

    #[tokio::test]
    async fn login_provider_fault_surfaces_message_without_navigation() {
        let signup = FakeSignup::ok();
        let provider = FakeProvider::failing("provider unreachable");

        let (outcome, _) = submit_recording(
            FormMode::Login,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failure {
                message: "provider unreachable".to_string(),
                destination: None,
            }
        );
    }

    #[tokio::test]
    async fn login_reply_with_neither_ok_nor_error_is_a_failure() {
        let signup = FakeSignup::ok();
        let provider = FakeProvider::with_result(SignInResult {
            ok: false,
            error: None,
        });

        let (outcome, _) = submit_recording(
            FormMode::Login,
            valid_credentials(),
            &signup,
            &provider,
        )
        .await;

        assert_eq!(
            outcome,
            SubmitOutcome::Failure {
                message: SIGN_IN_INCOMPLETE.to_string(),
                destination: None,
            }
        );
    }

    // ------------------------------------------------------------------
    // Phase trace invariants
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn loading_sits_strictly_between_start_and_outcome() {
        let cases = [
            (FormMode::SignUp, FakeSignup::ok(), FakeProvider::ok()),
            (
                FormMode::SignUp,
                FakeSignup::rejected(Some("Email taken")),
                FakeProvider::ok(),
            ),
            (
                FormMode::SignUp,
                FakeSignup::transport("offline"),
                FakeProvider::ok(),
            ),
            (FormMode::Login, FakeSignup::ok(), FakeProvider::ok()),
            (
                FormMode::Login,
                FakeSignup::ok(),
                FakeProvider::erroring("bad password"),
            ),
            (
                FormMode::Login,
                FakeSignup::ok(),
                FakeProvider::failing("unreachable"),
            ),
        ];

        for (mode, signup, provider) in &cases {
            let (outcome, phases) =
                submit_recording(*mode, valid_credentials(), signup, provider).await;

            assert_eq!(
                phases,
                vec![
                    SubmitPhase::Validating,
                    SubmitPhase::Loading,
                    SubmitPhase::Done(outcome.clone())
                ],
                "unexpected phase trace for {mode:?}"
            );
        }
    }
}
