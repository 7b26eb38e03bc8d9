use contracts::system::auth::UserInfo;
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserInfo>,
}

impl AuthState {
    /// Dealer id of the signed-in user, empty for EVM staff and admins.
    pub fn dealer_id(&self) -> Option<String> {
        self.user.as_ref().and_then(|u| u.dealer_id.clone())
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|u| u.id.clone())
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore session from localStorage on mount.
    Effect::new(move |_| {
        if let (Some(token), Some(user)) = (storage::get_token(), storage::get_user()) {
            set_auth_state.set(AuthState {
                token: Some(token),
                user: Some(user),
            });
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a successful login in both localStorage and the context.
pub fn establish_session(set_auth_state: WriteSignal<AuthState>, token: String, user: UserInfo) {
    storage::save_token(&token);
    storage::save_user(&user);
    set_auth_state.set(AuthState {
        token: Some(token),
        user: Some(user),
    });
}

/// Clear the stored session and the context.
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;

    // do_logout installs the default state; signed-out means no token and
    // no role-scoped ids.
    #[test]
    fn default_state_is_signed_out() {
        let state = AuthState::default();
        assert!(state.token.is_none());
        assert!(state.user_id().is_none());
        assert!(state.dealer_id().is_none());
    }

    #[test]
    fn dealer_id_comes_from_the_user() {
        let state = AuthState {
            token: Some("t".into()),
            user: Some(UserInfo {
                id: "u1".into(),
                username: "staff".into(),
                full_name: None,
                role_raw: "Dealer Staff".into(),
                dealer_id: Some("d1".into()),
            }),
        };
        assert_eq!(state.user_id().as_deref(), Some("u1"));
        assert_eq!(state.dealer_id().as_deref(), Some("d1"));
    }
}
