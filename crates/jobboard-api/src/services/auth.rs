//! Login and registration

use std::sync::Arc;

use jobboard_core::models::{NewUser, UserResponse, UserRole};
use jobboard_core::AppError;
use jobboard_db::UserStore;
use validator::Validate;

use crate::auth::models::{AuthResponse, LoginRequest, RegisterRequest};
use crate::auth::password::{
    check_password_policy, dummy_password_hash, hash_password, verify_password,
};
use crate::auth::JwtService;
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

pub struct AuthService {
    users: Arc<dyn UserStore>,
    jwt: Arc<JwtService>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, jwt: Arc<JwtService>) -> Self {
        Self { users, jwt }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.db.users.clone(), state.auth.jwt.clone())
    }

    /// Unknown email and wrong password produce the same 401 after the same
    /// amount of Argon2 work.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, AppError> {
        let email = normalize_email(&request.email);

        let user = self.users.find_by_email(&email).await?;
        let verified = match &user {
            Some(user) => verify_password(&request.password, &user.password_hash)?,
            None => {
                let _ = verify_password(&request.password, dummy_password_hash());
                false
            }
        };

        let user = match user {
            Some(user) if verified => user,
            Some(user) => {
                tracing::debug!(user_id = %user.id, "Login attempt with wrong password");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
            None => {
                tracing::debug!("Login attempt for unknown email");
                return Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()));
            }
        };

        let token = self.jwt.issue(&user)?;
        tracing::info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    /// Create an applicant account and sign it in.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, AppError> {
        request.validate()?;

        if request.password != request.confirm_password {
            return Err(AppError::InvalidInput("Passwords do not match".to_string()));
        }
        check_password_policy(&request.password)?;

        let email = normalize_email(&request.email);
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let password_hash = hash_password(&request.password)?;
        // the store still reports Conflict if a concurrent registration wins
        let user = self
            .users
            .create_user(NewUser {
                email,
                password_hash,
                role: UserRole::Applicant,
            })
            .await?;

        let token = self.jwt.issue(&user)?;
        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
