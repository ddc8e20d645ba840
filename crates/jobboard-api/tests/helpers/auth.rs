use super::TestApp;
use jobboard_api::auth::password::hash_password;
use jobboard_core::models::{NewUser, User, UserRole};
use jobboard_db::UserStore;
use uuid::Uuid;

pub const TEST_PASSWORD: &str = "TestPassword123!";

/// A seeded account and a bearer token for it.
pub struct TestUser {
    pub user_id: Uuid,
    pub email: String,
    pub token: String,
}

impl TestUser {
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

async fn create_user(app: &TestApp, email: &str, role: UserRole) -> TestUser {
    let user: User = app
        .db
        .create_user(NewUser {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("Failed to hash password"),
            role,
        })
        .await
        .expect("Failed to create test user");
    let token = app.state.auth.jwt.issue(&user).expect("Failed to issue token");
    TestUser {
        user_id: user.id,
        email: user.email,
        token,
    }
}

pub async fn create_admin(app: &TestApp) -> TestUser {
    create_user(app, "admin@example.com", UserRole::Admin).await
}

pub async fn create_applicant(app: &TestApp, email: &str) -> TestUser {
    create_user(app, email, UserRole::Applicant).await
}
