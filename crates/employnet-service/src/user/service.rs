//! Local user rows mirroring the identity provider.
//!
//! Users are provisioned lazily on first authenticated request and kept
//! in sync through the provider's lifecycle webhooks. The local row owns
//! the points balance; the provider owns identity and role.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use employnet_auth::IdentityProvider;
use employnet_auth::jwt::Claims;
use employnet_core::error::AppError;
use employnet_core::result::AppResult;
use employnet_core::types::pagination::{PageRequest, PageResponse};
use employnet_database::repositories::user::UserRepository;
use employnet_entity::user::model::CreateUser;
use employnet_entity::user::{User, UserRole};

use crate::context::RequestContext;

/// Manages local user rows.
#[derive(Debug, Clone)]
pub struct UserService {
    users: Arc<UserRepository>,
    identity: Arc<dyn IdentityProvider>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>, identity: Arc<dyn IdentityProvider>) -> Self {
        Self { users, identity }
    }

    /// Resolve the local user for a verified token, provisioning the row
    /// on first sight. Deactivated accounts are rejected.
    pub async fn ensure_user(&self, claims: &Claims) -> AppResult<User> {
        if let Some(user) = self.users.find_by_subject(&claims.sub).await? {
            if !user.is_active {
                return Err(AppError::authentication("Account is deactivated"));
            }
            return Ok(user);
        }

        // First request from this subject. Role comes from the provider;
        // if the lookup fails the user still gets in as a member.
        let role = match self.identity.fetch_role(&claims.sub).await {
            Ok(role) => role,
            Err(e) => {
                warn!(subject = %claims.sub, error = %e, "Role lookup failed, defaulting to member");
                UserRole::Member
            }
        };

        let user = self
            .users
            .create(&CreateUser {
                subject: claims.sub.clone(),
                email: claims.email.clone(),
                display_name: claims.name.clone(),
                role,
            })
            .await?;

        info!(subject = %claims.sub, user_id = %user.id, "Provisioned new user");
        Ok(user)
    }

    /// Provision a user row from an identity-provider lifecycle event.
    ///
    /// Already-provisioned subjects are left untouched; `ensure_user`
    /// may have raced the webhook delivery.
    pub async fn provision(&self, data: CreateUser) -> AppResult<User> {
        if let Some(user) = self.users.find_by_subject(&data.subject).await? {
            return Ok(user);
        }
        let user = self.users.create(&data).await?;
        info!(subject = %user.subject, user_id = %user.id, "Provisioned user from lifecycle event");
        Ok(user)
    }

    /// Fetch the current user's own row.
    pub async fn me(&self, ctx: &RequestContext) -> AppResult<User> {
        self.users
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// List all users (admin view).
    pub async fn list_all(
        &self,
        ctx: &RequestContext,
        page: &PageRequest,
    ) -> AppResult<PageResponse<User>> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        self.users.find_all(page).await
    }

    /// Fetch one user by ID (admin view).
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> AppResult<User> {
        if !ctx.is_admin() {
            return Err(AppError::authorization("Admin role required"));
        }
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }

    /// Apply a role change from an identity-provider lifecycle event.
    pub async fn sync_role(&self, subject: &str, role: UserRole) -> AppResult<()> {
        let Some(user) = self.users.find_by_subject(subject).await? else {
            // Not provisioned yet; the role will be picked up on first login.
            return Ok(());
        };
        self.users.update_role(user.id, role).await?;
        info!(%subject, %role, "Synced role from identity provider");
        Ok(())
    }

    /// Deactivate a user after a provider deletion event.
    pub async fn deactivate(&self, subject: &str) -> AppResult<()> {
        if self.users.deactivate(subject).await? {
            info!(%subject, "Deactivated user");
        }
        Ok(())
    }
}
