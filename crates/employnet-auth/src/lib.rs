//! # employnet-auth
//!
//! Authentication for Employ-Net. The platform never stores credentials;
//! it verifies bearer tokens issued by the managed identity provider,
//! resolves roles through the provider's user API, and checks HMAC
//! signatures on inbound webhooks.

pub mod identity;
pub mod jwt;
pub mod webhook;

pub use identity::{HttpIdentityProvider, IdentityProvider, StaticIdentityProvider};
pub use jwt::{Claims, JwtDecoder};
pub use webhook::WebhookVerifier;
