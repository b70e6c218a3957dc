pub mod credential_service;

pub use credential_service::CredentialService;
