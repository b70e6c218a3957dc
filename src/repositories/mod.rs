//! # Repository Layer
//!
//! 데이터 액세스 계층입니다. 서비스 계층은 [`users::UserDirectory`] trait에만 의존합니다.

pub mod users;

pub use users::{InMemoryUserDirectory, MongoUserDirectory, UserDirectory};
