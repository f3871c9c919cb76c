pub mod fake_admin_api;
pub mod fixtures;

pub use fake_admin_api::FakeAdminApi;
