pub mod mock_email_provider;

pub use mock_email_provider::MockEmailProvider;
