mod fake_provider;

pub use fake_provider::IFakeProvider;
