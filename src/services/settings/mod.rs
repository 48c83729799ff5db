// Settings service
// Persistence of timeline settings

mod service;

pub use service::SettingsService;
