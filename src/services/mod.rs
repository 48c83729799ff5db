// Service module exports

pub mod layout;
pub mod pool;
pub mod settings;
pub mod time_axis;
pub mod timeline;
