pub mod settings;
pub mod variants;

pub use settings::{AppConfig, DashboardSettings, GatewaySettings, UpstreamSettings};
pub use variants::{find_variant, get_variants, VariantConfig};
