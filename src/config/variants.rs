/// Game variants with a Lichess leaderboard.
///
/// `key` is the perf type used in upstream URLs and as the key of a
/// user's `perfs` block; `name` is what the dashboard shows.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantConfig {
    pub key: &'static str,
    pub name: &'static str,
}

impl VariantConfig {
    pub fn new(key: &'static str, name: &'static str) -> Self {
        Self { key, name }
    }
}

pub fn get_variants() -> Vec<VariantConfig> {
    vec![
        VariantConfig::new("bullet", "Bullet"),
        VariantConfig::new("blitz", "Blitz"),
        VariantConfig::new("rapid", "Rapid"),
        VariantConfig::new("classical", "Classical"),
        VariantConfig::new("correspondence", "Correspondence"),
        VariantConfig::new("chess960", "Chess960"),
        VariantConfig::new("kingOfTheHill", "King of the Hill"),
        VariantConfig::new("threeCheck", "Three-check"),
        VariantConfig::new("antichess", "Antichess"),
        VariantConfig::new("atomic", "Atomic"),
        VariantConfig::new("horde", "Horde"),
        VariantConfig::new("racingKings", "Racing Kings"),
        VariantConfig::new("crazyhouse", "Crazyhouse"),
    ]
}

/// Case-insensitive lookup by perf key
pub fn find_variant(key: &str) -> Option<VariantConfig> {
    get_variants()
        .into_iter()
        .find(|v| v.key.eq_ignore_ascii_case(key))
}
