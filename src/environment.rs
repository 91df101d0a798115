/// Hosted API regions with a fixed base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    #[default]
    Production,
    ProductionEu,
    ProductionAp,
}

impl Environment {
    pub const fn base_url(self) -> &'static str {
        match self {
            Environment::Production => "https://api.merge.dev/api",
            Environment::ProductionEu => "https://api-eu.merge.dev/api",
            Environment::ProductionAp => "https://api-ap.merge.dev/api",
        }
    }
}
