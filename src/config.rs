#[derive(Clone, Debug)]
pub struct PizzeriaConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_address: String,
}

impl PizzeriaConfig {
    pub fn from_env() -> Self {
        let database_url = std::env::var("DB_URI")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .unwrap_or_else(|_| "sqlite://app.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(15);

        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5555".to_string());

        Self {
            database_url,
            max_connections,
            bind_address,
        }
    }
}
