#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub template_glob: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .map_err(|e| anyhow::anyhow!("invalid PORT: {}", e))?;
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:news.db".into());
        let template_glob =
            std::env::var("TEMPLATE_GLOB").unwrap_or_else(|_| "templates/**/*.html".into());

        Ok(Self {
            host,
            port,
            database_url,
            template_glob,
        })
    }
}
