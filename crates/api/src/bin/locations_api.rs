use avalans_api::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    avalans_observability::init("locations-api");

    let config = ServiceConfig::locations_from_env()?;
    let app = avalans_api::app::build_locations_app().await?;

    avalans_api::app::serve("locations-api", &config, app).await
}
