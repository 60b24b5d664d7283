use avalans_api::config::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    avalans_observability::init("items-api");

    let config = ServiceConfig::items_from_env()?;
    let app = avalans_api::app::build_items_app().await?;

    avalans_api::app::serve("items-api", &config, app).await
}
