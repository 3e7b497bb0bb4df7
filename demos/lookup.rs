use log::info;
use outcome::{ErrorInitializing, Outcome};
use std::collections::HashMap;

#[derive(Debug, ErrorInitializing)]
struct SettingError(anyhow::Error);

fn setting(settings: &HashMap<&str, &str>, key: &str) -> Outcome<u16, SettingError> {
    Outcome::from_optional(settings.get(key).copied(), || {
        SettingError(anyhow::anyhow!("setting [{}] is missing", key))
    })
    .try_map(|text| text.parse::<u16>())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let settings = HashMap::from([("port", "8080"), ("workers", "many")]);

    let port = setting(&settings, "port").recover(|| 80);
    info!("listening on port {}", port);

    match setting(&settings, "workers") {
        Outcome::Success(workers) => info!("using {} workers", workers),
        Outcome::Failure(SettingError(e)) => info!("falling back to one worker: {:#}", e),
    }

    let (port, workers) = setting(&settings, "port")
        .combine(|| setting(&settings, "workers").recover_with(|| Outcome::success(1)))
        .map_error(|SettingError(e)| e)
        .into_result()?;
    info!("final configuration: port={} workers={}", port, workers);

    Ok(())
}
