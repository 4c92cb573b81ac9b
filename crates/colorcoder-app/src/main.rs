//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting ColorCoder");

    colorcoder_app::App::run(colorcoder_app::AppConfig::from_env())
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
