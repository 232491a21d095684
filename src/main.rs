#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("ragchat=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing() {}

fn main() {
    init_tracing();
    tracing::info!("starting chat widget");
    dioxus::launch(ragchat::ui::App);
}
