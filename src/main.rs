#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use freight_dashboard::{
    app,
    config::DashboardConfig,
    infra::api::ApiClient,
    util::{
        platform::wayland_overrides,
        version::{version_label, APP_NAME},
    },
};

fn main() {
    for (name, value) in wayland_overrides(|name| std::env::var(name).is_ok()) {
        std::env::set_var(name, value);
    }

    let (config, config_error) = match DashboardConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };

    if let Err(err) = dioxus::logger::init(config.log_level.as_tracing()) {
        eprintln!("Failed to initialise logging: {err}");
    }
    if let Some(err) = config_error {
        tracing::warn!("Ignoring invalid configuration, using defaults: {err}");
    }
    tracing::info!(version = %version_label(), api = %config.api_base_url, "starting {APP_NAME}");

    let client = match ApiClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!("Failed to initialise API client: {err}");
            std::process::exit(1);
        }
    };

    let builder = LaunchBuilder::new().with_context(config).with_context(client);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_NAME)
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}
