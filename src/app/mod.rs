//! Application entry point wiring egui/eframe to launch the PostPack UI.

use anyhow::{Context, Result};
use eframe::egui;
use egui_phosphor::Variant;

use crate::mvu::Services;
use crate::net::csrf::CsrfToken;
use crate::net::{SiteClient, SiteConfig};
use crate::ui::PostPackApp;

/// Environment variable carrying a raw CSRF token.
pub const CSRF_TOKEN_ENV: &str = "POSTPACK_CSRF_TOKEN";

/// Environment variable carrying a browser cookie string to read the
/// `csrftoken` cookie from.
pub const COOKIES_ENV: &str = "POSTPACK_COOKIES";

/// Build the site collaborators from the environment.
pub fn services_from_env() -> Result<Services> {
    let site = SiteConfig::from_env()?;
    let csrf = csrf_from_env();
    if csrf.is_none() {
        tracing::info!("no CSRF token configured; sort updates may be rejected");
    }

    let client = SiteClient::new(site, csrf).context("failed to build site client")?;
    Ok(Services::new(client))
}

/// Prefer an explicit token; otherwise pick it out of a cookie string.
fn csrf_from_env() -> Option<CsrfToken> {
    if let Ok(token) = std::env::var(CSRF_TOKEN_ENV)
        && !token.trim().is_empty()
    {
        return Some(CsrfToken::new(token.trim()));
    }
    std::env::var(COOKIES_ENV)
        .ok()
        .and_then(|cookies| CsrfToken::from_cookies(&cookies))
}

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run() -> eframe::Result<()> {
    let services = match services_from_env() {
        Ok(services) => services,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            std::process::exit(1);
        }
    };

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PostPack",
        options,
        Box::new(|cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(PostPackApp::new(services)))
        }),
    )
}
