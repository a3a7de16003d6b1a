// navx/src/configs/initializer.rs
use log::{info, debug, warn};
use anyhow::{Error as AnyhowError};
use actix_web::{web};
use actix_session::{SessionMiddleware, storage::CookieSessionStore, config::PersistentSession};
use actix_web::cookie::{Key, SameSite};
use env_logger::Env;
use std::{env, time::Duration};
use crate::menu::SidebarModule;
use crate::registry::{module_count, register_sidebar_modules};
use crate::router::register_all_navx_routes;

#[derive(Debug, Clone)]
pub struct NavxConfig {
    pub session_secret: String,
    pub environment: String,
    pub log_level: String,
    pub session_timeout: Duration,
}

impl NavxConfig {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            session_secret: env::var("SESSION_SECRET")
                .unwrap_or_else(|_| {
                    if cfg!(debug_assertions) {
                        warn!("⚠️  SESSION_SECRET not set, using generated key - NOT suitable for production!");
                        String::new() // Will trigger key generation
                    } else {
                        panic!("SESSION_SECRET is required in production");
                    }
                }),
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("RUST_LOG")
                .unwrap_or_else(|_| "debug".to_string()),
            session_timeout: Duration::from_secs(
                env::var("SESSION_TIMEOUT")
                    .unwrap_or_else(|_| "86400".to_string())
                    .parse()
                    .unwrap_or(86400)
            ),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

fn load_session_key(config: &NavxConfig) -> Key {
    if config.session_secret.is_empty() {
        if cfg!(debug_assertions) {
            warn!("⚠️  Using generated session key - NOT suitable for production!");
            Key::generate()
        } else {
            panic!("SESSION_SECRET environment variable is required in production");
        }
    } else {
        if config.session_secret.len() < 64 {
            panic!("SESSION_SECRET must be at least 64 characters long");
        }
        Key::from(config.session_secret.as_bytes())
    }
}

fn create_session_middleware(config: &NavxConfig) -> SessionMiddleware<CookieSessionStore> {
    let secret_key = load_session_key(config);

    // Convert std::time::Duration to actix_web::cookie::time::Duration
    let session_ttl = actix_web::cookie::time::Duration::seconds(config.session_timeout.as_secs() as i64);

    SessionMiddleware::builder(
        CookieSessionStore::default(),
        secret_key
    )
    .cookie_name("navx_session".to_string())
    .cookie_secure(config.is_production())
    .cookie_http_only(true)
    .cookie_same_site(if config.is_production() {
        SameSite::Strict
    } else {
        SameSite::Lax
    })
    .session_lifecycle(
        PersistentSession::default()
            .session_ttl(session_ttl)
    )
    .build()
}

pub fn get_navx_config() -> NavxConfig {
    NavxConfig::from_env().unwrap_or_else(|e| {
        eprintln!("❌ navx configuration error: {}", e);
        std::process::exit(1);
    })
}

pub fn setup_navx_logging(config: &NavxConfig) {
    if env::var("NAVX_LOGGING_INITIALIZED").is_err() {
        let _ = env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level))
            .format_timestamp_millis()
            .try_init();

        env::set_var("NAVX_LOGGING_INITIALIZED", "true");
        info!("✅ navx logging initialized");
        info!("🔧 navx environment: {}", config.environment);
        debug!("🔍 navx debug logging active");
    }
}

pub fn get_navx_session_middleware(config: &NavxConfig) -> SessionMiddleware<CookieSessionStore> {
    create_session_middleware(config)
}

// Component-based service configuration for hosts that prefer it
pub fn configure_navx_services(cfg: &mut web::ServiceConfig) {
    let config = get_navx_config();
    cfg.app_data(web::Data::new(config));
    cfg.service(register_all_navx_routes());
}

/// Register the host's sidebar definitions. Call once during startup,
/// before the server accepts requests.
pub async fn navx_initialize(modules: Vec<SidebarModule>) -> Result<(), AnyhowError> {
    register_sidebar_modules(modules);
    info!("navx initialized with {} sidebar modules", module_count());
    Ok(())
}
