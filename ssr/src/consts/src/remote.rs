use once_cell::sync::Lazy;
use reqwest::Url;

const DEFAULT_API_BASE: &str = "https://api.reels.app/v1/";
const DEFAULT_MEDIA_BASE: &str = "https://media.reels.app/";

fn parse_or_default(configured: Option<&str>, fallback: &'static str) -> Url {
    configured
        .and_then(|raw| Url::parse(raw).ok())
        .unwrap_or_else(|| Url::parse(fallback).expect("fallback url is valid"))
}

pub static API_BASE_URL: Lazy<Url> =
    Lazy::new(|| parse_or_default(option_env!("REELS_API_URL"), DEFAULT_API_BASE));

pub static MEDIA_BASE_URL: Lazy<Url> =
    Lazy::new(|| parse_or_default(option_env!("REELS_MEDIA_URL"), DEFAULT_MEDIA_BASE));
