use once_cell::sync::Lazy;
use reqwest::Url;

pub static API_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost:8080/v1/").expect("local api url is valid"));

pub static MEDIA_BASE_URL: Lazy<Url> =
    Lazy::new(|| Url::parse("http://localhost:8080/media/").expect("local media url is valid"));
