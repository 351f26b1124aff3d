#![allow(dead_code)]

use envsettings::DeriveSettingsEnum;

#[derive(DeriveSettingsEnum)]
enum ApiSettings {
    ApiUrl,
    ApiKey(String),
}

fn main() {}
