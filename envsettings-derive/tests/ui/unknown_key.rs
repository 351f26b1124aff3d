#![allow(dead_code)]

use envsettings::DeriveSettingsEnum;

#[derive(DeriveSettingsEnum)]
enum ApiSettings {
    #[setting(default = "https://api.example.com", encrypted)]
    ApiUrl,
}

fn main() {}
