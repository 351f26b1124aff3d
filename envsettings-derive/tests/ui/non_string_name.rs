#![allow(dead_code)]

use envsettings::DeriveSettingsEnum;

#[derive(DeriveSettingsEnum)]
enum DatabaseSettings {
    #[setting(name = POSTGRES_HOST)]
    Host,
}

fn main() {}
