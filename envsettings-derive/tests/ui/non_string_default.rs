#![allow(dead_code)]

use envsettings::DeriveSettingsEnum;

#[derive(DeriveSettingsEnum)]
enum DatabaseSettings {
    #[setting(default = 5432, log)]
    PostgresPort,
}

fn main() {}
