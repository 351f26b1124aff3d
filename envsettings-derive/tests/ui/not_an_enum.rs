#![allow(dead_code)]

use envsettings::DeriveSettingsEnum;

#[derive(DeriveSettingsEnum)]
struct ApiSettings;

fn main() {}
