#![allow(dead_code)]

use envsettings::DeriveSettingsEnum;

#[derive(DeriveSettingsEnum)]
union RawValue {
    number: u32,
    flag: bool,
}

fn main() {}
