use std::fs;

use hangul_core::jamo::layout;
use hangul_core::settings;

pub fn layout_export() {
    print!("{}", layout::default_toml());
}

pub fn layout_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let map = die!(layout::parse_layout_toml(&content), "Error: {}");
    println!("OK: {} mappings", map.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: special_keys.extra={:?}, special_keys.option_is_special={}",
        s.special_keys.extra, s.special_keys.option_is_special
    );
}

/// Install custom layout/settings files before the first key is replayed.
pub fn load_custom(layout_file: Option<&str>, settings_file: Option<&str>) {
    if let Some(file) = layout_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(
            hangul_core::KeyLayout::init_custom(content),
            "Error loading layout: {}"
        );
    }
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error loading settings: {}");
    }
}
