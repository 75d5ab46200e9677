//! Reusable file contents

#![allow(dead_code)]

pub const BASE_TOML: &str = "[shared]\nlog_level = \"info\"";

pub const MAIN_TOML: &str = "[server]\nport = 8080\n";

pub const TRANSIENT_TOML: &str = "[cache]\nttl = 60\n";

/// What a target looks like after `base` has been appended once
pub fn appended(target: &str, base_name: &str, base: &str) -> String {
    format!("{target}\n# Begining of {base_name}\n{base}\n# End of {base_name}")
}
