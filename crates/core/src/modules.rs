//! Module-list parsing for the packaging metadata value.
//!
//! Applications declare the modules contributing annotation databases in a
//! single metadata string. The value is a list of module names separated by
//! commas, semicolons or whitespace; the framework's own module is always
//! appended so its database is loaded even when nothing is declared.

/// Module whose annotation database is always aggregated.
pub const DEFAULT_MODULE: &str = "needle";

/// Parse the metadata value into the ordered list of modules to aggregate.
///
/// An absent or blank value is valid and yields `[DEFAULT_MODULE]`. Duplicate
/// names are dropped, keeping first-seen order.
pub fn parse_module_list(value: Option<&str>) -> Vec<String> {
    let mut modules: Vec<String> = Vec::new();

    if let Some(value) = value {
        for name in value.split(|c: char| c == ',' || c == ';' || c.is_whitespace()) {
            if name.is_empty() {
                continue;
            }
            if !modules.iter().any(|m| m == name) {
                modules.push(name.to_string());
            }
        }
    }

    if !modules.iter().any(|m| m == DEFAULT_MODULE) {
        modules.push(DEFAULT_MODULE.to_string());
    }

    modules
}
