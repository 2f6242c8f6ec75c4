//! Terminal color selection.

/// Decides whether to force colors on or off.
///
/// Flags win over the environment. `NO_COLOR` (any value) turns colors off,
/// `CLICOLOR_FORCE` set to anything but empty or `0` turns them on and
/// `CLICOLOR=0` turns them off. `None` leaves the choice to TTY detection.
///
/// See: <https://no-color.org/> and <https://bixense.com/clicolors/>
pub fn color_override<F>(force_color: bool, no_color: bool, var: F) -> Option<bool>
where
    F: Fn(&str) -> Option<String>,
{
    if force_color {
        return Some(true);
    }
    if no_color || var("NO_COLOR").is_some() {
        return Some(false);
    }
    if let Some(force) = var("CLICOLOR_FORCE") {
        return (!force.is_empty() && force != "0").then_some(true);
    }
    var("CLICOLOR").filter(|v| v == "0").map(|_| false)
}

/// Applies [`color_override`] for the process environment.
pub fn configure_colors(force_color: bool, no_color: bool) {
    let var = |name: &str| std::env::var_os(name).map(|v| v.to_string_lossy().into_owned());
    if let Some(enabled) = color_override(force_color, no_color, var) {
        colored::control::set_override(enabled);
    }
}
