//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub fn default_config_toml() -> String {
    r##"# keychord configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[recorder]
# Clicks this many units outside the recorder still count as inside.
# click_margin = 3.0     # 0-50

[conflicts]
# Reject Option+key and Option+Shift+key (macOS will not register them).
# disallow_option_only = true
# Shortcuts that can never be recorded.
# disallowed = ["Cmd+Q"]
# Shortcuts the operating system already uses. Recording one asks first.
# system_reserved = [
#   "Cmd+Tab", "Cmd+Shift+Tab", "Cmd+Space", "Ctrl+Space",
#   "Cmd+Shift+3", "Cmd+Shift+4", "Cmd+Shift+5", "Cmd+Option+Escape",
# ]

# Menu commands of the host application. A recorded shortcut that matches
# one of these is refused with the item's title.
# [[menu.items]]
# title = "Quit"
# shortcut = "Cmd+Q"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
