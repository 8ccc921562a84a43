//! Exit code utilities and mappings

/// Get a human-readable description for an exit code
pub fn get_exit_code_description(exit_code: i32) -> &'static str {
    match exit_code {
        0 => "success",
        1 => "general error",
        2 => "shell builtin misuse",
        126 => "command invoked cannot execute",
        127 => "command not found",
        128 => "fatal git error",
        129 => "invalid usage",
        130 => "script terminated by Control-C",
        131..=255 => "terminated by signal",
        -1 => "terminated without exit code",
        _ => "error",
    }
}
