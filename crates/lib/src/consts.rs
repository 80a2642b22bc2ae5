/// Overrides the directory script targets are resolved against.
pub const ROOT_ENV: &str = "VOVKPLC_ROOT";

/// Forces the detected platform (`windows` or `posix`).
pub const PLATFORM_ENV: &str = "VOVKPLC_PLATFORM";

/// Exit code reported when the shell itself could not be started.
pub const SPAWN_FAILURE_CODE: i32 = 127;
