// Configuration constants for Tags Drive
// This module centralizes all magic numbers and hardcoded strings to improve maintainability

/// Application configuration constants
pub mod app {
    /// Name of the application data directory
    pub const DATA_DIR_NAME: &str = "Tags_Drive";

    /// Settings file name
    pub const SETTINGS_FILENAME: &str = "settings.json";

    /// Environment variable overriding the settings file location
    pub const SETTINGS_ENV_VAR: &str = "TAGS_DRIVE_SETTINGS";
}

/// Drive-related configuration constants
pub mod drive {
    /// Name of the drive mounted when no settings file exists
    pub const DEFAULT_NAME: &str = "Tags";

    /// Root token of the default drive
    pub const DEFAULT_ROOT: &str = "Tags:";

    /// Hierarchy separator used inside tag paths
    pub const DEFAULT_SEPARATOR: char = '/';

    /// Separator a host may substitute right after the drive root.
    /// Inside tag names it is an ordinary character.
    pub const NATIVE_SEPARATOR: char = '\\';
}

/// Tag-related configuration constants
pub mod tags {
    /// Maximum allowed length for a single tag name (one path segment)
    pub const MAX_TAG_LENGTH: usize = 50;
}

/// Shell configuration constants
pub mod shell {
    /// Prompt suffix printed after the current location
    pub const PROMPT_SUFFIX: &str = "> ";

    /// Flag requesting recursive listing
    pub const RECURSE_FLAG: &str = "-r";

    /// Flag introducing a depth limit
    pub const DEPTH_FLAG: &str = "-d";

    /// Matches one argument: either a double-quoted string or a run of non-space characters
    pub const ARGUMENT_PATTERN: &str = r#""([^"]*)"|(\S+)"#;
}

/// Regex group indices
pub mod regex {
    /// First capture group index
    pub const GROUP_1: usize = 1;

    /// Second capture group index
    pub const GROUP_2: usize = 2;
}

/// Common test values (for test files only)
#[cfg(test)]
pub mod test_values {
    pub const GORDON_FREEMAN: &str = "Tags:/Author/Gordon Freeman";
    pub const ADRIAN_SHEPHARD: &str = "Tags:/Author/Adrian Shephard";
    pub const ADRIAN_SHEPHARD_OTHER: &str = "Tags:/Author/Adrian Shephard/Other";
    pub const THE_G_MAN: &str = "Tags:/People/The G-Man";

    /// Seed used by the repository, drive and command tests
    pub const SCENARIO_TAGS: &[&str] = &[GORDON_FREEMAN, ADRIAN_SHEPHARD, ADRIAN_SHEPHARD_OTHER, THE_G_MAN];
}
