//! Constants used throughout the kimu CLI

/// Binary name shown in usage and version output
pub const CLI_NAME: &str = "kimu";

/// CLI version, taken from the package manifest
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project marker file; every project-scoped command requires it in the working directory
pub const KIMU_CONFIG_FILE: &str = "kimu.config.json";

pub const PACKAGE_JSON_FILE: &str = "package.json";
pub const SRC_DIR: &str = "src";
pub const DIST_DIR: &str = "dist";
pub const NODE_MODULES_DIR: &str = "node_modules";
pub const MODULES_DIR: &str = "modules";
pub const EXTENSIONS_DIR: &str = "extensions";
pub const MODULES_MANIFEST_FILE: &str = "modules-manifest.json";
pub const EXTENSIONS_MANIFEST_FILE: &str = "extensions-manifest.json";

/// Name of the framework core package, both on disk and in `node_modules`
pub const KIMU_CORE_PACKAGE: &str = "kimu-core";

/// Script shipped by kimu-core that uninstalls a module
pub const REMOVE_MODULE_SCRIPT: &str = "scripts/remove-module.js";

/// How many parent directories are searched for a sibling kimu-core checkout
pub const KIMU_CORE_SEARCH_DEPTH: usize = 3;

/// Repository cloned by `kimu create` when no template is given
pub const DEFAULT_PROJECT_TEMPLATE: &str = "https://github.com/UnicoVerso/kimu-core.git";

/// Registry advertised in freshly created project configs
pub const DEFAULT_REGISTRY_URL: &str = "https://github.com/unicoverso/kimu-modules";

/// Commit message used by `kimu create --git`
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit from KIMU-CLI";

/// Generator layout
pub mod generators {
    /// Per-type descriptor file name
    pub const CONFIG_FILE: &str = "config.json";
    /// Per-type directory holding template sources
    pub const TEMPLATES_DIR: &str = "templates";
    /// Templates root relative to the crate or install prefix
    pub const ROOT_DIR: &str = "templates/generators";
    /// Templates root relative to `<prefix>/share`
    pub const SHARE_DIR: &str = "kimu/templates/generators";
    /// Environment variable overriding the templates root
    pub const TEMPLATES_DIR_ENV: &str = "KIMU_TEMPLATES_DIR";
}

/// Defaults mirrored into `kimu.config.json` and the dev/serve commands
pub mod defaults {
    pub const KIMU_CORE_VERSION: &str = "^1.0.0";
    pub const TEMPLATE: &str = "basic";
    pub const BUILD_TARGET: &str = "es2020";
    pub const BUILD_FORMAT: &str = "esm";
    pub const MAIN_EXTENSION: &str = "kimu-home";
    pub const DEV_PORT: u16 = 3000;
    pub const SERVE_PORT: u16 = 8080;
    pub const HOST: &str = "localhost";
}

/// Name grammar shared by components and projects
pub mod validation {
    pub const NAME_PATTERN: &str = r"^[a-z0-9-]+$";
    pub const INVALID_COMPONENT_NAME: &str =
        "Component name must contain only lowercase letters, numbers, and hyphens";
    pub const INVALID_PROJECT_NAME: &str =
        "Project name must contain only lowercase letters, numbers, and hyphens";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
