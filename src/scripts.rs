//! Built-in relocation targets.
//! The candidate list is compiled in and is not configurable; only the root
//! and the archive directory name can be overridden.

/// Project root the legacy scripts were left in.
pub const DEFAULT_ROOT: &str = "/workspaces/Nexus-Community-Project";

/// Archive subdirectory (relative to the root).
pub const DEFAULT_TARGET_DIR: &str = "build-scripts";

/// Legacy scripts to relocate, in reporting order.
pub const LEGACY_SCRIPTS: &[&str] = &[
    "cleanup-old-files.sh",
    "create-components-part1.sh",
    "deploy-prebuilt.sh",
    "emergency-create-components.sh",
    "final-fix.sh",
    "fix-all-components.sh",
    "fix-all-glasscard-imports.sh",
    "fix-all-imports-part1.sh",
    "fix-all-imports.sh",
    "fix-and-push.sh",
    "fix-dictionary.sh",
    "fix-extensions.sh",
    "fix-globe-import.sh",
    "fix-imports-push.sh",
    "fix-main.sh",
    "fix-neonbutton-imports.sh",
    "fix-ui-extensions.sh",
    "force-main.sh",
    "merge-to-main.sh",
    "organize-and-run.sh",
    "push-accentcolor-fix.sh",
    "push-all-glasscard-fixes.sh",
    "push-browser-fix.sh",
    "push-case-fix.sh",
    "push-dashboard-discord-fix.sh",
    "push-error-boundary.sh",
    "push-fix.sh",
    "push-glasscard-fix.sh",
    "push-homepage-fix.sh",
    "push-launcher-fix.sh",
    "push-neonbutton-fix.sh",
    "push-performance-fix.sh",
    "push-quickactions-fix.sh",
    "push-storage-fix.sh",
    "push-ui-components.sh",
    "rename-files.sh",
    "resolve-and-push.sh",
];
