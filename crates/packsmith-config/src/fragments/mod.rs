//! Pure builders, one per slice of the final config.
//!
//! None of these depend on each other; [`compose`](crate::compose) stitches
//! their results together.

mod rules;
mod settings;

pub use rules::{rules_for_scripts, rules_for_styles, Enforce, LoaderUse, ModuleRule};
pub use settings::{
    common_settings, define_entry, define_output, dev_server_settings, CommonSettings,
    DevServerSettings, Mode, OutputSettings, PerformanceHints, PerformanceSettings,
    ResolveSettings, SourceMapStyle,
};
