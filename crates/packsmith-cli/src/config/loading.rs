use crate::cli::ConfigArgs;
use crate::config::{CliOverrides, CliSettings, ENV_PREFIX};
use crate::error::{CliError, Result};
use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde_json::{Map, Value};

impl CliSettings {
    /// Layer defaults, `PACKSMITH_*` environment variables and command-line
    /// flags.
    pub fn load(args: &ConfigArgs) -> Result<Self> {
        Self::figment(args).extract().map_err(|e| {
            CliError::InvalidArgument(format!("could not read build flags: {e}"))
        })
    }

    pub(crate) fn figment(args: &ConfigArgs) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX).only(&["prod", "analyze", "https"]))
            .merge(Serialized::defaults(CliOverrides::from_args(args)))
    }

    /// Write the flags into the caller's options object.
    ///
    /// `prod` and `analyze` become presence flags under `argv`; disabled
    /// HTTPS sets `useHttps: false`. Flags left at their defaults never touch
    /// the input, so a file that already says `useHttps: false` keeps it.
    pub fn apply_to(&self, input: Value) -> Result<Value> {
        if *self == Self::default() {
            return Ok(input);
        }

        let mut options = match input {
            Value::Null => Map::new(),
            Value::Object(map) => map,
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "options must be a JSON object, found {other}"
                )));
            }
        };

        if self.prod || self.analyze {
            let argv = options
                .entry("argv")
                .or_insert_with(|| Value::Object(Map::new()));
            if argv.is_null() {
                *argv = Value::Object(Map::new());
            }
            let Value::Object(argv) = argv else {
                return Err(CliError::InvalidArgument(
                    "`argv` in the options file must be an object".to_string(),
                ));
            };
            if self.prod {
                argv.insert("prod".to_string(), Value::Bool(true));
            }
            if self.analyze {
                argv.insert("analyze".to_string(), Value::Bool(true));
            }
        }

        if !self.https {
            options.insert("useHttps".to_string(), Value::Bool(false));
        }

        Ok(Value::Object(options))
    }
}

impl CliOverrides {
    pub(crate) fn from_args(args: &ConfigArgs) -> Self {
        Self {
            prod: args.prod.then_some(true),
            analyze: args.analyze.then_some(true),
            https: args.no_https.then_some(false),
        }
    }
}
