#[cfg(test)]
mod tests {
    use crate::cli::ConfigArgs;
    use crate::config::CliSettings;
    use figment::Jail;
    use serde_json::json;

    #[test]
    fn defaults_without_flags_or_env() {
        Jail::expect_with(|_jail| {
            let settings = CliSettings::load(&ConfigArgs::default()).unwrap();
            assert_eq!(settings, CliSettings::default());
            assert!(settings.https);
            Ok(())
        });
    }

    #[test]
    fn env_sets_flags() {
        Jail::expect_with(|jail| {
            jail.set_env("PACKSMITH_PROD", "true");
            jail.set_env("PACKSMITH_HTTPS", "false");
            let settings = CliSettings::load(&ConfigArgs::default()).unwrap();
            assert!(settings.prod);
            assert!(!settings.analyze);
            assert!(!settings.https);
            Ok(())
        });
    }

    #[test]
    fn cli_overrides_env() {
        Jail::expect_with(|jail| {
            jail.set_env("PACKSMITH_HTTPS", "true");
            let args = ConfigArgs {
                no_https: true,
                analyze: true,
                ..ConfigArgs::default()
            };
            let settings = CliSettings::load(&args).unwrap();
            assert!(!settings.https);
            assert!(settings.analyze);
            Ok(())
        });
    }

    #[test]
    fn unrelated_env_is_ignored() {
        Jail::expect_with(|jail| {
            jail.set_env("PACKSMITH_LOG", "debug");
            assert!(CliSettings::load(&ConfigArgs::default()).is_ok());
            Ok(())
        });
    }

    #[test]
    fn bad_env_value_is_reported() {
        Jail::expect_with(|jail| {
            jail.set_env("PACKSMITH_PROD", "maybe");
            assert!(CliSettings::load(&ConfigArgs::default()).is_err());
            Ok(())
        });
    }

    #[test]
    fn defaults_leave_input_untouched() {
        let input = json!({ "useHttps": false, "entries": { "a": "./a.js" } });
        let applied = CliSettings::default().apply_to(input.clone()).unwrap();
        assert_eq!(applied, input);
        assert_eq!(CliSettings::default().apply_to(json!(null)).unwrap(), json!(null));
    }

    #[test]
    fn flags_land_in_argv() {
        let settings = CliSettings {
            prod: true,
            analyze: true,
            https: false,
        };
        let applied = settings
            .apply_to(json!({ "argv": { "other": 1 }, "useHttps": true }))
            .unwrap();
        assert_eq!(
            applied,
            json!({
                "argv": { "other": 1, "prod": true, "analyze": true },
                "useHttps": false
            })
        );
    }

    #[test]
    fn null_input_becomes_object() {
        let settings = CliSettings {
            prod: true,
            ..CliSettings::default()
        };
        assert_eq!(
            settings.apply_to(json!(null)).unwrap(),
            json!({ "argv": { "prod": true } })
        );
    }

    #[test]
    fn non_object_argv_is_rejected() {
        let settings = CliSettings {
            analyze: true,
            ..CliSettings::default()
        };
        assert!(settings.apply_to(json!({ "argv": "--prod" })).is_err());
        assert!(settings.apply_to(json!([1, 2])).is_err());
    }
}
