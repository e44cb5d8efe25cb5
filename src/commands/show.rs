//! Show command - Prints the resolved settings.

use serde_json::{Map, Value};

use crate::cli::{OutputFormat, ShowArgs};
use crate::config::{
    Settings, ENV_ALLOWED_HOSTS, ENV_MEDIA_ROOT, ENV_MYSQL_DATABASE, ENV_MYSQL_HOST,
    ENV_MYSQL_PASSWORD, ENV_MYSQL_PORT, ENV_MYSQL_USER, ENV_SECRET_KEY, ENV_STATIC_ROOT,
    HOSTS_SEPARATOR, REDACTED,
};
use crate::errors::SettingsResult;

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> SettingsResult<()> {
    println!("{}", render(&args, settings)?);
    Ok(())
}

/// Render `settings` in the requested format.
pub fn render(args: &ShowArgs, settings: &Settings) -> SettingsResult<String> {
    match args.format {
        OutputFormat::Json => render_json(settings, args.reveal_secrets),
        OutputFormat::Env => Ok(render_env(settings, args.reveal_secrets)),
    }
}

fn render_json(settings: &Settings, reveal_secrets: bool) -> SettingsResult<String> {
    let bindings: Map<String, Value> = settings
        .to_bindings(reveal_secrets)
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect();

    Ok(serde_json::to_string_pretty(&bindings)?)
}

fn render_env(settings: &Settings, reveal_secrets: bool) -> String {
    let secret = |value: &str| {
        if reveal_secrets {
            value.to_string()
        } else {
            REDACTED.to_string()
        }
    };

    let separator = HOSTS_SEPARATOR.to_string();
    let mut lines = vec![
        (ENV_SECRET_KEY, secret(settings.secret_key())),
        (
            ENV_ALLOWED_HOSTS,
            settings.allowed_hosts.join(separator.as_str()),
        ),
    ];

    if let Some(db) = settings.database() {
        lines.extend([
            (ENV_MYSQL_DATABASE, db.name.clone()),
            (ENV_MYSQL_USER, db.user.clone()),
            (ENV_MYSQL_PASSWORD, secret(&db.password)),
            (ENV_MYSQL_HOST, db.host.clone()),
            (ENV_MYSQL_PORT, db.port.clone()),
        ]);
    }

    lines.extend([
        (ENV_STATIC_ROOT, settings.static_root.display().to_string()),
        (ENV_MEDIA_ROOT, settings.media_root.display().to_string()),
    ]);

    lines
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, quote_env_value(&value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Double-quote `value` so dotenv loaders read it back verbatim.
fn quote_env_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '$' => quoted.push_str("\\$"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::BaseSettings;

    fn settings() -> Settings {
        let env = HashMap::from([
            ("SECRET_KEY".to_string(), "k3y".to_string()),
            ("ALLOWED_HOSTS".to_string(), "a,b".to_string()),
        ]);
        Settings::resolve(&BaseSettings::default(), &env)
    }

    #[test]
    fn test_render_env_redacted() {
        let args = ShowArgs {
            format: OutputFormat::Env,
            reveal_secrets: false,
        };
        let output = render(&args, &settings()).unwrap();

        assert_eq!(
            output,
            "SECRET_KEY=\"[REDACTED]\"\n\
             ALLOWED_HOSTS=\"a,b\"\n\
             MYSQL_DATABASE=\"todobackend\"\n\
             MYSQL_USER=\"todo\"\n\
             MYSQL_PASSWORD=\"[REDACTED]\"\n\
             MYSQL_HOST=\"localhost\"\n\
             MYSQL_PORT=\"3306\"\n\
             STATIC_ROOT=\"/public/static\"\n\
             MEDIA_ROOT=\"/public/media\""
        );
    }

    #[test]
    fn test_quote_env_value() {
        assert_eq!(quote_env_value("plain"), "\"plain\"");
        assert_eq!(
            quote_env_value("a \"b\" $c \\d\ne"),
            "\"a \\\"b\\\" \\$c \\\\d\\ne\""
        );
    }

    #[test]
    fn test_render_env_reads_back_through_dotenv() {
        let env = HashMap::from([
            ("SECRET_KEY".to_string(), "abc def #xyz".to_string()),
            ("ALLOWED_HOSTS".to_string(), "a.example.com,b.example.com".to_string()),
            ("MYSQL_PASSWORD".to_string(), "p'w\"d$HOME\\x".to_string()),
            ("MYSQL_HOST".to_string(), "db".to_string()),
            ("STATIC_ROOT".to_string(), "/srv/my static".to_string()),
        ]);
        let original = Settings::resolve(&BaseSettings::default(), &env);

        let args = ShowArgs {
            format: OutputFormat::Env,
            reveal_secrets: true,
        };
        let output = render(&args, &original).unwrap();

        let parsed: HashMap<String, String> = dotenvy::from_read_iter(output.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(parsed["SECRET_KEY"], "abc def #xyz");
        assert_eq!(parsed["MYSQL_PASSWORD"], "p'w\"d$HOME\\x");

        let reloaded = Settings::resolve(&BaseSettings::default(), &parsed);
        assert_eq!(reloaded, original);
    }

    #[test]
    fn test_render_json_keeps_binding_order() {
        let args = ShowArgs {
            format: OutputFormat::Json,
            reveal_secrets: false,
        };
        let output = render(&args, &settings()).unwrap();

        let positions: Vec<usize> = [
            "DEBUG",
            "SECRET_KEY",
            "ALLOWED_HOSTS",
            "DATABASES",
            "STATIC_ROOT",
            "MEDIA_ROOT",
        ]
        .iter()
        .map(|name| output.find(&format!("\"{}\":", name)).unwrap())
        .collect();

        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_render_json_revealed() {
        let args = ShowArgs {
            format: OutputFormat::Json,
            reveal_secrets: true,
        };
        let output = render(&args, &settings()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["DEBUG"], true);
        assert_eq!(value["SECRET_KEY"], "k3y");
        assert_eq!(value["ALLOWED_HOSTS"], serde_json::json!(["a", "b"]));
        assert_eq!(value["DATABASES"]["default"]["PASSWORD"], "password");
        assert_eq!(value["STATIC_ROOT"], "/public/static");
    }
}
