use crate::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 80;

/// Environment-driven application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Port for the HTTP health server.
    pub port: u16,

    /// Channel receiving welcome embeds for new members.
    pub welcome_channel_id: Option<u64>,
    /// Channel receiving daily birthday congratulations.
    pub birthday_channel_id: Option<u64>,
    /// Role granted automatically to new members.
    pub default_role_id: Option<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            port: match optional("PORT") {
                Some(value) => parse_port("PORT", &value)?,
                None => DEFAULT_PORT,
            },
            welcome_channel_id: optional_snowflake("CHANNEL_WELCOME")?,
            birthday_channel_id: optional_snowflake("CHANNEL_BIRTHDAY")?,
            default_role_id: optional_snowflake("ROLE_DEFAULT")?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn optional_snowflake(name: &str) -> Result<Option<u64>, ConfigError> {
    optional(name)
        .map(|value| parse_snowflake(name, &value))
        .transpose()
}

/// Parses a Discord snowflake. Zero is rejected since Discord never issues it.
pub fn parse_snowflake(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_snowflake() {
        let id = parse_snowflake("CHANNEL_WELCOME", "1309541209434214471").unwrap();
        assert_eq!(id, 1309541209434214471);
    }

    #[test]
    fn rejects_non_numeric_snowflake() {
        let result = parse_snowflake("CHANNEL_WELCOME", "invalid_channel_welcome");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "CHANNEL_WELCOME"
        ));
    }

    #[test]
    fn rejects_zero_snowflake() {
        assert!(parse_snowflake("ROLE_DEFAULT", "0").is_err());
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(parse_port("PORT", "70000").is_err());
        assert_eq!(parse_port("PORT", "8080").unwrap(), 8080);
    }
}
