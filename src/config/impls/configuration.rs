use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use regex::Regex;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;
use crate::tracker::structs::locality_rule::LocalityRule;

const LOG_LEVELS: [&str; 6] = ["off", "trace", "debug", "info", "warn", "error"];

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                request_interval: 15,
                numwant_default: 80,
                locality: vec![
                    LocalityRule { weight: 0, prefix: String::from("31.193.") },
                    LocalityRule { weight: 1, prefix: String::from("37.59.") },
                    LocalityRule { weight: 2, prefix: String::from("216.65.") },
                    LocalityRule { weight: 3, prefix: String::from("62.133.") },
                    LocalityRule { weight: 5, prefix: String::from("216.94.") },
                ],
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    real_ip: String::new(),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    threads: available_parallelism().map(|n| n.get() as u64).unwrap_or(1),
                }
            ),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => Ok(cfg),
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn save_from_config(config: &Configuration, path: &str) -> Result<(), ConfigurationError> {
        let config_toml = toml::to_string(config).map_err(ConfigurationError::SerializeError)?;
        Self::save_file(path, config_toml)
    }

    /// Loads and validates `path`.
    ///
    /// With `create` set, a missing or corrupt file is replaced by the
    /// defaults and an error is still returned so the operator can edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(&Configuration::init(), path) {
                    Ok(_) => {
                        eprintln!("Please edit {path}, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        Self::validate(&config).map_err(|e| CustomError::new(&e.to_string()))?;
        Ok(config)
    }

    pub fn validate(config: &Configuration) -> Result<(), ConfigurationError> {
        if !LOG_LEVELS.contains(&config.log_level.as_str()) {
            return Err(ConfigurationError::ValidationError(format!("unknown log_level \"{}\"", config.log_level)));
        }
        if config.tracker_config.request_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("request_interval must be above 0")));
        }

        let check_map: Vec<(String, String, &str)> = config.tracker_config.locality.iter()
            .map(|rule| (format!("[LOCALITY: weight {}]", rule.weight), rule.prefix.clone(), r"^(\d{1,3}\.){0,3}\d{0,3}$"))
            .collect();
        for (name, value, regex) in check_map {
            Self::validate_value(&name, &value, regex)?;
        }

        for server in config.http_server.iter() {
            if server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("[HTTP] bind_address \"{}\" is not a socket address", server.bind_address)));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(regex).map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        if value.is_empty() || !regex_check.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("{name} [:] Value: \"{value}\" [:] Regex: \"{regex_check}\"")));
        }
        Ok(())
    }
}
