use crate::Config;
use anyhow::{Context, Result};
use ron::{
    extensions::Extensions,
    ser::{to_string_pretty, PrettyConfig},
    Options,
};
use std::{
    ffi::OsStr,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use xdg::BaseDirectories;

const COMMENT_HEADER: &str = r"//  _   _ _
// | |_(_) | ___ _ __ ___
// | __| | |/ _ \ '__/ __|
// | |_| | |  __/ | | (__
//  \__|_|_|\___|_|  \___|
// Keys, groups, palettes, layouts, bar widgets and screens of the window manager.
// Check your changes with `tilerc-check`, export them with `tilerc-config --dump`.

";

/// Which format a config file is read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFileType {
    RonFile,
    TomlFile,
}

#[must_use]
pub fn check_file_type(path: &Path) -> ConfigFileType {
    if path.extension() == Some(OsStr::new("toml")) {
        ConfigFileType::TomlFile
    } else {
        ConfigFileType::RonFile
    }
}

/// Path of the RON config in the XDG config directory. Creates the directory
/// when missing.
///
/// # Errors
///
/// Errors if the XDG directories cannot be determined or created.
pub fn get_default_path() -> Result<PathBuf> {
    let path = BaseDirectories::with_prefix("tilerc")?;
    Ok(path.place_config_file("config.ron")?)
}

/// The config file in use: `config.ron`, else `config.toml`, else `None`.
///
/// # Errors
///
/// Errors if the XDG directories cannot be determined or created.
pub fn find_config_file() -> Result<Option<PathBuf>> {
    let ron_file = get_default_path()?;
    let toml_file = ron_file.with_extension("toml");
    if ron_file.exists() {
        Ok(Some(ron_file))
    } else if toml_file.exists() {
        Ok(Some(toml_file))
    } else {
        Ok(None)
    }
}

/// # Errors
///
/// Function will throw an error if `BaseDirectories` doesn't exist, if user doesn't have
/// permissions to place config.ron, if the config file cannot be read (access rights, malformed
/// file, etc.).
/// Function can also error from inability to save config.ron (if it is the first time running
/// tilerc).
pub(crate) fn load_config_file() -> Result<Config> {
    tracing::debug!("Loading config file");

    if let Some(path) = find_config_file()? {
        tracing::debug!("Config file '{}' found.", path.to_string_lossy());
        load_from_path(&path)
    } else {
        tracing::debug!("Config file not found. Using default config file.");
        let config = Config::default();
        write_to_file(&get_default_path()?, &config)?;
        Ok(config)
    }
}

/// Read a config from `path`, as TOML when the extension says so and as RON
/// otherwise. Fields missing from the file keep their default.
///
/// # Errors
///
/// Errors if the file cannot be read or does not parse.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    match check_file_type(path) {
        ConfigFileType::RonFile => {
            let ron = Options::default().with_default_extension(Extensions::IMPLICIT_SOME);
            Ok(ron.from_str(&contents)?)
        }
        ConfigFileType::TomlFile => Ok(toml::from_str(&contents)?),
    }
}

/// Loads configuration from either specified file (preferred) or default.
///
/// # Errors
///
/// Errors if file cannot be read. Indicates filesystem error
/// (inadequate permissions, disk full, etc.)
/// If a path is specified and does not exist, returns the read error.
pub fn check_config_file(fspath: Option<&str>, verbose: bool) -> Result<Config> {
    let config_filename = if let Some(fspath) = fspath {
        println!("\x1b[1;35mNote: Using file {fspath} \x1b[0m");
        PathBuf::from(fspath)
    } else if let Some(path) = find_config_file()? {
        path
    } else {
        let config = Config::default();
        write_to_file(&get_default_path()?, &config)?;
        return Ok(config);
    };

    if verbose {
        dbg!(&config_filename);
    }
    if check_file_type(&config_filename) == ConfigFileType::TomlFile {
        println!("\x1b[1;35mNote: Reading TOML. `tilerc-config --new` writes the RON equivalent.\x1b[0m");
    }
    load_from_path(&config_filename)
}

/// # Errors
/// This function errors when:
/// - serialization of the config fails
/// - writing to file fails
pub fn write_to_file(ron_file: &Path, config: &Config) -> Result<()> {
    let ron_pretty_conf = PrettyConfig::new()
        .depth_limit(3)
        .extensions(Extensions::IMPLICIT_SOME);
    let ron = to_string_pretty(&config, ron_pretty_conf)?;
    let ron_with_header = String::from(COMMENT_HEADER) + &ron;
    let mut file = File::create(ron_file)?;
    file.write_all(ron_with_header.as_bytes())?;
    tracing::info!("Wrote config to {}", ron_file.display());
    Ok(())
}
