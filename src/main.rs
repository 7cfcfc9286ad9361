use anyhow::Result;
use chrono::Local;
use clap::{App as Cli, Arg, ArgMatches, SubCommand};
use daily_screening::{
    app::App,
    config::Config,
    error::AppError,
    logger::{CustomLogger, LogBuffer},
    state::status_text,
    store::{FileStore, SettingsStore},
};
use log::LevelFilter;

fn main() -> Result<()> {
    let matches = Cli::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Use a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Include debug entries in the log panel"),
        )
        .subcommand(
            SubCommand::with_name("profile")
                .about("Update the stored profile")
                .arg(
                    Arg::with_name("first-name")
                        .long("first-name")
                        .value_name("NAME")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("last-name")
                        .long("last-name")
                        .value_name("NAME")
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("email")
                        .long("email")
                        .value_name("USERNAME")
                        .help("Chapman username, without @chapman.edu")
                        .takes_value(true),
                ),
        )
        .subcommand(SubCommand::with_name("status").about("Print the latest screening result"))
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    let log = LogBuffer::new();
    let level = if matches.is_present("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CustomLogger::install(level, log.clone()).map_err(|e| AppError::Logger(e.to_string()))?;

    match matches.subcommand() {
        ("profile", Some(args)) => update_profile(&config, args),
        ("status", Some(_)) => print_status(&config),
        _ => App::start(config, log),
    }
}

fn update_profile(config: &Config, args: &ArgMatches) -> Result<()> {
    let mut store = FileStore::new(config.directory()?);
    let mut settings = store.load()?;
    if let Some(value) = args.value_of("first-name") {
        settings.profile.first_name = value.trim().to_string();
    }
    if let Some(value) = args.value_of("last-name") {
        settings.profile.last_name = value.trim().to_string();
    }
    if let Some(value) = args.value_of("email") {
        settings.profile.email = value.trim().to_string();
    }
    store.save(&settings)?;

    if settings.profile.is_complete() {
        println!("Profile saved for {}", settings.profile.full_name());
    } else {
        println!("Profile saved, but it is incomplete");
    }
    Ok(())
}

fn print_status(config: &Config) -> Result<()> {
    let store = FileStore::new(config.directory()?);
    let settings = store.load()?;
    println!(
        "{}",
        status_text(&settings.profile, &settings.survey, &Local)
    );
    Ok(())
}
