use std::{
    path::PathBuf,
    time::Instant,
};
use clap::{
    Parser,
    Subcommand,
};
use adjcore::{
    instance::ResourceInstance,
    permission::Permissions,
    role::Roles,
};
use adjrbac::{
    lint::lint,
    Adjudicator,
};

#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[clap(long, value_name = "ADJRBAC_CATALOG", env = "ADJRBAC_CATALOG")]
    catalog: PathBuf,
    #[clap(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Decide a request and print the decision
    #[command(arg_required_else_help = true)]
    Authorize {
        resource: String,
        scope: String,
        #[clap(short, long = "role")]
        roles: Vec<String>,
    },
    /// Decide a request, then evaluate its condition formula against
    /// the given resource attributes
    #[command(arg_required_else_help = true)]
    Permit {
        resource: String,
        scope: String,
        #[clap(short, long = "role")]
        roles: Vec<String>,
        #[clap(short, long = "attr", value_name = "NAME=VALUE", value_parser = parse_attr)]
        attrs: Vec<(String, String)>,
    },
    /// Check the catalog for misconfiguration
    Lint,
}

fn parse_attr(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected NAME=VALUE, got {s:?}"))
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    stderrlog::new()
        .module(module_path!())
        .module("adjcore")
        .module("adjrbac")
        .verbosity((args.verbose as usize) + 1)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .unwrap();

    let catalog: Permissions = serde_json::from_str(
        &std::fs::read_to_string(&args.catalog)?,
    )?;

    match args.command {
        Commands::Authorize { resource, scope, roles } => {
            let decision = Adjudicator::from(catalog)
                .authorize(&Roles::from(roles), &resource, &scope)?;
            let verdict = if decision.authorized {
                "authorized"
            } else {
                "not authorized"
            };
            println!("{}", serde_json::to_string_pretty(&decision)?);
            println!(
                "roles {verdict} for scope {scope:?} on resource {resource:?}"
            );
        }
        Commands::Permit { resource, scope, roles, attrs } => {
            let instance = attrs.into_iter()
                .collect::<ResourceInstance>();
            let instant = Instant::now();
            let decision = Adjudicator::from(catalog)
                .authorize(&Roles::from(roles), &resource, &scope)?;
            let permit = if decision.permits(&instance) {
                "permitted"
            } else {
                "not permitted"
            };
            let elapsed = instant.elapsed();
            println!("{}", serde_json::to_string_pretty(&decision)?);
            println!(
                "roles {permit} to {scope:?} on resource {resource:?} \
                with the given attributes; decision took {elapsed:?}"
            );
        }
        Commands::Lint => {
            lint(&catalog)?;
            println!("catalog ok: {} permissions", catalog.len());
        }
    }

    Ok(())
}
