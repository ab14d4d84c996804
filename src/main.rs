use anyhow::{Context, Result};
use clap::Parser;

use next_tag::cli::{run_tag_workflow, TagSource};
use next_tag::config::{self, ConfigOverrides, LogFormat};
use next_tag::domain::{Bump, Format};
use next_tag::git::Git2Repository;
use next_tag::{logging, ui};

#[derive(clap::Parser)]
#[command(
    name = "next-tag",
    version,
    about = "Compute the next release tag from the current one",
    after_help = "The current tag is taken from TAG, --from-git or stdin, in that order.\n\
                  Without any of them the first release is generated: <prefix>0.0.0 or <prefix>0.0.\n\
                  The next tag is printed to stdout."
)]
struct Args {
    /// Current tag, e.g. v1.2.3
    #[arg(conflicts_with = "from_git")]
    tag: Option<String>,

    #[arg(
        short,
        long,
        env = "NEXT_TAG_BUMP",
        help = "Bump to apply: patch, minor, major or none [default: patch]. \
                With the majorminor format, patch acts as minor"
    )]
    bump: Option<Bump>,

    #[arg(
        short,
        long,
        env = "NEXT_TAG_FORMAT",
        help = "Tag format: semver, majorminor or auto [default: auto]. \
                Auto infers it from the current tag and defaults to semver"
    )]
    format: Option<Format>,

    #[arg(long, env = "NEXT_TAG_PREFIX", help = "Prefix replacing the detected one")]
    prefix: Option<String>,

    #[arg(short, long, env = "NEXT_TAG_CONFIG", help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Read the current tag from the repository tags")]
    from_git: bool,

    #[arg(long, default_value = ".", help = "Path of the git repository")]
    repo: String,

    #[arg(long, help = "Create the next tag at HEAD")]
    create: bool,

    #[arg(long, help = "Create the next tag and push it to the remote")]
    push: bool,

    #[arg(long, env = "NEXT_TAG_REMOTE", help = "Remote to push to [default: origin]")]
    remote: Option<String>,

    #[arg(
        long,
        env = "NEXT_TAG_TOKEN",
        hide_env_values = true,
        help = "Access token to authenticate HTTPS pushes"
    )]
    token: Option<String>,

    #[arg(short, long, help = "Show the configuration and exit")]
    show: bool,

    #[arg(short, long, env = "NEXT_TAG_VERBOSE", help = "Verbose mode")]
    verbose: bool,

    #[arg(short, long, env = "NEXT_TAG_OUTPUT", help = "Log output: text or json")]
    output: Option<LogFormat>,
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bump: self.bump,
            format: self.format,
            prefix: self.prefix.clone(),
            remote: self.remote.clone(),
            token: self.token.clone(),
            create: self.create,
            push: self.push,
            verbose: self.verbose,
            log_format: self.output,
        }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())
        .context("loading configuration")?
        .apply(args.overrides());

    logging::init(&config.logging)?;

    if args.show {
        println!("{}", config.masked().to_toml()?);
        return Ok(());
    }

    let source = if let Some(tag) = args.tag {
        TagSource::Given(tag)
    } else if args.from_git {
        TagSource::Repository
    } else if ui::stdin_is_piped() {
        TagSource::Given(ui::read_tag_from_stdin().context("reading input")?)
    } else {
        TagSource::Empty
    };

    let repo = if source == TagSource::Repository || config.creates_tag() {
        let repo = Git2Repository::open(&args.repo)
            .with_context(|| format!("opening repository at '{}'", args.repo))?;
        Some(repo.with_token(config.git.token.clone()))
    } else {
        None
    };

    if config.logging.verbose && source == TagSource::Repository {
        ui::display_status(&format!("Reading tags from repository at '{}'", args.repo));
    }

    let result =
        run_tag_workflow(source, &config, repo.as_ref()).context("calculating next tag")?;

    for warning in &result.warnings {
        ui::display_boundary_warning(warning);
    }
    if config.logging.verbose {
        ui::display_plan(&result.plan);
    }

    println!("{}", result.plan.tag);

    let tag = &result.plan.tag;
    if result.created {
        ui::display_success(&format!("Created tag: {}", tag));
    }
    if result.pushed {
        ui::display_success(&format!("Pushed tag: {} to {}", tag, config.git.remote));
    } else if result.created {
        ui::display_manual_push_instruction(tag, &config.git.remote);
    }

    Ok(())
}
