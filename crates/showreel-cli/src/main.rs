//! Showreel CLI
//!
//! Thin wrapper around showreel-core for editing the stored portfolio
//! without opening the desktop window.
//!
//! ## Usage
//!
//! ```bash
//! # Print the current portfolio
//! showreel show
//!
//! # Change a field
//! showreel set name "Giulia Neri"
//! showreel set logo https://cdn.example/logo.svg
//!
//! # Manage video projects
//! showreel project add https://cdn.example/reel.mp4 --title "Reel 2026"
//! showreel project list
//! showreel project rename <project_id> "Spot TV"
//! showreel project remove <project_id>
//!
//! # Rewrite the bio with the text enhancement backend
//! showreel enhance
//!
//! # Backup and restore
//! showreel export --output portfolio.json
//! showreel import portfolio.json
//!
//! # Back to the seed portfolio
//! showreel reset --force
//!
//! # Try edits without touching the stored portfolio
//! showreel --ephemeral project add https://cdn.example/test.mp4
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand, ValueEnum};
use showreel_core::{
    open_editor, EditorConfig, EnhanceOutcome, EnhancementGateway, Hydration, MediaRef, MemoryStore,
    Mutation, PortfolioDocument, PortfolioEditor, ProjectId,
};

/// Showreel - self-editable video portfolio
#[derive(Parser)]
#[command(name = "showreel")]
#[command(version = "0.1.0")]
#[command(about = "Showreel - self-editable video portfolio")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Data directory (default: platform data dir + /showreel)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Keep edits in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored portfolio
    Show,

    /// Set a single field
    Set {
        field: Field,
        /// New value; for images an empty string clears the field
        value: String,
    },

    /// Video project management
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Rewrite the bio through the text enhancement backend
    Enhance,

    /// Write the portfolio as JSON
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace the portfolio with a JSON file
    Import {
        path: PathBuf,
    },

    /// Discard the stored portfolio
    Reset {
        /// Confirm reset (required)
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// Append a video by URL
    Add {
        url: String,
        /// Caption (default: "Nuovo Progetto")
        #[arg(short, long)]
        title: Option<String>,
    },
    /// List projects in display order
    List,
    /// Change a project's caption
    Rename {
        project_id: String,
        title: String,
    },
    /// Remove a project
    Remove {
        project_id: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Field {
    Name,
    Role,
    Bio,
    Email,
    Linkedin,
    Github,
    ProfileImage,
    Logo,
}

impl Field {
    fn mutation(self, value: String) -> Mutation {
        match self {
            Field::Name => Mutation::SetName(value),
            Field::Role => Mutation::SetRole(value),
            Field::Bio => Mutation::SetBio(value),
            Field::Email => Mutation::SetEmail(value),
            Field::Linkedin => Mutation::SetLinkedin(value),
            Field::Github => Mutation::SetGithub(value),
            Field::ProfileImage => Mutation::SetProfileImage(optional_media(value)),
            Field::Logo => Mutation::SetLogo(optional_media(value)),
        }
    }
}

fn optional_media(value: String) -> Option<MediaRef> {
    (!value.is_empty()).then(|| MediaRef::from_source(value))
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so `export` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("showreel")
}

fn media_label(media: &Option<MediaRef>) -> String {
    match media {
        Some(m) if m.is_transient() => format!("{} (session only)", m.as_str()),
        Some(m) => m.as_str().to_string(),
        None => "(none)".to_string(),
    }
}

fn print_portfolio(doc: &PortfolioDocument) {
    let name = doc.display_name();
    let email = doc.email_parts();

    println!("{} {}", name.first, name.rest_or_placeholder());
    println!("  Role: {}", doc.role);
    println!();
    println!("Bio:");
    println!("  {}", doc.bio);
    println!();
    println!("Contact:");
    match email.domain {
        Some(domain) => println!("  Email: {} @{}", email.local, domain),
        None => println!("  Email: {}", email.local),
    }
    println!("  Instagram: {}", doc.linkedin_href());
    println!("  Vimeo: {}", doc.github_href());
    println!();
    println!("Logo: {}", media_label(&doc.logo_url));
    println!("Profile image: {}", media_label(&doc.profile_image));
    println!();
    println!("Projects: {}", doc.projects.len());
    println!();
    println!("{}", doc.copyright_line(chrono::Local::now().year()));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let config = EditorConfig::load(&data_dir)?;
    let mut editor = if cli.ephemeral {
        PortfolioEditor::open(MemoryStore::new(), config.transient_policy)
    } else {
        open_editor(&data_dir, &config)
            .with_context(|| format!("Failed to open portfolio in {}", data_dir.display()))?
    };

    if let Hydration::Recovered { reason } = editor.hydration() {
        eprintln!("Warning: stored portfolio was unreadable ({}), showing default", reason);
    }

    match cli.command {
        Commands::Show => print_portfolio(&editor.document()),

        Commands::Set { field, value } => {
            let mutation = field.mutation(value);
            let label = mutation.label();
            editor.apply(mutation)?;
            println!("Updated: {}", label.trim_start_matches("set_"));
        }

        Commands::Project { action } => match action {
            ProjectAction::Add { url, title } => {
                let doc = editor.apply(Mutation::AddProject {
                    url: MediaRef::from_source(url),
                })?;
                let project = doc
                    .projects
                    .last()
                    .context("Project was not appended")?
                    .clone();
                if let Some(title) = title {
                    editor.apply(Mutation::RenameProject {
                        id: project.id.clone(),
                        title: title.clone(),
                    })?;
                    println!("Added project: {}", title);
                } else {
                    println!("Added project: {}", project.title);
                }
                println!("  ID: {}", project.id);
            }

            ProjectAction::List => {
                let doc = editor.document();
                if doc.projects.is_empty() {
                    println!("No projects.");
                } else {
                    println!("Projects ({}):", doc.projects.len());
                    println!();
                    for project in &doc.projects {
                        let session = if project.url.is_transient() {
                            " [session only]"
                        } else {
                            ""
                        };
                        println!("  {} {}{}", project.id, project.title, session);
                        println!("    {}", project.url.as_str());
                    }
                }
            }

            ProjectAction::Rename { project_id, title } => {
                let id = ProjectId::from_raw(project_id);
                if editor.document().project(&id).is_none() {
                    println!("No project with id {}, nothing renamed.", id);
                } else {
                    editor.apply(Mutation::RenameProject { id, title })?;
                    println!("Project renamed.");
                }
            }

            ProjectAction::Remove { project_id } => {
                let id = ProjectId::from_raw(project_id);
                if editor.document().project(&id).is_none() {
                    println!("No project with id {}, nothing removed.", id);
                } else {
                    editor.apply(Mutation::RemoveProject { id })?;
                    println!("Project removed.");
                }
            }
        },

        Commands::Enhance => {
            let gateway = EnhancementGateway::gemini(&config.enhancement).context(
                "No API key for bio enhancement (set GEMINI_API_KEY or enhancement.api_key)",
            )?;
            println!("Enhancing bio...");
            match editor.enhance_bio(&gateway).await? {
                EnhanceOutcome::Enhanced(bio) => {
                    println!("Bio updated:");
                    println!("  {}", bio);
                }
                EnhanceOutcome::Fallback(_) => {
                    println!("Enhancement failed, bio unchanged.");
                }
                EnhanceOutcome::Busy => {
                    println!("Enhancement already running.");
                }
            }
        }

        Commands::Export { output } => {
            let json = serde_json::to_string_pretty(&editor.document())?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Exported to {}", path.display());
                }
                None => println!("{}", json),
            }
        }

        Commands::Import { path } => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let doc: PortfolioDocument = serde_json::from_str(&raw)
                .with_context(|| format!("Not a portfolio document: {}", path.display()))?;
            let count = doc.projects.len();
            editor
                .replace(doc)
                .with_context(|| format!("Failed to import {}", path.display()))?;
            println!("Imported portfolio ({} projects).", count);
        }

        Commands::Reset { force } => {
            if !force {
                println!("WARNING: Reset discards every edit to the portfolio!");
                println!();
                println!("To confirm, run: showreel reset --force");
            } else {
                editor.reset()?;
                println!("Portfolio reset to default.");
            }
        }
    }

    editor.flush()?;
    Ok(())
}
