//! Folio CLI - portfolio catalog admin

use clap::{Parser, Subcommand};
use folio_core::catalog::{Catalog, Project, ALL_CATEGORIES, DATA_VERSION};
use folio_core::commands::project::{self, ProjectDraft, ProjectPatch};
use folio_core::config::Config;
use folio_core::storage::SnapshotStore;

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "Local-first portfolio project catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, PartialEq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects
    List {
        /// Only projects in this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only featured projects
        #[arg(long)]
        featured: bool,
    },

    /// Show project details
    Show {
        /// Project id or exact title
        id: String,
    },

    /// Add a project
    Add {
        /// Project title
        title: String,
        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Long-form description
        #[arg(long)]
        long_description: Option<String>,
        /// Category (defaults to "Other")
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Tag (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Cover image reference
        #[arg(long)]
        image: Option<String>,
        /// Source repository link
        #[arg(long)]
        repo: Option<String>,
        /// Live demo link
        #[arg(long)]
        live: Option<String>,
        /// Mark as featured
        #[arg(long)]
        featured: bool,
    },

    /// Add a placeholder project with default fields
    New,

    /// Edit a project
    Edit {
        /// Project id
        id: String,
        #[arg(short, long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(long)]
        long_description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Replace the tag list (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        image: Option<String>,
        #[arg(long)]
        repo: Option<String>,
        #[arg(long)]
        live: Option<String>,
        #[arg(long)]
        featured: Option<bool>,
    },

    /// Delete a project
    Delete {
        /// Project id
        id: String,
        /// Skip the confirmation gate
        #[arg(long)]
        force: bool,
    },

    /// Search projects by title, description, or tag
    Search { query: String },

    /// List categories
    Categories,

    /// Discard the snapshot and reseed from the built-in defaults
    Reset {
        /// Skip the confirmation gate
        #[arg(long)]
        force: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Run health check
    Doctor,

    /// Open the showcase TUI
    Watch,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Get a configuration value
    Get { key: String },
    /// Set a configuration value
    Set { key: String, value: String },
    /// List all configuration values
    List,
    /// Reset configuration to defaults
    Reset,
    /// Show config file path
    Path,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let open_catalog = || -> anyhow::Result<Catalog> {
        Ok(Catalog::load(SnapshotStore::open_default()?))
    };

    match cli.command {
        Commands::List { category, featured } => {
            let catalog = open_catalog()?;
            cmd_list(&catalog, category.as_deref(), featured, cli.format, cli.quiet)
        }

        Commands::Show { id } => {
            let catalog = open_catalog()?;
            cmd_show(&catalog, &id, cli.format)
        }

        Commands::Add {
            title,
            description,
            long_description,
            category,
            tags,
            image,
            repo,
            live,
            featured,
        } => {
            let mut catalog = open_catalog()?;
            let draft = ProjectDraft {
                title,
                description,
                long_description,
                tags,
                category,
                image,
                repo_url: repo,
                live_url: live,
                featured,
            };
            cmd_add(&mut catalog, draft, cli.format, cli.quiet)
        }

        Commands::New => {
            let mut catalog = open_catalog()?;
            cmd_new(&mut catalog, cli.format, cli.quiet)
        }

        Commands::Edit {
            id,
            title,
            description,
            long_description,
            category,
            tags,
            image,
            repo,
            live,
            featured,
        } => {
            let mut catalog = open_catalog()?;
            let patch = ProjectPatch {
                title,
                description,
                long_description,
                tags: if tags.is_empty() { None } else { Some(tags) },
                category,
                image,
                repo_url: repo,
                live_url: live,
                featured,
            };
            cmd_edit(&mut catalog, &id, patch, cli.format, cli.quiet)
        }

        Commands::Delete { id, force } => {
            let mut catalog = open_catalog()?;
            cmd_delete(&mut catalog, &id, force, cli.quiet)
        }

        Commands::Search { query } => {
            let catalog = open_catalog()?;
            cmd_search(&catalog, &query, cli.format, cli.quiet)
        }

        Commands::Categories => {
            let catalog = open_catalog()?;
            cmd_categories(&catalog, cli.format)
        }

        Commands::Reset { force } => {
            let mut catalog = open_catalog()?;
            cmd_reset(&mut catalog, force, cli.quiet)
        }

        Commands::Config { action } => cmd_config(action, cli.quiet),

        Commands::Doctor => cmd_doctor(cli.quiet),

        Commands::Watch => cmd_watch(cli.quiet),
    }
}

// ============================================================================
// Command Implementations
// ============================================================================

fn print_project_line(project: &Project, tags_shown: usize) {
    let featured_marker = if project.featured { " [featured]" } else { "" };
    let tags = project.display_tags(tags_shown).join(", ");
    println!(
        "  {} - {} ({}){}",
        &project.id[..8.min(project.id.len())],
        project.title,
        project.category,
        featured_marker
    );
    if !tags.is_empty() {
        println!("      tags: {}", tags);
    }
}

fn print_project_detail(project: &Project) {
    println!("Project: {}", project.title);
    println!("  ID: {}", project.id);
    println!("  Category: {}", project.category);
    println!("  Description: {}", project.description);
    if let Some(long) = &project.long_description {
        if !long.is_empty() {
            println!("  Details: {}", long);
        }
    }
    if !project.tags.is_empty() {
        println!("  Tags: {}", project.tags.join(", "));
    }
    if let Some(image) = &project.image {
        println!("  Image: {}", image);
    }
    if let Some(repo) = &project.repo_url {
        println!("  Repository: {}", repo);
    }
    if let Some(live) = &project.live_url {
        println!("  Live: {}", live);
    }
    println!("  Featured: {}", project.featured);
    if let Some(created) = project.created_at {
        println!("  Created: {}", created.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(updated) = project.updated_at {
        println!("  Updated: {}", updated.format("%Y-%m-%d %H:%M:%S"));
    }
}

fn cmd_list(
    catalog: &Catalog,
    category: Option<&str>,
    featured: bool,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let category = category.unwrap_or(ALL_CATEGORIES);
    let projects: Vec<&Project> = catalog
        .list(category)
        .into_iter()
        .filter(|p| !featured || p.featured)
        .collect();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(());
    }

    if projects.is_empty() {
        if !quiet {
            println!("No projects found.");
            println!("\nAdd one with: folio add <title> --category <category>");
        }
        return Ok(());
    }

    // An unreadable config only affects display, fall back to the default
    let tags_shown = Config::load().ok().map_or(3, |c| c.display.tags_shown);
    if !quiet {
        if category == ALL_CATEGORIES {
            println!("Projects:");
        } else {
            println!("Projects in '{}':", category);
        }
    }
    for project in projects {
        print_project_line(project, tags_shown);
    }
    Ok(())
}

fn cmd_show(catalog: &Catalog, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let project = project::find(catalog, id)?;
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&project)?);
    } else {
        print_project_detail(&project);
    }
    Ok(())
}

fn cmd_add(
    catalog: &mut Catalog,
    draft: ProjectDraft,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let created = project::create(catalog, draft)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else if !quiet {
        println!("Project added!");
        println!("  ID: {}", created.id);
        println!("  Title: {}", created.title);
        println!("  Category: {}", created.category);
    }
    Ok(())
}

fn cmd_new(catalog: &mut Catalog, format: OutputFormat, quiet: bool) -> anyhow::Result<()> {
    let created = project::create_placeholder(catalog)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&created)?);
    } else if !quiet {
        println!("Placeholder project added: {}", created.id);
        println!("\nFill it in with: folio edit {} --title <title>", created.id);
    }
    Ok(())
}

fn cmd_edit(
    catalog: &mut Catalog,
    id: &str,
    patch: ProjectPatch,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let edited = project::edit(catalog, id, patch)?;

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&edited)?);
    } else if !quiet {
        println!("Project '{}' updated.", edited.title);
    }
    Ok(())
}

fn cmd_delete(catalog: &mut Catalog, id: &str, force: bool, quiet: bool) -> anyhow::Result<()> {
    if !force {
        if !quiet {
            println!("Warning: This will permanently delete project '{}'.", id);
            println!("Use --force to confirm deletion.");
        }
        return Err(folio_core::Error::UserCancelled.into());
    }

    project::remove(catalog, id)?;
    if !quiet {
        println!("Project '{}' deleted.", id);
    }
    Ok(())
}

fn cmd_search(
    catalog: &Catalog,
    query: &str,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let matches = catalog.search(query);

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        if !quiet {
            println!("No projects match '{}'.", query);
        }
        return Ok(());
    }

    let tags_shown = Config::load().ok().map_or(3, |c| c.display.tags_shown);
    if !quiet {
        println!("Matches for '{}':", query);
    }
    for project in matches {
        print_project_line(project, tags_shown);
    }
    Ok(())
}

fn cmd_categories(catalog: &Catalog, format: OutputFormat) -> anyhow::Result<()> {
    let categories = catalog.categories();
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
    } else {
        for category in categories {
            println!("{}", category);
        }
    }
    Ok(())
}

fn cmd_reset(catalog: &mut Catalog, force: bool, quiet: bool) -> anyhow::Result<()> {
    if !force {
        if !quiet {
            println!("Warning: This will discard all projects and reseed the defaults.");
            println!("Use --force to confirm.");
        }
        return Err(folio_core::Error::UserCancelled.into());
    }

    catalog.reset();
    if !quiet {
        println!("Catalog reset to {} seed projects.", catalog.len());
    }
    Ok(())
}

fn cmd_config(action: ConfigAction, quiet: bool) -> anyhow::Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            let value = config.get(&key)?;
            println!("{}", value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            if !quiet {
                println!("Set {} = {}", key, value);
            }
        }
        ConfigAction::List => {
            let config = Config::load()?;
            let items = config.list()?;
            for (key, value) in items {
                println!("{} = {}", key, value);
            }
        }
        ConfigAction::Reset => {
            Config::reset()?;
            if !quiet {
                println!("Configuration reset to defaults.");
            }
        }
        ConfigAction::Path => {
            let path = Config::config_path()?;
            println!("{}", path.display());
        }
    }
    Ok(())
}

fn cmd_doctor(quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        println!("Folio Health Check");
        println!("==================");
        println!();
    }

    let mut all_ok = true;

    // Check configuration
    match Config::load() {
        Ok(_) => {
            if !quiet {
                println!("[OK] Configuration: Valid");
                match Config::config_path() {
                    Ok(path) if path.exists() => println!("     Path: {}", path.display()),
                    Ok(path) => println!("     Path: {} (using defaults)", path.display()),
                    Err(e) => println!("[!!] Config path: Error - {}", e),
                }
            }
        }
        Err(e) => {
            all_ok = false;
            if !quiet {
                println!("[!!] Configuration: Error - {}", e);
            }
        }
    }

    // Check snapshot store
    match SnapshotStore::open_default() {
        Ok(store) => {
            if !quiet {
                println!("[OK] Data directory: {}", store.dir().display());
            }
            match store.stored_version() {
                Ok(Some(version)) if version == DATA_VERSION => {
                    if !quiet {
                        println!("[OK] Snapshot: version {}", version);
                    }
                }
                Ok(Some(version)) => {
                    if !quiet {
                        println!(
                            "[!!] Snapshot: stale version {} (current is {}), will reseed on next load",
                            version, DATA_VERSION
                        );
                    }
                }
                Ok(None) => {
                    if !quiet {
                        println!("[--] Snapshot: none yet (seeds on first load)");
                    }
                }
                Err(e) => {
                    all_ok = false;
                    if !quiet {
                        println!("[!!] Snapshot: Error - {}", e);
                    }
                }
            }

            let catalog = Catalog::load(store);
            if !quiet {
                println!("     Projects: {}", catalog.len());
                println!("     Categories: {}", catalog.categories().len() - 1);
            }
        }
        Err(e) => {
            all_ok = false;
            if !quiet {
                println!("[!!] Data directory: Error - {}", e);
            }
        }
    }

    // Summary
    if !quiet {
        println!();
        if all_ok {
            println!("All checks passed!");
        } else {
            println!("Some checks failed. See above for details.");
        }
    }

    Ok(())
}

fn cmd_watch(quiet: bool) -> anyhow::Result<()> {
    if !quiet {
        tracing::info!("Starting showcase TUI...");
    }

    let result = std::process::Command::new("folio-tui").status();

    match result {
        Ok(status) if status.success() => Ok(()),
        Ok(_) => {
            if !quiet {
                println!("TUI exited with an error.");
            }
            Ok(())
        }
        Err(_) => {
            if !quiet {
                println!("Could not start the showcase TUI.");
                println!();
                println!("The TUI binary 'folio-tui' is not in your PATH.");
                println!("Either:");
                println!("  1. Add the target/debug or target/release directory to PATH");
                println!("  2. Run `cargo run --bin folio-tui` from the project root");
                println!("  3. Install with `cargo install --path crates/folio-tui`");
            }
            Ok(())
        }
    }
}
