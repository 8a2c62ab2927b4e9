use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;

use slate::commands::{
    CreateProjectOptions, cmd_admin, cmd_config_get, cmd_config_set, cmd_config_show,
    cmd_content_edit, cmd_content_ls, cmd_content_show, cmd_media_add, cmd_media_ls, cmd_media_rm,
    cmd_project_create, cmd_project_ls, cmd_project_publish, cmd_project_rm, cmd_project_set,
    cmd_project_show, cmd_project_toggle, cmd_settings_get, cmd_settings_ls, cmd_settings_set,
    cmd_status,
};
use slate::types::MediaKind;

#[derive(Parser)]
#[command(name = "slate")]
#[command(about = "Admin console for a portfolio CMS backend")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage portfolio projects
    #[command(visible_alias = "p")]
    Project {
        #[command(subcommand)]
        action: ProjectAction,
    },

    /// Manage the media library
    #[command(visible_alias = "m")]
    Media {
        #[command(subcommand)]
        action: MediaAction,
    },

    /// View and edit site content pages
    Content {
        #[command(subcommand)]
        action: ContentAction,
    },

    /// View and edit site settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show record counts across the site
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive admin console
    Admin {
        /// Tab to open first: projects, media, or content
        #[arg(long)]
        tab: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ProjectAction {
    /// List projects
    Ls {
        /// Only show one category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter by title/client substring (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display one project in full
    Show {
        /// Project ID (can be partial)
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a new project
    Create {
        /// Project title
        title: String,

        /// Client name
        #[arg(long)]
        client: Option<String>,

        /// Category
        #[arg(short, long)]
        category: Option<String>,

        /// Filter category shown on the public site (defaults to category)
        #[arg(long)]
        data_cat: Option<String>,

        /// Description text
        #[arg(short, long)]
        description: Option<String>,

        /// URL slug (defaults to a slugified title)
        #[arg(long)]
        slug: Option<String>,

        /// Poster image URL
        #[arg(long)]
        poster: Option<String>,

        /// Video URL
        #[arg(long)]
        video: Option<String>,

        /// Display order index
        #[arg(long)]
        order: Option<i64>,

        /// Publish immediately instead of creating a draft
        #[arg(long)]
        publish: bool,
    },

    /// Set one field on a project
    Set {
        /// Project ID (can be partial)
        id: String,

        /// Field name (title, client, category, data_cat, description,
        /// poster_image, video_url, is_published, featured, order_index, ...)
        field: String,

        /// New value
        value: String,
    },

    /// Publish a project
    Publish {
        /// Project ID (can be partial)
        id: String,
    },

    /// Unpublish a project
    Unpublish {
        /// Project ID (can be partial)
        id: String,
    },

    /// Toggle the publish flag from its current value
    Toggle {
        /// Project ID (can be partial)
        id: String,
    },

    /// Delete a project
    Rm {
        /// Project ID (can be partial)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum MediaAction {
    /// List media files
    Ls {
        /// Only show one kind (image or video)
        #[arg(short, long, value_parser = parse_media_kind)]
        kind: Option<MediaKind>,

        /// Filter by file name substring (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a media file by URL
    Add {
        /// File name (e.g., project-thumbnail.jpg)
        file_name: String,

        /// File URL (e.g., https://res.cloudinary.com/...)
        file_url: String,

        /// Kind: image or video (default: image)
        #[arg(short, long, default_value = "image", value_parser = parse_media_kind)]
        kind: MediaKind,

        /// File size in bytes, if known
        #[arg(long)]
        size: Option<u64>,
    },

    /// Delete a media file
    Rm {
        /// Media file ID (can be partial)
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Subcommand)]
enum ContentAction {
    /// List content pages
    Ls {
        /// Filter by page type/title substring
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a page's payload
    Show {
        /// Page type (e.g., home, about)
        page: String,
    },

    /// Edit a page's payload in $EDITOR
    Edit {
        /// Page type (e.g., home, about)
        page: String,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// List settings
    Ls {
        /// Filter by key substring
        #[arg(short, long)]
        search: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one setting's value
    Get {
        /// Setting key
        key: String,
    },

    /// Set one setting's value (JSON, or a bare string)
    Set {
        /// Setting key
        key: String,

        /// New value
        value: String,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Config key (backend.url, backend.api_key, default_category)
        key: String,

        /// Value to set
        value: String,
    },

    /// Get a configuration value
    Get {
        /// Config key
        key: String,
    },
}

fn parse_media_kind(s: &str) -> Result<MediaKind, String> {
    MediaKind::parse_strict(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Project { action } => match action {
            ProjectAction::Ls {
                category,
                search,
                json,
            } => cmd_project_ls(category.as_deref(), search.as_deref(), json).await,
            ProjectAction::Show { id, json } => cmd_project_show(&id, json).await,
            ProjectAction::Create {
                title,
                client,
                category,
                data_cat,
                description,
                slug,
                poster,
                video,
                order,
                publish,
            } => {
                cmd_project_create(CreateProjectOptions {
                    title,
                    client,
                    category,
                    data_cat,
                    description,
                    slug,
                    poster,
                    video,
                    order,
                    publish,
                })
                .await
            }
            ProjectAction::Set { id, field, value } => cmd_project_set(&id, &field, &value).await,
            ProjectAction::Publish { id } => cmd_project_publish(&id, true).await,
            ProjectAction::Unpublish { id } => cmd_project_publish(&id, false).await,
            ProjectAction::Toggle { id } => cmd_project_toggle(&id).await,
            ProjectAction::Rm { id, force } => cmd_project_rm(&id, force).await,
        },

        Commands::Media { action } => match action {
            MediaAction::Ls { kind, search, json } => {
                cmd_media_ls(kind.as_ref(), search.as_deref(), json).await
            }
            MediaAction::Add {
                file_name,
                file_url,
                kind,
                size,
            } => cmd_media_add(&file_name, &file_url, kind, size).await,
            MediaAction::Rm { id, force } => cmd_media_rm(&id, force).await,
        },

        Commands::Content { action } => match action {
            ContentAction::Ls { search, json } => cmd_content_ls(search.as_deref(), json).await,
            ContentAction::Show { page } => cmd_content_show(&page).await,
            ContentAction::Edit { page } => cmd_content_edit(&page).await,
        },

        Commands::Settings { action } => match action {
            SettingsAction::Ls { search, json } => cmd_settings_ls(search.as_deref(), json).await,
            SettingsAction::Get { key } => cmd_settings_get(&key).await,
            SettingsAction::Set { key, value } => cmd_settings_set(&key, &value).await,
        },

        Commands::Status { json } => cmd_status(json).await,

        Commands::Admin { tab } => cmd_admin(tab.as_deref()).await,

        Commands::Config { action } => match action {
            ConfigAction::Show => cmd_config_show(),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Get { key } => cmd_config_get(&key),
        },

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "slate", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
