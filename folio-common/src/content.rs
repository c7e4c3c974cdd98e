//! Page content tables
//!
//! Profile, projects, tech stack and GIFs rendered on the portfolio page.
//! Built once at startup (either from the built-in tables below or from a
//! TOML content file) and shared read-only for the life of the process.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Everything the page renders apart from live playlist data
///
/// Tables omitted from a content file keep their built-in values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub stack: Vec<StackCategory>,
    pub gifs: Vec<GifItem>,
}

/// Hero, about and footer text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    /// Rendered as the page `<h1>`
    pub headline: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub github_url: String,
    pub linkedin_url: String,
    /// Embed URL for the music section iframe
    pub youtube_embed_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    pub github_url: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackCategory {
    pub name: String,
    pub tools: Vec<StackItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackItem {
    pub name: String,
    /// Emoji or icon identifier
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GifItem {
    pub url: String,
    pub caption: String,
    pub alt: String,
}

impl SiteContent {
    /// Parse a TOML content file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Built-in tables, or the given content file when it parses
    ///
    /// A missing or malformed file logs a warning and keeps the built-in
    /// tables; it never prevents startup.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(content) => {
                info!(
                    projects = content.projects.len(),
                    stack = content.stack.len(),
                    gifs = content.gifs.len(),
                    "Loaded page content from {}",
                    path.display()
                );
                content
            }
            Err(e) => {
                warn!("Ignoring content file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            projects: builtin_projects(),
            stack: builtin_stack(),
            gifs: builtin_gifs(),
        }
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Data Engineer".to_string(),
            tagline: "Building reliable pipelines, fast queries and the occasional dashboard."
                .to_string(),
            about: vec![
                "I design and run the data platforms that analysts and applications depend on: \
                 ingestion, orchestration, modelling and monitoring."
                    .to_string(),
                "Most days that means SQL, Python and C#, a fair amount of Docker, and \
                 chasing down why last night's job took twice as long."
                    .to_string(),
            ],
            github_url: "https://github.com/yourusername".to_string(),
            linkedin_url: "https://www.linkedin.com/in/yourusername".to_string(),
            youtube_embed_url: "https://www.youtube.com/embed/jfKfPfyJRdk".to_string(),
        }
    }
}

fn project(name: &str, description: &str, tech: &[&str], github_url: &str, featured: bool) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        tech_stack: tech.iter().map(|t| t.to_string()).collect(),
        github_url: github_url.to_string(),
        featured,
    }
}

fn builtin_projects() -> Vec<Project> {
    vec![
        project(
            "Data Pipeline Orchestrator",
            "Scalable ETL pipeline framework for processing large-scale data with fault tolerance and monitoring.",
            &["Python", "Apache Airflow", "PostgreSQL", "Docker"],
            "https://github.com/yourusername/data-pipeline",
            true,
        ),
        project(
            "Real-time Analytics Dashboard",
            "Live data visualization platform for streaming analytics with WebSocket integration.",
            &["C#", ".NET", "SignalR", "React", "SQL Server"],
            "https://github.com/yourusername/analytics-dashboard",
            true,
        ),
        project(
            "SQL Query Optimizer",
            "Tool for analyzing and optimizing complex SQL queries with performance recommendations.",
            &["Python", "SQL", "PostgreSQL", "FastAPI"],
            "https://github.com/yourusername/sql-optimizer",
            false,
        ),
        project(
            "Data Quality Framework",
            "Automated data validation and quality monitoring system for data warehouses.",
            &["Python", "Great Expectations", "dbt", "Snowflake"],
            "https://github.com/yourusername/data-quality",
            false,
        ),
        project(
            "Log Aggregation Service",
            "Distributed log collection and analysis system using osquery and custom parsers.",
            &["Go", "osquery", "Elasticsearch", "Kafka"],
            "https://github.com/yourusername/log-aggregator",
            false,
        ),
        project(
            "ML Model Deployment Pipeline",
            "CI/CD pipeline for machine learning models with automated testing and versioning.",
            &["Python", "MLflow", "Docker", "Kubernetes"],
            "https://github.com/yourusername/ml-pipeline",
            false,
        ),
    ]
}

fn category(name: &str, tools: &[(&str, &str)]) -> StackCategory {
    StackCategory {
        name: name.to_string(),
        tools: tools
            .iter()
            .map(|(tool, icon)| StackItem {
                name: tool.to_string(),
                icon: Some(icon.to_string()),
            })
            .collect(),
    }
}

fn builtin_stack() -> Vec<StackCategory> {
    vec![
        category("Data & Databases", &[("SQL Server", "🗄️"), ("PostgreSQL", "🐘")]),
        category(
            "Backend & Languages",
            &[
                (".NET", "💜"),
                ("C#", "🔷"),
                ("Python", "🐍"),
                ("Node.js", "🟢"),
                ("TypeScript", "📘"),
            ],
        ),
        category(
            "Frontend",
            &[
                ("Svelte", "🧡"),
                ("SvelteKit", "🚀"),
                ("React", "⚛️"),
                ("TailwindCSS", "🎨"),
                ("HTML/CSS", "📄"),
            ],
        ),
        category(
            "Infrastructure & Tools",
            &[("Docker", "🐳"), ("Git", "📦"), ("Linux", "🐧"), ("osquery", "🔍")],
        ),
        category("Cloud Platforms", &[("Azure", "🔷")]),
    ]
}

fn gif(url: &str, caption: &str, alt: &str) -> GifItem {
    GifItem {
        url: url.to_string(),
        caption: caption.to_string(),
        alt: alt.to_string(),
    }
}

fn builtin_gifs() -> Vec<GifItem> {
    vec![
        gif(
            "https://media.giphy.com/media/26tn33aiTi1jkl6H6/giphy.gif",
            "Monday debugging energy",
            "Person debugging code intensely",
        ),
        gif(
            "https://media.giphy.com/media/3oKIPnAiaMCws8nOsE/giphy.gif",
            "When the query finally works",
            "Celebration dance",
        ),
        gif(
            "https://media.giphy.com/media/LmNwrBhejkK9EFP504/giphy.gif",
            "Data pipeline running smoothly",
            "Smooth operation visualization",
        ),
        gif(
            "https://media.giphy.com/media/xT9IgzoKnwFNmISR8I/giphy.gif",
            "Optimizing that slow query",
            "Working hard at computer",
        ),
        gif(
            "https://media.giphy.com/media/3o7TKTDn976rzVgky4/giphy.gif",
            "Coffee-fueled coding sessions",
            "Drinking coffee while coding",
        ),
        gif(
            "https://media.giphy.com/media/ZVik7pBtu9dNS/giphy.gif",
            "Deploying to production",
            "Nervous excitement",
        ),
    ]
}
