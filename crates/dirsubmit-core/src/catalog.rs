use crate::{Error, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use url::Url;

/// A piece of software to advertise on the directories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub key: String,
    pub name: String,
    pub description: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub demo: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub category: String,
}

impl Project {
    /// Tags in the comma-separated form the directory forms expect
    pub fn tags_joined(&self) -> String {
        self.tags.join(", ")
    }
}

lazy_static! {
    static ref KEY_PATTERN: Regex = Regex::new(r"^[a-z0-9][a-z0-9-]*$").unwrap();
}

/// Check a catalog or registry key: lowercase, digits and dashes
pub fn validate_key(key: &str) -> Result<()> {
    if KEY_PATTERN.is_match(key) {
        Ok(())
    } else {
        Err(Error::InvalidEntry {
            key: key.to_string(),
            reason: "keys must be lowercase letters, digits and dashes".to_string(),
        })
    }
}

struct BuiltinProject {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    url: &'static str,
    demo: Option<&'static str>,
    tags: &'static [&'static str],
    category: &'static str,
}

const BUILTIN_PROJECTS: &[BuiltinProject] = &[
    BuiltinProject {
        key: "badge-generator",
        name: "Badge Generator",
        description: "The complete GitHub badge reference. 500+ badges, all CDN-hosted, copy-paste ready.",
        url: "https://github.com/ozxc44/badge-generator",
        demo: Some("https://badge-generator.com"),
        tags: &["badges", "github", "developer-tools", "documentation", "markdown"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "status-badge-2",
        name: "Status Badge 2.0",
        description: "Real-time status badges for GitHub projects. Webhook-driven SVG badges that show actual service status.",
        url: "https://github.com/ozxc44/status-badge-2",
        demo: Some("https://status-badge.pages.dev"),
        tags: &["badges", "github", "status-page", "monitoring", "svg"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "docuapi",
        name: "DocuAPI",
        description: "Generate beautiful API docs from OpenAPI/Swagger specs. Static HTML, deploy anywhere.",
        url: "https://github.com/ozxc44/docuapi",
        demo: Some("https://docuapi.pages.dev"),
        tags: &["api", "documentation", "openapi", "swagger", "docs-as-code"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "auto-promoter",
        name: "Auto-Promoter",
        description: "GitHub Action that automatically promotes your releases to Dev.to, Bluesky & Mastodon.",
        url: "https://github.com/ozxc44/auto-promoter",
        demo: None,
        tags: &["github-actions", "marketing", "automation", "social-media", "devops"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "cron-monitor",
        name: "Cron Monitor",
        description: "Get notified when your cron jobs fail or don't run on schedule. Webhook-based health checks.",
        url: "https://github.com/ozxc44/cron-monitor",
        demo: None,
        tags: &["cron", "monitoring", "health-check", "devops", "webhook"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "status-widget",
        name: "Status Widget",
        description: "Beautiful status pages for your services. Hosted on Cloudflare Workers, global edge network.",
        url: "https://github.com/ozxc44/status-widget",
        demo: Some("https://status-widget.pages.dev"),
        tags: &["status-page", "uptime", "monitoring", "serverless", "cloudflare"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "flatpdf-api",
        name: "FlatPDF API",
        description: "Convert nested PDF structures to flat key-value pairs. Perfect for form data extraction.",
        url: "https://github.com/ozxc44/flatpdf-api",
        demo: Some("https://flatpdf-api.pages.dev"),
        tags: &["pdf", "api", "rest-api", "form-processing", "serverless"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "queue-monitor",
        name: "Queue Monitor",
        description: "Background job monitoring for Bull/Redis. Real-time queue stats and failure alerts.",
        url: "https://github.com/ozxc44/queue-monitor-dev",
        demo: None,
        tags: &["queue", "bull", "redis", "monitoring", "background-jobs"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "email-cleanup",
        name: "Email Cleanup",
        description: "Unsubscribe from newsletter spam in one click. Gmail OAuth bulk unsubscribe tool.",
        url: "https://github.com/ozxc44/email-cleanup",
        demo: None,
        tags: &["gmail", "email", "cleanup", "unsubscribe", "automation"],
        category: "Productivity",
    },
    BuiltinProject {
        key: "form-to-pdf",
        name: "Form to PDF",
        description: "Minimal form builder with auto PDF export. Self-hosted alternative to Typeform.",
        url: "https://github.com/ozxc44/form-to-pdf",
        demo: None,
        tags: &["forms", "pdf", "form-builder", "jotform", "typeform-alternative"],
        category: "Developer Tools",
    },
    BuiltinProject {
        key: "tiktok-compliance-scanner",
        name: "TikTok Compliance Scanner",
        description: "Scan videos for policy issues at scale. Automated content compliance scanner.",
        url: "https://github.com/ozxc44/tiktok-compliance-scanner",
        demo: None,
        tags: &["tiktok", "video", "compliance", "moderation", "automation"],
        category: "Developer Tools",
    },
];

impl From<&BuiltinProject> for Project {
    fn from(p: &BuiltinProject) -> Self {
        Project {
            key: p.key.to_string(),
            name: p.name.to_string(),
            description: p.description.to_string(),
            url: p.url.to_string(),
            demo: p.demo.map(str::to_string),
            tags: p.tags.iter().map(|t| t.to_string()).collect(),
            category: p.category.to_string(),
        }
    }
}

/// Read-only, ordered table of projects
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// The projects shipped with the tool
    pub fn builtin() -> Self {
        Self {
            projects: BUILTIN_PROJECTS.iter().map(Project::from).collect(),
        }
    }

    /// Build a catalog, rejecting duplicate keys and malformed URLs
    pub fn from_projects(projects: Vec<Project>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            validate_key(&project.key)?;
            if !seen.insert(project.key.as_str()) {
                return Err(Error::DuplicateKey {
                    kind: "project",
                    key: project.key.clone(),
                });
            }
            validate_url(&project.key, &project.url)?;
            if let Some(demo) = &project.demo {
                validate_url(&project.key, demo)?;
            }
        }

        Ok(Self { projects })
    }

    /// Parse a JSON array of projects
    pub fn from_json_str(json: &str) -> Result<Self> {
        let projects: Vec<Project> = serde_json::from_str(json)?;
        Self::from_projects(projects)
    }

    /// Load a JSON array of projects from disk
    pub fn from_json_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading project catalog from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Look up a project by key
    pub fn get(&self, key: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| Error::ProjectNotFound {
                key: key.to_string(),
                available: self.keys().map(str::to_string).collect(),
            })
    }

    /// Keys in definition order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_url(key: &str, raw: &str) -> Result<()> {
    match Url::parse(raw) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(()),
        Ok(url) => Err(Error::InvalidEntry {
            key: key.to_string(),
            reason: format!("unsupported URL scheme '{}' in {}", url.scheme(), raw),
        }),
        Err(e) => Err(Error::InvalidEntry {
            key: key.to_string(),
            reason: format!("invalid URL {}: {}", raw, e),
        }),
    }
}
