use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;

use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::Validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceKind {
    Fulltime,
    Internship,
    Education,
    Parttime,
}

impl ExperienceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fulltime => "fulltime",
            Self::Internship => "internship",
            Self::Education => "education",
            Self::Parttime => "parttime",
        }
    }
}

impl fmt::Display for ExperienceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub id: u32,
    pub title: String,
    pub location: String,
    /// 顯示用的日期區間，例如 "Dec 2024 - Present"
    pub date: String,
    #[serde(rename = "type")]
    pub kind: ExperienceKind,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Ai,
    Backend,
    Fullstack,
    Mobile,
    Web,
}

impl ProjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Backend => "backend",
            Self::Fullstack => "fullstack",
            Self::Mobile => "mobile",
            Self::Web => "web",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub kind: ProjectKind,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub key_features: Vec<String>,
    #[serde(default)]
    pub tech_details: String,
}

impl ProjectEntry {
    /// Live URL, treating an empty string as absent.
    pub fn live(&self) -> Option<&str> {
        self.live_url.as_deref().filter(|url| !url.trim().is_empty())
    }

    pub fn github(&self) -> Option<&str> {
        self.github_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub education: String,
    pub handle: String,
    pub linkedin: String,
    pub github: String,
    pub leetcode: String,
    pub email: String,
}

impl Profile {
    fn name_part(&self, index: usize) -> Option<String> {
        let part: String = self
            .name
            .split_whitespace()
            .nth(index)?
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        Some(part).filter(|part| !part.is_empty())
    }

    /// 登入名稱取自名字第一段，例如 "Jane Doe" → "jane"
    pub fn login(&self) -> String {
        self.name_part(0).unwrap_or_else(|| "guest".to_string())
    }

    /// Host part of the shell prompt, taken from the last name.
    pub fn host(&self) -> String {
        let count = self.name.split_whitespace().count();
        count
            .checked_sub(1)
            .filter(|&last| last > 0)
            .and_then(|last| self.name_part(last))
            .unwrap_or_else(|| "portfolio".to_string())
    }

    pub fn shell_prompt(&self) -> String {
        format!("{}@{}:~$", self.login(), self.host())
    }

    pub fn chat_prompt(&self) -> String {
        format!("chat@{}:~$", self.login())
    }
}

/// Production work done for a client, listed by `projects --client`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProject {
    pub name: String,
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Canned chat answer for one fallback topic ("contact", "overview", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CannedAnswer {
    pub topic: String,
    pub response: String,
}

/// The whole read-only dataset the terminal and the assistant answer from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub owner: Profile,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    #[serde(default)]
    pub clients: Vec<ClientProject>,
    /// `[[fallback]]` tables in the portfolio file
    #[serde(default, rename = "fallback")]
    pub answers: Vec<CannedAnswer>,
}

impl Portfolio {
    /// 從 TOML 檔案載入作品集資料
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let portfolio: Portfolio = toml::from_str(content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|category| category.skills.len()).sum()
    }

    pub fn skills_at_least(&self, proficiency: u8) -> usize {
        self.skills
            .iter()
            .flat_map(|category| category.skills.iter())
            .filter(|skill| skill.proficiency >= proficiency)
            .count()
    }

    pub fn experience_by_id(&self, id: u32) -> Option<&ExperienceEntry> {
        self.experience.iter().find(|entry| entry.id == id)
    }

    pub fn project_by_id(&self, id: u32) -> Option<&ProjectEntry> {
        self.projects.iter().find(|project| project.id == id)
    }

    pub fn answer_for(&self, topic: &str) -> Option<&str> {
        self.answers
            .iter()
            .find(|answer| answer.topic.eq_ignore_ascii_case(topic))
            .map(|answer| answer.response.as_str())
    }
}

impl Validate for Portfolio {
    fn validate(&self) -> Result<()> {
        for category in &self.skills {
            for skill in &category.skills {
                if skill.proficiency > 100 {
                    return Err(PortfolioError::InvalidConfigValueError {
                        field: format!("skills.{}.{}", category.name, skill.name),
                        value: skill.proficiency.to_string(),
                        reason: "Proficiency must be between 0 and 100".to_string(),
                    });
                }
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.experience {
            if !seen.insert(entry.id) {
                return Err(PortfolioError::InvalidConfigValueError {
                    field: "experience.id".to_string(),
                    value: entry.id.to_string(),
                    reason: "Duplicate experience id".to_string(),
                });
            }
        }

        for answer in &self.answers {
            if answer.response.trim().is_empty() {
                return Err(PortfolioError::InvalidConfigValueError {
                    field: format!("fallback.{}", answer.topic),
                    value: String::new(),
                    reason: "Fallback response must not be empty".to_string(),
                });
            }
        }

        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(PortfolioError::InvalidConfigValueError {
                    field: "projects.id".to_string(),
                    value: project.id.to_string(),
                    reason: "Duplicate project id".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

pub const CONTEXT_CAPACITY: usize = 5;

/// Recency window of lowercased user inputs, capped at [`CONTEXT_CAPACITY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversationContext {
    recent: VecDeque<String>,
}

impl ConversationContext {
    pub fn push(&mut self, input: &str) {
        if self.recent.len() == CONTEXT_CAPACITY {
            self.recent.pop_front();
        }
        self.recent.push_back(input.to_lowercase());
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_keeps_last_five_lowercased() {
        let mut context = ConversationContext::default();
        for i in 1..=7 {
            context.push(&format!("Question {}", i));
        }

        assert_eq!(context.len(), CONTEXT_CAPACITY);
        let kept: Vec<&str> = context.iter().collect();
        assert_eq!(kept.first(), Some(&"question 3"));
        assert_eq!(kept.last(), Some(&"question 7"));

        context.reset();
        assert!(context.is_empty());
    }

    #[test]
    fn test_empty_urls_are_absent() {
        let project = ProjectEntry {
            id: 1,
            title: "Demo".to_string(),
            description: String::new(),
            tags: vec![],
            kind: ProjectKind::Web,
            live_url: Some("https://demo.dev".to_string()),
            github_url: Some(String::new()),
            key_features: vec![],
            tech_details: String::new(),
        };
        assert_eq!(project.live(), Some("https://demo.dev"));
        assert_eq!(project.github(), None);
    }

    #[test]
    fn test_portfolio_from_toml_rejects_bad_proficiency() {
        let content = r#"
[owner]
name = "Jane Doe"
title = "Engineer"
location = "Remote"
education = "BSc"
handle = "@jane"
linkedin = "linkedin.com/in/jane"
github = "github.com/jane"
leetcode = "leetcode.com/jane"
email = "jane@example.com"

[[skills]]
name = "Languages"
skills = [{ name = "Rust", proficiency = 120 }]
"#;
        assert!(Portfolio::from_toml_str(content).is_err());
    }

    #[test]
    fn test_portfolio_from_toml_parses_entries() {
        let content = r#"
[owner]
name = "Jane Doe"
title = "Engineer"
location = "Remote"
education = "BSc"
handle = "@jane"
linkedin = "linkedin.com/in/jane"
github = "github.com/jane"
leetcode = "leetcode.com/jane"
email = "jane@example.com"

[[experience]]
id = 7
title = "Engineer"
location = "Acme"
date = "Jan 2024 - Present"
type = "parttime"
description = "Builds things."

[[projects]]
id = 3
title = "Widget"
description = "A widget."
type = "mobile"
tags = ["Rust"]
"#;
        let portfolio = Portfolio::from_toml_str(content).unwrap();
        assert_eq!(portfolio.experience_by_id(7).unwrap().kind, ExperienceKind::Parttime);
        assert_eq!(portfolio.project_by_id(3).unwrap().kind, ProjectKind::Mobile);
        assert!(portfolio.project_by_id(4).is_none());
        assert!(portfolio.clients.is_empty());
        assert!(portfolio.answers.is_empty());
    }

    #[test]
    fn test_portfolio_from_toml_reads_clients_and_answers() {
        let content = r#"
[owner]
name = "Jane Doe"
title = "Engineer"
location = "Remote"
education = "BSc"
handle = "@jane"
linkedin = "linkedin.com/in/jane"
github = "github.com/jane"
leetcode = "leetcode.com/jane"
email = "jane@example.com"

[[clients]]
name = "acme.dev"
summary = "Storefront"
highlights = ["Checkout flow"]

[[fallback]]
topic = "Hobbies"
response = "Jane climbs on weekends."
"#;
        let portfolio = Portfolio::from_toml_str(content).unwrap();
        assert_eq!(portfolio.clients[0].highlights, vec!["Checkout flow"]);
        assert_eq!(portfolio.answer_for("hobbies"), Some("Jane climbs on weekends."));
        assert_eq!(portfolio.answer_for("contact"), None);

        let blank = content.replace("Jane climbs on weekends.", " ");
        assert!(Portfolio::from_toml_str(&blank).is_err());
    }

    #[test]
    fn test_prompts_follow_owner_name() {
        let mut owner = crate::data::owner();
        assert_eq!(owner.shell_prompt(), "abdul@aziz:~$");

        owner.name = "Jane van Doe".to_string();
        assert_eq!(owner.shell_prompt(), "jane@doe:~$");
        assert_eq!(owner.chat_prompt(), "chat@jane:~$");

        owner.name = "Cher".to_string();
        assert_eq!(owner.shell_prompt(), "cher@portfolio:~$");
        owner.name = String::new();
        assert_eq!(owner.chat_prompt(), "chat@guest:~$");
    }
}
