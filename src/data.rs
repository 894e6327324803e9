//! Built-in portfolio dataset used when no `[portfolio].data` file is configured.

use crate::core::fallback;
use crate::domain::model::{
    CannedAnswer, ClientProject, ExperienceEntry, ExperienceKind, Portfolio, Profile,
    ProjectEntry, ProjectKind, Skill, SkillCategory,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, skills: &[(&str, u8)]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        skills: skills
            .iter()
            .map(|(name, proficiency)| Skill {
                name: name.to_string(),
                proficiency: *proficiency,
            })
            .collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn project(
    id: u32,
    title: &str,
    description: &str,
    tags: &[&str],
    kind: ProjectKind,
    live_url: &str,
    key_features: &[&str],
    tech_details: &str,
) -> ProjectEntry {
    ProjectEntry {
        id,
        title: title.to_string(),
        description: description.to_string(),
        tags: strings(tags),
        kind,
        live_url: Some(live_url.to_string()).filter(|url| !url.is_empty()),
        github_url: None,
        key_features: strings(key_features),
        tech_details: tech_details.to_string(),
    }
}

pub fn owner() -> Profile {
    Profile {
        name: "Abdul Aziz".to_string(),
        title: "Tech Lead / Senior Backend Engineer".to_string(),
        location: "Lahore, Punjab, Pakistan".to_string(),
        education: "BS Computer Science from PUCIT".to_string(),
        handle: "@connect2abdulaziz".to_string(),
        linkedin: "linkedin.com/in/connect2abdulaziz".to_string(),
        github: "github.com/connect2abdulaziz".to_string(),
        leetcode: "leetcode.com/connect2abdulaziz".to_string(),
        email: "connect2abdulaziz@gmail.com".to_string(),
    }
}

pub fn skills() -> Vec<SkillCategory> {
    vec![
        category(
            "Programming Languages",
            &[
                ("TypeScript", 95),
                ("JavaScript", 95),
                ("SQL", 90),
                ("Python", 80),
                ("C#", 75),
                ("C++", 70),
                ("Bash", 75),
            ],
        ),
        category(
            "Backend Frameworks",
            &[
                ("NestJS", 95),
                ("Node.js", 95),
                ("Express.js", 90),
                ("Next.js API Routes", 85),
                ("Fastify", 80),
                ("FastAPI", 80),
                ("Django REST Framework", 75),
            ],
        ),
        category(
            "Databases & ORMs",
            &[
                ("PostgreSQL", 95),
                ("MongoDB", 85),
                ("Redis", 90),
                ("Supabase", 80),
                ("Prisma ORM", 90),
                ("TypeORM", 85),
                ("PostGIS", 80),
                ("Pinecone", 75),
            ],
        ),
        category(
            "AI/ML Integration",
            &[
                ("LangChain", 90),
                ("LangGraph", 85),
                ("OpenAI API", 90),
                ("RAG Pipelines", 85),
                ("Vector Databases", 80),
                ("AI Chatbots", 90),
                ("Prompt Engineering", 85),
            ],
        ),
        category(
            "Authorization & Security",
            &[
                ("RBAC", 90),
                ("ABAC", 85),
                ("CASL", 90),
                ("Row Level Security", 85),
                ("JWT", 90),
                ("OAuth 2.0", 85),
                ("Session Management", 90),
            ],
        ),
        category(
            "DevOps & Cloud",
            &[
                ("Docker", 90),
                ("AWS EC2", 80),
                ("AWS S3", 85),
                ("AWS RDS", 80),
                ("GCP", 70),
                ("GitHub Actions", 85),
                ("CI/CD", 85),
                ("Nginx", 75),
            ],
        ),
        category(
            "Real-time & Messaging",
            &[
                ("WebSockets", 90),
                ("Socket.io", 85),
                ("Redis Pub/Sub", 90),
                ("Bull Queues", 85),
                ("Server-Sent Events", 75),
            ],
        ),
        category(
            "Tools & Practices",
            &[
                ("Git", 95),
                ("Clean Architecture", 90),
                ("DRY Principles", 90),
                ("SOLID Principles", 90),
                ("TDD", 80),
                ("LeetCode (300+)", 85),
            ],
        ),
        category(
            "Professional Skills",
            &[
                ("Team Leadership", 90),
                ("Backend Architecture", 95),
                ("System Design", 85),
                ("Code Review", 90),
                ("Problem Solving", 90),
                ("Project Management", 85),
            ],
        ),
    ]
}

pub fn experience() -> Vec<ExperienceEntry> {
    vec![
        ExperienceEntry {
            id: 1,
            title: "Tech Lead / Senior Backend Engineer".to_string(),
            location: "DeveloperTag, Lahore, Pakistan".to_string(),
            date: "Dec 2024 - Present".to_string(),
            kind: ExperienceKind::Fulltime,
            description: "Leading a team of 5 engineers architecting scalable microservices using NestJS, PostgreSQL, and Docker. Specializing in RBAC/ABAC authorization systems, multi-tenant SaaS platforms, AI-powered chatbots with LangChain/LangGraph, and real-time communication systems.".to_string(),
            details: strings(&[
                "Lead a team of 5 engineers architecting scalable microservices",
                "Design and implement RBAC/ABAC authorization systems using CASL library",
                "Architect multi-tenant SaaS platforms with Row Level Security (RLS)",
                "Build AI-powered chatbots and RAG pipelines using LangChain and LangGraph",
                "Implement real-time communication systems using WebSockets and Redis pub/sub",
                "Establish CI/CD pipelines with GitHub Actions, Docker, and AWS ECS",
                "Optimize PostgreSQL query performance achieving 60% reduction in response times",
                "Mentor team members on best practices and architecture decisions",
            ]),
            skills: strings(&[
                "NestJS",
                "PostgreSQL",
                "Docker",
                "CASL",
                "RBAC/ABAC",
                "LangChain",
                "LangGraph",
                "WebSockets",
                "Redis",
                "AWS ECS",
                "GitHub Actions",
                "Team Leadership",
            ]),
        },
        ExperienceEntry {
            id: 2,
            title: "Backend Engineer".to_string(),
            location: "DiveScale, Lahore, Pakistan".to_string(),
            date: "June 2024 - Dec 2024".to_string(),
            kind: ExperienceKind::Fulltime,
            description: "Developed RESTful and GraphQL APIs using NestJS with TypeScript following clean architecture principles. Implemented authentication systems with OAuth 2.0, JWT refresh tokens, real-time chat systems, and comprehensive testing achieving 85%+ code coverage.".to_string(),
            details: strings(&[
                "Developed RESTful and GraphQL APIs using NestJS with TypeScript",
                "Implemented authentication systems with OAuth 2.0 and JWT refresh tokens",
                "Built real-time chat systems using WebSockets and Redis for message persistence",
                "Designed database schemas with Prisma ORM and optimized PostgreSQL queries",
                "Wrote unit and integration tests achieving 85%+ code coverage with Jest",
                "Followed clean architecture principles and SOLID design patterns",
            ]),
            skills: strings(&[
                "NestJS",
                "TypeScript",
                "GraphQL",
                "OAuth 2.0",
                "JWT",
                "WebSockets",
                "Redis",
                "Prisma ORM",
                "PostgreSQL",
                "Jest",
            ]),
        },
        ExperienceEntry {
            id: 3,
            title: "Associate Software Engineer".to_string(),
            location: "Kwanso, Lahore, Pakistan".to_string(),
            date: "June 2023 - June 2024".to_string(),
            kind: ExperienceKind::Fulltime,
            description: "Built backend services with Node.js, Express, and NestJS following DRY and SOLID principles. Developed RESTful APIs with proper error handling, validation, and documentation. Solved 300+ algorithmic problems on LeetCode strengthening DSA skills.".to_string(),
            details: strings(&[
                "Built backend services with Node.js, Express, and NestJS",
                "Developed RESTful APIs with error handling and validation using Zod",
                "Created API documentation with Swagger/OpenAPI",
                "Worked with both PostgreSQL and MongoDB databases",
                "Solved 300+ algorithmic problems on LeetCode strengthening DSA skills",
            ]),
            skills: strings(&[
                "Node.js",
                "Express",
                "NestJS",
                "PostgreSQL",
                "MongoDB",
                "Zod Validation",
                "Swagger",
                "Git",
            ]),
        },
        ExperienceEntry {
            id: 4,
            title: "Bachelor of Science in Computer Science".to_string(),
            location: "Punjab University College of Information Technology (PUCIT), Lahore, Pakistan".to_string(),
            date: "Aug 2019 - May 2023".to_string(),
            kind: ExperienceKind::Education,
            description: "Completed Bachelor's degree in Computer Science with a foundation in Data Structures, Algorithms, Database Systems, Operating Systems, Computer Networks, and Software Engineering. Final Year Project: AutoPostMD, a social media scheduling backend with Node.js, PostgreSQL, and Redis.".to_string(),
            details: strings(&[
                "Studied Data Structures, Algorithms, and Database Systems",
                "Completed coursework in Operating Systems and Computer Networks",
                "Built AutoPostMD for Final Year Project",
                "Implemented queue-based job processing with Redis and Bull",
            ]),
            skills: strings(&[
                "Data Structures",
                "Algorithms",
                "Database Systems",
                "Operating Systems",
                "Node.js",
                "PostgreSQL",
                "Redis",
            ]),
        },
    ]
}

pub fn projects() -> Vec<ProjectEntry> {
    vec![
        project(
            1,
            "Terzo.ai",
            "Architected AI chatbot backend with LangChain for RAG pipelines and conversational AI agents. Implemented vector embeddings with Pinecone for semantic search and a real-time chat interface using WebSockets with Redis pub/sub.",
            &["NestJS", "PostgreSQL", "LangChain", "OpenAI API", "Redis", "Docker", "Pinecone", "WebSockets"],
            ProjectKind::Ai,
            "https://terzo.ai",
            &[
                "AI chatbot with LangChain RAG pipelines",
                "Vector embeddings using Pinecone for semantic search",
                "Real-time chat with WebSockets and Redis pub/sub",
                "Queue-based architecture with Bull and Redis",
            ],
            "Built with NestJS and PostgreSQL. LangChain for conversational AI and RAG pipelines, Pinecone for semantic search, WebSockets and Redis pub/sub for real-time communication.",
        ),
        project(
            2,
            "SimplyFlow",
            "Built workflow automation engine with n8n integration for custom trigger and action nodes. Implemented LangGraph-based AI agents for workflow decision making on an event-driven architecture.",
            &["NestJS", "PostgreSQL", "n8n", "LangGraph", "Docker", "AWS", "Event-Driven"],
            ProjectKind::Backend,
            "https://simplyflow.me",
            &[
                "Workflow automation engine with n8n integration",
                "LangGraph-based AI agents for workflow decisions",
                "Event-driven architecture with PostgreSQL triggers",
                "Containerized microservices on AWS ECS with auto-scaling",
            ],
            "Developed using NestJS with PostgreSQL. Integrated n8n with custom nodes and LangGraph for AI-powered workflows. Deployed as containerized microservices on AWS ECS.",
        ),
        project(
            5,
            "SafeStreet",
            "Developed geospatial backend using PostGIS for location-based incident queries and proximity alerts, with real-time notifications over WebSockets and Redis pub/sub.",
            &["NestJS", "PostgreSQL", "PostGIS", "Redis", "WebSockets", "Docker", "CASL"],
            ProjectKind::Backend,
            "https://safestreet.com.au",
            &[
                "Geospatial queries using PostGIS",
                "Real-time notifications with WebSockets and Redis pub/sub",
                "RBAC system using CASL for different permission levels",
                "Caching reducing database load by 40%",
            ],
            "NestJS and PostgreSQL with the PostGIS extension. RBAC with CASL for admin, moderator, and user roles.",
        ),
        project(
            6,
            "4Corners",
            "Built e-commerce backend with inventory management, order processing, and Stripe payment integration. Designed optimistic locking for concurrent inventory updates.",
            &["NestJS", "PostgreSQL", "Stripe API", "Redis", "Docker", "AWS S3"],
            ProjectKind::Backend,
            "https://4corners.com",
            &[
                "E-commerce backend with inventory management",
                "Stripe integration for payments and subscriptions",
                "Optimistic locking preventing overselling",
                "File uploads with AWS S3 presigned URLs",
            ],
            "NestJS and PostgreSQL backend with Stripe webhooks and AWS S3 uploads.",
        ),
        project(
            7,
            "AutoPostMD",
            "Architected social media scheduling backend with Facebook Graph, Instagram Business, and LinkedIn APIs, publishing through Bull queues.",
            &["Node.js", "PostgreSQL", "Facebook API", "Instagram API", "LinkedIn API", "Redis", "Bull"],
            ProjectKind::Backend,
            "https://autopostmd.com",
            &[
                "Social media scheduling across multiple platforms",
                "Job scheduling with Bull queues for reliability",
                "OAuth 2.0 integration for secure authentication",
            ],
            "Node.js and PostgreSQL with Bull queues for scheduled publishing and OAuth 2.0 platform connections.",
        ),
        project(
            8,
            "GuardXP",
            "Architecting enterprise security operations platform with multi-tenant data isolation and fine-grained ABAC authorization using CASL.",
            &["NestJS", "PostgreSQL", "CASL", "Docker", "AWS", "Turborepo", "WebSockets"],
            ProjectKind::Backend,
            "https://guardxp.net",
            &[
                "Multi-tenant enterprise security platform",
                "Fine-grained ABAC authorization with CASL",
                "Real-time incident tracking with WebSockets",
            ],
            "Enterprise platform built with NestJS and PostgreSQL using row-level security. In Progress.",
        ),
        project(
            9,
            "FitnessAds.ai",
            "Building AI-powered ad generation backend with LangChain RAG and a fitness consultation chatbot using LangGraph agent workflows.",
            &["NestJS", "PostgreSQL", "LangChain", "OpenAI API", "Docker", "LangGraph"],
            ProjectKind::Ai,
            "https://fitnessads.ai",
            &[
                "AI-powered ad generation with LangChain RAG",
                "Fitness consultation chatbot using LangGraph",
                "Analytics pipeline for campaign performance",
            ],
            "NestJS and PostgreSQL backend with LangChain RAG and LangGraph agents. In Progress.",
        ),
        project(
            3,
            "Learning Management System",
            "Built LMS backend with course management, enrollment, and progress tracking APIs. Video streaming pipeline with AWS S3 and CloudFront.",
            &["NestJS", "PostgreSQL", "WebSockets", "Redis", "AWS S3", "CloudFront", "CASL"],
            ProjectKind::Backend,
            "",
            &[
                "Course management and enrollment system",
                "Real-time notifications using WebSockets and Redis",
                "Video streaming with AWS S3 and CloudFront",
                "RBAC system for admin, instructor, and student roles",
            ],
            "NestJS and PostgreSQL backend with CASL-based RBAC.",
        ),
        project(
            4,
            "QuizApp Competition Platform",
            "Architected real-time quiz competition backend supporting 1000+ concurrent users with live leaderboards on Redis sorted sets.",
            &["NestJS", "PostgreSQL", "WebSockets", "Redis", "Bull", "Real-time"],
            ProjectKind::Backend,
            "",
            &[
                "Real-time quiz platform for 1000+ concurrent users",
                "Live leaderboard with Redis sorted sets",
                "Anti-cheating mechanisms and session validation",
            ],
            "NestJS and PostgreSQL with WebSockets and Redis sorted sets for ranking.",
        ),
    ]
}

fn client(name: &str, summary: &str, highlights: &[&str]) -> ClientProject {
    ClientProject {
        name: name.to_string(),
        summary: summary.to_string(),
        highlights: strings(highlights),
    }
}

pub fn clients() -> Vec<ClientProject> {
    vec![
        client(
            "sellrgrid.com",
            "E-commerce Platform",
            &[
                "Advanced RBAC & permission systems",
                "Payment gateway integration",
                "MongoDB aggregation optimization",
            ],
        ),
        client(
            "proteinwriter.com",
            "Content Management",
            &[
                "AI-powered content generation",
                "Real-time collaboration features",
                "WebSocket implementation",
            ],
        ),
        client(
            "nordsecpro.com",
            "Security Platform",
            &[
                "Advanced security protocols",
                "DevOps CI/CD implementation",
                "AWS cloud architecture",
            ],
        ),
    ]
}

/// The canned chat paragraphs, one per fallback topic plus the overview.
pub fn answers() -> Vec<CannedAnswer> {
    fallback::RULES
        .iter()
        .map(|rule| (rule.topic, &*rule.response))
        .chain([("overview", fallback::OVERVIEW)])
        .map(|(topic, response)| CannedAnswer {
            topic: topic.to_string(),
            response: response.to_string(),
        })
        .collect()
}

pub fn portfolio() -> Portfolio {
    Portfolio {
        owner: owner(),
        skills: skills(),
        experience: experience(),
        projects: projects(),
        clients: clients(),
        answers: answers(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::Validate;

    #[test]
    fn test_builtin_portfolio_is_valid() {
        let portfolio = portfolio();
        assert!(portfolio.validate().is_ok());
        assert_eq!(portfolio.skills.len(), 9);
        assert_eq!(portfolio.experience.len(), 4);
        assert_eq!(portfolio.projects.len(), 9);
        assert_eq!(portfolio.clients.len(), 3);
        assert_eq!(portfolio.answer_for("overview"), Some(fallback::OVERVIEW));
        assert_eq!(portfolio.answer_for("devops"), Some(fallback::DEVOPS));
    }

    #[test]
    fn test_builtin_projects_without_site_have_no_live_url() {
        let portfolio = portfolio();
        let lms = portfolio.project_by_id(3).unwrap();
        assert!(lms.live().is_none());
        assert_eq!(portfolio.project_by_id(1).unwrap().live(), Some("https://terzo.ai"));
    }
}
