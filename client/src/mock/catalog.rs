//! Mock forum topics, projects and learning resources.

use time::macros::{date, datetime};

use super::{AVATAR_ALEX, AVATAR_JOHN, AVATAR_SARAH, strings};
use crate::net::types::Author;
use crate::state::forum::{Reply, Topic, TopicDetail};
use crate::state::projects::{
    Discussion, Member, Milestone, Project, ProjectDetail, ProjectLinks, ProjectStats,
};
use crate::state::resources::{
    Assignment, Chapter, Comment, Instructor, ResourceDetail, ResourceItem, ResourceSection, Submission,
    SubmissionStatus,
};

pub const FORUM_CATEGORIES: [&str; 5] =
    ["AI & ML", "Quantum Computing", "Cybersecurity", "Web Development", "Mobile Development"];

pub const FORUM_TAGS: [&str; 6] = ["Neural Networks", "Deep Learning", "AI", "Quantum", "Computing", "Research"];

pub const TECHNOLOGIES: [&str; 6] = ["TypeScript", "React", "Node.js", "Python", "Rust", "Cryptography"];

/// Community member behind a mock id.
#[must_use]
pub fn person(id: &str) -> Author {
    let (name, avatar) = match id {
        "1" => ("Sarah Connor", AVATAR_SARAH),
        "2" => ("John Matrix", AVATAR_JOHN),
        _ => ("Alex Murphy", AVATAR_ALEX),
    };
    Author { id: id.to_owned(), name: name.to_owned(), avatar: avatar.to_owned() }
}

// =============================================================================
// HOME
// =============================================================================

/// Card on the landing page: a title, one headline number and a cover image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub id: String,
    pub title: String,
    pub metric: u32,
    pub image: String,
}

fn highlight(id: &str, title: &str, metric: u32, image: &str) -> Highlight {
    Highlight { id: id.to_owned(), title: title.to_owned(), metric, image: image.to_owned() }
}

/// Trending topics; `metric` is the view count.
#[must_use]
pub fn trending_topics() -> Vec<Highlight> {
    vec![
        highlight(
            "1",
            "Quantum Computing in 2025",
            1234,
            "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800&h=400&fit=crop",
        ),
        highlight(
            "2",
            "Neural Networks Evolution",
            982,
            "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?w=800&h=400&fit=crop",
        ),
        highlight(
            "3",
            "Cybersecurity Frontiers",
            756,
            "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?w=800&h=400&fit=crop",
        ),
    ]
}

/// Top projects; `metric` is the star count.
#[must_use]
pub fn top_projects() -> Vec<Highlight> {
    vec![
        highlight(
            "1",
            "Neural Interface SDK",
            128,
            "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=800&h=400&fit=crop",
        ),
        highlight(
            "2",
            "Quantum Encryption Library",
            98,
            "https://images.unsplash.com/photo-1518432031352-d6fc5c10da5a?w=800&h=400&fit=crop",
        ),
        highlight(
            "3",
            "AI-Powered Analytics",
            76,
            "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=800&h=400&fit=crop",
        ),
    ]
}

// =============================================================================
// FORUM
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn topic(
    id: &str,
    title: &str,
    description: &str,
    created_by: &str,
    created_at: time::Date,
    category: &str,
    tags: &[&str],
    views: u32,
    replies: u32,
) -> Topic {
    Topic {
        id: id.to_owned(),
        title: title.to_owned(),
        description: description.to_owned(),
        created_by: created_by.to_owned(),
        created_at,
        category: category.to_owned(),
        tags: strings(tags),
        views,
        replies,
    }
}

#[must_use]
pub fn topics() -> Vec<Topic> {
    vec![
        topic(
            "1",
            "Neural Networks Evolution",
            "Discussing the latest advancements in neural network architectures",
            "1",
            date!(2024-03-15),
            "AI & ML",
            &["Neural Networks", "Deep Learning", "AI"],
            1234,
            45,
        ),
        topic(
            "2",
            "Quantum Computing Progress",
            "Updates and breakthroughs in quantum computing research",
            "2",
            date!(2024-03-10),
            "Quantum Computing",
            &["Quantum", "Computing", "Research"],
            982,
            23,
        ),
        topic(
            "3",
            "Zero-Trust Networks in Practice",
            "Lessons learned rolling out zero-trust access at scale",
            "3",
            date!(2024-03-08),
            "Cybersecurity",
            &["Research"],
            611,
            17,
        ),
        topic(
            "4",
            "Server Components vs. Islands",
            "Comparing partial hydration strategies for content-heavy sites",
            "2",
            date!(2024-03-05),
            "Web Development",
            &["Computing"],
            874,
            31,
        ),
        topic(
            "5",
            "On-Device Inference on Phones",
            "Running quantized models on mobile NPUs without draining the battery",
            "1",
            date!(2024-03-01),
            "Mobile Development",
            &["AI", "Deep Learning"],
            455,
            12,
        ),
        topic(
            "6",
            "Post-Quantum Key Exchange",
            "Is it time to migrate TLS deployments to hybrid key exchange?",
            "3",
            date!(2024-02-27),
            "Cybersecurity",
            &["Quantum", "Research"],
            1502,
            58,
        ),
        topic(
            "7",
            "Transformers Beyond Language",
            "Attention-based architectures for vision, audio and control",
            "2",
            date!(2024-02-22),
            "AI & ML",
            &["Neural Networks", "AI"],
            1320,
            40,
        ),
        topic(
            "8",
            "Error Correction Milestones",
            "Logical qubits, surface codes and what the latest results really mean",
            "1",
            date!(2024-02-18),
            "Quantum Computing",
            &["Quantum", "Research"],
            388,
            9,
        ),
        topic(
            "9",
            "WebAssembly Outside the Browser",
            "Component model, WASI and edge runtimes",
            "3",
            date!(2024-02-12),
            "Web Development",
            &["Computing"],
            702,
            21,
        ),
        topic(
            "10",
            "Offline-First Mobile Sync",
            "CRDTs and conflict handling for apps that live on flaky networks",
            "2",
            date!(2024-02-07),
            "Mobile Development",
            &["Research"],
            296,
            6,
        ),
        topic(
            "11",
            "Spiking Neural Networks",
            "Neuromorphic hardware and event-driven learning",
            "1",
            date!(2024-01-30),
            "AI & ML",
            &["Neural Networks", "Research"],
            543,
            14,
        ),
        topic(
            "12",
            "Red Team Tooling Roundup",
            "Favourite frameworks and lab setups for adversary emulation",
            "3",
            date!(2024-01-21),
            "Cybersecurity",
            &["Computing"],
            821,
            27,
        ),
    ]
}

const NEURAL_TOPIC_BODY: &str = "The field of neural networks has seen remarkable progress in recent years. \
From basic perceptrons to complex transformers, the evolution has been fascinating.

Let's discuss the latest advancements and their implications for the future of AI.

Key points to consider:
1. Architectural innovations
2. Training efficiency
3. Real-world applications
4. Future directions";

#[must_use]
pub fn topic_detail(id: &str) -> Option<TopicDetail> {
    let topic = topics().into_iter().find(|t| t.id == id)?;
    let (content, likes) = if id == "1" { (NEURAL_TOPIC_BODY.to_owned(), 89) } else { (topic.description, 0) };
    Some(TopicDetail {
        author: person(&topic.created_by),
        id: topic.id,
        title: topic.title,
        content,
        category: topic.category,
        tags: topic.tags,
        created_at: topic.created_at,
        views: topic.views,
        likes,
    })
}

#[must_use]
pub fn topic_replies(id: &str) -> Vec<Reply> {
    if id != "1" {
        return Vec::new();
    }
    vec![
        Reply {
            id: "1".to_owned(),
            content: "The advancement in transformer architectures has been particularly impressive. \
                      The attention mechanism has revolutionized how we process sequential data."
                .to_owned(),
            author: person("2"),
            timestamp: datetime!(2024-03-15 10:30 UTC),
            likes: 12,
            liked: false,
        },
        Reply {
            id: "2".to_owned(),
            content: "What are your thoughts on the efficiency improvements in training large models? \
                      The computational requirements are still a major challenge."
                .to_owned(),
            author: person("3"),
            timestamp: datetime!(2024-03-15 11:15 UTC),
            likes: 8,
            liked: true,
        },
    ]
}

// =============================================================================
// PROJECTS
// =============================================================================

#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".to_owned(),
            title: "Neural Interface SDK".to_owned(),
            description: "Building a comprehensive SDK for neural interface applications".to_owned(),
            tags: strings(&["TypeScript", "React", "Node.js"]),
            progress: 65,
            created_by: "1".to_owned(),
            members: strings(&["1", "2"]),
            created_at: date!(2024-03-15),
            image: "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=800&h=400&fit=crop".to_owned(),
        },
        Project {
            id: "2".to_owned(),
            title: "Quantum Encryption".to_owned(),
            description: "Advanced quantum encryption protocols for secure communication".to_owned(),
            tags: strings(&["Python", "Rust", "Cryptography"]),
            progress: 30,
            created_by: "2".to_owned(),
            members: strings(&["2"]),
            created_at: date!(2024-03-10),
            image: "https://images.unsplash.com/photo-1518432031352-d6fc5c10da5a?w=800&h=400&fit=crop".to_owned(),
        },
    ]
}

const NEURAL_SDK_README: &str = "# Neural Interface SDK

## Overview
This SDK provides a comprehensive set of tools for developing neural interface applications...

## Features
- Low-level hardware drivers
- Signal processing middleware
- High-level APIs
- Real-time data streaming

## Getting Started
1. Install dependencies
2. Configure hardware
3. Run example application";

fn member(id: &str, role: &str) -> Member {
    let p = person(id);
    Member { id: p.id, name: p.name, avatar: p.avatar, role: role.to_owned() }
}

#[must_use]
pub fn project_detail(id: &str) -> Option<ProjectDetail> {
    if id == "1" {
        return Some(neural_sdk_detail());
    }
    let project = projects().into_iter().find(|p| p.id == id)?;
    Some(ProjectDetail {
        readme: format!("# {}\n\n{}", project.title, project.description),
        members: project
            .members
            .iter()
            .map(|m| member(m, if *m == project.created_by { "Owner" } else { "Developer" }))
            .collect(),
        owner: person(&project.created_by),
        id: project.id,
        title: project.title,
        description: project.description,
        image: project.image,
        progress: project.progress,
        stats: ProjectStats::default(),
        tags: project.tags,
        category: "Other".to_owned(),
        links: ProjectLinks::default(),
        milestones: Vec::new(),
        discussions: Vec::new(),
    })
}

fn neural_sdk_detail() -> ProjectDetail {
    ProjectDetail {
        id: "1".to_owned(),
        title: "Neural Interface SDK".to_owned(),
        description: "A comprehensive software development kit for building neural interface applications. \
                      Includes low-level drivers, middleware, and high-level APIs."
            .to_owned(),
        image: "https://images.unsplash.com/photo-1624378439575-d8705ad7ae80?w=1200&h=400&fit=crop".to_owned(),
        progress: 65,
        owner: person("1"),
        members: vec![member("1", "Owner"), member("2", "Developer"), member("3", "Designer")],
        stats: ProjectStats { stars: 128, forks: 45, issues: 12, contributors: 8 },
        readme: NEURAL_SDK_README.to_owned(),
        tags: strings(&["Neural Networks", "SDK", "Hardware"]),
        category: "AI & ML".to_owned(),
        links: ProjectLinks {
            github: "https://github.com/example/neural-sdk".to_owned(),
            website: "https://neural-sdk.dev".to_owned(),
        },
        milestones: vec![
            Milestone { title: "Alpha Release".to_owned(), date: date!(2024-04-01), completed: true },
            Milestone { title: "Beta Testing".to_owned(), date: date!(2024-06-01), completed: false },
            Milestone { title: "v1.0 Release".to_owned(), date: date!(2024-08-01), completed: false },
        ],
        discussions: vec![Discussion {
            id: "1".to_owned(),
            author: person("2"),
            content: "The signal processing module is looking great! I noticed some potential optimizations we could make."
                .to_owned(),
            timestamp: datetime!(2024-03-20 10:30 UTC),
            likes: 12,
            liked: false,
            replies: vec![Discussion {
                id: "1.1".to_owned(),
                author: person("1"),
                content: "Thanks John! Could you elaborate on the specific areas you think we could optimize?"
                    .to_owned(),
                timestamp: datetime!(2024-03-20 11:15 UTC),
                likes: 5,
                liked: false,
                replies: Vec::new(),
            }],
        }],
    }
}

// =============================================================================
// RESOURCES
// =============================================================================

fn item(id: &str, name: &str, description: &str, image: &str, stats: &[(&str, &str)]) -> ResourceItem {
    ResourceItem {
        id: id.to_owned(),
        name: name.to_owned(),
        description: description.to_owned(),
        image: image.to_owned(),
        stats: stats.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect(),
    }
}

#[must_use]
pub fn resource_sections() -> Vec<ResourceSection> {
    vec![
        ResourceSection {
            title: "Video Tutorials".to_owned(),
            items: vec![
                item(
                    "1",
                    "JavaScript Mastery",
                    "Modern web development tutorials",
                    "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800&h=400&fit=crop",
                    &[("subscribers", "1.2M"), ("videos", "200"), ("rating", "4.9")],
                ),
                item(
                    "2",
                    "Fireship",
                    "Quick, practical dev tutorials",
                    "https://images.unsplash.com/photo-1542831371-29b0f74f9713?w=800&h=400&fit=crop",
                    &[("subscribers", "2.1M"), ("videos", "500"), ("rating", "4.8")],
                ),
                item(
                    "3",
                    "Traversy Media",
                    "Web development tutorials",
                    "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=800&h=400&fit=crop",
                    &[("subscribers", "1.8M"), ("videos", "1000"), ("rating", "4.9")],
                ),
            ],
        },
        ResourceSection {
            title: "Documentation".to_owned(),
            items: vec![
                item(
                    "4",
                    "MDN Web Docs",
                    "Comprehensive web documentation",
                    "https://images.unsplash.com/photo-1516259762381-22954d7d3ad2?w=800&h=400&fit=crop",
                    &[("articles", "10K+"), ("contributors", "1000+"), ("languages", "40")],
                ),
                item(
                    "5",
                    "React Documentation",
                    "Official React documentation",
                    "https://images.unsplash.com/photo-1633356122102-3fe601e05bd2?w=800&h=400&fit=crop",
                    &[("tutorials", "100"), ("examples", "500"), ("updates", "Weekly")],
                ),
                item(
                    "6",
                    "TypeScript Handbook",
                    "TypeScript language documentation",
                    "https://images.unsplash.com/photo-1627398242454-45a1465c2479?w=800&h=400&fit=crop",
                    &[("chapters", "50"), ("examples", "300"), ("updates", "Monthly")],
                ),
            ],
        },
        ResourceSection {
            title: "Practice & Examples".to_owned(),
            items: vec![
                item(
                    "7",
                    "Frontend Mentor",
                    "Real-world frontend challenges",
                    "https://images.unsplash.com/photo-1507238691740-187a5b1d37b8?w=800&h=400&fit=crop",
                    &[("challenges", "500"), ("solutions", "10K+"), ("difficulty", "3 levels")],
                ),
                item(
                    "8",
                    "CodePen",
                    "Frontend code examples",
                    "https://images.unsplash.com/photo-1555099962-4199c345e5dd?w=800&h=400&fit=crop",
                    &[("pens", "1M+"), ("creators", "100K+"), ("views", "1B+")],
                ),
                item(
                    "9",
                    "GitHub Trending",
                    "Trending open source projects",
                    "https://images.unsplash.com/photo-1618401471353-b98afee0b2eb?w=800&h=400&fit=crop",
                    &[("projects", "1K+"), ("languages", "50"), ("updates", "Daily")],
                ),
            ],
        },
        ResourceSection {
            title: "Articles & Blogs".to_owned(),
            items: vec![
                item(
                    "10",
                    "Dev.to",
                    "Community-driven dev articles",
                    "https://images.unsplash.com/photo-1432821596592-e2c18b78144f?w=800&h=400&fit=crop",
                    &[("articles", "100K+"), ("writers", "50K+"), ("readers", "1M+")],
                ),
                item(
                    "11",
                    "Medium - Programming",
                    "Curated programming articles",
                    "https://images.unsplash.com/photo-1499750310107-5fef28a66643?w=800&h=400&fit=crop",
                    &[("publications", "1000"), ("authors", "10K+"), ("topics", "100")],
                ),
                item(
                    "12",
                    "CSS Tricks",
                    "Web development articles",
                    "https://images.unsplash.com/photo-1507721999472-8ed4421c4af2?w=800&h=400&fit=crop",
                    &[("articles", "5K+"), ("snippets", "1K+"), ("guides", "200")],
                ),
            ],
        },
    ]
}

const JS_MASTERY_DESCRIPTION: &str = "Master modern web development with this comprehensive course. We'll cover:

- Advanced JavaScript concepts
- React and Next.js
- State management
- API integration
- Performance optimization
- Deployment strategies";

fn chapter(time: &str, title: &str) -> Chapter {
    Chapter { time: time.to_owned(), title: title.to_owned() }
}

#[must_use]
pub fn resource_detail(id: &str) -> Option<ResourceDetail> {
    let item = resource_sections().into_iter().flat_map(|s| s.items).find(|i| i.id == id)?;
    let sarah = person("1");
    let instructor = Instructor {
        name: sarah.name,
        avatar: sarah.avatar,
        bio: "Senior Software Engineer | JavaScript Expert | Tech Educator".to_owned(),
    };
    if id != "1" {
        return Some(ResourceDetail {
            id: item.id,
            title: item.name,
            description: item.description,
            video_url: String::new(),
            thumbnail: item.image,
            instructor,
            views: 0,
            likes: 0,
            comments: 0,
            rating: 0.0,
            duration: String::new(),
            level: "All levels".to_owned(),
            tags: Vec::new(),
            chapters: Vec::new(),
        });
    }
    Some(ResourceDetail {
        id: item.id,
        title: "JavaScript Mastery - Modern Web Development".to_owned(),
        description: JS_MASTERY_DESCRIPTION.to_owned(),
        video_url: "https://www.youtube.com/embed/w7ejDZ8SWv8".to_owned(),
        thumbnail: "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=1200&h=600&fit=crop".to_owned(),
        instructor,
        views: 45678,
        likes: 2341,
        comments: 389,
        rating: 4.9,
        duration: "2:15:30".to_owned(),
        level: "Advanced".to_owned(),
        tags: strings(&["JavaScript", "React", "Web Development"]),
        chapters: vec![
            chapter("0:00", "Introduction to Modern Web Development"),
            chapter("15:30", "JavaScript Fundamentals"),
            chapter("45:20", "React Essentials"),
            chapter("1:15:00", "State Management Deep Dive"),
            chapter("1:45:00", "Building Production-Ready Apps"),
            chapter("2:05:00", "Deployment and Best Practices"),
        ],
    })
}

#[must_use]
pub fn resource_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "1".to_owned(),
            author: person("2"),
            content: "The React section was incredibly detailed. Great explanation of hooks!".to_owned(),
            timestamp: datetime!(2024-03-20 10:30 UTC),
            likes: 45,
            liked: false,
        },
        Comment {
            id: "2".to_owned(),
            author: person("3"),
            content: "Could you make a follow-up video on advanced state management patterns?".to_owned(),
            timestamp: datetime!(2024-03-20 11:15 UTC),
            likes: 28,
            liked: true,
        },
    ]
}

const ASSIGNMENT_BRIEF: &str = "Create a full-stack web application using the technologies covered in this tutorial:

1. React frontend with modern hooks
2. State management implementation
3. RESTful API integration
4. Responsive design with Tailwind CSS
5. Deployment configuration

Submit your project repository with a detailed README.";

#[must_use]
pub fn resource_assignment() -> Assignment {
    Assignment {
        id: "1".to_owned(),
        title: "Build a Full-Stack Web Application".to_owned(),
        description: ASSIGNMENT_BRIEF.to_owned(),
        due_date: date!(2024-04-15),
        submissions: vec![
            Submission {
                author: person("2"),
                status: SubmissionStatus::Approved,
                submitted_at: date!(2024-03-25),
                feedback: Some("Excellent implementation! Clean code and great documentation.".to_owned()),
                url: None,
            },
            Submission {
                author: person("3"),
                status: SubmissionStatus::Pending,
                submitted_at: date!(2024-03-26),
                feedback: None,
                url: None,
            },
        ],
    }
}

#[must_use]
pub fn resource_viewers() -> Vec<Author> {
    vec![person("2"), person("3"), person("1")]
}
