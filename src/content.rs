//! Static page content.

pub struct SkillCategory {
    pub title: &'static str,
    /// `(name, data-progress)` pairs
    pub skills: &'static [(&'static str, &'static str)],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Programming",
        skills: &[("Python", "90%"), ("SQL", "80%"), ("JavaScript", "70%")],
    },
    SkillCategory {
        title: "Data & ML",
        skills: &[("Pandas", "85%"), ("scikit-learn", "75%"), ("TensorFlow", "65%")],
    },
    SkillCategory {
        title: "Tools",
        skills: &[("Git", "85%"), ("Docker", "65%"), ("Linux", "75%")],
    },
];

#[derive(Debug, PartialEq)]
pub struct TimelineItem {
    pub title: &'static str,
    pub place: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const EXPERIENCE: &[TimelineItem] = &[
    TimelineItem {
        title: "Python Developer Intern",
        place: "Software Solutions",
        period: "2024",
        summary: "Built data pipelines and REST endpoints in Python.",
    },
    TimelineItem {
        title: "Data Analyst Trainee",
        place: "Analytics Lab",
        period: "2023",
        summary: "Cleaned, analysed and visualised operational datasets.",
    },
];

pub const EDUCATION: &[TimelineItem] = &[TimelineItem {
    title: "B.E. Computer Science and Engineering",
    place: "Anna University",
    period: "2021 - 2025",
    summary: "Coursework in algorithms, databases and machine learning.",
}];

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub link: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Sales Forecasting",
        description: "Time-series models predicting weekly store sales.",
        tags: &["Python", "Pandas", "scikit-learn"],
        link: None,
    },
    Project {
        title: "Resume Screener",
        description: "Ranks resumes against a job description with NLP similarity scores.",
        tags: &["Python", "NLP", "Flask"],
        link: None,
    },
    Project {
        title: "Portfolio Site",
        description: "This site: responsive layout, scroll effects and a validated contact form.",
        tags: &["Rust", "WebAssembly", "Dioxus"],
        link: None,
    },
];

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Python for Data Science",
        issuer: "IBM",
    },
    Certification {
        name: "SQL Fundamentals",
        issuer: "HackerRank",
    },
];
