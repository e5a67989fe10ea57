//! Everything the page says. Literal, compiled in, never mutated.

use crate::components::icons::Icon;

pub const RESUME_PATH: &str = "/resume.pdf";

pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub portrait: &'static str,
    pub bio: &'static [&'static str],
    pub socials: &'static [Social],
}

pub struct Social {
    pub icon: Icon,
    pub href: &'static str,
}

pub struct SkillGroup {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub code_url: &'static str,
}

/// A labelled input of the contact form.
pub struct ContactField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea { rows: u32 },
}

impl FieldKind {
    /// `type` attribute for single-line inputs.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::TextArea { .. } => "text",
            FieldKind::Email => "email",
        }
    }
}

pub const PROFILE: Profile = Profile {
    name: "Garvit Varshney",
    role: "Frontend Developer",
    tagline: "I build exceptional and accessible digital experiences for the web.",
    portrait: "/assets/photo.jpg",
    bio: &[
        "I'm a passionate frontend developer with a strong foundation in HTML, CSS, and JavaScript. \
         I specialize in building responsive web applications using modern frameworks like React.",
        "With 5 years of experience in the industry, I've worked on a variety of projects ranging from \
         small business websites to complex web applications. I'm dedicated to creating clean, efficient, \
         and user-friendly interfaces.",
        "When I'm not coding, you can find me hiking, reading, or experimenting with new technologies.",
    ],
    socials: &[
        Social {
            icon: Icon::Github,
            href: "https://github.com",
        },
        Social {
            icon: Icon::Linkedin,
            href: "https://linkedin.com",
        },
        Social {
            icon: Icon::Mail,
            href: "mailto:garvitVarshney0906@gmail.com",
        },
    ],
};

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        title: "Frontend Development",
        items: &["HTML5", "CSS3", "JavaScript", "TypeScript", "React"],
    },
    SkillGroup {
        title: "UI Frameworks",
        items: &["Tailwind CSS", "Material UI", "Bootstrap"],
    },
    SkillGroup {
        title: "Tools",
        items: &["Git", "Webpack", "Vite", "Figma"],
    },
    SkillGroup {
        title: "Other",
        items: &["Responsive Design", "SEO", "Performance Optimization"],
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Apni Library",
        description: "A fully responsive e-commerce platform built with React and Node.js.",
        image: "/assets/apnilib.jpg",
        tags: &["React", "Node.js", "MongoDB"],
        demo_url: "https://e-book-platform.vercel.app/",
        code_url: "https://github.com/garvit0906/eBook-platform.git",
    },
    Project {
        title: "Portfolio Website",
        description: "A personal portfolio website showcasing my projects and skills.",
        image: "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: &["React", "Tailwind CSS", "TypeScript"],
        demo_url: "https://example.com",
        code_url: "https://github.com",
    },
    Project {
        title: "Weather App",
        description: "A weather application that displays current weather and forecasts.",
        image: "https://images.unsplash.com/photo-1592210454359-9043f067919b?ixlib=rb-4.0.3&ixid=M3wxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8fA%3D%3D&auto=format&fit=crop&w=1470&q=80",
        tags: &["JavaScript", "API", "CSS"],
        demo_url: "https://example.com",
        code_url: "https://github.com",
    },
];

pub const CONTACT_BLURB: &str = "I'm currently looking for new opportunities. Whether you have a question \
    or just want to say hi, I'll do my best to get back to you!";

pub const CONTACT_FIELDS: &[ContactField] = &[
    ContactField {
        id: "name",
        label: "Name",
        kind: FieldKind::Text,
        placeholder: "Your Name",
    },
    ContactField {
        id: "email",
        label: "Email",
        kind: FieldKind::Email,
        placeholder: "your.email@example.com",
    },
    ContactField {
        id: "subject",
        label: "Subject",
        kind: FieldKind::Text,
        placeholder: "Subject",
    },
    ContactField {
        id: "message",
        label: "Message",
        kind: FieldKind::TextArea { rows: 5 },
        placeholder: "Your message here...",
    },
];
