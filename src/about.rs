pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub tasks: &'static [&'static str],
}

impl TeamMember {
    /// Initial shown on the roster card: first letter of the last name.
    pub fn initial(&self) -> char {
        self.name
            .split_whitespace()
            .last()
            .and_then(|word| word.chars().next())
            .unwrap_or('T')
    }
}

pub struct WorkShare {
    pub owner: &'static str,
    pub summary: &'static str,
}

pub const INTRO: &str = "We are a 6 member team collaborating to build an AI-powered Well-Being Companion \
that supports both mental wellness and physical fitness in a simple web interface.";

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Muhammad Junaid Nazar",
        role: "Team Lead, Full-Stack Developer and AI Expert",
        tasks: &[
            "Frontend (React + Vite)",
            "Backend (FastAPI) integration",
            "Connecting wellness & fitness modules",
        ],
    },
    TeamMember {
        name: "Noor Fatima Mir",
        role: "Mental Wellness Content & Prompt Engineer",
        tasks: &[
            "Mood categories & supportive responses",
            "Prompt design for safe, non-medical replies",
            "Mapping moods to tips & journaling prompts",
        ],
    },
    TeamMember {
        name: "Zainab",
        role: "Mindfulness & Stress Relief Specialist",
        tasks: &[
            "Breathing techniques & grounding exercises",
            "Mindfulness descriptions for the app",
            "Short, easy-to-use relaxation routines",
        ],
    },
    TeamMember {
        name: "Zunaira Sajad",
        role: "Journaling & Mental Health Tips Writer",
        tasks: &[
            "Journaling prompts for each mood",
            "General mental health tips text",
            "Review of tone & language (empathetic)",
        ],
    },
    TeamMember {
        name: "Muhammad Junaid Nazar",
        role: "Fitness Plan & Workout Designer",
        tasks: &[
            "Weight loss / muscle / general fitness plans",
            "Beginner-friendly home workouts",
            "Daily fitness tips library",
        ],
    },
    TeamMember {
        name: "Dr. Ammar Masood",
        role: "UI/UX & Presentation Lead",
        tasks: &[
            "Screen design, colors, and layout",
            "Hackathon pitch slides & demo flow",
            "Documentation & coordination",
        ],
    },
];

pub const WORK_DIVISION: &[WorkShare] = &[
    WorkShare {
        owner: "Muhammad Junaid Nazar",
        summary: "Web development (React + Vite), FastAPI integration, deployment-ready setup.",
    },
    WorkShare {
        owner: "Noor Fatima Mir",
        summary: "Mental wellness mood mapping, supportive messages, prompt engineering.",
    },
    WorkShare {
        owner: "Zainab",
        summary: "Mindfulness & stress relief techniques (breathing, grounding, relaxation flows).",
    },
    WorkShare {
        owner: "Zunaira Sajad",
        summary: "Journaling prompts and mental health tips for each mood.",
    },
    WorkShare {
        owner: "Muhammad Junaid Nazar",
        summary: "Fitness plans & workout routines (weight loss, muscle, general fitness, flexibility).",
    },
    WorkShare {
        owner: "Dr. Ammar Masood",
        summary: "UI/UX design, branding, slides, and final hackathon presentation.",
    },
];
