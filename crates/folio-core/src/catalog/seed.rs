//! Built-in default project collection
//!
//! Used to populate the catalog on first run and whenever the persisted
//! snapshot is missing, corrupt, or carries a stale data version.

use crate::catalog::Project;

/// Version marker for the persisted data layout. Bumping this discards any
/// previously persisted snapshot in favor of the seed collection below.
pub const DATA_VERSION: &str = "3";

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in default project collection, in display order
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project::new(
            "Finflo",
            "Collaborative financial management web application with group \
             expense tracking, multi-currency support, and interactive visualizations",
            "Full Stack",
        )
        .with_long_description(
            "A financial management solution that lets teams collaboratively manage \
             budgets, track expenses, and generate visual reports. Features include \
             transaction categorization, multi-currency support, recurring \
             transactions, and role-based permissions.",
        )
        .with_tags(tags(&["Python", "Django", "PostgreSQL", "jQuery", "Bootstrap"]))
        .with_image("/images/project_cover/finflo.png")
        .with_repo_url("https://github.com/ritafetsch/finflo.git"),
        Project::new(
            "Advisorbot",
            "Cryptocurrency market analysis CLI tool",
            "Application",
        )
        .with_long_description(
            "A C++ command-line application for cryptocurrency market analysis: \
             real-time data processing, statistical computations, and trading \
             insights including EMA, SMA, price prediction, and market data \
             exploration across multiple currency pairs.",
        )
        .with_tags(tags(&[
            "C++",
            "Data Structures",
            "Algorithms",
            "Financial Analysis",
            "Market Simulation",
        ]))
        .with_image("/images/project_cover/advisorbot.png")
        .with_repo_url("https://github.com/ritafetsch/advisorbot.git"),
        Project::new(
            "BioScience Protein Research API",
            "Bioinformatics data management system",
            "API",
        )
        .with_long_description(
            "A Django-based RESTful API for bioinformatics research, covering \
             protein, domain, and organism information retrieval, endpoints for \
             protein sequence analysis, and data serialization over relational \
             database queries.",
        )
        .with_tags(tags(&[
            "Python",
            "Django",
            "REST API",
            "Bioinformatics",
            "PostgreSQL",
            "Data Serialization",
            "Test-Driven Development",
        ]))
        .with_image("/images/project_cover/bioScience.png")
        .with_repo_url("https://github.com/ritafetsch/bioData.git"),
        Project::new(
            "Bujjit",
            "Personal finance management mobile app with expense tracking and insights",
            "Mobile",
        )
        .with_long_description(
            "A React Native mobile application for personal financial management: \
             expense tracking, transaction analysis, user authentication, \
             category-based tracking, and monthly financial reporting.",
        )
        .with_tags(tags(&[
            "React Native",
            "Mobile Development",
            "Expo",
            "SQLite",
            "Financial Technology",
            "AsyncStorage",
            "User Authentication",
            "Data Visualization",
        ]))
        .with_image("/images/project_cover/bujjit.png")
        .with_repo_url("https://github.com/cozie11/bujjit.git"),
        Project::new(
            "Scientific Calculator",
            "Cross-platform mobile calculator with dynamic theming",
            "Mobile",
        )
        .with_long_description(
            "A React Native calculator with trigonometric functions, exponential \
             calculations, memory management, customizable themes, and support for \
             mathematical constants.",
        )
        .with_tags(tags(&[
            "React Native",
            "JavaScript",
            "Mobile Development",
            "Expo",
            "Cross-Platform",
            "Mathematical Computation",
        ]))
        .with_image("/images/project_cover/calculator.png")
        .with_repo_url("https://github.com/ritafetsch/calculator.git")
        .with_live_url("https://snack.expo.dev/@mariamjo/calculator?platform=web"),
        Project::new(
            "Angry Birds Clone",
            "Physics-based browser game",
            "Game",
        )
        .with_long_description(
            "A web-based game clone implementing physics simulation with JavaScript \
             and HTML5 Canvas: projectile motion, collision detection, and dynamic \
             object interactions.",
        )
        .with_tags(tags(&[
            "JavaScript",
            "Canvas",
            "Game Development",
            "Physics Simulation",
            "HTML5",
            "Interactive Web Graphics",
        ]))
        .with_image("/images/project_cover/angry-birds.png")
        .with_repo_url("https://github.com/ritafetsch/angry-birds")
        .with_live_url("https://ritafetsch.github.io/angry-birds/"),
        Project::new(
            "Insta Filters",
            "Instagram-style image processing web app",
            "Web App",
        )
        .with_long_description(
            "A p5.js image processing application with pixel-level transformations: \
             sepia tone, radial blur, edge detection, inverse, grayscale, and \
             threshold filters applied in real time.",
        )
        .with_tags(tags(&[
            "JavaScript",
            "p5.js",
            "Image Processing",
            "Canvas Manipulation",
            "Digital Image Algorithms",
        ]))
        .with_image("/images/project_cover/insta-filter.png")
        .with_repo_url("https://github.com/ritafetsch/insta-filters.git")
        .with_live_url("https://ritafetsch.github.io/insta-filters/"),
        Project::new(
            "Space Defense",
            "Asteroid interception arcade game",
            "Game",
        )
        .with_long_description(
            "A browser-based p5.js space shooter with procedural asteroid \
             generation, gravity simulation, collision detection, and dynamic \
             difficulty scaling.",
        )
        .with_tags(tags(&[
            "JavaScript",
            "p5.js",
            "Game Development",
            "Physics Simulation",
            "Procedural Generation",
        ]))
        .with_image("/images/project_cover/asteroids.png")
        .with_repo_url("https://github.com/ritafetsch/asteroid-game")
        .with_live_url("https://ritafetsch.github.io/asteroid-game/"),
        Project::new(
            "Average Face",
            "Interactive image averaging experiment",
            "Web App",
        )
        .with_long_description(
            "A p5.js web experiment in computational image processing: pixel-level \
             analysis across multiple images, visualizing average pixel values \
             through mouse-driven interpolation.",
        )
        .with_tags(tags(&[
            "JavaScript",
            "p5.js",
            "Image Processing",
            "Data Visualization",
            "Computational Photography",
        ]))
        .with_image("/images/project_cover/image-average.png")
        .with_repo_url("https://github.com/ritafetsch/average-face")
        .with_live_url("https://ritafetsch.github.io/average-face/"),
    ]
}
