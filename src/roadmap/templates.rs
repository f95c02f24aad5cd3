//! 各领域的里程碑模板和默认学习资源.
//!
//! 每个领域 8 个阶段; 技能等级只改变前四个阶段的措辞, 不改变数量和结构.

use super::domain::Domain;
use super::survey::SkillLevel;

pub const TEMPLATE_LEN: usize = 8;

/// 模板措辞的粗粒度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillTier {
    Beginner,
    SomeExperience,
    Advanced,
}

impl SkillTier {
    pub fn from_skill(skill: Option<SkillLevel>) -> Self {
        match skill {
            Some(SkillLevel::CompleteBeginner) => SkillTier::Beginner,
            Some(SkillLevel::Advanced) => SkillTier::Advanced,
            _ => SkillTier::SomeExperience,
        }
    }
}

struct Step {
    title: &'static str,
    description: &'static str,
    tasks: &'static [&'static str],
}

const fn step(
    title: &'static str,
    description: &'static str,
    tasks: &'static [&'static str],
) -> Step {
    Step {
        title,
        description,
        tasks,
    }
}

struct DomainTemplate {
    standard: [Step; TEMPLATE_LEN],
    beginner: [Step; 4],
    advanced: [Step; 4],
    resources: &'static [&'static str],
}

/// 四个平行列表, 下标一一对应
#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneTemplates {
    pub titles: Vec<&'static str>,
    pub descriptions: Vec<&'static str>,
    pub tasks: Vec<Vec<&'static str>>,
    pub resources: Vec<Vec<&'static str>>,
}

pub fn templates_for(domain: Domain, tier: SkillTier) -> MilestoneTemplates {
    let template = template(domain);
    let opening = match tier {
        SkillTier::Beginner => Some(&template.beginner),
        SkillTier::Advanced => Some(&template.advanced),
        SkillTier::SomeExperience => None,
    };

    let steps: Vec<&Step> = template
        .standard
        .iter()
        .enumerate()
        .map(|(i, standard)| opening.and_then(|o| o.get(i)).unwrap_or(standard))
        .collect();

    MilestoneTemplates {
        titles: steps.iter().map(|s| s.title).collect(),
        descriptions: steps.iter().map(|s| s.description).collect(),
        tasks: steps.iter().map(|s| s.tasks.to_vec()).collect(),
        resources: steps.iter().map(|_| template.resources.to_vec()).collect(),
    }
}

/// 领域默认资源列表
pub fn domain_resources(domain: Domain) -> Vec<String> {
    template(domain)
        .resources
        .iter()
        .map(|r| r.to_string())
        .collect()
}

fn template(domain: Domain) -> &'static DomainTemplate {
    match domain {
        Domain::Cooking => &COOKING,
        Domain::Fitness => &FITNESS,
        Domain::Programming => &PROGRAMMING,
        Domain::Language => &LANGUAGE,
        Domain::Art => &ART,
        Domain::General => &GENERAL,
    }
}

// --- 1. Cooking ---
static COOKING: DomainTemplate = DomainTemplate {
    standard: [
        step("Kitchen Setup & Basics", "Set up your kitchen workspace and learn essential knife skills", &["Organize kitchen tools and workspace", "Learn basic knife cuts and safety", "Practice proper posture and grip", "Stock essential ingredients"]),
        step("Fundamental Techniques", "Master fundamental cooking techniques like sautéing and seasoning", &["Master sautéing and heat control", "Practice seasoning techniques", "Learn timing for multiple dishes", "Understand ingredient interactions"]),
        step("Recipe Mastery", "Practice core recipes and build confidence", &["Cook 3-5 foundational recipes", "Document cooking notes and adjustments", "Practice mise en place", "Taste and adjust seasoning"]),
        step("Advanced Skills", "Learn advanced techniques and develop your style", &["Make a pan sauce from fond", "Braise a tough cut until tender", "Bake a simple loaf of bread", "Cook a full meal without a recipe"]),
        step("Flavor Building", "Layer flavors with acid, aromatics and umami", &["Toast and grind whole spices", "Balance a dish with acid and salt", "Make a stock from scratch"]),
        step("Menu Planning", "Plan, shop for and cook a full week of meals", &["Write a weekly menu", "Batch-prep ingredients", "Turn leftovers into new dishes"]),
        step("Hosting a Meal", "Cook a multi-course meal for guests", &["Plan a three-course menu", "Write a cooking timeline", "Plate and serve for friends"]),
        step("Signature Dishes", "Refine a handful of dishes you can call your own", &["Iterate on a favorite recipe", "Write down your own recipes", "Collect feedback and adjust"]),
    ],
    beginner: [
        step("Kitchen Fundamentals", "Learn absolute kitchen basics and safety", &["Learn kitchen safety rules", "Identify basic tools", "Practice holding a knife safely", "Understand ingredient storage"]),
        step("Essential Cooking Methods", "Master basic cooking methods step by step", &["Learn to boil water safely", "Practice basic seasoning", "Understand heat levels", "Try simple sautéing"]),
        step("Recipe Practice", "Practice with very simple recipes", &["Cook 1-2 very simple recipes", "Focus on following instructions exactly", "Taste and learn", "Document what you tried"]),
        step("Advanced Skills", "Learn intermediate techniques", &["Roast vegetables evenly", "Cook rice and pasta perfectly", "Make a basic vinaigrette", "Cook eggs three ways"]),
    ],
    advanced: [
        step("Advanced Techniques", "Master advanced culinary techniques", &["Master knife techniques", "Understand advanced equipment", "Learn professional kitchen organization", "Study ingredient science"]),
        step("Complex Flavor Building", "Develop complex flavor profiles and techniques", &["Master sauce-making", "Perfect temperature control", "Understand flavor chemistry", "Create signature techniques"]),
        step("Culinary Innovation", "Create innovative dishes and techniques", &["Develop original recipes", "Master complex multi-course meals", "Innovate with ingredients", "Perfect presentation techniques"]),
        step("Mastery & Teaching Others", "Teach others and perfect your craft", &["Teach a dish to a friend", "Write a detailed recipe guide", "Refine plating and timing", "Critique your own cooking"]),
    ],
    resources: &[
        "Joshua Weissman YouTube channel",
        "Salt Fat Acid Heat by Samin Nosrat",
        "Serious Eats website",
        "Bon Appétit YouTube channel",
    ],
};

// --- 2. Fitness ---
static FITNESS: DomainTemplate = DomainTemplate {
    standard: [
        step("Foundation & Assessment", "Assess current fitness level and establish foundation", &["Complete fitness assessment", "Set realistic goals", "Learn basic movements", "Establish workout schedule"]),
        step("Form & Technique", "Learn correct form for all exercises", &["Film and review your squat", "Practice hip hinge patterns", "Learn push and pull basics", "Warm up properly every session"]),
        step("Building Strength", "Focus on building base strength", &["Follow a full-body program", "Log every workout", "Add weight gradually", "Sleep 7-9 hours"]),
        step("Progressive Training", "Advance to intermediate techniques", &["Switch to an upper/lower split", "Track weekly volume", "Schedule a deload week", "Retest your baseline lifts"]),
        step("Conditioning", "Improve cardiovascular endurance", &["Add two cardio sessions per week", "Try interval training", "Track resting heart rate"]),
        step("Nutrition Dialed In", "Support training with consistent nutrition", &["Track protein intake", "Plan pre- and post-workout meals", "Stay hydrated"]),
        step("Recovery & Mobility", "Build recovery habits that prevent injury", &["Add a mobility routine", "Schedule rest days", "Learn basic foam rolling"]),
        step("Peak & Retest", "Put your progress to the test", &["Retest all benchmarks", "Compare against your starting point", "Plan the next training block"]),
    ],
    beginner: [
        step("Fitness Basics & Safety", "Learn basic fitness concepts and safety", &["Learn proper posture", "Understand basic anatomy", "Practice breathing techniques", "Learn warm-up basics"]),
        step("Basic Movement Patterns", "Master basic bodyweight movements", &["Practice bodyweight squats", "Learn incline push-ups", "Hold a plank", "Walk daily"]),
        step("Simple Exercise Routine", "Establish a simple, consistent routine", &["Pick three workout days", "Follow a 20-minute routine", "Track each session", "Stretch after workouts"]),
        step("Building Consistency", "Build the habit of regular exercise", &["Keep a streak calendar", "Add one exercise per week", "Find a workout buddy", "Celebrate small wins"]),
    ],
    advanced: [
        step("Performance Optimization", "Optimize performance for competition", &["Analyze biomechanics", "Optimize training periodization", "Master recovery protocols", "Study sports science"]),
        step("Advanced Training Methods", "Master advanced training techniques", &["Program cluster sets", "Use velocity-based training", "Try contrast training", "Audit weak points"]),
        step("Competition Preparation", "Prepare for competitive events", &["Pick a target event", "Peak your training", "Rehearse event-day routine", "Plan nutrition for the event"]),
        step("Coaching Others", "Learn to coach and teach others", &["Cue a beginner through a lift", "Write a program for someone else", "Study coaching communication", "Review client progress"]),
    ],
    resources: &[
        "AthleanX YouTube channel",
        "MyFitnessPal app for tracking",
        "StrongLifts 5x5 program",
        "Starting Strength book by Mark Rippetoe",
    ],
};

// --- 3. Programming ---
static PROGRAMMING: DomainTemplate = DomainTemplate {
    standard: [
        step("Environment Setup", "Set up development environment and learn basics", &["Install development tools and IDE", "Learn version control basics", "Write your first 'Hello World'", "Understand basic syntax"]),
        step("Programming Fundamentals", "Master fundamental programming concepts", &["Practice variables and control flow", "Write small functions", "Work with lists and maps", "Solve 5 beginner exercises"]),
        step("Project Building", "Build real projects to apply knowledge", &["Pick a small project idea", "Break it into features", "Commit work daily", "Ship a first version"]),
        step("Advanced Concepts", "Learn advanced patterns and best practices", &["Study error handling", "Write unit tests", "Refactor your project", "Read other people's code"]),
        step("Working with Data", "Persist and query data in your programs", &["Read and write files", "Call a public API", "Store data in a database"]),
        step("Debugging & Testing", "Find and fix problems systematically", &["Use a debugger", "Reproduce bugs with tests", "Add logging to your project"]),
        step("Collaboration", "Work with others using professional tooling", &["Open a pull request", "Review someone's code", "Write a README"]),
        step("Portfolio Project", "Build and publish a project that shows your skills", &["Plan a portfolio project", "Deploy it publicly", "Write about what you learned"]),
    ],
    beginner: [
        step("Computer Basics", "Learn basic computer operation and concepts", &["Learn to use a computer efficiently", "Understand files and folders", "Learn basic typing", "Understand what code is"]),
        step("Programming Fundamentals", "Understand what programming is and basic concepts", &["Learn what variables are", "Write your first if statement", "Run a loop", "Print output to the screen"]),
        step("First Simple Project", "Build your very first simple program", &["Build a number guessing game", "Ask for user input", "Show a result", "Share it with a friend"]),
        step("Learning to Debug", "Learn to find and fix simple errors", &["Read an error message", "Use print debugging", "Search error messages online", "Fix three bugs on purpose"]),
    ],
    advanced: [
        step("System Architecture", "Master system design and architecture", &["Design scalable architectures", "Optimize system performance", "Implement security best practices", "Master DevOps practices"]),
        step("Advanced Algorithms", "Implement complex algorithms and data structures", &["Implement a balanced tree", "Study graph algorithms", "Profile hot paths", "Solve hard problems weekly"]),
        step("Complex System Design", "Design and build complex distributed systems", &["Design a distributed service", "Handle partial failures", "Add observability", "Load test the system"]),
        step("Open Source Contribution", "Contribute to major open source projects", &["Pick a project you use", "Fix a good-first-issue", "Review open pull requests", "Land a substantial change"]),
    ],
    resources: &[
        "FreeCodeCamp curriculum",
        "The Odin Project",
        "Traversy Media YouTube channel",
        "MDN Web Docs for reference",
    ],
};

// --- 4. Language ---
static LANGUAGE: DomainTemplate = DomainTemplate {
    standard: [
        step("Sounds & Survival Phrases", "Learn pronunciation and the phrases you need first", &["Learn the alphabet and sounds", "Memorize greetings and introductions", "Set up a daily vocabulary habit", "Listen to native audio daily"]),
        step("Core Grammar", "Understand the grammar behind everyday sentences", &["Study present tense verbs", "Learn sentence word order", "Practice question forms", "Write ten simple sentences"]),
        step("Everyday Conversations", "Handle common real-life situations", &["Role-play ordering food", "Practice asking for directions", "Talk about your day", "Record yourself speaking"]),
        step("Listening Immersion", "Train your ear with native content", &["Watch a show with target-language subtitles", "Follow a slow-news podcast", "Shadow native speakers", "Note new expressions"]),
        step("Past & Future", "Talk about what happened and what will happen", &["Learn past tense forms", "Learn future expressions", "Tell a short story"]),
        step("Reading Practice", "Read real texts with growing confidence", &["Read graded readers", "Read a news article weekly", "Keep a vocabulary notebook"]),
        step("Language Exchange", "Speak regularly with native speakers", &["Find an exchange partner", "Hold a 30-minute conversation", "Ask for corrections"]),
        step("Cultural Fluency", "Use idioms and cultural context naturally", &["Learn common idioms", "Study cultural etiquette", "Write a short essay"]),
    ],
    beginner: [
        step("First Words", "Start from zero with sounds and simple words", &["Learn how each letter sounds", "Learn 20 everyday words", "Say hello and goodbye", "Count to ten"]),
        step("Simple Sentences", "Put words together into simple sentences", &["Learn 'I am' and 'I have'", "Describe yourself", "Ask simple questions", "Practice with flashcards"]),
        step("Basic Conversations", "Hold very short conversations", &["Introduce yourself out loud", "Order a drink in a role-play", "Practice with an app daily", "Repeat after audio clips"]),
        step("Listening Basics", "Understand slow, simple speech", &["Listen to a beginner podcast", "Watch a children's cartoon", "Write down words you recognize", "Replay difficult parts"]),
    ],
    advanced: [
        step("Nuance & Register", "Master formal and informal registers", &["Compare formal and informal speech", "Study regional variations", "Write a formal email", "Analyze native opinion pieces"]),
        step("Advanced Grammar", "Polish complex grammatical structures", &["Master the subjunctive", "Use complex clauses", "Correct your own writing", "Study common native errors"]),
        step("Debate & Discussion", "Argue and persuade in the language", &["Debate a current topic", "Give a 5-minute presentation", "Summarize a lecture", "Join a discussion group"]),
        step("Native-Level Media", "Consume unadapted native content", &["Read a novel", "Watch films without subtitles", "Follow native podcasts", "Translate a short text"]),
    ],
    resources: &[
        "Duolingo app for daily practice",
        "HelloTalk for language exchange",
        "News in Slow [Language] podcasts",
        "Anki flashcard app for vocabulary",
    ],
};

// --- 5. Art ---
static ART: DomainTemplate = DomainTemplate {
    standard: [
        step("Materials & Warm-ups", "Choose your materials and build a warm-up habit", &["Pick a sketchbook and core tools", "Draw lines and ellipses daily", "Set up a practice space", "Collect reference images"]),
        step("Shapes & Form", "See objects as simple 3D forms", &["Draw boxes, cylinders and spheres", "Practice basic perspective", "Construct objects from forms", "Draw from observation"]),
        step("Light & Value", "Render light and shadow convincingly", &["Create a value scale", "Shade simple forms", "Study cast shadows", "Do quick value thumbnails"]),
        step("Composition", "Arrange elements into strong images", &["Study the rule of thirds", "Make thumbnail compositions", "Analyze master works", "Design a focal point"]),
        step("Color Theory", "Use color with intention", &["Paint a color wheel", "Study color temperature", "Make limited-palette studies"]),
        step("Figure & Gesture", "Capture people and movement", &["Do 30-second gesture drawings", "Study basic proportions", "Draw people in public"]),
        step("Personal Style", "Explore and develop your own style", &["Copy artists you admire", "Try a new medium", "Create a themed series"]),
        step("Portfolio Pieces", "Finish polished work you can share", &["Plan a finished piece", "Take it from sketch to final", "Share it and gather feedback"]),
    ],
    beginner: [
        step("Getting Comfortable", "Get comfortable making marks on paper", &["Buy a pencil and sketchbook", "Fill a page with lines", "Draw simple objects around you", "Draw for 10 minutes a day"]),
        step("Seeing Shapes", "Learn to see simple shapes in everything", &["Trace shapes in photos", "Draw a cup from life", "Practice circles and squares", "Compare your drawing to the object"]),
        step("Simple Shading", "Add basic light and shadow", &["Shade a sphere", "Try hatching", "Draw an object under a lamp", "Make a light-to-dark scale"]),
        step("First Finished Drawing", "Complete your first finished drawing", &["Pick a simple still life", "Sketch lightly first", "Add shading", "Sign and date it"]),
    ],
    advanced: [
        step("Advanced Anatomy", "Deepen anatomical knowledge for figure work", &["Study muscle groups", "Draw écorché studies", "Do long-pose figure drawings", "Sculpt a simple form"]),
        step("Master Studies", "Learn directly from master artists", &["Copy a master painting", "Analyze brushwork", "Study edge control", "Recreate a master's palette"]),
        step("Visual Storytelling", "Tell stories through images", &["Design a narrative illustration", "Create a sequential page", "Stage characters with intent", "Control mood with light"]),
        step("Professional Practice", "Prepare work for clients and shows", &["Curate a professional portfolio", "Price your work", "Pitch to a client or gallery", "Teach a workshop"]),
    ],
    resources: &[
        "Proko YouTube channel",
        "Drawing on the Right Side of the Brain book",
        "Procreate app for digital art",
        "Schoolism online courses",
    ],
};

// --- 6. General ---
static GENERAL: DomainTemplate = DomainTemplate {
    standard: [
        step("Getting Started", "Begin your journey toward your goal", &["Research your goal", "Gather resources", "Create learning plan", "Set up workspace"]),
        step("Building Foundation", "Build a solid foundation of knowledge and skills", &["Study fundamentals", "Practice basic skills", "Join communities", "Find mentors"]),
        step("Skill Development", "Develop intermediate capabilities through practice", &["Apply knowledge practically", "Seek feedback", "Overcome challenges", "Build confidence"]),
        step("Advanced Practice", "Apply advanced techniques and master your craft", &["Master advanced techniques", "Teach others", "Continue learning", "Set new challenges"]),
        step("Deliberate Practice", "Target your weakest areas on purpose", &["List your weak spots", "Design focused drills", "Measure improvement"]),
        step("Real-World Project", "Apply your skills to a meaningful project", &["Choose a project", "Plan milestones", "Finish and reflect"]),
        step("Sharing Your Work", "Share progress and learn from others", &["Publish your work", "Ask for critique", "Help a beginner"]),
        step("Next Horizons", "Consolidate what you learned and plan what's next", &["Review your journey", "Set your next goal", "Build a long-term routine"]),
    ],
    beginner: [
        step("Getting Started", "Understand what your goal involves from the very beginning", &["Learn the basic vocabulary", "Find a beginner guide", "Set a small first target", "Schedule practice time"]),
        step("First Steps", "Take the first small practical steps", &["Follow a beginner tutorial", "Practice for 15 minutes daily", "Note what confuses you", "Ask a question in a community"]),
        step("Building Habits", "Turn practice into a habit", &["Keep a practice log", "Repeat the basics", "Celebrate small wins", "Review your notes weekly"]),
        step("Growing Confidence", "Tackle slightly harder challenges", &["Try an intermediate exercise", "Get feedback from someone", "Fix one recurring mistake", "Plan the next month"]),
    ],
    advanced: [
        step("Expert Assessment", "Identify the gaps between you and expert level", &["Benchmark against experts", "Identify plateaus", "Choose a specialization", "Find advanced mentors"]),
        step("Specialized Depth", "Go deep on a specialized area", &["Study advanced material", "Practice at higher difficulty", "Analyze expert work", "Document insights"]),
        step("Innovation", "Create something original in the field", &["Experiment with new approaches", "Combine ideas from other fields", "Build an original project", "Share it publicly"]),
        step("Mentorship", "Solidify mastery by teaching others", &["Mentor a learner", "Write a guide", "Give a talk", "Contribute to the community"]),
    ],
    resources: &[
        "Khan Academy for fundamentals",
        "YouTube channel searches for your topic",
        "Reddit communities for advice",
        "Local classes or workshops",
    ],
};
